//! Fake [`Environment`] with configurable capabilities and call counters.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use async_trait::async_trait;
use media_access::{
    platform::{Error, Location, NavigatorInfo, ScreenInfo, ViewportSize},
    ConstraintsRequest, Environment, InputDeviceInfo, LegacyApi, MediaKind,
    MediaTrack,
};

/// Track counting how many times it has been stopped.
#[derive(Debug)]
pub struct FakeTrack {
    id: String,
    kind: MediaKind,
    stops: Rc<Cell<u32>>,
}

impl MediaTrack for FakeTrack {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn kind(&self) -> MediaKind {
        self.kind
    }

    fn stop(&self) {
        self.stops.set(self.stops.get() + 1);
    }
}

/// Fake host. Everything is absent unless configured.
#[derive(Debug, Default)]
pub struct FakeEnvironment {
    navigator: bool,
    standard: Option<Result<(), Error>>,
    legacy: HashMap<LegacyApi, Result<(), Error>>,
    secure: bool,
    location: Option<Location>,
    globals: Vec<&'static str>,
    devices: Option<Result<Vec<InputDeviceInfo>, Error>>,

    /// Number of standard API invocations.
    pub standard_calls: Cell<u32>,

    /// Legacy APIs invoked, in order.
    pub legacy_calls: RefCell<Vec<LegacyApi>>,

    /// Total number of stops of all the produced tracks.
    pub stops: Rc<Cell<u32>>,
}

impl FakeEnvironment {
    /// Host with a `navigator` but no media APIs, served over HTTPS.
    pub fn browser() -> Self {
        Self {
            navigator: true,
            secure: true,
            location: Some(Location {
                protocol: "https:".into(),
                hostname: "example.com".into(),
                port: String::new(),
                pathname: "/dashboard".into(),
            }),
            ..Self::default()
        }
    }

    pub fn with_standard(mut self, res: Result<(), Error>) -> Self {
        self.standard = Some(res);
        self
    }

    pub fn with_legacy(
        mut self,
        api: LegacyApi,
        res: Result<(), Error>,
    ) -> Self {
        self.legacy.insert(api, res);
        self
    }

    pub fn with_location(mut self, protocol: &str, hostname: &str) -> Self {
        self.location = Some(Location {
            protocol: protocol.into(),
            hostname: hostname.into(),
            ..Location::default()
        });
        self
    }

    pub fn insecure(mut self) -> Self {
        self.secure = false;
        self
    }

    pub fn with_global(mut self, name: &'static str) -> Self {
        self.globals.push(name);
        self
    }

    pub fn with_devices(
        mut self,
        devices: Result<Vec<InputDeviceInfo>, Error>,
    ) -> Self {
        self.devices = Some(devices);
        self
    }

    /// Total number of media API invocations.
    pub fn total_calls(&self) -> usize {
        self.standard_calls.get() as usize + self.legacy_calls.borrow().len()
    }

    fn tracks(
        &self,
        caps: ConstraintsRequest,
        res: &Result<(), Error>,
    ) -> Result<Vec<FakeTrack>, Error> {
        res.clone()?;
        let kinds = [
            (caps.audio, MediaKind::Audio),
            (caps.video, MediaKind::Video),
        ];
        Ok(kinds
            .iter()
            .filter(|(requested, _)| *requested)
            .map(|(_, kind)| FakeTrack {
                id: format!("{}-track", kind),
                kind: *kind,
                stops: Rc::clone(&self.stops),
            })
            .collect())
    }
}

#[async_trait(?Send)]
impl Environment for FakeEnvironment {
    type Track = FakeTrack;

    fn has_navigator(&self) -> bool {
        self.navigator
    }

    fn has_standard_api(&self) -> bool {
        self.navigator && self.standard.is_some()
    }

    fn has_legacy_api(&self, api: LegacyApi) -> bool {
        self.navigator && self.legacy.contains_key(&api)
    }

    fn is_secure_context(&self) -> bool {
        self.secure
    }

    fn has_global(&self, name: &str) -> bool {
        self.globals.iter().any(|g| *g == name)
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }

    fn navigator_info(&self) -> Option<NavigatorInfo> {
        if !self.navigator {
            return None;
        }
        Some(NavigatorInfo {
            user_agent: "FakeBrowser/1.0".into(),
            platform: "Linux x86_64".into(),
            language: Some("en-US".into()),
            cookies_enabled: true,
            java_enabled: false,
        })
    }

    fn screen(&self) -> Option<ScreenInfo> {
        if !self.navigator {
            return None;
        }
        Some(ScreenInfo {
            width: 1920,
            height: 1080,
            color_depth: 24,
        })
    }

    fn viewport(&self) -> Option<ViewportSize> {
        if !self.navigator {
            return None;
        }
        Some(ViewportSize {
            width: 1280,
            height: 720,
        })
    }

    async fn get_user_media(
        &self,
        caps: ConstraintsRequest,
    ) -> Result<Vec<FakeTrack>, Error> {
        self.standard_calls.set(self.standard_calls.get() + 1);
        let res = self
            .standard
            .as_ref()
            .expect("standard API invoked while absent");
        self.tracks(caps, res)
    }

    async fn legacy_get_user_media(
        &self,
        api: LegacyApi,
        caps: ConstraintsRequest,
    ) -> Result<Vec<FakeTrack>, Error> {
        self.legacy_calls.borrow_mut().push(api);
        let res = self
            .legacy
            .get(&api)
            .expect("legacy API invoked while absent");
        self.tracks(caps, res)
    }

    async fn enumerate_devices(&self) -> Result<Vec<InputDeviceInfo>, Error> {
        self.devices.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}
