//! Camera/microphone access negotiation across the standard
//! [MediaDevices.getUserMedia()][1] API and its legacy vendor-prefixed
//! variants.
//!
//! [1]: https://w3.org/TR/mediacapture-streams#dom-mediadevices-getusermedia

#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![warn(missing_docs)]

pub mod conf;
pub mod diagnostics;
pub mod media;
pub mod platform;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub mod api;
        pub mod utils;

        // When the `wee_alloc` feature is enabled, use `wee_alloc` as the
        // global allocator.
        #[cfg(feature = "wee_alloc")]
        #[global_allocator]
        static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;
    }
}

#[doc(inline)]
pub use self::{
    conf::Conf,
    media::{
        release, AcquiredStream, CapabilitySnapshot, ConstraintsRequest,
        InputDeviceInfo, MediaAccessError, MediaAccessErrorKind, MediaKind,
        MediaManager,
    },
    platform::{Environment, LegacyApi, MediaTrack},
};
