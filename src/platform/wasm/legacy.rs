//! Adaptation of the callback-style legacy [getUserMedia()][1] into a
//! [`Future`].
//!
//! [1]: https://w3.org/TR/2013/WD-mediacapture-streams-20130516/#navigatorusermedia
//! [`Future`]: std::future::Future

use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use wasm_bindgen::{closure::Closure, JsCast as _, JsValue};

use crate::platform::Error;

/// Sender completed by whichever callback fires first.
type SharedSender =
    Rc<RefCell<Option<oneshot::Sender<Result<JsValue, JsValue>>>>>;

/// Builds a single-shot JS callback which completes the provided
/// [`SharedSender`] with the result produced by `wrap`.
///
/// The callback is owned by JS and lives until invoked, so the host may fire
/// it after the awaiting [`Future`] is dropped.
///
/// [`Future`]: std::future::Future
fn callback(
    tx: &SharedSender,
    wrap: fn(JsValue) -> Result<JsValue, JsValue>,
) -> JsValue {
    let tx = Rc::clone(tx);
    Closure::once_into_js(move |val: JsValue| {
        let tx = match tx.borrow_mut().take() {
            Some(tx) => tx,
            None => return,
        };
        if let Err(Ok(stream)) = tx.send(wrap(val)) {
            log::warn!(
                "Stopping MediaStream delivered after its request was \
                 abandoned",
            );
            stop_tracks(&stream.unchecked_into());
        }
    })
}

/// Stops all tracks of the provided [MediaStream][1].
///
/// [1]: https://w3.org/TR/mediacapture-streams/#mediastream
fn stop_tracks(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<web_sys::MediaStreamTrack>().stop();
    }
}

/// Calls `func` as `func.call(this, constraints, onSuccess, onError)` and
/// resolves exactly once, with the [MediaStream][1] passed to `onSuccess` or
/// the error passed to `onError`.
///
/// Never resolves if the host fires none of the callbacks. If this
/// [`Future`] is dropped before `onSuccess` fires, the late
/// [MediaStream][1] is stopped.
///
/// # Errors
///
/// With [`Error`] if `func` throws or `onError` is invoked.
///
/// [1]: https://w3.org/TR/mediacapture-streams/#mediastream
/// [`Future`]: std::future::Future
pub async fn get_user_media(
    func: &js_sys::Function,
    this: &JsValue,
    constraints: &JsValue,
) -> Result<web_sys::MediaStream, Error> {
    let (tx, rx) = oneshot::channel();
    let tx: SharedSender = Rc::new(RefCell::new(Some(tx)));

    func.call3(this, constraints, &callback(&tx, Ok), &callback(&tx, Err))
        .map_err(Error::from)?;

    rx.await
        .map_err(|_| {
            Error::new(
                "AbortError",
                "Legacy getUserMedia callbacks were dropped",
            )
        })?
        .map(JsValue::unchecked_into)
        .map_err(Error::from)
}
