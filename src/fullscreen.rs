// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability probing.
//!
//! Browsers expose the fullscreen API under four historical names. This
//! module encapsulates the vendor-prefix branching behind a single
//! probing function: the host implements [`FullscreenHost`] for the
//! player's container element, and [`request`]/[`exit`] pick the first
//! supported variant in the fixed order standard → webkit → moz → ms.
//!
//! Fullscreen failure is never fatal: a rejected or unavailable request
//! logs a warning and no-ops, leaving the session's `fullscreen` flag
//! untouched (it only ever follows the actual fullscreen-change event).

/// One vendor flavor of the fullscreen API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenApi {
    Standard,
    Webkit,
    Moz,
    Ms,
}

impl FullscreenApi {
    /// Probe order mandated for cross-browser behavior.
    pub const PROBE_ORDER: [FullscreenApi; 4] = [
        FullscreenApi::Standard,
        FullscreenApi::Webkit,
        FullscreenApi::Moz,
        FullscreenApi::Ms,
    ];

    /// Name of the element method that enters fullscreen.
    #[must_use]
    pub fn request_method(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "requestFullscreen",
            FullscreenApi::Webkit => "webkitRequestFullscreen",
            FullscreenApi::Moz => "mozRequestFullScreen",
            FullscreenApi::Ms => "msRequestFullscreen",
        }
    }

    /// Name of the document method that leaves fullscreen.
    #[must_use]
    pub fn exit_method(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "exitFullscreen",
            FullscreenApi::Webkit => "webkitExitFullscreen",
            FullscreenApi::Moz => "mozCancelFullScreen",
            FullscreenApi::Ms => "msExitFullscreen",
        }
    }

    /// Name of the document event fired when the fullscreen element
    /// changes. The host must listen for every variant and detach all
    /// of them on teardown.
    #[must_use]
    pub fn change_event_name(self) -> &'static str {
        match self {
            FullscreenApi::Standard => "fullscreenchange",
            FullscreenApi::Webkit => "webkitfullscreenchange",
            FullscreenApi::Moz => "mozfullscreenchange",
            FullscreenApi::Ms => "MSFullscreenChange",
        }
    }
}

/// Adapter over the embedding environment's fullscreen capability,
/// implemented by the host for the player's container element (not the
/// raw media element, so custom controls stay visible in fullscreen).
pub trait FullscreenHost {
    /// Whether this API variant exists in the environment.
    fn supports(&self, api: FullscreenApi) -> bool;

    /// Invokes the request method of the given variant.
    fn request(&mut self, api: FullscreenApi) -> Result<(), String>;

    /// Invokes the exit method of the given variant.
    fn exit(&mut self, api: FullscreenApi) -> Result<(), String>;
}

/// Returns the first supported API variant in probe order.
pub fn probe<H: FullscreenHost + ?Sized>(host: &H) -> Option<FullscreenApi> {
    FullscreenApi::PROBE_ORDER
        .into_iter()
        .find(|api| host.supports(*api))
}

/// Requests fullscreen through the first supported variant.
///
/// Returns true if the request was issued successfully. Unavailable or
/// rejected requests are logged and swallowed.
pub fn request<H: FullscreenHost + ?Sized>(host: &mut H) -> bool {
    match probe(host) {
        Some(api) => match host.request(api) {
            Ok(()) => true,
            Err(reason) => {
                log::warn!("{} rejected: {}", api.request_method(), reason);
                false
            }
        },
        None => {
            log::warn!("no fullscreen API available");
            false
        }
    }
}

/// Exits fullscreen through the first supported variant.
pub fn exit<H: FullscreenHost + ?Sized>(host: &mut H) -> bool {
    match probe(host) {
        Some(api) => match host.exit(api) {
            Ok(()) => true,
            Err(reason) => {
                log::warn!("{} rejected: {}", api.exit_method(), reason);
                false
            }
        },
        None => {
            log::warn!("no fullscreen API available");
            false
        }
    }
}
