//! Client-side navigation capability.
//!
//! Screens never hold a router. They receive a [`Navigator`] and ask it to
//! go somewhere; the caller decides what "going somewhere" means. In the
//! server that is an HTMX `HX-Location` instruction built by [`HxNavigator`],
//! in tests it is a [`RecordingNavigator`].

use std::fmt;
use std::sync::{Mutex, PoisonError};

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Response header HTMX reads to perform a client-side navigation without a
/// full page reload.
pub const HX_LOCATION: &str = "hx-location";

/// Request header HTMX sets on every request it issues.
pub const HX_REQUEST: &str = "hx-request";

/// A single-operation navigation capability.
///
/// Requests are fire-and-forget: `go_to` neither blocks nor reports failure.
pub trait Navigator: Send + Sync {
    /// Request navigation to `path`.
    fn go_to(&self, path: &str);
}

/// Navigator that captures the request for one HTTP exchange and turns it
/// into a response.
#[derive(Debug, Default)]
pub struct HxNavigator {
    target: Mutex<Option<String>>,
}

impl HxNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The path most recently requested, if any.
    pub fn target(&self) -> Option<String> {
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Build the navigation response.
    ///
    /// HTMX requests get `204` with `HX-Location`; plain browser requests get
    /// a `303 See Other` redirect. With nothing requested, or a target that is
    /// not a valid header value, the response is an empty `204`.
    pub fn respond(&self, htmx: bool) -> Response {
        let Some(path) = self.target() else {
            return StatusCode::NO_CONTENT.into_response();
        };

        let value = match HeaderValue::from_str(&path) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Navigation target is not a valid header value");
                return StatusCode::NO_CONTENT.into_response();
            }
        };

        if htmx {
            (StatusCode::NO_CONTENT, [(HX_LOCATION, value)]).into_response()
        } else {
            (StatusCode::SEE_OTHER, [(LOCATION, value)]).into_response()
        }
    }
}

impl Navigator for HxNavigator {
    fn go_to(&self, path: &str) {
        let mut guard = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(path.to_owned());
    }
}

/// Navigator that remembers every request, in order.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}

impl fmt::Debug for RecordingNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingNavigator")
            .field("calls", &self.calls())
            .finish()
    }
}
