//! Projection of a resolution record into caller-facing views.
//!
//! One state machine, two thin adapters: suspend-mode callers await the
//! record and receive a value or an error; poll-mode callers take a
//! synchronous [`ImageState`] snapshot and use a [`SettleListener`] to be
//! re-invoked once the record leaves Pending. Both read the same record
//! and never duplicate its state.

use tokio::sync::watch;

use crate::cache::record::ResolutionPhase;
use crate::error::ResolveError;
use crate::transform::PixelParams;

/// Poll-mode snapshot of a resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageState {
    /// The serialized output URL, present only once resolved.
    pub src: Option<String>,
    /// True while the fallback race is still running.
    pub is_loading: bool,
    /// The terminal failure, present only once rejected.
    pub error: Option<ResolveError>,
}

/// Project a phase snapshot into the poll-mode view, applying transform
/// parameters on the resolved arm.
pub fn project(phase: &ResolutionPhase, params: Option<&PixelParams>) -> ImageState {
    match phase {
        ResolutionPhase::Pending => ImageState {
            src: None,
            is_loading: true,
            error: None,
        },
        ResolutionPhase::Resolved(src) => ImageState {
            src: Some(serialize_src(src, params)),
            is_loading: false,
            error: None,
        },
        ResolutionPhase::Rejected(err) => ImageState {
            src: None,
            is_loading: false,
            error: Some(err.clone()),
        },
    }
}

/// Build the output URL for a winning candidate.
pub(crate) fn serialize_src(src: &str, params: Option<&PixelParams>) -> String {
    match params {
        Some(params) => params.apply(src),
        None => src.to_string(),
    }
}

/// Notification handle for poll-mode callers: parks until the observed
/// record settles, then yields the terminal phase.
#[derive(Debug)]
pub struct SettleListener {
    rx: watch::Receiver<ResolutionPhase>,
}

impl SettleListener {
    pub(crate) fn new(rx: watch::Receiver<ResolutionPhase>) -> Self {
        Self { rx }
    }

    /// Wait for the record to leave Pending.
    pub async fn settled(mut self) -> ResolutionPhase {
        loop {
            let phase = self.rx.borrow_and_update().clone();
            if phase.is_settled() {
                return phase;
            }
            if self.rx.changed().await.is_err() {
                // Store dropped while still pending; report what we saw last.
                return self.rx.borrow().clone();
            }
        }
    }
}
