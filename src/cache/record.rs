//! Resolution record and phase state machine.
//!
//! # States
//! - Pending: the fallback race is still running
//! - Resolved: a candidate's probe succeeded (terminal)
//! - Rejected: every probe failed, or the list was empty (terminal)
//!
//! # State Transitions
//! ```text
//! Pending → Resolved: first successful probe
//! Pending → Rejected: last probe failed / no candidates
//! ```
//!
//! # Design Decisions
//! - Terminal phases never transition; late settle calls are ignored
//! - The phase lives in a `tokio::sync::watch` channel so snapshot reads
//!   and settle notification share one source of truth

use tokio::sync::watch;

use crate::error::ResolveError;

/// Where a resolution currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionPhase {
    /// The fallback race has not settled yet.
    Pending,
    /// The winning candidate locator.
    Resolved(String),
    /// The terminal failure for this source list.
    Rejected(ResolveError),
}

impl ResolutionPhase {
    /// True once the phase is terminal.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ResolutionPhase::Pending)
    }
}

/// Shared state of one resolution, owned by the store and observed by every
/// caller that projects the same source list.
#[derive(Debug)]
pub struct ResolutionRecord {
    phase: watch::Sender<ResolutionPhase>,
}

impl ResolutionRecord {
    /// Create a record in the Pending phase.
    pub(crate) fn new() -> Self {
        let (phase, _) = watch::channel(ResolutionPhase::Pending);
        Self { phase }
    }

    /// Snapshot the current phase.
    pub fn phase(&self) -> ResolutionPhase {
        self.phase.borrow().clone()
    }

    /// Apply a terminal phase. Only the first settle takes effect; a record
    /// never leaves Resolved or Rejected.
    pub(crate) fn settle(&self, terminal: ResolutionPhase) {
        debug_assert!(terminal.is_settled());
        self.phase.send_if_modified(|current| {
            if current.is_settled() {
                return false;
            }
            match &terminal {
                ResolutionPhase::Resolved(src) => {
                    tracing::info!(src = %src, "resolution settled");
                }
                ResolutionPhase::Rejected(err) => {
                    tracing::warn!(error = %err, "resolution rejected");
                }
                ResolutionPhase::Pending => {}
            }
            *current = terminal.clone();
            true
        });
    }

    /// Subscribe to phase changes.
    pub fn subscribe(&self) -> watch::Receiver<ResolutionPhase> {
        self.phase.subscribe()
    }

    /// Park until the record settles, then return the terminal phase.
    pub async fn settled(&self) -> ResolutionPhase {
        let mut rx = self.subscribe();
        loop {
            let phase = rx.borrow_and_update().clone();
            if phase.is_settled() {
                return phase;
            }
            if rx.changed().await.is_err() {
                // Sender lives in self, so this only triggers during teardown.
                return self.phase();
            }
        }
    }
}
