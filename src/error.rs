//! Error definitions for the resolution pipeline.

use thiserror::Error;

/// Opaque failure reported by a [`Probe`](crate::probe::Probe).
///
/// The core treats probe failures as pass-through values: it never inspects
/// them, it only forwards the last one seen when every candidate fails.
/// Cloneable so a terminal record can hand the same error to every caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ProbeError(String);

impl ProbeError {
    /// Wrap a failure reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// The failure reason as reported by the probe.
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// Errors that can terminate a resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The source list contained no usable entries after normalization.
    #[error("no usable candidates in source list")]
    EmptyCandidateList,

    /// Every candidate's probe failed. Carries only the error of the last
    /// candidate tried; earlier failures are discarded.
    #[error("all candidates failed, last error: {0}")]
    AllCandidatesFailed(#[source] ProbeError),
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ResolveError::EmptyCandidateList;
        assert_eq!(err.to_string(), "no usable candidates in source list");

        let err = ResolveError::AllCandidatesFailed(ProbeError::new("404 Not Found"));
        assert!(err.to_string().contains("404 Not Found"));
    }

    #[test]
    fn test_probe_error_reason() {
        let err = ProbeError::new("connection refused");
        assert_eq!(err.reason(), "connection refused");
    }
}
