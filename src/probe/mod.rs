//! Candidate probing.
//!
//! A probe is the external check that decides whether a single candidate
//! locator is actually usable. The resolver only consumes the success or
//! failure signal; everything else about the check is the probe's business.

pub mod http;

pub use http::HttpProbe;
pub use http::HttpProbeConfig;

use crate::error::ProbeError;
use async_trait::async_trait;

/// Asynchronous usability check for one candidate.
///
/// Implementations must settle `Ok(())` iff the candidate is confirmed
/// usable and `Err` otherwise. The resolver invokes a probe at most once
/// per candidate per resolution and never runs two probes concurrently
/// for the same source list.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn check(&self, candidate: &str) -> Result<(), ProbeError>;
}
