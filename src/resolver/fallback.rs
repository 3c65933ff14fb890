//! Sequential fallback race over a candidate list.

use crate::error::{ResolveError, ResolveResult};
use crate::probe::Probe;

/// Probe candidates strictly in order and return the first that succeeds.
///
/// Each probe is awaited to completion before the next candidate is tried,
/// so at most one probe is in flight at a time and a success short-circuits
/// the rest of the list. When every probe fails, only the last failure is
/// surfaced; earlier ones are discarded. An empty list rejects with
/// [`ResolveError::EmptyCandidateList`] without invoking the probe at all.
pub async fn find_first(candidates: &[String], probe: &dyn Probe) -> ResolveResult<String> {
    let mut last_error = None;

    for (index, candidate) in candidates.iter().enumerate() {
        tracing::debug!(index, candidate = %candidate, "probing candidate");
        match probe.check(candidate).await {
            Ok(()) => {
                tracing::debug!(index, candidate = %candidate, "candidate usable");
                return Ok(candidate.clone());
            }
            Err(err) => {
                tracing::warn!(index, candidate = %candidate, error = %err, "probe failed");
                last_error = Some(err);
            }
        }
    }

    match last_error {
        Some(err) => Err(ResolveError::AllCandidatesFailed(err)),
        None => Err(ResolveError::EmptyCandidateList),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Probe that follows a script of outcomes and records invocation order.
    struct ScriptedProbe {
        outcomes: Vec<(&'static str, Result<(), ProbeError>)>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProbe {
        fn new(outcomes: Vec<(&'static str, Result<(), ProbeError>)>) -> Self {
            Self {
                outcomes,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Probe for ScriptedProbe {
        async fn check(&self, candidate: &str) -> Result<(), ProbeError> {
            self.calls.lock().unwrap().push(candidate.to_string());
            self.outcomes
                .iter()
                .find(|(src, _)| *src == candidate)
                .map(|(_, outcome)| outcome.clone())
                .unwrap_or_else(|| Err(ProbeError::new("unscripted candidate")))
        }
    }

    fn sources(srcs: &[&str]) -> Vec<String> {
        srcs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let probe = ScriptedProbe::new(vec![
            ("a.jpg", Ok(())),
            ("b.jpg", Ok(())),
        ]);
        let won = find_first(&sources(&["a.jpg", "b.jpg"]), &probe).await.unwrap();
        assert_eq!(won, "a.jpg");
        assert_eq!(probe.calls(), ["a.jpg"]);
    }

    #[tokio::test]
    async fn test_probes_run_in_order_until_success() {
        let probe = ScriptedProbe::new(vec![
            ("a.jpg", Err(ProbeError::new("404"))),
            ("b.jpg", Err(ProbeError::new("500"))),
            ("c.jpg", Ok(())),
            ("d.jpg", Ok(())),
        ]);
        let won = find_first(&sources(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]), &probe)
            .await
            .unwrap();
        assert_eq!(won, "c.jpg");
        assert_eq!(probe.calls(), ["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn test_all_failures_surface_last_error() {
        let probe = ScriptedProbe::new(vec![
            ("a.jpg", Err(ProbeError::new("first"))),
            ("b.jpg", Err(ProbeError::new("last"))),
        ]);
        let err = find_first(&sources(&["a.jpg", "b.jpg"]), &probe)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::AllCandidatesFailed(ProbeError::new("last"))
        );
        assert_eq!(probe.calls(), ["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn test_single_candidate_passthrough() {
        let probe = ScriptedProbe::new(vec![("only.jpg", Err(ProbeError::new("nope")))]);
        let err = find_first(&sources(&["only.jpg"]), &probe).await.unwrap_err();
        assert_eq!(
            err,
            ResolveError::AllCandidatesFailed(ProbeError::new("nope"))
        );
    }

    #[tokio::test]
    async fn test_empty_list_rejects_without_probing() {
        let probe = ScriptedProbe::new(vec![]);
        let err = find_first(&[], &probe).await.unwrap_err();
        assert_eq!(err, ResolveError::EmptyCandidateList);
        assert!(probe.calls().is_empty());
    }
}
