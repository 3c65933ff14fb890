//! Single-flight resolution store.

use std::sync::Arc;

use dashmap::DashMap;

use crate::cache::record::{ResolutionPhase, ResolutionRecord};
use crate::error::ResolveError;
use crate::probe::Probe;
use crate::resolver::fallback;
use crate::source::{CacheKey, SourceList};

/// Table of resolution records keyed by normalized source list.
///
/// The store owns record lifecycle: one record per distinct key, created
/// atomically on first request, never evicted. Hosts that want isolated
/// caches (tests, per-tenant state) construct their own store instead of
/// sharing a process-wide one.
#[derive(Clone, Default)]
pub struct ResolutionStore {
    records: Arc<DashMap<CacheKey, Arc<ResolutionRecord>>>,
}

impl ResolutionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record for a key, if one exists.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<ResolutionRecord>> {
        self.records.get(key).map(|r| r.value().clone())
    }

    /// Fetch the record for a source list, creating it and starting its
    /// fallback race if this is the first request for the key.
    ///
    /// The dashmap entry lock makes create-if-absent atomic, so concurrent
    /// callers with the same key always share one record and one probe
    /// sequence. The race runs as a detached task: dropping every caller
    /// does not cancel it, and the probe is the one supplied by whichever
    /// caller created the record.
    ///
    /// Must be called from within a tokio runtime.
    pub fn entry(&self, sources: &SourceList, probe: Arc<dyn Probe>) -> Arc<ResolutionRecord> {
        self.records
            .entry(sources.cache_key())
            .or_insert_with(|| {
                let record = Arc::new(ResolutionRecord::new());
                if sources.is_empty() {
                    record.settle(ResolutionPhase::Rejected(ResolveError::EmptyCandidateList));
                    return record;
                }

                let candidates = sources.candidates().to_vec();
                let task_record = record.clone();
                tokio::spawn(async move {
                    let phase = match fallback::find_first(&candidates, probe.as_ref()).await {
                        Ok(src) => ResolutionPhase::Resolved(src),
                        Err(err) => ResolutionPhase::Rejected(err),
                    };
                    task_record.settle(phase);
                });
                record
            })
            .clone()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no resolution has been requested yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
