//! Request surface: the resolver facade and request builder.

use std::sync::Arc;

use crate::cache::projector::{self, SettleListener};
use crate::cache::record::{ResolutionPhase, ResolutionRecord};
use crate::cache::store::ResolutionStore;
use crate::cache::ImageState;
use crate::error::ResolveResult;
use crate::probe::{HttpProbe, Probe};
use crate::source::SourceList;
use crate::transform::PixelParams;

/// One image request: an ordered source list plus optional transform
/// parameters and an optional probe override.
///
/// The probe override only takes effect when this request is the first for
/// its source list; records are keyed by sources alone, so later callers
/// join the in-flight resolution whatever probe they carry.
#[derive(Clone)]
pub struct ImageRequest {
    sources: SourceList,
    pixel_params: Option<PixelParams>,
    probe: Option<Arc<dyn Probe>>,
}

impl ImageRequest {
    /// Build a request from a single locator or an ordered list.
    pub fn new(src_list: impl Into<SourceList>) -> Self {
        Self {
            sources: src_list.into(),
            pixel_params: None,
            probe: None,
        }
    }

    /// Attach transform parameters, serialized into the resolved URL.
    pub fn pixel_params(mut self, params: PixelParams) -> Self {
        self.pixel_params = Some(params);
        self
    }

    /// Replace the default probe for this request.
    pub fn probe(mut self, probe: Arc<dyn Probe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// The normalized source list.
    pub fn sources(&self) -> &SourceList {
        &self.sources
    }
}

/// Resolves prioritized source lists to the first usable candidate.
///
/// Holds an injectable [`ResolutionStore`]; callers sharing a resolver (or
/// a store) share resolutions. Cloning is cheap and shares the store.
#[derive(Clone)]
pub struct ImageResolver {
    store: ResolutionStore,
    default_probe: Arc<dyn Probe>,
}

impl ImageResolver {
    /// Resolver with a fresh store and the default HTTP probe.
    pub fn new() -> Self {
        Self::with_probe(Arc::new(HttpProbe::default()))
    }

    /// Resolver with a fresh store and a custom default probe.
    pub fn with_probe(probe: Arc<dyn Probe>) -> Self {
        Self::with_store(ResolutionStore::new(), probe)
    }

    /// Resolver over an existing store, for hosts that own cache lifecycle.
    pub fn with_store(store: ResolutionStore, probe: Arc<dyn Probe>) -> Self {
        Self {
            store,
            default_probe: probe,
        }
    }

    /// The backing store.
    pub fn store(&self) -> &ResolutionStore {
        &self.store
    }

    fn record_for(&self, request: &ImageRequest) -> Arc<ResolutionRecord> {
        let probe = request
            .probe
            .clone()
            .unwrap_or_else(|| self.default_probe.clone());
        self.store.entry(&request.sources, probe)
    }

    /// Suspend mode: park until the request's resolution settles.
    ///
    /// Returns the serialized output URL on success; a rejected record's
    /// stored error is returned to every caller, now and later.
    pub async fn resolve(&self, request: &ImageRequest) -> ResolveResult<String> {
        let record = self.record_for(request);
        match record.settled().await {
            ResolutionPhase::Resolved(src) => {
                Ok(projector::serialize_src(&src, request.pixel_params.as_ref()))
            }
            ResolutionPhase::Rejected(err) => Err(err),
            // settled() only yields terminal phases.
            ResolutionPhase::Pending => Err(crate::error::ResolveError::EmptyCandidateList),
        }
    }

    /// Poll mode: snapshot the request's state without blocking, starting
    /// the resolution if this is the first request for its source list.
    pub fn poll(&self, request: &ImageRequest) -> ImageState {
        let record = self.record_for(request);
        projector::project(&record.phase(), request.pixel_params.as_ref())
    }

    /// Notification handle for poll-mode callers: await it to re-poll after
    /// the record transitions out of Pending.
    pub fn watch(&self, request: &ImageRequest) -> SettleListener {
        let record = self.record_for(request);
        SettleListener::new(record.subscribe())
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}
