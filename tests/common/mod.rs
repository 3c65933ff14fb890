//! Shared probe fakes for integration testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pixel_source::{Probe, ProbeError};
use tokio::sync::watch;

/// Route crate logs to the test harness, honoring `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Probe with a fixed success/failure outcome per candidate, recording
/// every invocation in order.
pub struct ScriptedProbe {
    outcomes: HashMap<String, Result<(), ProbeError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new<I>(outcomes: I) -> Arc<Self>
    where
        I: IntoIterator<Item = (&'static str, Result<(), ProbeError>)>,
    {
        Arc::new(Self {
            outcomes: outcomes
                .into_iter()
                .map(|(src, outcome)| (src.to_string(), outcome))
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Candidates probed so far, in invocation order.
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn check(&self, candidate: &str) -> Result<(), ProbeError> {
        self.calls.lock().unwrap().push(candidate.to_string());
        self.outcomes
            .get(candidate)
            .cloned()
            .unwrap_or_else(|| Err(ProbeError::new("unscripted candidate")))
    }
}

/// Probe that succeeds for every candidate but holds each check until the
/// gate opens, so tests can observe the Pending phase deterministically.
pub struct GatedProbe {
    gate: watch::Sender<bool>,
    calls: AtomicU32,
}

impl GatedProbe {
    #[allow(dead_code)]
    pub fn new() -> Arc<Self> {
        let (gate, _) = watch::channel(false);
        Arc::new(Self {
            gate,
            calls: AtomicU32::new(0),
        })
    }

    /// Release every waiting check, and let later checks pass immediately.
    #[allow(dead_code)]
    pub fn open(&self) {
        self.gate.send_replace(true);
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for GatedProbe {
    async fn check(&self, _candidate: &str) -> Result<(), ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rx = self.gate.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                break;
            }
        }
        Ok(())
    }
}
