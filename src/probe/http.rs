//! Default HTTP probe.
//!
//! # Responsibilities
//! - Fetch a candidate URL and confirm the response looks like an image
//! - Map every failure mode (bad URL, transport error, non-success status,
//!   wrong content type) to an opaque `ProbeError`
//!
//! # Design Decisions
//! - No timeout by default: a hung fetch stalls its source list's
//!   resolution, matching the resolver's no-cancellation contract. Hosts
//!   that want an upper bound set one in the config.
//! - Content-type checking is on by default so a 200 error page does not
//!   count as a usable image

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;
use crate::probe::Probe;

/// Configuration for [`HttpProbe`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpProbeConfig {
    /// Per-request timeout in seconds. `None` disables the timeout.
    pub timeout_secs: Option<u64>,

    /// Require the response `content-type` to be `image/*`.
    pub require_image_content_type: bool,

    /// User-agent header sent with probe requests.
    pub user_agent: String,
}

impl Default for HttpProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            require_image_content_type: true,
            user_agent: "pixel-source-probe".to_string(),
        }
    }
}

/// Probe that confirms a candidate by fetching it over HTTP.
#[derive(Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    config: HttpProbeConfig,
}

impl HttpProbe {
    /// Build a probe from configuration.
    pub fn new(config: HttpProbeConfig) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        // Builder only fails on TLS backend misconfiguration; fall back to
        // the default client rather than propagating a constructor error.
        let client = builder.build().unwrap_or_default();
        Self { client, config }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new(HttpProbeConfig::default())
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self, candidate: &str) -> Result<(), ProbeError> {
        let parsed = url::Url::parse(candidate)
            .map_err(|e| ProbeError::new(format!("invalid url {candidate}: {e}")))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ProbeError::new(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::new(format!("unexpected status {status}")));
        }

        if self.config.require_image_content_type {
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("");
            if !content_type.starts_with("image/") {
                return Err(ProbeError::new(format!(
                    "not an image: content-type {content_type:?}"
                )));
            }
        }

        Ok(())
    }
}
