//! Fallback Image Source Resolution Library

pub mod cache;
pub mod error;
pub mod probe;
pub mod resolver;
pub mod source;
pub mod transform;

pub use cache::{ImageState, ResolutionPhase, ResolutionStore, SettleListener};
pub use error::{ProbeError, ResolveError, ResolveResult};
pub use probe::{HttpProbe, HttpProbeConfig, Probe};
pub use resolver::{ImageRequest, ImageResolver};
pub use source::SourceList;
pub use transform::{Crop, OutputFormat, PixelParams, ResizeMode};
