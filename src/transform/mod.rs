//! Image transform parameters and their URL serialization.
//!
//! # Data Flow
//! ```text
//! Caller builds PixelParams (per request, never persisted)
//!     → resolution settles with a winning locator
//!     → params.apply(locator) appends the query string
//!     → final URL returned to the caller
//! ```
//!
//! # Design Decisions
//! - Serialization order is field declaration order, matching the
//!   downstream transform API's documented parameter order
//! - Values are appended verbatim: no URL-encoding, no trailing separator
//! - The transform service interprets the parameters; this module only
//!   defines the wire shape

pub mod params;

pub use params::Crop;
pub use params::OutputFormat;
pub use params::PixelParams;
pub use params::ResizeMode;
