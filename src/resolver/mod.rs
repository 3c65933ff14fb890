//! Fallback resolution subsystem.
//!
//! # Data Flow
//! ```text
//! ImageRequest (engine.rs)
//!     → ResolutionStore: one record per source list
//!     → fallback.rs: probe candidates strictly in order,
//!       first success wins, last failure surfaces
//!     → caller consumes the record in suspend or poll mode
//! ```
//!
//! # Design Decisions
//! - No retry and no cancellation: each candidate is probed at most once
//!   per resolution, and a started race runs to completion
//! - Probes never overlap within one resolution

pub mod engine;
pub mod fallback;

pub use engine::ImageRequest;
pub use engine::ImageResolver;
