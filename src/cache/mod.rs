//! Resolution caching subsystem.
//!
//! # Data Flow
//! ```text
//! SourceList → CacheKey
//!     → store.rs: create-if-absent record (single-flight),
//!       spawn the fallback race on first request
//!     → record.rs: Pending → Resolved/Rejected, settle exactly once
//!     → projector.rs: suspend view (await + error propagation)
//!                     or poll view (snapshot + settle listener)
//! ```
//!
//! # Design Decisions
//! - One record per key for the store's lifetime; no eviction, no TTL
//! - A started race runs to completion even if every caller drops
//! - Transform parameters are applied at projection time, never cached

pub mod projector;
pub mod record;
pub mod store;

pub use projector::ImageState;
pub use projector::SettleListener;
pub use record::ResolutionPhase;
pub use record::ResolutionRecord;
pub use store::ResolutionStore;
