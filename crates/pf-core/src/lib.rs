//! pf-core: shared foundation for procflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (tolerances and float comparison)
//! - ids (string identifiers for nodes, streams and chemicals)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
