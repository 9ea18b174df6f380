//! pf-graph: flowsheet graph model for procflow.
//!
//! Provides:
//! - Equipment kinds and their categories
//! - Per-category parameter structures, validated at construction
//! - Equipment nodes, streams and the immutable `FlowsheetSnapshot`
//! - Incremental builder that copies source conditions into new streams
//! - Stream incidence index with unresolved-reference reporting
//!
//! # Example
//!
//! ```
//! use pf_graph::{EquipmentKind, EquipmentNode, FlowsheetBuilder, ProcessConditions};
//!
//! let mut builder = FlowsheetBuilder::new();
//! let feed = builder.add_node(
//!     EquipmentNode::with_defaults(
//!         "feed",
//!         EquipmentKind::FeedTank,
//!         "Feed",
//!         ProcessConditions::new(25.0, 1.0, 100.0),
//!     )
//!     .unwrap(),
//! );
//! let flash = builder.add_node(
//!     EquipmentNode::with_defaults(
//!         "flash",
//!         EquipmentKind::Flash,
//!         "Flash drum",
//!         ProcessConditions::new(100.0, 1.0, 100.0),
//!     )
//!     .unwrap(),
//! );
//! builder.connect(&feed, &flash).unwrap();
//!
//! let snapshot = builder.build().unwrap();
//! assert_eq!(snapshot.nodes().len(), 2);
//! assert_eq!(snapshot.streams()[0].total_flow, Some(100.0));
//! ```

pub mod builder;
pub mod equipment;
pub mod error;
pub mod incidence;
pub mod node;
pub mod params;
pub mod snapshot;
pub mod stream;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::FlowsheetBuilder;
pub use equipment::{EquipmentCategory, EquipmentKind};
pub use error::{GraphError, GraphResult};
pub use incidence::{Incidence, StreamEnd, UnresolvedRef};
pub use node::{EquipmentNode, Position};
pub use params::{EquipmentDetail, ProcessConditions};
pub use snapshot::FlowsheetSnapshot;
pub use stream::Stream;
