//! pf-analysis: process calculation passes for procflow.
//!
//! Seven independent passes read one immutable [`FlowsheetSnapshot`]:
//! - mass balance and energy balance over stream incidence
//! - vapor-liquid equilibrium for equilibrium stages
//! - lumped heat transfer and mass transfer estimates
//! - Arrhenius kinetics for reactors
//! - Darcy-Weisbach/Blasius pressure drop
//!
//! A formula input outside its domain fails that node only; the rest of the
//! flowsheet is still analyzed. Dangling stream references become warnings.
//!
//! # Example
//!
//! ```
//! use pf_analysis::{AnalysisConfig, PassSet, analyze};
//! use pf_graph::{EquipmentKind, EquipmentNode, FlowsheetBuilder, ProcessConditions};
//!
//! let mut builder = FlowsheetBuilder::new();
//! let a = builder.add_node(
//!     EquipmentNode::with_defaults("a", EquipmentKind::FeedTank, "Feed", ProcessConditions::new(25.0, 1.0, 100.0))
//!         .unwrap(),
//! );
//! let b = builder.add_node(
//!     EquipmentNode::with_defaults("b", EquipmentKind::Tank, "Tank", ProcessConditions::new(25.0, 1.0, 0.0))
//!         .unwrap(),
//! );
//! builder.connect(&a, &b).unwrap();
//! let snapshot = builder.build().unwrap();
//!
//! let report = analyze(&snapshot, &AnalysisConfig::default(), PassSet::all()).unwrap();
//! let tank = report.mass_balance.unwrap().outcomes[1].computed().unwrap().clone();
//! assert_eq!(tank.accumulation, 100.0);
//! ```

pub mod config;
pub mod energy_balance;
pub mod engine;
pub mod error;
pub mod heat_transfer;
pub mod kinetics;
pub mod mass_balance;
pub mod mass_transfer;
pub mod outcome;
pub mod pressure_drop;
pub mod vle;

pub use config::{
    AnalysisConfig, EnergyBalanceConfig, HeatTransferConfig, KineticsConfig, MassTransferConfig,
    PressureDropConfig, VleConfig,
};
pub use energy_balance::EnergyBalanceRecord;
pub use engine::{AnalysisReport, PassKind, PassSet, analyze, analyze_parallel};
pub use error::{AnalysisError, AnalysisResult, FailureReason, NodeFailure};
pub use heat_transfer::HeatTransferRecord;
pub use kinetics::KineticsRecord;
pub use mass_balance::MassBalanceRecord;
pub use mass_transfer::MassTransferRecord;
pub use outcome::{AnalysisWarning, NodeOutcome, PassOutput};
pub use pressure_drop::{PipeFlow, PressureDropRecord};
pub use vle::{ComponentEquilibrium, VleRecord};

/// Version stamped into analysis fingerprints.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
