//! pf-chem: chemical reference data and composition handling for procflow.
//!
//! Provides:
//! - Chemical reference records and an immutable lookup table
//! - A single composition type with an explicit vapor/liquid phase split
//! - Antoine vapor-pressure correlation, Raoult's law and the ideal-gas ratio
//!
//! # Example
//!
//! ```
//! use pf_chem::{AntoineCoefficients, ChemicalTable};
//!
//! let table = ChemicalTable::builtin();
//! let water = table.get(&"water".into()).unwrap();
//! assert_eq!(water.formula, "H2O");
//!
//! let p_sat = AntoineCoefficients::WATER.vapor_pressure(100.0).unwrap();
//! assert!((p_sat - 760.0).abs() < 7.6);
//! ```

pub mod antoine;
pub mod catalog;
pub mod chemical;
pub mod composition;
pub mod equilibrium;
pub mod error;

// Re-exports for ergonomics
pub use antoine::{AntoineCoefficients, LogBase};
pub use catalog::ChemicalTable;
pub use chemical::{Chemical, PhaseState};
pub use composition::{ComponentFraction, Composition, PhaseSplit};
pub use equilibrium::{ideal_gas_ratio, raoult_vapor_fraction};
pub use error::{ChemError, ChemResult};
