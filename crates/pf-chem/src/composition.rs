//! Stream and node composition.

use pf_core::ChemicalId;
use pf_core::numeric::{Tolerances, nearly_equal};
use serde::{Deserialize, Serialize};

use crate::catalog::ChemicalTable;
use crate::error::{ChemError, ChemResult};

/// One species entry of a composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFraction {
    pub chemical_id: ChemicalId,
    pub mole_fraction: f64,
    pub mass_flow: f64,
    pub temperature_c: f64,
    pub pressure: f64,
}

impl ComponentFraction {
    /// Species at the given mole fraction with zero flow and conditions.
    pub fn new(chemical_id: impl Into<ChemicalId>, mole_fraction: f64) -> Self {
        Self {
            chemical_id: chemical_id.into(),
            mole_fraction,
            mass_flow: 0.0,
            temperature_c: 0.0,
            pressure: 0.0,
        }
    }
}

/// Vapor/liquid split used by the separation correlations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseSplit {
    pub vapor: f64,
    pub liquid: f64,
}

impl PhaseSplit {
    pub fn new(vapor: f64, liquid: f64) -> Self {
        Self { vapor, liquid }
    }

    /// `|vapor - liquid|`
    pub fn driving_force(&self) -> f64 {
        (self.vapor - self.liquid).abs()
    }
}

/// Composition of a node or stream.
///
/// Carries both the per-species list and, as a separate attribute, the
/// vapor/liquid split. Mole fractions are stored as given; call
/// [`normalized`](Self::normalized) when a sum of one is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    #[serde(default)]
    components: Vec<ComponentFraction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phase_split: Option<PhaseSplit>,
}

impl Composition {
    pub fn new(components: Vec<ComponentFraction>) -> Self {
        Self {
            components,
            phase_split: None,
        }
    }

    /// Single species at mole fraction one.
    pub fn pure(chemical_id: impl Into<ChemicalId>) -> Self {
        Self::new(vec![ComponentFraction::new(chemical_id, 1.0)])
    }

    pub fn with_phase_split(mut self, split: PhaseSplit) -> Self {
        self.phase_split = Some(split);
        self
    }

    pub fn components(&self) -> &[ComponentFraction] {
        &self.components
    }

    pub fn phase_split(&self) -> Option<PhaseSplit> {
        self.phase_split
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.phase_split.is_none()
    }

    /// Mole fraction of a species (0.0 if not present).
    pub fn mole_fraction(&self, id: &ChemicalId) -> f64 {
        self.components
            .iter()
            .filter(|c| &c.chemical_id == id)
            .map(|c| c.mole_fraction)
            .sum()
    }

    pub fn mole_fraction_sum(&self) -> f64 {
        self.components.iter().map(|c| c.mole_fraction).sum()
    }

    /// True when the species list is non-empty and sums to one within `tol`.
    pub fn is_normalized(&self, tol: Tolerances) -> bool {
        !self.components.is_empty() && nearly_equal(self.mole_fraction_sum(), 1.0, tol)
    }

    /// Copy with mole fractions scaled to sum to one.
    ///
    /// Validates that all fractions are finite, non-negative, and have a positive sum.
    pub fn normalized(&self) -> ChemResult<Self> {
        if self.components.is_empty() {
            return Err(ChemError::NonPhysical {
                what: "empty composition",
            });
        }

        let mut sum = 0.0;
        for c in &self.components {
            if !c.mole_fraction.is_finite() {
                return Err(ChemError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if c.mole_fraction < 0.0 {
                return Err(ChemError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            sum += c.mole_fraction;
        }

        if sum <= 0.0 || !sum.is_finite() {
            return Err(ChemError::NonPhysical {
                what: "mole fractions sum to zero or non-finite",
            });
        }

        let components = self
            .components
            .iter()
            .map(|c| ComponentFraction {
                mole_fraction: c.mole_fraction / sum,
                ..c.clone()
            })
            .collect();

        Ok(Self {
            components,
            phase_split: self.phase_split,
        })
    }

    /// Mixture molecular weight `Σ x_i M_i` over the normalized fractions.
    pub fn mean_molecular_weight(&self, table: &ChemicalTable) -> ChemResult<f64> {
        let normalized = self.normalized()?;
        normalized.components.iter().try_fold(0.0, |acc, c| {
            let chem = table.require(&c.chemical_id)?;
            Ok(acc + c.mole_fraction * chem.molecular_weight)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        }
    }

    #[test]
    fn pure_composition() {
        let comp = Composition::pure("water");
        assert_eq!(comp.mole_fraction(&"water".into()), 1.0);
        assert_eq!(comp.mole_fraction(&"ethanol".into()), 0.0);
        assert!(comp.is_normalized(tol()));
        assert!(comp.phase_split().is_none());
    }

    #[test]
    fn unnormalized_fractions_are_kept_as_given() {
        let comp = Composition::new(vec![
            ComponentFraction::new("water", 0.7),
            ComponentFraction::new("ethanol", 0.7),
        ]);
        assert!((comp.mole_fraction_sum() - 1.4).abs() < 1e-12);
        assert!(!comp.is_normalized(tol()));
    }

    #[test]
    fn normalization_scales_to_one() {
        let comp = Composition::new(vec![
            ComponentFraction::new("water", 2.0),
            ComponentFraction::new("ethanol", 8.0),
        ])
        .with_phase_split(PhaseSplit::new(0.3, 0.7));

        let n = comp.normalized().unwrap();
        assert!(nearly_equal(n.mole_fraction(&"water".into()), 0.2, tol()));
        assert!(nearly_equal(n.mole_fraction(&"ethanol".into()), 0.8, tol()));
        assert_eq!(n.phase_split(), Some(PhaseSplit::new(0.3, 0.7)));
    }

    #[test]
    fn invalid_fractions() {
        assert!(Composition::default().normalized().is_err());
        assert!(
            Composition::new(vec![ComponentFraction::new("water", -0.5)])
                .normalized()
                .is_err()
        );
        assert!(
            Composition::new(vec![ComponentFraction::new("water", 0.0)])
                .normalized()
                .is_err()
        );
        assert!(
            Composition::new(vec![ComponentFraction::new("water", f64::NAN)])
                .normalized()
                .is_err()
        );
    }

    #[test]
    fn driving_force_is_absolute_difference() {
        assert_eq!(PhaseSplit::new(0.2, 0.5).driving_force(), 0.5 - 0.2);
        assert_eq!(PhaseSplit::new(0.6, 0.1).driving_force(), 0.6 - 0.1);
        assert_eq!(PhaseSplit::default().driving_force(), 0.0);
    }

    #[test]
    fn mean_molecular_weight_of_mixture() {
        let table = ChemicalTable::builtin();
        let comp = Composition::new(vec![
            ComponentFraction::new("water", 1.0),
            ComponentFraction::new("methanol", 1.0),
        ]);
        let mw = comp.mean_molecular_weight(&table).unwrap();
        assert!((mw - (18.02 + 32.04) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn mean_molecular_weight_unknown_species() {
        let table = ChemicalTable::builtin();
        let comp = Composition::pure("unobtainium");
        assert!(matches!(
            comp.mean_molecular_weight(&table),
            Err(ChemError::UnknownChemical { .. })
        ));
    }
}
