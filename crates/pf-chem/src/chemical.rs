//! Chemical reference records.

use pf_core::ChemicalId;
use serde::{Deserialize, Serialize};

/// Phase at ambient conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseState {
    Solid,
    Liquid,
    Gas,
}

/// One row of the chemical reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chemical {
    pub id: ChemicalId,
    pub name: String,
    pub formula: String,
    /// g/mol
    pub molecular_weight: f64,
    /// °C at 1 atm
    pub boiling_point_c: f64,
    pub critical_temperature_k: f64,
    pub critical_pressure_bar: f64,
    pub state: PhaseState,
}

impl Chemical {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.as_str().to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Chemical {
        Chemical {
            id: ChemicalId::from("water"),
            name: "Water".into(),
            formula: "H2O".into(),
            molecular_weight: 18.02,
            boiling_point_c: 100.0,
            critical_temperature_k: 647.1,
            critical_pressure_bar: 220.6,
            state: PhaseState::Liquid,
        }
    }

    #[test]
    fn query_matches_name_formula_and_id() {
        let w = water();
        assert!(w.matches_query("wat"));
        assert!(w.matches_query("h2o"));
        assert!(w.matches_query("  WATER "));
        assert!(w.matches_query(""));
        assert!(!w.matches_query("benz"));
    }
}
