//! Immutable chemical reference table.

use std::collections::HashSet;

use pf_core::ChemicalId;

use crate::chemical::{Chemical, PhaseState};
use crate::error::{ChemError, ChemResult};

/// Seed rows: (id, name, formula, MW g/mol, Tb °C, Tc K, Pc bar, phase at 25 °C).
const BUILTIN: [(&str, &str, &str, f64, f64, f64, f64, PhaseState); 10] = [
    ("methanol", "Methanol", "CH3OH", 32.04, 64.7, 512.6, 80.97, PhaseState::Liquid),
    ("ethanol", "Ethanol", "C2H5OH", 46.07, 78.37, 514.0, 61.37, PhaseState::Liquid),
    ("benzene", "Benzene", "C6H6", 78.11, 80.1, 562.0, 48.98, PhaseState::Liquid),
    ("acetone", "Acetone", "C3H6O", 58.08, 56.05, 508.1, 47.01, PhaseState::Liquid),
    ("toluene", "Toluene", "C7H8", 92.14, 110.6, 591.8, 41.06, PhaseState::Liquid),
    ("water", "Water", "H2O", 18.02, 100.0, 647.1, 220.64, PhaseState::Liquid),
    ("hexane", "Hexane", "C6H14", 86.18, 68.7, 507.6, 30.25, PhaseState::Liquid),
    ("octane", "Octane", "C8H18", 114.23, 125.7, 568.7, 24.9, PhaseState::Liquid),
    ("propane", "Propane", "C3H8", 44.1, -42.0, 369.8, 42.48, PhaseState::Gas),
    ("butane", "Butane", "C4H10", 58.12, -0.5, 425.1, 37.96, PhaseState::Gas),
];

/// Lookup table of chemicals keyed by id.
///
/// Owned by whoever supplies reference data; the analysis passes only borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChemicalTable {
    entries: Vec<Chemical>,
}

impl ChemicalTable {
    /// Build a table, rejecting duplicate ids.
    pub fn new(entries: Vec<Chemical>) -> ChemResult<Self> {
        let mut seen = HashSet::new();
        for chem in &entries {
            if !seen.insert(&chem.id) {
                return Err(ChemError::DuplicateChemical {
                    id: chem.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The editor's seed chemicals.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(id, name, formula, mw, tb, tc, pc, state)| Chemical {
                id: ChemicalId::from(id),
                name: name.to_string(),
                formula: formula.to_string(),
                molecular_weight: mw,
                boiling_point_c: tb,
                critical_temperature_k: tc,
                critical_pressure_bar: pc,
                state,
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, id: &ChemicalId) -> Option<&Chemical> {
        self.entries.iter().find(|c| &c.id == id)
    }

    /// Like [`get`](Self::get) but an unknown id is an error.
    pub fn require(&self, id: &ChemicalId) -> ChemResult<&Chemical> {
        self.get(id)
            .ok_or_else(|| ChemError::UnknownChemical { id: id.clone() })
    }

    /// Entries whose id, name or formula contains `query` (case-insensitive).
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Chemical> + 'a {
        self.entries.iter().filter(move |c| c.matches_query(query))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chemical> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ChemicalTable {
    fn default() -> Self {
        Self::builtin()
    }
}
