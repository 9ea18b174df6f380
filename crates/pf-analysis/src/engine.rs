//! Analysis engine: pass selection and the sequential/parallel drivers.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use pf_graph::FlowsheetSnapshot;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::energy_balance::{self, EnergyBalanceRecord};
use crate::error::{AnalysisError, AnalysisResult, NodeFailure};
use crate::heat_transfer::{self, HeatTransferRecord};
use crate::kinetics::{self, KineticsRecord};
use crate::mass_balance::{self, MassBalanceRecord};
use crate::mass_transfer::{self, MassTransferRecord};
use crate::outcome::{AnalysisWarning, PassOutput};
use crate::pressure_drop::{self, PressureDropRecord};
use crate::vle::{self, VleRecord};

/// One of the independent analysis passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    MassBalance,
    EnergyBalance,
    Vle,
    HeatTransfer,
    MassTransfer,
    Kinetics,
    PressureDrop,
}

impl PassKind {
    pub const ALL: [PassKind; 7] = [
        PassKind::MassBalance,
        PassKind::EnergyBalance,
        PassKind::Vle,
        PassKind::HeatTransfer,
        PassKind::MassTransfer,
        PassKind::Kinetics,
        PassKind::PressureDrop,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PassKind::MassBalance => "mass_balance",
            PassKind::EnergyBalance => "energy_balance",
            PassKind::Vle => "vle",
            PassKind::HeatTransfer => "heat_transfer",
            PassKind::MassTransfer => "mass_transfer",
            PassKind::Kinetics => "kinetics",
            PassKind::PressureDrop => "pressure_drop",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PassKind {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PassKind::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| AnalysisError::UnknownPass { key: s.to_string() })
    }
}

/// Set of passes to run. Defaults to all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSet(u8);

impl PassSet {
    pub fn all() -> Self {
        PassKind::ALL.into_iter().collect()
    }

    pub fn empty() -> Self {
        PassSet(0)
    }

    pub fn with(self, kind: PassKind) -> Self {
        PassSet(self.0 | kind.bit())
    }

    pub fn contains(&self, kind: PassKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Selected passes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = PassKind> + '_ {
        PassKind::ALL.into_iter().filter(|k| self.contains(*k))
    }
}

impl Default for PassSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<PassKind> for PassSet {
    fn from_iter<I: IntoIterator<Item = PassKind>>(iter: I) -> Self {
        iter.into_iter().fold(PassSet::empty(), PassSet::with)
    }
}

/// Results of one analysis run. Passes that were not selected are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_balance: Option<PassOutput<MassBalanceRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_balance: Option<PassOutput<EnergyBalanceRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vle: Option<PassOutput<VleRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_transfer: Option<PassOutput<HeatTransferRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_transfer: Option<PassOutput<MassTransferRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinetics: Option<PassOutput<KineticsRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_drop: Option<PassOutput<PressureDropRecord>>,
    /// Distinct warnings from all passes, in first-seen order.
    pub warnings: Vec<AnalysisWarning>,
}

impl AnalysisReport {
    fn collect_warnings(mut self) -> Self {
        let mut seen = HashSet::new();
        let mut warnings = Vec::new();
        let sources = [
            self.mass_balance.as_ref().map(|o| &o.warnings),
            self.energy_balance.as_ref().map(|o| &o.warnings),
            self.vle.as_ref().map(|o| &o.warnings),
            self.heat_transfer.as_ref().map(|o| &o.warnings),
            self.mass_transfer.as_ref().map(|o| &o.warnings),
            self.kinetics.as_ref().map(|o| &o.warnings),
            self.pressure_drop.as_ref().map(|o| &o.warnings),
        ];
        for warning in sources.into_iter().flatten().flatten() {
            if seen.insert(warning) {
                warnings.push(warning.clone());
            }
        }
        self.warnings = warnings;
        self
    }

    /// Failed node entries across all passes, tagged with their pass.
    pub fn failures(&self) -> Vec<(PassKind, &NodeFailure)> {
        fn tag<T>(kind: PassKind, output: &Option<PassOutput<T>>) -> Vec<(PassKind, &NodeFailure)> {
            output
                .iter()
                .flat_map(|o| o.failures())
                .map(|f| (kind, f))
                .collect()
        }

        let mut all = tag(PassKind::MassBalance, &self.mass_balance);
        all.extend(tag(PassKind::EnergyBalance, &self.energy_balance));
        all.extend(tag(PassKind::Vle, &self.vle));
        all.extend(tag(PassKind::HeatTransfer, &self.heat_transfer));
        all.extend(tag(PassKind::MassTransfer, &self.mass_transfer));
        all.extend(tag(PassKind::Kinetics, &self.kinetics));
        all.extend(tag(PassKind::PressureDrop, &self.pressure_drop));
        all
    }

    /// Number of node entries produced by a pass, or `None` if it did not run.
    pub fn entry_count(&self, kind: PassKind) -> Option<usize> {
        match kind {
            PassKind::MassBalance => self.mass_balance.as_ref().map(PassOutput::len),
            PassKind::EnergyBalance => self.energy_balance.as_ref().map(PassOutput::len),
            PassKind::Vle => self.vle.as_ref().map(PassOutput::len),
            PassKind::HeatTransfer => self.heat_transfer.as_ref().map(PassOutput::len),
            PassKind::MassTransfer => self.mass_transfer.as_ref().map(PassOutput::len),
            PassKind::Kinetics => self.kinetics.as_ref().map(PassOutput::len),
            PassKind::PressureDrop => self.pressure_drop.as_ref().map(PassOutput::len),
        }
    }
}

/// Run the selected passes one after another.
pub fn analyze(
    snapshot: &FlowsheetSnapshot,
    config: &AnalysisConfig,
    passes: PassSet,
) -> AnalysisResult<AnalysisReport> {
    config.validate()?;
    let run = |kind: PassKind| passes.contains(kind);

    let report = AnalysisReport {
        mass_balance: run(PassKind::MassBalance).then(|| mass_balance::run(snapshot, config)),
        energy_balance: run(PassKind::EnergyBalance)
            .then(|| energy_balance::run(snapshot, config)),
        vle: run(PassKind::Vle).then(|| vle::run(snapshot, config)),
        heat_transfer: run(PassKind::HeatTransfer).then(|| heat_transfer::run(snapshot, config)),
        mass_transfer: run(PassKind::MassTransfer).then(|| mass_transfer::run(snapshot, config)),
        kinetics: run(PassKind::Kinetics).then(|| kinetics::run(snapshot, config)),
        pressure_drop: run(PassKind::PressureDrop).then(|| pressure_drop::run(snapshot, config)),
        warnings: Vec::new(),
    };
    Ok(report.collect_warnings())
}

/// Run the selected passes concurrently on the rayon pool.
///
/// Returns exactly what [`analyze`] returns for the same inputs.
pub fn analyze_parallel(
    snapshot: &FlowsheetSnapshot,
    config: &AnalysisConfig,
    passes: PassSet,
) -> AnalysisResult<AnalysisReport> {
    config.validate()?;
    let run = |kind: PassKind| passes.contains(kind);

    let mass = || run(PassKind::MassBalance).then(|| mass_balance::run(snapshot, config));
    let energy = || run(PassKind::EnergyBalance).then(|| energy_balance::run(snapshot, config));
    let equilibrium = || run(PassKind::Vle).then(|| vle::run(snapshot, config));
    let heat = || run(PassKind::HeatTransfer).then(|| heat_transfer::run(snapshot, config));
    let transfer = || run(PassKind::MassTransfer).then(|| mass_transfer::run(snapshot, config));
    let reaction = || run(PassKind::Kinetics).then(|| kinetics::run(snapshot, config));
    let friction = || run(PassKind::PressureDrop).then(|| pressure_drop::run(snapshot, config));

    let (
        (mass_balance, energy_balance),
        ((vle, heat_transfer), (mass_transfer, (kinetics, pressure_drop))),
    ) = rayon::join(
        || rayon::join(mass, energy),
        || {
            rayon::join(
                || rayon::join(equilibrium, heat),
                || rayon::join(transfer, || rayon::join(reaction, friction)),
            )
        },
    );

    let report = AnalysisReport {
        mass_balance,
        energy_balance,
        vle,
        heat_transfer,
        mass_transfer,
        kinetics,
        pressure_drop,
        warnings: Vec::new(),
    };
    Ok(report.collect_warnings())
}
