//! Analysis configuration.
//!
//! Every constant a pass uses lives here. `Default` reproduces the values the
//! flowsheet editor has always used; a file may override any subset.

use pf_chem::AntoineCoefficients;
use pf_core::constants::R_J_PER_MOL_K;
use pf_core::{Density, DynVisc, Length, MolarEnergy, MolarHeatCapacity};
use pf_core::{j_per_mol, j_per_mol_k, kg_per_m3, m, pa_s};
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

fn require(ok: bool, what: &'static str, value: f64) -> AnalysisResult<()> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(AnalysisError::InvalidConfig { what, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyBalanceConfig {
    /// Used when a node has no heat capacity of its own.
    pub default_heat_capacity: f64,
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            default_heat_capacity: 4.186,
        }
    }
}

impl EnergyBalanceConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let cp = self.default_heat_capacity;
        require(cp > 0.0, "default heat capacity", cp)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VleConfig {
    pub antoine: AntoineCoefficients,
}

impl VleConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let AntoineCoefficients { a, b, c, .. } = self.antoine;
        require(true, "Antoine A", a)?;
        require(true, "Antoine B", b)?;
        require(true, "Antoine C", c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatTransferConfig {
    /// Lumped overall coefficient U.
    pub overall_coefficient: f64,
    /// °C; used when a heat exchanger does not carry its own reference.
    pub reference_temperature_c: f64,
}

impl Default for HeatTransferConfig {
    fn default() -> Self {
        Self {
            overall_coefficient: 500.0,
            reference_temperature_c: 25.0,
        }
    }
}

impl HeatTransferConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let u = self.overall_coefficient;
        require(u >= 0.0, "overall heat transfer coefficient", u)?;
        require(true, "reference temperature", self.reference_temperature_c)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MassTransferConfig {
    pub transfer_coefficient: f64,
}

impl Default for MassTransferConfig {
    fn default() -> Self {
        Self {
            transfer_coefficient: 0.05,
        }
    }
}

impl MassTransferConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        let k = self.transfer_coefficient;
        require(k >= 0.0, "mass transfer coefficient", k)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticsConfig {
    pub activation_energy: MolarEnergy,
    pub pre_exponential: f64,
    pub gas_constant: MolarHeatCapacity,
    /// Reported as-is for every reactor.
    pub selectivity: f64,
    /// Multiplier used when a reactor has no reaction rate of its own.
    pub default_rate_parameter: f64,
}

impl Default for KineticsConfig {
    fn default() -> Self {
        Self {
            activation_energy: j_per_mol(50_000.0),
            pre_exponential: 1.0e6,
            gas_constant: j_per_mol_k(R_J_PER_MOL_K),
            selectivity: 0.85,
            default_rate_parameter: 1.0,
        }
    }
}

impl KineticsConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        require(true, "activation energy", self.activation_energy.value)?;
        require(
            self.pre_exponential >= 0.0,
            "pre-exponential factor",
            self.pre_exponential,
        )?;
        require(
            self.gas_constant.value > 0.0,
            "gas constant",
            self.gas_constant.value,
        )?;
        require(
            (0.0..=1.0).contains(&self.selectivity),
            "selectivity",
            self.selectivity,
        )?;
        require(
            self.default_rate_parameter >= 0.0,
            "default rate parameter",
            self.default_rate_parameter,
        )
    }
}

/// Straight-pipe geometry and fluid properties for the pressure drop pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PressureDropConfig {
    pub diameter: Length,
    pub length: Length,
    pub density: Density,
    pub viscosity: DynVisc,
    /// Blasius holds only at or above this Reynolds number.
    pub min_turbulent_reynolds: f64,
}

impl Default for PressureDropConfig {
    fn default() -> Self {
        Self {
            diameter: m(0.1),
            length: m(1.0),
            density: kg_per_m3(1000.0),
            viscosity: pa_s(0.001),
            min_turbulent_reynolds: 4000.0,
        }
    }
}

impl PressureDropConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        require(self.diameter.value > 0.0, "pipe diameter", self.diameter.value)?;
        require(self.length.value >= 0.0, "pipe length", self.length.value)?;
        require(self.density.value > 0.0, "fluid density", self.density.value)?;
        require(
            self.viscosity.value > 0.0,
            "fluid viscosity",
            self.viscosity.value,
        )?;
        require(
            self.min_turbulent_reynolds > 0.0,
            "minimum turbulent Reynolds number",
            self.min_turbulent_reynolds,
        )
    }
}

/// Configuration for a whole analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub energy_balance: EnergyBalanceConfig,
    pub vle: VleConfig,
    pub heat_transfer: HeatTransferConfig,
    pub mass_transfer: MassTransferConfig,
    pub kinetics: KineticsConfig,
    pub pressure_drop: PressureDropConfig,
}

impl AnalysisConfig {
    pub fn validate(&self) -> AnalysisResult<()> {
        self.energy_balance.validate()?;
        self.vle.validate()?;
        self.heat_transfer.validate()?;
        self.mass_transfer.validate()?;
        self.kinetics.validate()?;
        self.pressure_drop.validate()
    }
}
