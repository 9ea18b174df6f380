//! Dimensioned quantities used by the analysis configuration.
//!
//! Everything is `uom` SI with `f64` storage. Per-node parameters stay raw
//! numbers in the editor's units; only configuration geometry and fluid
//! properties are typed.

use uom::si::f64::{
    Area as UomArea, DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, MolarEnergy as UomMolarEnergy,
    MolarHeatCapacity as UomMolarHeatCapacity, Pressure as UomPressure, Ratio as UomRatio,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type MolarEnergy = UomMolarEnergy;
pub type MolarHeatCapacity = UomMolarHeatCapacity;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn j_per_mol(v: f64) -> MolarEnergy {
    use uom::si::molar_energy::joule_per_mole;
    MolarEnergy::new::<joule_per_mole>(v)
}

#[inline]
pub fn j_per_mol_k(v: f64) -> MolarHeatCapacity {
    use uom::si::molar_heat_capacity::joule_per_kelvin_mole;
    MolarHeatCapacity::new::<joule_per_kelvin_mole>(v)
}

#[inline]
pub fn m3_per_s(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

pub mod constants {
    /// Offset between the Celsius and Kelvin scales.
    pub const CELSIUS_OFFSET_K: f64 = 273.15;

    /// Gas constant in J/(mol·K), at the precision the flowsheet correlations use.
    pub const R_J_PER_MOL_K: f64 = 8.314;

    /// Gas constant in L·atm/(mol·K).
    pub const R_L_ATM_PER_MOL_K: f64 = 0.0821;

    #[inline]
    pub fn celsius_to_kelvin(t_c: f64) -> f64 {
        t_c + CELSIUS_OFFSET_K
    }
}
