//! Ideal-solution phase equilibrium helpers.

use pf_core::constants::{R_L_ATM_PER_MOL_K, celsius_to_kelvin};

use crate::error::{ChemError, ChemResult};

/// Raoult's law: vapor mole fraction `y = x * P_sat / P`.
pub fn raoult_vapor_fraction(mole_fraction: f64, p_sat: f64, p_total: f64) -> ChemResult<f64> {
    if !(p_total > 0.0) {
        return Err(ChemError::Domain {
            what: "total pressure",
            value: p_total,
        });
    }
    let y = mole_fraction * p_sat / p_total;
    if !y.is_finite() {
        return Err(ChemError::NonFinite {
            what: "vapor mole fraction",
        });
    }
    Ok(y)
}

/// Ideal-gas ratio `pV / (nRT)` in L·atm units, temperature in °C.
///
/// Equals one for a gas that obeys the ideal-gas law exactly.
pub fn ideal_gas_ratio(pressure_atm: f64, volume_l: f64, moles: f64, t_c: f64) -> ChemResult<f64> {
    let t_k = celsius_to_kelvin(t_c);
    if !(t_k > 0.0) {
        return Err(ChemError::Domain {
            what: "absolute temperature",
            value: t_k,
        });
    }
    if !(moles > 0.0) {
        return Err(ChemError::Domain {
            what: "amount of substance",
            value: moles,
        });
    }
    Ok(pressure_atm * volume_l / (moles * R_L_ATM_PER_MOL_K * t_k))
}
