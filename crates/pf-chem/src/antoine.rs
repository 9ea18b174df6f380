//! Antoine vapor-pressure correlation.

use serde::{Deserialize, Serialize};

use crate::error::{ChemError, ChemResult};

/// Logarithm base the coefficients were fitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogBase {
    /// `log10(P) = A - B / (T + C)`
    Decimal,
    /// `ln(P) = A - B / (T + C)`
    Natural,
}

/// Three-constant Antoine fit, temperature in °C.
///
/// Pressure comes out in whatever unit the constants were fitted for; the
/// water set below yields mmHg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub base: LogBase,
}

impl AntoineCoefficients {
    /// Water, 1-100 °C, mmHg.
    pub const WATER: Self = Self {
        a: 8.07131,
        b: 1730.63,
        c: 233.426,
        base: LogBase::Decimal,
    };

    pub fn new(a: f64, b: f64, c: f64, base: LogBase) -> Self {
        Self { a, b, c, base }
    }

    /// Saturation pressure at `t_c` (°C).
    ///
    /// Fails when `T + C <= 0`, where the correlation has a pole.
    pub fn vapor_pressure(&self, t_c: f64) -> ChemResult<f64> {
        let denom = t_c + self.c;
        if !(denom > 0.0) {
            return Err(ChemError::Domain {
                what: "Antoine denominator (T + C)",
                value: denom,
            });
        }

        let exponent = self.a - self.b / denom;
        let p_sat = match self.base {
            LogBase::Decimal => 10f64.powf(exponent),
            LogBase::Natural => exponent.exp(),
        };

        if !p_sat.is_finite() {
            return Err(ChemError::NonFinite {
                what: "vapor pressure",
            });
        }
        Ok(p_sat)
    }
}

impl Default for AntoineCoefficients {
    fn default() -> Self {
        Self::WATER
    }
}
