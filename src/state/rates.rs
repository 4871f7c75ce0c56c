//! Output transport rates.

use serde::{Deserialize, Serialize};

/// Collisional transport rates of species 1 due to collisions with species 2
///
/// Returned by value from one evaluation; nothing else owns them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransportRates {
    /// Momentum relaxation rate, applied to Δv/2
    pub nu_v: f64,
    /// Parallel temperature relaxation rate
    pub nu_t_par: f64,
    /// Perpendicular temperature relaxation rate
    pub nu_t_perp: f64,
}

impl TransportRates {
    pub fn new(nu_v: f64, nu_t_par: f64, nu_t_perp: f64) -> Self {
        Self {
            nu_v,
            nu_t_par,
            nu_t_perp,
        }
    }

    /// True when all three rates are finite
    pub fn is_finite(&self) -> bool {
        self.nu_v.is_finite() && self.nu_t_par.is_finite() && self.nu_t_perp.is_finite()
    }

    /// Rates integrated over a fixed duration (collisional age)
    ///
    /// Multiplying by the expansion time from the Sun gives the number of
    /// collisional e-foldings the plasma has experienced in transit.
    pub fn accumulated_over(&self, duration_sec: f64) -> Self {
        Self {
            nu_v: self.nu_v * duration_sec,
            nu_t_par: self.nu_t_par * duration_sec,
            nu_t_perp: self.nu_t_perp * duration_sec,
        }
    }
}
