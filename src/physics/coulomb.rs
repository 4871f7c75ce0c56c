//! Coulomb logarithm and base collision frequency.
//!
//! ln Λ = ln(λ_D / b_min), with
//!
//! λ_D   = sqrt(ε0·(kB·T/e) / (n·e))
//! b_min = |Q1·Q2| / (4π·ε0·m2·vab²)
//!
//! The electron temperature is taken equal to the density-weighted scalar ion
//! temperature. vab combines the isotropized thermal speed of each species
//! with the bulk drift between them.
//!
//! The base collision frequency of species 1 on species 2 is
//!
//! ν12 = ln Λ·Q1²·Q2²·n2 / (12·π^{3/2}·ε0²·m1·m12·v12∥³)

use std::f64::consts::PI;

use serde::Serialize;

use super::constants::{BOLTZMANN_J_PER_K, ELEMENTARY_CHARGE_C, VACUUM_PERMITTIVITY_F_PER_M};
use super::{ReducedQuantities, TransportError};
use crate::state::SpeciesState;

/// Coulomb logarithm together with the lengths it was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoulombLogarithm {
    /// Density-weighted plasma temperature (K)
    pub plasma_temperature_K: f64,
    /// Characteristic relative speed vab (m/s)
    pub relative_speed_m_per_s: f64,
    /// Debye length (m)
    pub debye_length_m: f64,
    /// Classical distance of closest approach (m)
    pub closest_approach_m: f64,
    /// ln(λ_D / b_min)
    pub value: f64,
}

impl CoulombLogarithm {
    /// Estimate the Coulomb logarithm for a species pair
    pub fn estimate(
        species1: &SpeciesState,
        species2: &SpeciesState,
    ) -> Result<Self, TransportError> {
        let n1 = species1.density_per_m3;
        let n2 = species2.density_per_m3;
        let n_total = n1 + n2;
        if n_total <= 0.0 {
            return Err(TransportError::domain(
                "density_per_m3",
                n_total,
                "combined density must be positive",
            ));
        }

        let plasma_temperature_K =
            (n1 * species1.scalar_temperature_K() + n2 * species2.scalar_temperature_K()) / n_total;

        let drift = species2.velocity_m_per_s - species1.velocity_m_per_s;
        let vab_sq = species1.isotropic_thermal_speed_sq()
            + species2.isotropic_thermal_speed_sq()
            + drift * drift;

        let debye_length_m = (VACUUM_PERMITTIVITY_F_PER_M
            * (BOLTZMANN_J_PER_K * plasma_temperature_K / ELEMENTARY_CHARGE_C)
            / (n_total * ELEMENTARY_CHARGE_C))
            .sqrt();
        let closest_approach_m = (species1.charge_C * species2.charge_C).abs()
            / (4.0 * PI * VACUUM_PERMITTIVITY_F_PER_M * species2.mass_kg * vab_sq);

        let ratio = debye_length_m / closest_approach_m;
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(TransportError::domain(
                "debye_ratio",
                ratio,
                "Debye length over closest approach must be finite and positive",
            ));
        }

        Ok(Self {
            plasma_temperature_K,
            relative_speed_m_per_s: vab_sq.sqrt(),
            debye_length_m,
            closest_approach_m,
            value: ratio.ln(),
        })
    }
}

/// Base collision frequency ν12 of species 1 on species 2 (s⁻¹)
pub fn base_collision_frequency(
    coulomb_log: f64,
    species1: &SpeciesState,
    species2: &SpeciesState,
    reduced: &ReducedQuantities,
) -> f64 {
    let q1_sq = species1.charge_C * species1.charge_C;
    let q2_sq = species2.charge_C * species2.charge_C;
    coulomb_log * q1_sq * q2_sq * species2.density_per_m3
        / (12.0
            * PI.powf(1.5)
            * VACUUM_PERMITTIVITY_F_PER_M.powi(2)
            * species1.mass_kg
            * reduced.reduced_mass_kg
            * reduced.v12_par_m_per_s.powi(3))
}
