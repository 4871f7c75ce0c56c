//! Per-species plasma parameters.
//!
//! A `SpeciesState` is an immutable snapshot of one bi-Maxwellian population
//! for a single evaluation. All quantities are SI.

use serde::{Deserialize, Serialize};

use crate::physics::constants::BOLTZMANN_J_PER_K;
use crate::physics::TransportError;

/// One bi-Maxwellian ion population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesState {
    /// Signed particle charge (C)
    pub charge_C: f64,
    /// Particle mass (kg)
    pub mass_kg: f64,
    /// Number density (m⁻³)
    pub density_per_m3: f64,
    /// Temperature perpendicular to the reference axis (K)
    pub temperature_perp_K: f64,
    /// Temperature parallel to the reference axis (K)
    pub temperature_par_K: f64,
    /// Bulk velocity along the reference axis (m/s)
    pub velocity_m_per_s: f64,
}

impl SpeciesState {
    /// Create a species from its raw parameters
    pub fn new(
        charge_C: f64,
        mass_kg: f64,
        density_per_m3: f64,
        temperature_perp_K: f64,
        temperature_par_K: f64,
        velocity_m_per_s: f64,
    ) -> Self {
        Self {
            charge_C,
            mass_kg,
            density_per_m3,
            temperature_perp_K,
            temperature_par_K,
            velocity_m_per_s,
        }
    }

    /// Copy of this species moving at a different bulk velocity
    pub fn with_velocity(self, velocity_m_per_s: f64) -> Self {
        Self {
            velocity_m_per_s,
            ..self
        }
    }

    /// Check the physical invariants
    ///
    /// Mass and both temperatures must be strictly positive, density
    /// non-negative, and every field finite.
    pub fn validate(&self) -> Result<(), TransportError> {
        let fields = [
            ("charge_C", self.charge_C),
            ("mass_kg", self.mass_kg),
            ("density_per_m3", self.density_per_m3),
            ("temperature_perp_K", self.temperature_perp_K),
            ("temperature_par_K", self.temperature_par_K),
            ("velocity_m_per_s", self.velocity_m_per_s),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(TransportError::domain(name, value, "must be finite"));
            }
        }

        if self.mass_kg <= 0.0 {
            return Err(TransportError::domain("mass_kg", self.mass_kg, "must be positive"));
        }
        if self.temperature_perp_K <= 0.0 {
            return Err(TransportError::domain(
                "temperature_perp_K",
                self.temperature_perp_K,
                "must be positive",
            ));
        }
        if self.temperature_par_K <= 0.0 {
            return Err(TransportError::domain(
                "temperature_par_K",
                self.temperature_par_K,
                "must be positive",
            ));
        }
        if self.density_per_m3 < 0.0 {
            return Err(TransportError::domain(
                "density_per_m3",
                self.density_per_m3,
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// Perpendicular thermal speed squared, kB·T⊥/m (m²/s²)
    pub fn thermal_speed_perp_sq(&self) -> f64 {
        BOLTZMANN_J_PER_K * self.temperature_perp_K / self.mass_kg
    }

    /// Parallel thermal speed squared, kB·T∥/m (m²/s²)
    pub fn thermal_speed_par_sq(&self) -> f64 {
        BOLTZMANN_J_PER_K * self.temperature_par_K / self.mass_kg
    }

    /// Isotropized thermal speed squared, (2·w⊥² + w∥²)/3 (m²/s²)
    ///
    /// Built only from this species' own speeds.
    pub fn isotropic_thermal_speed_sq(&self) -> f64 {
        (2.0 * self.thermal_speed_perp_sq() + self.thermal_speed_par_sq()) / 3.0
    }

    /// Scalar temperature (T∥ + 2·T⊥)/3 (K)
    pub fn scalar_temperature_K(&self) -> f64 {
        (self.temperature_par_K + 2.0 * self.temperature_perp_K) / 3.0
    }

    /// Temperature anisotropy T⊥/T∥
    pub fn anisotropy(&self) -> f64 {
        self.temperature_perp_K / self.temperature_par_K
    }
}
