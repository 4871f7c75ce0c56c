//! Parameter structures for transport evaluations.
//!
//! The default scenario is a typical fast-wind proton-alpha pair at 1 AU.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::physics::constants::{
    ASTRONOMICAL_UNIT_M, BOLTZMANN_J_PER_K, ELEMENTARY_CHARGE_C, PROTON_MASS_KG,
};
use crate::physics::QuadratureConfig;
use crate::state::SpeciesState;

/// Default parameter file, relative to the working directory
pub const DEFAULT_PARAMETERS_PATH: &str = "data/parameters/solar_wind.json";

/// Top-level parameters container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Parameters {
    /// Hypergeometric evaluation settings
    #[serde(default)]
    pub quadrature: QuadratureConfig,
    /// Species pair and transit geometry
    #[serde(default)]
    pub scenario: ScenarioParameters,
}

impl Parameters {
    /// Load parameters from the default JSON file, or use defaults if missing
    pub fn load_or_default() -> Self {
        Self::load_from_path(DEFAULT_PARAMETERS_PATH)
    }

    /// Load from a JSON file or return defaults
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded transport parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse transport parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Transport parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

/// Species pair plus the transit used for collisional ages
///
/// Species 1 is the test population; rates describe its relaxation due to
/// collisions with species 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub species_1: SpeciesState,
    pub species_2: SpeciesState,
    /// Heliocentric distance travelled (m)
    pub transit_distance_m: f64,
    /// Solar wind bulk speed over the transit (m/s)
    pub wind_speed_m_per_s: f64,
}

impl ScenarioParameters {
    /// Fast-wind protons and alphas with a 10 km/s alpha drift
    ///
    /// Protons: n = 2 cm⁻³, w⊥ = 40 km/s, w∥ = 50 km/s.
    /// Alphas: 4% abundance, T⊥ = 2.1·Tp⊥, T∥ = 2.8·Tp∥.
    pub fn solar_wind_proton_alpha() -> Self {
        let t_perp = (PROTON_MASS_KG / BOLTZMANN_J_PER_K) * 40.0e3_f64.powi(2);
        let t_par = (PROTON_MASS_KG / BOLTZMANN_J_PER_K) * 50.0e3_f64.powi(2);
        let n_protons = 2e6;

        let protons = SpeciesState::new(
            ELEMENTARY_CHARGE_C,
            PROTON_MASS_KG,
            n_protons,
            t_perp,
            t_par,
            0.0,
        );
        let alphas = SpeciesState::new(
            2.0 * ELEMENTARY_CHARGE_C,
            4.0 * PROTON_MASS_KG,
            0.04 * n_protons,
            2.1 * t_perp,
            2.8 * t_par,
            10.0e3,
        );

        Self {
            species_1: protons,
            species_2: alphas,
            transit_distance_m: ASTRONOMICAL_UNIT_M,
            wind_speed_m_per_s: 280.0e3,
        }
    }
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self::solar_wind_proton_alpha()
    }
}
