//! bimax-transport - Coulomb-collision transport between bi-Maxwellian plasma species
//!
//! Computes the momentum, parallel-temperature and perpendicular-temperature
//! relaxation rates of one ion population due to collisions with another,
//! following Hellinger & Trávníček (Phys Plasmas 2009).
//!
//! ```no_run
//! use bimax_transport::{compute_transport_rates, QuadratureConfig, ScenarioParameters};
//!
//! let scenario = ScenarioParameters::solar_wind_proton_alpha();
//! let rates = compute_transport_rates(
//!     &scenario.species_1,
//!     &scenario.species_2,
//!     &QuadratureConfig::default(),
//! )?;
//! println!("nu_T_par = {:e}", rates.nu_t_par);
//! # Ok::<(), bimax_transport::TransportError>(())
//! ```

// Unit suffixes in field names (temperature_perp_K, charge_C, ...)
#![allow(non_snake_case)]

pub mod config;
pub mod export;
pub mod physics;
pub mod state;

pub use config::{Parameters, ScenarioParameters};
pub use physics::{
    compute_transport_rates, evaluate_hypergeometric, evaluate_transport,
    isotropization_rate_coefficient, DifferenceMethod, QuadratureConfig, TransportError,
    TransportReport,
};
pub use state::{SpeciesState, TransportRates};
