//! Coulomb-collision transport between two bi-Maxwellian ion populations.
//!
//! This module implements:
//! - Reduced quantities (combined thermal speeds, effective anisotropy)
//! - Coulomb logarithm and base collision frequency
//! - Two-variable hypergeometric functions by quadrature and by direct series
//! - Composition of the momentum and temperature relaxation rates
//!
//! Every function is a pure computation over value inputs.
//!
//! References:
//! - Hellinger & Trávníček, Phys Plasmas 16, 054501 (2009)
//! - Hellinger & Trávníček, Phys Plasmas 17, 054502 (2010)

pub mod constants;
pub mod coulomb;
pub mod error;
pub mod hypergeometric;
pub mod reduced;
pub mod sweep;
pub mod transport;

pub use coulomb::{base_collision_frequency, CoulombLogarithm};
pub use error::TransportError;
pub use hypergeometric::{
    evaluate_hypergeometric, hypergeometric_difference_series, hypergeometric_series,
    MAX_QUADRATURE_PRECISION,
};
pub use reduced::ReducedQuantities;
pub use sweep::{drift_speed_sweep, DriftSweepPoint};
pub use transport::{
    compute_transport_rates, evaluate_transport, isotropization_curve,
    isotropization_rate_coefficient, transit_time_sec, DifferenceSource, PrecisionAdvisory,
    TransportReport,
};

use serde::{Deserialize, Serialize};

/// How the temperature-exchange difference F(2,½;5/2) − F(1,½;5/2) is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceMethod {
    /// Direct double series, falling back to subtraction outside its region
    #[default]
    Series,
    /// Subtract the two quadrature estimates
    Quadrature,
}

/// Configuration for the hypergeometric evaluations of one transport call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Quadrature resolution: 10^precision samples per evaluation
    pub precision: u32,
    /// Cancellation ratio |fdiff|/|F_b + F_c| below which a precision
    /// advisory is raised
    pub cancellation_threshold: f64,
    /// Evaluation of the difference term
    pub difference_method: DifferenceMethod,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            precision: 2,                // 100 quadrature points
            cancellation_threshold: 0.1,
            difference_method: DifferenceMethod::Series,
        }
    }
}

impl QuadratureConfig {
    /// Default configuration at a given precision
    pub fn with_precision(precision: u32) -> Self {
        Self {
            precision,
            ..Default::default()
        }
    }
}
