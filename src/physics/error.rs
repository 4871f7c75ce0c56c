//! Error types for the transport calculation.

use thiserror::Error;

/// Errors raised by the transport-rate core
///
/// Every variant is deterministic in its inputs: repeating a failed call with
/// the same arguments fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Invalid physical input (non-positive mass or temperature, negative
    /// density, degenerate Debye ratio, non-finite field)
    #[error("domain error: {quantity} = {value:e} ({reason})")]
    Domain {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Quadrature or series argument outside the region where the
    /// hypergeometric integrand is finite
    #[error("numerical domain error at x = {x}, t = {t}: {reason}")]
    NumericalDomain {
        x: f64,
        t: f64,
        reason: &'static str,
    },

    /// Quadrature precision beyond what the evaluator supports
    #[error("quadrature precision {precision} exceeds maximum {max}")]
    InvalidPrecision { precision: u32, max: u32 },
}

impl TransportError {
    pub(crate) fn domain(quantity: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain {
            quantity,
            value,
            reason,
        }
    }

    pub(crate) fn numerical(x: f64, t: f64, reason: &'static str) -> Self {
        Self::NumericalDomain { x, t, reason }
    }

    /// True for errors caused by the physical inputs
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    /// True for errors caused by the hypergeometric arguments
    pub fn is_numerical_domain(&self) -> bool {
        matches!(self, Self::NumericalDomain { .. })
    }
}
