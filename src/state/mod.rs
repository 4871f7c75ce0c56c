//! Value records passed into and out of the transport calculation.
//!
//! Contains the per-species plasma snapshot and the output rates. Nothing here
//! persists across evaluations.

mod rates;
mod species;

pub use rates::TransportRates;
pub use species::SpeciesState;
