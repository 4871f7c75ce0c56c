//! Configuration module for loading transport parameters.

mod parameters;

pub use parameters::{Parameters, ScenarioParameters, DEFAULT_PARAMETERS_PATH};
