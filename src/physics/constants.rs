//! Physical constants in SI units.
//!
//! Values are the CODATA 1998 figures the reference solar-wind calculations
//! were produced with. Keep them as-is so reference outputs reproduce within
//! floating tolerance.

/// Vacuum permittivity (F/m)
pub const VACUUM_PERMITTIVITY_F_PER_M: f64 = 8.85418781762e-12;

/// Boltzmann constant (J/K)
pub const BOLTZMANN_J_PER_K: f64 = 1.3806503e-23;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE_C: f64 = 1.60217646e-19;

/// Proton mass (kg)
pub const PROTON_MASS_KG: f64 = 1.67262158e-27;

/// Astronomical unit (m)
pub const ASTRONOMICAL_UNIT_M: f64 = 1.495978707e11;
