//! Integration tests for the transport-rate calculation.
//!
//! Tests validate:
//! - The fast-wind proton-alpha scenario evaluates to finite rates
//! - Identical species exchange nothing
//! - Heat flows toward equilibrium
//! - Invalid physical input surfaces as a domain error
//! - Parameters load from JSON with fallback to defaults

use std::io::Write;

use bimax_transport::{
    config::{Parameters, ScenarioParameters},
    physics::{
        compute_transport_rates, evaluate_transport, isotropization_rate_coefficient,
        transit_time_sec, DifferenceMethod, DifferenceSource, QuadratureConfig, TransportError,
    },
    state::{SpeciesState, TransportRates},
};

/// Isotropic proton population at a given temperature and bulk speed
fn protons(temperature_K: f64, velocity_m_per_s: f64) -> SpeciesState {
    let base = ScenarioParameters::default().species_1;
    SpeciesState {
        temperature_perp_K: temperature_K,
        temperature_par_K: temperature_K,
        velocity_m_per_s,
        ..base
    }
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_solar_wind_scenario_is_finite() {
    let scenario = ScenarioParameters::solar_wind_proton_alpha();
    let config = QuadratureConfig::with_precision(2);

    let report = evaluate_transport(&scenario.species_1, &scenario.species_2, &config).unwrap();
    assert!(report.rates.is_finite(), "Rates should be finite: {:?}", report.rates);

    // ln Λ ≈ 27.7, A12 ≈ 0.574 for this pair
    assert!(
        (report.coulomb_log.value - 27.7).abs() < 0.1,
        "Coulomb log should be ~27.7, got {}",
        report.coulomb_log.value
    );
    assert!((report.reduced.anisotropy - 0.5741).abs() < 1e-3);
    assert!(report.x > 0.0 && report.x < 1.0);
    assert!(report.y > 0.0 && report.y < 0.01);

    // Protons are dragged along by the faster alphas
    assert!(report.rates.nu_v > 0.0);
}

#[test]
fn test_solar_wind_scenario_with_source_subtraction() {
    let scenario = ScenarioParameters::default();
    let config = QuadratureConfig {
        precision: 2,
        difference_method: DifferenceMethod::Quadrature,
        ..Default::default()
    };

    let report = evaluate_transport(&scenario.species_1, &scenario.species_2, &config).unwrap();
    assert!(report.rates.is_finite());
    assert_eq!(report.difference_source, DifferenceSource::Subtraction);
    assert!(
        (report.f_difference - (report.f_perpendicular - report.f_parallel)).abs() < 1e-15,
        "Subtraction mode should report F_c - F_b"
    );

    // At precision 2 the subtraction is dominated by quadrature error
    let advisory = report.advisory.expect("precision-2 subtraction should raise an advisory");
    assert!(advisory.cancellation_ratio < 0.1);
}

/// Relative difference |a - b| / |b|
fn relative_error(actual: f64, expected: f64) -> f64 {
    ((actual - expected) / expected).abs()
}

fn assert_rates_close(actual: TransportRates, expected: TransportRates, tolerance: f64) {
    for (name, a, e) in [
        ("nu_v", actual.nu_v, expected.nu_v),
        ("nu_t_par", actual.nu_t_par, expected.nu_t_par),
        ("nu_t_perp", actual.nu_t_perp, expected.nu_t_perp),
    ] {
        assert!(
            relative_error(a, e) < tolerance,
            "{} = {:e}, expected {:e}",
            name,
            a,
            e
        );
    }
}

#[test]
fn test_reference_rates_with_quadrature_difference() {
    // Both temperature terms and their difference from precision-2 quadrature
    let scenario = ScenarioParameters::default();
    let config = QuadratureConfig {
        precision: 2,
        difference_method: DifferenceMethod::Quadrature,
        ..Default::default()
    };

    let rates = compute_transport_rates(&scenario.species_1, &scenario.species_2, &config).unwrap();
    let expected = TransportRates::new(3.48288316765588e-5, 7.006536424945522e-4, 3.9077243076634876e-4);
    assert_rates_close(rates, expected, 1e-10);
}

#[test]
fn test_reference_rates_with_series_difference() {
    // Same pair with F_c - F_b from the series; only the temperature rates move
    let scenario = ScenarioParameters::default();
    let config = QuadratureConfig::with_precision(2);

    let report = evaluate_transport(&scenario.species_1, &scenario.species_2, &config).unwrap();
    assert_eq!(report.difference_source, DifferenceSource::Series);

    let expected = TransportRates::new(3.4828831676558865e-5, 2.346000364436605e-4, 6.505400144668477e-4);
    assert_rates_close(report.rates, expected, 1e-10);
}

#[test]
fn test_reference_species_anisotropy() {
    let scenario = ScenarioParameters::default();
    // Protons (40/50)², alphas 2.1/2.8 of that
    assert!((scenario.species_1.anisotropy() - 0.64).abs() < 1e-12);
    assert!((scenario.species_2.anisotropy() - 0.48).abs() < 1e-12);
}

#[test]
fn test_momentum_rate_independent_of_difference_method() {
    let scenario = ScenarioParameters::default();
    let series = QuadratureConfig::default();
    let subtraction = QuadratureConfig {
        difference_method: DifferenceMethod::Quadrature,
        ..Default::default()
    };

    let a = compute_transport_rates(&scenario.species_1, &scenario.species_2, &series).unwrap();
    let b = compute_transport_rates(&scenario.species_1, &scenario.species_2, &subtraction).unwrap();
    assert_eq!(a.nu_v, b.nu_v);
}

#[test]
fn test_collisional_age_over_one_au() {
    let scenario = ScenarioParameters::default();
    let rates =
        compute_transport_rates(&scenario.species_1, &scenario.species_2, &QuadratureConfig::default())
            .unwrap();

    let transit = transit_time_sec(scenario.transit_distance_m, scenario.wind_speed_m_per_s).unwrap();
    // 1 AU at 280 km/s is about 6.2 days
    assert!((transit / 86400.0 - 6.18).abs() < 0.05, "transit {} s", transit);

    let age = rates.accumulated_over(transit);
    assert!((age.nu_v - rates.nu_v * transit).abs() <= 1e-12 * age.nu_v.abs());
}

// ============================================================================
// Physical properties
// ============================================================================

#[test]
fn test_identical_species_exchange_nothing() {
    let p = protons(1.5e5, 4.5e5);
    let rates = compute_transport_rates(&p, &p, &QuadratureConfig::default()).unwrap();
    assert_eq!(rates, TransportRates::new(0.0, 0.0, 0.0));
}

#[test]
fn test_identical_species_exchange_nothing_at_any_precision() {
    let p = protons(1.5e5, 0.0);
    for precision in 1..=4 {
        let rates = compute_transport_rates(&p, &p, &QuadratureConfig::with_precision(precision)).unwrap();
        assert_eq!(rates, TransportRates::default(), "precision {}", precision);
    }
}

#[test]
fn test_parallel_heat_follows_temperature_difference() {
    let config = QuadratureConfig::default();
    let target = protons(2.0e5, 0.0);

    for ratio in [0.25, 0.5, 0.9, 1.1, 2.0, 4.0] {
        let other = protons(2.0e5 * ratio, 0.0);
        let rates = compute_transport_rates(&target, &other, &config).unwrap();
        let difference = other.temperature_par_K - target.temperature_par_K;
        assert!(
            rates.nu_t_par * difference > 0.0,
            "nu_T_par {} should share the sign of T2 - T1 = {}",
            rates.nu_t_par,
            difference
        );
    }
}

#[test]
fn test_alpha_heating_of_protons() {
    // Hotter alphas heat the protons in both directions
    let scenario = ScenarioParameters::default();
    let mut alphas = scenario.species_2.with_velocity(0.0);
    alphas.temperature_perp_K = 8.0 * scenario.species_1.temperature_perp_K;
    alphas.temperature_par_K = 8.0 * scenario.species_1.temperature_par_K;
    let mut protons = scenario.species_1;
    protons.temperature_perp_K = protons.temperature_par_K;
    alphas.temperature_perp_K = alphas.temperature_par_K;

    let rates = compute_transport_rates(&protons, &alphas, &QuadratureConfig::default()).unwrap();
    assert!(rates.nu_t_par > 0.0);
    assert!(rates.nu_t_perp > 0.0);
    assert_eq!(rates.nu_v, 0.0);
}

#[test]
fn test_large_drift_gives_small_finite_rates() {
    // exp(t·y/(1 - t·x)) alone overflows beyond ~3000 km/s; E·F decays instead
    let scenario = ScenarioParameters::default();
    let config = QuadratureConfig::default();

    let mut previous_momentum = f64::INFINITY;
    for drift in [1.0e6, 3.0e6, 1.0e7] {
        let alphas = scenario.species_2.with_velocity(drift);
        let report = evaluate_transport(&scenario.species_1, &alphas, &config)
            .unwrap_or_else(|e| panic!("drift {} failed: {}", drift, e));

        assert!(report.rates.is_finite(), "drift {}: {:?}", drift, report.rates);
        assert!(report.f_momentum > 0.0 && report.f_momentum < previous_momentum);
        assert!(report.f_perpendicular.is_finite() && report.f_parallel.is_finite());
        previous_momentum = report.f_momentum;
    }
    assert!(previous_momentum < 1e-50, "E·F_a at 10^4 km/s: {:e}", previous_momentum);
}

#[test]
fn test_isotropization_coefficient_vanishes_at_isotropy() {
    let coefficient = isotropization_rate_coefficient(0.0, &QuadratureConfig::default()).unwrap();
    assert_eq!(coefficient, 0.0);
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_zero_perpendicular_temperature_is_domain_error() {
    let scenario = ScenarioParameters::default();
    let mut cold = scenario.species_1;
    cold.temperature_perp_K = 0.0;

    let result = compute_transport_rates(&cold, &scenario.species_2, &QuadratureConfig::default());
    assert!(
        matches!(result, Err(TransportError::Domain { quantity: "temperature_perp_K", .. })),
        "Expected domain error, got {:?}",
        result
    );
}

#[test]
fn test_negative_mass_is_domain_error() {
    let scenario = ScenarioParameters::default();
    let mut species = scenario.species_2;
    species.mass_kg = -species.mass_kg;

    let result = compute_transport_rates(&scenario.species_1, &species, &QuadratureConfig::default());
    assert!(matches!(result, Err(TransportError::Domain { .. })));
}

#[test]
fn test_extreme_parallel_anisotropy_stays_below_pole() {
    // A12 → 0 drives x → 1, beyond the series range; quadrature still applies
    let scenario = ScenarioParameters::default();
    let mut p = scenario.species_1;
    let mut a = scenario.species_2;
    p.temperature_perp_K = p.temperature_par_K * 1e-6;
    a.temperature_perp_K = a.temperature_par_K * 1e-6;

    let report = evaluate_transport(&p, &a, &QuadratureConfig::default()).unwrap();
    assert!(report.x < 1.0);
    assert_eq!(report.difference_source, DifferenceSource::Subtraction);
    assert!(report.rates.is_finite());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_parameters_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut params = Parameters::default();
    params.quadrature.precision = 3;
    params.scenario.species_2.velocity_m_per_s = 2.5e4;
    write!(file, "{}", serde_json::to_string(&params).unwrap()).unwrap();

    let loaded = Parameters::load_from_path(file.path());
    assert_eq!(loaded.quadrature, params.quadrature);
    assert_eq!(loaded.scenario.species_2.velocity_m_per_s, 2.5e4);
    let (a, b) = (loaded.scenario.species_1, params.scenario.species_1);
    assert!(((a.temperature_par_K - b.temperature_par_K) / b.temperature_par_K).abs() < 1e-12);
}

#[test]
fn test_malformed_parameters_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let loaded = Parameters::load_from_path(file.path());
    assert_eq!(loaded, Parameters::default());
}

#[test]
fn test_bundled_parameter_file_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/parameters/solar_wind.json");
    let loaded = Parameters::load_from_path(path);
    let defaults = Parameters::default();

    assert_eq!(loaded.quadrature, defaults.quadrature);
    let (a, b) = (loaded.scenario.species_1, defaults.scenario.species_1);
    assert!(((a.temperature_perp_K - b.temperature_perp_K) / b.temperature_perp_K).abs() < 1e-12);
    assert!(((a.temperature_par_K - b.temperature_par_K) / b.temperature_par_K).abs() < 1e-12);
    assert_eq!(a.mass_kg, b.mass_kg);
}
