//! bimax-transport - Entry point
//!
//! Evaluates the configured species pair and reports the transport rates and
//! the collisional ages accumulated over the solar-wind transit.
//!
//! CLI Usage:
//!   cargo run                              # Default proton-alpha scenario
//!   cargo run -- --config params.json      # Custom parameters
//!   cargo run -- -p 4 --sweep 50           # Precision 4, 50-point drift sweep CSV

use std::time::Instant;

use anyhow::Result;
use bimax_transport::{
    config::Parameters,
    export::CsvExporter,
    physics::{drift_speed_sweep, evaluate_transport, transit_time_sec, DifferenceMethod},
};

/// Command-line options
struct CliOptions {
    config_path: Option<String>,
    precision: Option<u32>,
    quadrature_difference: bool,
    sweep_points: usize,
}

/// Parse CLI arguments
fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        config_path: None,
        precision: None,
        quadrature_difference: false,
        sweep_points: 0,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    options.config_path = Some(args[i].clone());
                }
            }
            "-p" | "--precision" => {
                i += 1;
                if i < args.len() {
                    options.precision = args[i].parse().ok();
                }
            }
            "--quadrature-difference" => options.quadrature_difference = true,
            "--sweep" => {
                i += 1;
                if i < args.len() {
                    options.sweep_points = args[i].parse().unwrap_or(0);
                }
            }
            "--help" | "-h" => {
                println!("bimax-transport");
                println!();
                println!("Usage: bimax-transport [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config PATH          JSON parameter file");
                println!("  -p, --precision N          Quadrature precision, 10^N samples (default: 2)");
                println!("  --quadrature-difference    Form F_c - F_b by subtracting quadratures");
                println!("  --sweep N                  Write an N-point drift-speed sweep CSV");
                println!("  --help, -h                 Show this help");
                std::process::exit(0);
            }
            other => log::warn!("Ignoring unknown argument {}", other),
        }
        i += 1;
    }
    options
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args();
    let mut params = match &options.config_path {
        Some(path) => Parameters::load_from_path(path),
        None => Parameters::load_or_default(),
    };
    if let Some(precision) = options.precision {
        params.quadrature.precision = precision;
    }
    if options.quadrature_difference {
        params.quadrature.difference_method = DifferenceMethod::Quadrature;
    }

    let scenario = &params.scenario;
    let quadrature = &params.quadrature;
    log::info!(
        "Evaluating at precision {} ({:?} difference)",
        quadrature.precision,
        quadrature.difference_method
    );

    let start_time = Instant::now();
    let report = evaluate_transport(&scenario.species_1, &scenario.species_2, quadrature)?;
    let elapsed = start_time.elapsed();

    println!("=== Bi-Maxwellian Transport ===\n");
    println!("Coulomb logarithm:     {:.4}", report.coulomb_log.value);
    println!("Debye length:          {:.4e} m", report.coulomb_log.debye_length_m);
    println!("Base frequency nu_12:  {:.4e} s^-1", report.base_frequency_per_sec);
    println!(
        "T_perp/T_par:          {:.4} (species 1), {:.4} (species 2)",
        scenario.species_1.anisotropy(),
        scenario.species_2.anisotropy()
    );
    println!("Anisotropy A12:        {:.6}", report.reduced.anisotropy);
    println!("x, y:                  {:.6}, {:.6}", report.x, report.y);
    println!("Cancellation ratio:    {:.4e} ({:?})", report.cancellation_ratio, report.difference_source);
    println!();
    println!("nu_v:      {:.6e}", report.rates.nu_v);
    println!("nu_T_par:  {:.6e}", report.rates.nu_t_par);
    println!("nu_T_perp: {:.6e}", report.rates.nu_t_perp);
    println!("Elapsed:   {:.2?}", elapsed);

    let transit = transit_time_sec(scenario.transit_distance_m, scenario.wind_speed_m_per_s)?;
    let age = report.rates.accumulated_over(transit);
    println!("\n=== Collisional age over {:.3e} s transit ===", transit);
    println!("(nu_v * t_exp):      {:.6e}", age.nu_v);
    println!("(nu_T_par * t_exp):  {:.6e}", age.nu_t_par);
    println!("(nu_T_perp * t_exp): {:.6e}", age.nu_t_perp);

    if let Some(advisory) = report.advisory {
        println!(
            "\nWARNING: F_c - F_b cancellation ratio {:.3e} below {:.3e}; result may need higher precision",
            advisory.cancellation_ratio, advisory.threshold
        );
    }

    if options.sweep_points > 0 {
        // Sweep the drift from zero to twice the configured one
        let base_drift = scenario.species_2.velocity_m_per_s - scenario.species_1.velocity_m_per_s;
        let span = if base_drift != 0.0 { 2.0 * base_drift } else { report.reduced.v12_par_m_per_s };
        let n = options.sweep_points;
        let drifts: Vec<f64> = (0..n)
            .map(|i| if n > 1 { span * i as f64 / (n - 1) as f64 } else { 0.0 })
            .collect();

        let sweep = drift_speed_sweep(&scenario.species_1, &scenario.species_2, &drifts, quadrature)?;
        let mut exporter = CsvExporter::new("drift_sweep")?;
        exporter.record_sweep(&sweep)?;
        let path = exporter.finish()?;
        println!("\nDrift sweep written to {}", path.display());
    }

    Ok(())
}
