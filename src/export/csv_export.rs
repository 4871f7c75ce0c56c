//! CSV export of transport-rate records.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::physics::DriftSweepPoint;

/// One CSV row
#[derive(Debug, Clone, Serialize)]
pub struct RateRecord {
    /// Relative bulk velocity v2 − v1 (m/s)
    pub drift_m_per_s: f64,
    /// Momentum relaxation rate
    pub nu_v: f64,
    /// Parallel temperature relaxation rate
    pub nu_t_par: f64,
    /// Perpendicular temperature relaxation rate
    pub nu_t_perp: f64,
}

impl From<&DriftSweepPoint> for RateRecord {
    fn from(point: &DriftSweepPoint) -> Self {
        Self {
            drift_m_per_s: point.drift_m_per_s,
            nu_v: point.rates.nu_v,
            nu_t_par: point.rates.nu_t_par,
            nu_t_perp: point.rates.nu_t_perp,
        }
    }
}

/// CSV writer for rate records
pub struct CsvExporter {
    writer: csv::Writer<File>,
    /// Rows written so far
    rows: usize,
    /// Path to output file
    path: PathBuf,
}

impl CsvExporter {
    /// Create an exporter under `exports/` with a timestamped filename
    pub fn new(prefix: &str) -> Result<Self> {
        let dir = PathBuf::from("exports");
        std::fs::create_dir_all(&dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("{}_{}.csv", prefix, timestamp);
        Self::to_path(dir.join(filename))
    }

    /// Create an exporter writing to a specific file
    pub fn to_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let writer = csv::Writer::from_writer(file);

        log::info!("CSV export started: {}", path.display());

        Ok(Self {
            writer,
            rows: 0,
            path,
        })
    }

    /// Write one record
    pub fn record(&mut self, record: &RateRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Write every point of a sweep
    pub fn record_sweep(&mut self, sweep: &[DriftSweepPoint]) -> Result<()> {
        for point in sweep {
            self.record(&RateRecord::from(point))?;
        }
        Ok(())
    }

    /// Finish writing and return the output path
    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        log::info!("CSV export completed: {} ({} rows)", self.path.display(), self.rows);
        Ok(self.path)
    }
}
