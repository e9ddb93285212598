//! TOML configuration deserialisation for light-curve jobs.

use serde::Deserialize;

use latelight_core::photometry::{Extinction, ObservationPoint};

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub time_grid: TimeGridSpec,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default, rename = "curve")]
    pub curves: Vec<CurveConfig>,
    #[serde(default, rename = "envelope")]
    pub envelopes: Vec<EnvelopeConfig>,
    #[serde(default)]
    pub observations: Option<ObservationConfig>,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Time grid specification: either a range or explicit list (days since explosion).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TimeGridSpec {
    Range {
        range: [f64; 2],
        points: usize,
    },
    List {
        values: Vec<f64>,
    },
}

/// Evaluation settings.
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    /// Evaluation backend: "serial" or "parallel". Default: "parallel".
    #[serde(default = "default_backend")]
    pub backend: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
        }
    }
}

fn default_backend() -> String {
    "parallel".into()
}

/// One scenario as written in the job file. Validated when the job runs.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScenarioConfig {
    /// Mass number (55, 56 or 57).
    pub isotope: u32,
    /// Initial mass (solar masses).
    pub mass: f64,
}

/// A summed light curve, from explicit scenarios or a yield model's nominal set.
#[derive(Debug, Deserialize)]
pub struct CurveConfig {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
    /// Also write one curve per scenario.
    #[serde(default)]
    pub components: bool,
}

/// A low/high pair, from a yield model or explicit scenario lists.
#[derive(Debug, Deserialize)]
pub struct EnvelopeConfig {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub low: Vec<ScenarioConfig>,
    #[serde(default)]
    pub high: Vec<ScenarioConfig>,
}

/// Photometry to place on the luminosity axis.
#[derive(Debug, Deserialize)]
pub struct ObservationConfig {
    /// Distance to the supernova (Mpc).
    pub distance_mpc: f64,
    #[serde(default)]
    pub extinction: Extinction,
    pub points: Vec<ObservationPointConfig>,
}

/// One photometric point: epoch (days) and observed apparent magnitude.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ObservationPointConfig {
    pub day: f64,
    pub magnitude: f64,
}

impl From<ObservationPointConfig> for ObservationPoint {
    fn from(p: ObservationPointConfig) -> Self {
        ObservationPoint::new(p.day, p.magnitude)
    }
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to save curves as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_csv: bool,
    /// Whether to also save everything as JSON (default: false).
    #[serde(default)]
    pub save_json: bool,
    /// Add log10(L) columns to the CSV files (default: false).
    #[serde(default)]
    pub log10: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_csv: true,
            save_json: false,
            log10: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// Parse a TOML job configuration string.
pub fn parse_config(content: &str) -> anyhow::Result<JobConfig> {
    let config: JobConfig = toml::from_str(content)?;
    Ok(config)
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
