//! Job runner: ties together time grid, yield models, the decay assembler and photometry.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::Array1;
use serde::Serialize;

use latelight_core::comparison::{compare, Residual};
use latelight_core::curve::{assemble, Envelope, LightCurve};
use latelight_core::photometry::{ObservationPoint, ObservedLuminosity, PhotometricCalibration, MEGAPARSEC_CM};
use latelight_core::{DecayError, DecayScenario};
use latelight_yields::{lookup, EnvelopeScenarios};

use crate::config::{
    CurveConfig, EnvelopeConfig, JobConfig, ObservationConfig, OutputConfig, ScenarioConfig,
    TimeGridSpec,
};

/// How time samples are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Serial,
    Parallel,
}

/// A summed curve under its job-file name.
pub struct NamedCurve {
    pub name: String,
    pub curve: LightCurve,
}

/// An envelope under its job-file name, with the scenarios that produced it.
pub struct NamedEnvelope {
    pub name: String,
    pub envelope: Envelope,
    pub scenarios: EnvelopeScenarios,
}

/// Results from a job run.
pub struct RunOutput {
    pub times: Vec<f64>,
    pub curves: Vec<NamedCurve>,
    pub envelopes: Vec<NamedEnvelope>,
    pub observations: Vec<ObservedLuminosity>,
    /// Observations against the first envelope, if both exist.
    pub residuals: Vec<Residual>,
    /// Names of entries that failed and were left out.
    pub skipped: Vec<String>,
}

/// Build the time grid (days since explosion).
pub fn build_time_grid(spec: &TimeGridSpec) -> Vec<f64> {
    match spec {
        TimeGridSpec::Range { range, points } => {
            Array1::linspace(range[0], range[1], *points).to_vec()
        }
        TimeGridSpec::List { values } => values.clone(),
    }
}

/// Select the evaluation backend from the user's preference string.
///
/// - `"serial"`: one thread.
/// - `"parallel"` (default): rayon over time samples, when compiled in.
pub fn select_backend(preference: &str) -> Backend {
    match preference {
        "serial" => Backend::Serial,
        "parallel" => parallel_backend(),
        other => {
            log::warn!("Unknown backend '{}', using serial", other);
            Backend::Serial
        }
    }
}

#[cfg(feature = "parallel")]
fn parallel_backend() -> Backend {
    log::info!("Parallel backend: {} rayon threads", rayon::current_num_threads());
    Backend::Parallel
}

#[cfg(not(feature = "parallel"))]
fn parallel_backend() -> Backend {
    log::warn!("Parallel backend requested but binary was built without --features parallel; using serial");
    Backend::Serial
}

fn assemble_with(
    backend: Backend,
    times: &[f64],
    scenarios: &[DecayScenario],
) -> Result<LightCurve, DecayError> {
    match backend {
        Backend::Serial => assemble(times, scenarios),
        #[cfg(feature = "parallel")]
        Backend::Parallel => latelight_core::assemble_par(times, scenarios),
        #[cfg(not(feature = "parallel"))]
        Backend::Parallel => assemble(times, scenarios),
    }
}

fn build_scenarios(configs: &[ScenarioConfig]) -> Result<Vec<DecayScenario>, DecayError> {
    configs
        .iter()
        .map(|c| DecayScenario::from_mass_number(c.isotope, c.mass))
        .collect()
}

fn resolve_curve(cfg: &CurveConfig) -> Result<Vec<DecayScenario>> {
    let mut scenarios = match &cfg.model {
        Some(model) => lookup(model)?.nominal()?,
        None => Vec::new(),
    };
    scenarios.extend(build_scenarios(&cfg.scenarios)?);
    Ok(scenarios)
}

fn resolve_envelope(cfg: &EnvelopeConfig) -> Result<EnvelopeScenarios> {
    match &cfg.model {
        Some(model) => {
            if !cfg.low.is_empty() || !cfg.high.is_empty() {
                anyhow::bail!("give either 'model' or 'low'/'high', not both");
            }
            Ok(lookup(model)?.envelope()?)
        }
        None => Ok(EnvelopeScenarios {
            low: build_scenarios(&cfg.low)?,
            high: build_scenarios(&cfg.high)?,
        }),
    }
}

fn convert_observations(cfg: &ObservationConfig) -> Result<Vec<ObservedLuminosity>> {
    if let Some(p) = cfg.points.iter().find(|p| !p.day.is_finite()) {
        anyhow::bail!("observation epoch must be finite, got {}", p.day);
    }
    let calibration = PhotometricCalibration::new(cfg.distance_mpc * MEGAPARSEC_CM, cfg.extinction)?;
    let points: Vec<ObservationPoint> = cfg.points.iter().copied().map(Into::into).collect();
    let mut observed = calibration.luminosities(&points)?;
    observed.sort_by(|a, b| a.time_days.total_cmp(&b.time_days));
    Ok(observed)
}

/// Run every curve, envelope and observation block of a job.
///
/// A bad time grid aborts the job. A bad curve or envelope entry is logged
/// and skipped; the rest of the job still runs.
pub fn run_job(job: &JobConfig) -> Result<RunOutput> {
    let times = build_time_grid(&job.time_grid);
    // An empty scenario set still validates the grid.
    assemble(&times, &[]).context("Invalid time grid")?;
    println!(
        "Time grid: {} samples over [{:.1}, {:.1}] d",
        times.len(),
        times[0],
        times[times.len() - 1]
    );

    let backend = select_backend(&job.simulation.backend);
    log::info!("Backend: {:?}", backend);

    let mut skipped = Vec::new();

    let mut curves = Vec::new();
    for cfg in &job.curves {
        let result = resolve_curve(cfg).and_then(|scenarios| {
            let total = assemble_with(backend, &times, &scenarios)?;
            let mut named = vec![NamedCurve {
                name: cfg.name.clone(),
                curve: total,
            }];
            if cfg.components {
                for scenario in &scenarios {
                    named.push(NamedCurve {
                        name: format!("{}:{}@{:.3e}", cfg.name, scenario.isotope(), scenario.initial_mass()),
                        curve: assemble_with(backend, &times, std::slice::from_ref(scenario))?,
                    });
                }
            }
            Ok(named)
        });
        match result {
            Ok(named) => {
                println!("  Curve '{}': {} scenario curve(s)", cfg.name, named.len());
                curves.extend(named);
            }
            Err(e) => {
                log::warn!("Skipping curve '{}': {:#}", cfg.name, e);
                skipped.push(cfg.name.clone());
            }
        }
    }

    let mut envelopes = Vec::new();
    for cfg in &job.envelopes {
        let result = resolve_envelope(cfg).and_then(|scenarios| {
            let low = assemble_with(backend, &times, &scenarios.low)?;
            let high = assemble_with(backend, &times, &scenarios.high)?;
            Ok(NamedEnvelope {
                name: cfg.name.clone(),
                envelope: Envelope::new(low, high)?,
                scenarios,
            })
        });
        match result {
            Ok(named) => {
                if !named.envelope.is_ordered() {
                    log::warn!("Envelope '{}': low curve exceeds high curve somewhere", cfg.name);
                }
                println!("  Envelope '{}'", cfg.name);
                envelopes.push(named);
            }
            Err(e) => {
                log::warn!("Skipping envelope '{}': {:#}", cfg.name, e);
                skipped.push(cfg.name.clone());
            }
        }
    }

    let observations = match &job.observations {
        Some(cfg) => match convert_observations(cfg) {
            Ok(obs) => obs,
            Err(e) => {
                log::warn!("Skipping observations: {:#}", e);
                skipped.push("observations".into());
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let residuals = match envelopes.first() {
        Some(env) if !observations.is_empty() => {
            match compare(&observations, &env.scenarios.low, &env.scenarios.high) {
                Ok(residuals) => residuals,
                Err(e) => {
                    log::warn!("Skipping residuals against '{}': {}", env.name, e);
                    skipped.push("residuals".into());
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };
    for r in &residuals {
        println!(
            "  t={:.1} d: L_obs={:.3e}, model=[{:.3e}, {:.3e}] erg/s{}",
            r.time_days,
            r.observed,
            r.model_low,
            r.model_high,
            if r.within_envelope() { "" } else { " (outside)" }
        );
    }

    Ok(RunOutput {
        times,
        curves,
        envelopes,
        observations,
        residuals,
        skipped,
    })
}

fn create_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::File::create(path).with_context(|| format!("Cannot create {}", path.display()))
}

/// Write summed curves to a CSV file, one column per curve.
pub fn write_curves_csv(output: &RunOutput, path: &Path, options: &OutputConfig) -> Result<()> {
    use std::io::Write;

    let mut file = create_file(path)?;
    writeln!(file, "# latelight: Radioactive Decay Light Curves")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(file, "# luminosity in erg/s, time in days since explosion")?;
    writeln!(file, "#")?;

    let mut header = vec!["time_days".to_string()];
    for c in &output.curves {
        header.push(c.name.clone());
        if options.log10 {
            header.push(format!("log10_{}", c.name));
        }
    }
    writeln!(file, "{}", header.join(","))?;

    for (i, t) in output.times.iter().enumerate() {
        let mut row = vec![format!("{:.4}", t)];
        for c in &output.curves {
            let l = c.curve.luminosity_at_index(i).unwrap_or(f64::NAN);
            row.push(format!("{:.6e}", l));
            if options.log10 {
                row.push(format!("{:.6}", l.log10()));
            }
        }
        writeln!(file, "{}", row.join(","))?;
    }

    println!("Curves written to: {}", path.display());
    Ok(())
}

/// Write envelopes to a CSV file, a low and a high column per envelope.
pub fn write_envelopes_csv(output: &RunOutput, path: &Path, options: &OutputConfig) -> Result<()> {
    use std::io::Write;

    let mut file = create_file(path)?;
    writeln!(file, "# latelight: Light-Curve Envelopes")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    for env in &output.envelopes {
        for (label, set) in [("low", &env.scenarios.low), ("high", &env.scenarios.high)] {
            let masses: Vec<String> = set
                .iter()
                .map(|s| format!("{}={:.4e}", s.isotope(), s.initial_mass()))
                .collect();
            writeln!(file, "# envelope '{}' {}: {}", env.name, label, masses.join(" "))?;
        }
    }
    writeln!(file, "#")?;

    let mut header = vec!["time_days".to_string()];
    for env in &output.envelopes {
        header.push(format!("{}_low", env.name));
        header.push(format!("{}_high", env.name));
        if options.log10 {
            header.push(format!("log10_{}_low", env.name));
            header.push(format!("log10_{}_high", env.name));
        }
    }
    writeln!(file, "{}", header.join(","))?;

    for (i, t) in output.times.iter().enumerate() {
        let mut row = vec![format!("{:.4}", t)];
        for env in &output.envelopes {
            let (lo, hi) = env.envelope.bounds_at(i).unwrap_or((f64::NAN, f64::NAN));
            row.push(format!("{:.6e}", lo));
            row.push(format!("{:.6e}", hi));
            if options.log10 {
                row.push(format!("{:.6}", lo.log10()));
                row.push(format!("{:.6}", hi.log10()));
            }
        }
        writeln!(file, "{}", row.join(","))?;
    }

    println!("Envelopes written to: {}", path.display());
    Ok(())
}

/// Write observed luminosities, with model bounds when available.
pub fn write_observations_csv(output: &RunOutput, path: &Path, options: &OutputConfig) -> Result<()> {
    use std::io::Write;

    let mut file = create_file(path)?;
    writeln!(file, "# latelight: Observed Luminosities")?;
    writeln!(file, "# Version: {}", env!("CARGO_PKG_VERSION"))?;
    if let Some(env) = output.envelopes.first() {
        writeln!(file, "# model bounds from envelope '{}'", env.name)?;
    }
    writeln!(file, "#")?;

    let has_model = !output.residuals.is_empty();
    let mut header = vec!["time_days", "luminosity_erg_s"];
    if options.log10 {
        header.push("log10_luminosity");
    }
    if has_model {
        header.extend(["model_low", "model_high", "within_envelope"]);
    }
    writeln!(file, "{}", header.join(","))?;

    for (i, obs) in output.observations.iter().enumerate() {
        let mut row = vec![format!("{:.2}", obs.time_days), format!("{:.6e}", obs.luminosity)];
        if options.log10 {
            row.push(format!("{:.6}", obs.luminosity.log10()));
        }
        if let Some(r) = output.residuals.get(i) {
            row.push(format!("{:.6e}", r.model_low));
            row.push(format!("{:.6e}", r.model_high));
            row.push(r.within_envelope().to_string());
        }
        writeln!(file, "{}", row.join(","))?;
    }

    println!("Observations written to: {}", path.display());
    Ok(())
}

#[derive(Serialize)]
struct CurveRecord<'a> {
    name: &'a str,
    luminosity_erg_s: Vec<f64>,
}

#[derive(Serialize)]
struct EnvelopeRecord<'a> {
    name: &'a str,
    scenarios: &'a EnvelopeScenarios,
    low_erg_s: Vec<f64>,
    high_erg_s: Vec<f64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    time_days: &'a [f64],
    curves: Vec<CurveRecord<'a>>,
    envelopes: Vec<EnvelopeRecord<'a>>,
    observations: &'a [ObservedLuminosity],
    residuals: &'a [Residual],
    skipped: &'a [String],
}

/// Write all results to a single JSON file.
pub fn write_json(output: &RunOutput, path: &Path) -> Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        time_days: &output.times,
        curves: output
            .curves
            .iter()
            .map(|c| CurveRecord {
                name: &c.name,
                luminosity_erg_s: c.curve.luminosity().to_vec(),
            })
            .collect(),
        envelopes: output
            .envelopes
            .iter()
            .map(|e| EnvelopeRecord {
                name: &e.name,
                scenarios: &e.scenarios,
                low_erg_s: e.envelope.low().luminosity().to_vec(),
                high_erg_s: e.envelope.high().luminosity().to_vec(),
            })
            .collect(),
        observations: &output.observations,
        residuals: &output.residuals,
        skipped: &output.skipped,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| anyhow::anyhow!("JSON serialisation error: {}", e))?;
    let mut file = create_file(path)?;
    std::io::Write::write_all(&mut file, json.as_bytes())?;

    println!("Results (JSON) written to: {}", path.display());
    Ok(())
}
