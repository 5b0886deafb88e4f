//! Scenario files and batch evaluation.
//!
//! A scenario file is YAML with a list of named calculations. Each entry
//! picks a calculator with the `calculator` key and lists only the inputs it
//! changes; everything else takes the calculator's preset value.
//!
//! ```yaml
//! scenarios:
//!   - name: ap-rating
//!     calculator: power
//!     dbm: 20
//!   - name: office
//!     calculator: dimensioning
//!     coverage: { area_size_m2: 2400, ap_radius_m: 18 }
//!     capacity: { total_users: 140, users_per_ap: 25 }
//!   - name: backhaul
//!     calculator: link
//!     distance_m: 180
//!     frequency_ghz: 5.8
//! ```

use rayon::prelude::*;
use rfcalc_engine::{
    capacity_sweep, compose_link_budget, dimension, estimate_throughput, estimate_traffic,
    path_loss_sweep, CalcError, CapacitySample, DimensioningParams, DimensioningReport,
    LinkParams, LinkResult, PathLossSample, PowerReading, ShannonParams, ThroughputResult,
    TrafficEstimate, TrafficParams, TransmissionTime,
};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading or evaluating scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    CalcError(#[from] CalcError),

    #[error("Power scenario must set exactly one of db, dbm or watts (got {0})")]
    AmbiguousPowerInput(usize),

    #[error("Scenario file contains no scenarios")]
    NoScenarios,
}

impl ScenarioError {
    /// Calculator input that caused the error, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ScenarioError::CalcError(e) => Some(e.field()),
            _ => None,
        }
    }
}

// ============================================================================
// Scenario Schema
// ============================================================================

/// Root structure of a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub scenarios: Vec<Scenario>,
}

/// A named calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Name used in reports.
    pub name: String,
    /// Calculator and its inputs.
    #[serde(flatten)]
    pub calculation: Calculation,
}

/// Calculator selection with its inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Calculation {
    Power(PowerInput),
    Dimensioning(DimensioningParams),
    Traffic(TrafficParams),
    Throughput(ShannonParams),
    Link(LinkParams),
}

/// The single known quantity of a power conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PowerInput {
    pub db: Option<f64>,
    pub dbm: Option<f64>,
    pub watts: Option<f64>,
}

impl PowerInput {
    /// Convert the one quantity that is set.
    pub fn convert(&self) -> Result<PowerReading, ScenarioError> {
        match (self.db, self.dbm, self.watts) {
            (Some(db), None, None) => Ok(PowerReading::from_db(db)?),
            (None, Some(dbm), None) => Ok(PowerReading::from_dbm(dbm)?),
            (None, None, Some(watts)) => Ok(PowerReading::from_watts(watts)?),
            _ => {
                let set = [self.db, self.dbm, self.watts]
                    .iter()
                    .filter(|v| v.is_some())
                    .count();
                Err(ScenarioError::AmbiguousPowerInput(set))
            }
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Output of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Outcome {
    Power(PowerReading),
    Dimensioning(DimensioningReport),
    Traffic(TrafficEstimate),
    Throughput {
        result: ThroughputResult,
        transmission_time: TransmissionTime,
        sweep: Vec<CapacitySample>,
    },
    Link {
        result: LinkResult,
        sweep: Vec<PathLossSample>,
    },
}

/// Evaluate one calculation.
pub fn evaluate(calculation: &Calculation) -> Result<Outcome, ScenarioError> {
    let outcome = match calculation {
        Calculation::Power(input) => Outcome::Power(input.convert()?),
        Calculation::Dimensioning(params) => Outcome::Dimensioning(dimension(params)?),
        Calculation::Traffic(params) => Outcome::Traffic(estimate_traffic(params)),
        Calculation::Throughput(params) => {
            let result = estimate_throughput(params)?;
            Outcome::Throughput {
                result,
                transmission_time: result.transmission_time(),
                sweep: capacity_sweep(params.bandwidth_mhz).collect(),
            }
        }
        Calculation::Link(params) => Outcome::Link {
            result: compose_link_budget(params),
            sweep: path_loss_sweep(params.frequency_ghz).collect(),
        },
    };
    Ok(outcome)
}

/// Result of evaluating a named scenario.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    #[serde(flatten, serialize_with = "serialize_result")]
    pub result: Result<Outcome, ScenarioError>,
}

impl ScenarioReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

fn serialize_result<S: Serializer>(
    result: &Result<Outcome, ScenarioError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match result {
        Ok(outcome) => outcome.serialize(serializer),
        Err(e) => {
            let mut map = serializer.serialize_map(None)?;
            map.serialize_entry("error", &e.to_string())?;
            if let Some(field) = e.field() {
                map.serialize_entry("field", field)?;
            }
            map.end()
        }
    }
}

fn run_one(scenario: &Scenario) -> ScenarioReport {
    let result = evaluate(&scenario.calculation);
    match &result {
        Ok(_) => debug!("Scenario[{}]: evaluated", scenario.name),
        Err(e) => warn!("Scenario[{}]: {}", scenario.name, e),
    }
    ScenarioReport {
        name: scenario.name.clone(),
        result,
    }
}

// ============================================================================
// Loading and Batch Evaluation
// ============================================================================

/// Parse a scenario file from YAML text.
pub fn parse_scenarios(yaml: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let file: ScenarioFile = serde_yaml::from_str(yaml)?;
    if file.scenarios.is_empty() {
        return Err(ScenarioError::NoScenarios);
    }
    Ok(file.scenarios)
}

/// Load a scenario file from disk.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let path = path.as_ref();
    let yaml = std::fs::read_to_string(path)?;
    let scenarios = parse_scenarios(&yaml)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Evaluate scenarios in parallel, returning reports in input order.
///
/// A failing scenario is reported and does not affect the others.
pub fn run_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    debug!(
        "Evaluating {} scenarios using {} threads",
        scenarios.len(),
        rayon::current_num_threads()
    );
    let reports: Vec<ScenarioReport> = scenarios.par_iter().map(run_one).collect();
    log_summary(&reports);
    reports
}

/// Evaluate scenarios one after another on the calling thread.
pub fn run_scenarios_sequential(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    let reports: Vec<ScenarioReport> = scenarios.iter().map(run_one).collect();
    log_summary(&reports);
    reports
}

fn log_summary(reports: &[ScenarioReport]) {
    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    info!(
        "Evaluated {} scenarios ({} ok, {} failed)",
        reports.len(),
        reports.len() - failed,
        failed
    );
}
