//! # rfcalc-runner
//!
//! Command-line front end for the RF calculators in `rfcalc-engine`.
//!
//! The runner turns command-line arguments or YAML scenario files into
//! calculator inputs, evaluates them (batches in parallel) and renders the
//! results as text or JSON. All validation errors come from the engine and
//! are reported per scenario.

pub mod logging;
mod report;
mod scenario;

pub use report::{render_outcome, render_report};
pub use scenario::{
    evaluate, load_scenarios, parse_scenarios, run_scenarios, run_scenarios_sequential,
    Calculation, Outcome, PowerInput, Scenario, ScenarioError, ScenarioFile, ScenarioReport,
};
