//! # rfcalc-engine
//!
//! Closed-form calculators for radio-frequency and data-communication
//! parameters.
//!
//! Every calculator is a pure function over primitive numeric inputs: no
//! state is kept between calls, nothing is logged and no I/O is performed, so
//! calls may run concurrently without coordination.
//!
//! ## Features
//!
//! - **Power Conversion**: dB ⇄ dBm ⇄ W ⇄ mW ([`PowerReading`])
//! - **AP Dimensioning**: coverage, capacity and density sizing ([`dimension`])
//! - **Traffic**: average bitrate and overhead-adjusted bandwidth ([`estimate_traffic`])
//! - **Throughput**: Shannon capacity and transfer time ([`estimate_throughput`])
//! - **Propagation**: Friis free-space loss and Fresnel radius ([`free_space_path_loss_db`])
//! - **Link Budget**: received power and signal rating ([`compose_link_budget`])
//!
//! ## Error discipline
//!
//! Calculators with explicit preconditions (power conversion, dimensioning,
//! throughput) return [`CalcError`]. Traffic, propagation and link budget
//! are total and let IEEE-754 NaN/infinity flow through to the caller.
//!
//! ## Example
//!
//! ```
//! use rfcalc_engine::{compose_link_budget, LinkParams, PowerReading, SignalQuality};
//!
//! let reading = PowerReading::from_db(40.0)?;
//! assert_eq!(reading.dbm, 70.0);
//!
//! let link = compose_link_budget(&LinkParams::default());
//! assert_eq!(link.quality, SignalQuality::Poor);
//! # Ok::<(), rfcalc_engine::CalcError>(())
//! ```
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on all
//! parameter and result records.

mod dimensioning;
mod error;
mod link_budget;
mod power;
mod propagation;
mod throughput;
mod traffic;

pub use dimensioning::{
    dimension, recommended_aps, ApCount, CapacityParams, CoverageParams, DensityParams,
    DimensioningParams, DimensioningReport, DENSITY_REFERENCE_AREA_M2,
};
pub use error::CalcError;
pub use link_budget::{
    compose_link_budget, rx_power_dbm, LinkParams, LinkResult, SignalQuality,
    EXCELLENT_RX_DBM, FAIR_RX_DBM, GOOD_RX_DBM,
};
pub use power::{PowerReading, DBM_OFFSET_DB};
pub use propagation::{
    free_space_path_loss_db, fresnel_radius_m, path_loss_sweep, wavelength_m, PathLossSample,
    PathLossSweep, FRIIS_FOLDED_CONSTANT, SPEED_OF_LIGHT_M_S,
};
pub use throughput::{
    capacity_sweep, estimate_throughput, shannon_capacity_mbps, CapacitySample, CapacitySweep,
    ShannonParams, ThroughputResult, TransmissionTime, PRACTICAL_EFFICIENCY,
};
pub use traffic::{
    bitrate_bps, estimate_traffic, TrafficEstimate, TrafficParams, BANDWIDTH_OVERHEAD_FACTOR,
};

/// Result type for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
