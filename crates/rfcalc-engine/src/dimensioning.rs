//! Access point dimensioning.
//!
//! Three independent sizing strategies each produce an AP count by ceiling
//! division:
//!
//! - **Coverage**: floor area divided by the area of one AP cell (`π·r²`).
//! - **Capacity**: total users divided by users one AP can serve.
//! - **Density**: a regulatory or design density expressed in APs per
//!   10 000 m², applied to a zone.
//!
//! The recommendation is the maximum of the three. Under-provisioning any one
//! dimension is not acceptable, so the counts are never averaged.

use crate::error::{require_positive, CalcError};
use std::f64::consts::PI;

/// Number of access points.
pub type ApCount = u64;

/// Reference area for density-based sizing (m²).
pub const DENSITY_REFERENCE_AREA_M2: f64 = 10_000.0;

/// Inputs for coverage-based sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CoverageParams {
    /// Floor area to cover (m²).
    pub area_size_m2: f64,
    /// Effective coverage radius of one AP (m).
    pub ap_radius_m: f64,
}

impl Default for CoverageParams {
    fn default() -> Self {
        Self {
            area_size_m2: 1000.0,
            ap_radius_m: 30.0,
        }
    }
}

impl CoverageParams {
    /// Area served by one AP (`π·r²`, m²). NaN propagates.
    pub fn area_per_ap_m2(&self) -> f64 {
        PI * self.ap_radius_m.powi(2)
    }

    /// Number of APs needed to cover the area.
    ///
    /// # Errors
    ///
    /// Both inputs must be positive numbers.
    pub fn ap_count(&self) -> Result<ApCount, CalcError> {
        let area = require_positive("area_size_m2", self.area_size_m2)?;
        require_positive("ap_radius_m", self.ap_radius_m)?;
        Ok((area / self.area_per_ap_m2()).ceil() as ApCount)
    }
}

/// Inputs for user-capacity sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CapacityParams {
    /// Total number of users to serve.
    pub total_users: u64,
    /// Users one AP can serve.
    pub users_per_ap: u64,
}

impl Default for CapacityParams {
    fn default() -> Self {
        Self {
            total_users: 100,
            users_per_ap: 20,
        }
    }
}

impl CapacityParams {
    /// Number of APs needed to serve every user.
    ///
    /// # Errors
    ///
    /// `users_per_ap` must be non-zero. Zero users needs zero APs.
    pub fn ap_count(&self) -> Result<ApCount, CalcError> {
        if self.users_per_ap == 0 {
            return Err(CalcError::NonPositive {
                field: "users_per_ap",
                value: 0.0,
            });
        }
        Ok(self.total_users.div_ceil(self.users_per_ap))
    }

    /// Users served by `aps` access points at full load.
    pub fn total_capacity(&self, aps: ApCount) -> u64 {
        aps.saturating_mul(self.users_per_ap)
    }
}

/// Inputs for density-based sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DensityParams {
    /// Zone area (m²).
    pub zone_area_m2: f64,
    /// Required APs per 10 000 m².
    pub aps_per_10k_m2: f64,
}

impl Default for DensityParams {
    fn default() -> Self {
        Self {
            zone_area_m2: 1000.0,
            aps_per_10k_m2: 1.0,
        }
    }
}

impl DensityParams {
    /// Number of APs the density target requires in the zone.
    ///
    /// # Errors
    ///
    /// Both inputs must be positive numbers.
    pub fn ap_count(&self) -> Result<ApCount, CalcError> {
        let zone = require_positive("zone_area_m2", self.zone_area_m2)?;
        let density = require_positive("aps_per_10k_m2", self.aps_per_10k_m2)?;
        Ok(((zone / DENSITY_REFERENCE_AREA_M2) * density).ceil() as ApCount)
    }
}

/// Conservative union of the three sizing strategies.
pub fn recommended_aps(coverage: ApCount, capacity: ApCount, density: ApCount) -> ApCount {
    coverage.max(capacity).max(density)
}

/// Inputs for a full dimensioning run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DimensioningParams {
    /// Coverage inputs.
    pub coverage: CoverageParams,
    /// Capacity inputs.
    pub capacity: CapacityParams,
    /// Density inputs.
    pub density: DensityParams,
}

/// Result of a full dimensioning run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensioningReport {
    /// Area served by one AP (m²).
    pub area_per_ap_m2: f64,
    /// APs required for coverage.
    pub aps_coverage: ApCount,
    /// APs required for user capacity.
    pub aps_capacity: ApCount,
    /// APs required by density.
    pub aps_density: ApCount,
    /// Maximum of the three counts.
    pub recommended_aps: ApCount,
    /// Users served by the capacity-sized deployment.
    pub total_user_capacity: u64,
}

/// Run all three sizing strategies and combine them.
///
/// # Errors
///
/// Fails on the first strategy whose inputs are invalid.
pub fn dimension(params: &DimensioningParams) -> Result<DimensioningReport, CalcError> {
    let aps_coverage = params.coverage.ap_count()?;
    let aps_capacity = params.capacity.ap_count()?;
    let aps_density = params.density.ap_count()?;

    Ok(DimensioningReport {
        area_per_ap_m2: params.coverage.area_per_ap_m2(),
        aps_coverage,
        aps_capacity,
        aps_density,
        recommended_aps: recommended_aps(aps_coverage, aps_capacity, aps_density),
        total_user_capacity: params.capacity.total_capacity(aps_capacity),
    })
}
