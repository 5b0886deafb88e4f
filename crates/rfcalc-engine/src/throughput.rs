//! Shannon channel capacity and transmission time.
//!
//! Capacity follows `C = B·log2(1 + SNR)` with the bandwidth given in MHz,
//! which puts the result directly in Mbps. A fixed efficiency factor turns
//! the theoretical capacity into a practical speed used for transfer times.

use crate::error::{require_number, require_positive, CalcError};
use std::fmt;

/// Fraction of Shannon capacity achieved in practice.
pub const PRACTICAL_EFFICIENCY: f64 = 0.9;

/// Bits in one (binary) megabyte.
const BITS_PER_MB: f64 = 8.0 * 1024.0 * 1024.0;

/// First SNR of the capacity sweep (dB).
pub const SWEEP_SNR_START_DB: u32 = 5;
/// Last SNR of the capacity sweep (dB).
pub const SWEEP_SNR_END_DB: u32 = 30;
/// SNR increment of the capacity sweep (dB).
pub const SWEEP_SNR_STEP_DB: u32 = 5;

/// Inputs for a throughput estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ShannonParams {
    /// Channel bandwidth (MHz).
    pub bandwidth_mhz: f64,
    /// Signal-to-noise ratio (dB).
    pub snr_db: f64,
    /// Size of the file to transfer (MB, 1 MB = 1024² bytes).
    pub file_size_mb: f64,
}

impl Default for ShannonParams {
    fn default() -> Self {
        Self {
            bandwidth_mhz: 20.0,
            snr_db: 20.0,
            file_size_mb: 10.0,
        }
    }
}

/// Capacity, practical speed and transfer time for a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThroughputResult {
    /// Theoretical maximum data rate (Mbps).
    pub shannon_capacity_mbps: f64,
    /// Capacity scaled by [`PRACTICAL_EFFICIENCY`] (Mbps).
    pub practical_speed_mbps: f64,
    /// Time to transfer the file at the practical speed (seconds).
    pub transmission_time_s: f64,
}

impl ThroughputResult {
    /// Transmission time in the unit the calculator presents it in.
    pub fn transmission_time(&self) -> TransmissionTime {
        TransmissionTime::from_seconds(self.transmission_time_s)
    }
}

/// A duration expressed in seconds, minutes or hours depending on magnitude.
///
/// Under 60 s it stays in seconds, under 3600 s it becomes minutes and
/// anything longer is hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "unit", content = "value", rename_all = "lowercase"))]
pub enum TransmissionTime {
    /// Under one minute.
    Seconds(f64),
    /// Under one hour.
    Minutes(f64),
    /// One hour or more.
    Hours(f64),
}

impl TransmissionTime {
    /// Pick the unit for a duration in seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 60.0 {
            TransmissionTime::Seconds(seconds)
        } else if seconds < 3600.0 {
            TransmissionTime::Minutes(seconds / 60.0)
        } else {
            TransmissionTime::Hours(seconds / 3600.0)
        }
    }
}

impl fmt::Display for TransmissionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransmissionTime::Seconds(v) => write!(f, "{:.2} seconds", v),
            TransmissionTime::Minutes(v) => write!(f, "{:.2} minutes", v),
            TransmissionTime::Hours(v) => write!(f, "{:.2} hours", v),
        }
    }
}

/// Shannon capacity in Mbps for a bandwidth in MHz and an SNR in dB.
///
/// No validation; NaN propagates.
pub fn shannon_capacity_mbps(bandwidth_mhz: f64, snr_db: f64) -> f64 {
    let snr_linear = 10f64.powf(snr_db / 10.0);
    bandwidth_mhz * (1.0 + snr_linear).log2()
}

/// Estimate capacity, practical speed and transfer time.
///
/// # Errors
///
/// Bandwidth and file size must be positive; the SNR must be a number.
pub fn estimate_throughput(params: &ShannonParams) -> Result<ThroughputResult, CalcError> {
    let bandwidth_mhz = require_positive("bandwidth_mhz", params.bandwidth_mhz)?;
    let snr_db = require_number("snr_db", params.snr_db)?;
    let file_size_mb = require_positive("file_size_mb", params.file_size_mb)?;

    let shannon_capacity_mbps = shannon_capacity_mbps(bandwidth_mhz, snr_db);
    let practical_speed_mbps = shannon_capacity_mbps * PRACTICAL_EFFICIENCY;
    let transmission_time_s = (file_size_mb * BITS_PER_MB) / (practical_speed_mbps * 1e6);

    Ok(ThroughputResult {
        shannon_capacity_mbps,
        practical_speed_mbps,
        transmission_time_s,
    })
}

/// One point of a capacity-vs-SNR sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapacitySample {
    /// SNR (dB).
    pub snr_db: f64,
    /// Shannon capacity at this SNR (Mbps).
    pub shannon_capacity_mbps: f64,
    /// Practical speed at this SNR (Mbps).
    pub practical_speed_mbps: f64,
}

/// Finite iterator of capacity samples at SNR 5, 10, ..., 30 dB.
///
/// Clone it, or call [`capacity_sweep`] again, to restart.
#[derive(Debug, Clone)]
pub struct CapacitySweep {
    bandwidth_mhz: f64,
    next_snr_db: u32,
}

/// Sweep capacity over SNR for a fixed bandwidth.
pub fn capacity_sweep(bandwidth_mhz: f64) -> CapacitySweep {
    CapacitySweep {
        bandwidth_mhz,
        next_snr_db: SWEEP_SNR_START_DB,
    }
}

impl Iterator for CapacitySweep {
    type Item = CapacitySample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_snr_db > SWEEP_SNR_END_DB {
            return None;
        }
        let snr_db = self.next_snr_db as f64;
        self.next_snr_db += SWEEP_SNR_STEP_DB;

        let shannon_capacity_mbps = shannon_capacity_mbps(self.bandwidth_mhz, snr_db);
        Some(CapacitySample {
            snr_db,
            shannon_capacity_mbps,
            practical_speed_mbps: shannon_capacity_mbps * PRACTICAL_EFFICIENCY,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_snr_db > SWEEP_SNR_END_DB {
            0
        } else {
            ((SWEEP_SNR_END_DB - self.next_snr_db) / SWEEP_SNR_STEP_DB + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapacitySweep {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        let result = estimate_throughput(&ShannonParams::default()).unwrap();
        assert_relative_eq!(result.shannon_capacity_mbps, 133.16422965503588, max_relative = 1e-9);
        assert_relative_eq!(result.practical_speed_mbps, 119.84780668953229, max_relative = 1e-9);
        assert_relative_eq!(result.transmission_time_s, 0.6999383828300526, max_relative = 1e-9);
        assert!(matches!(result.transmission_time(), TransmissionTime::Seconds(_)));
    }

    #[test]
    fn test_capacity_increases_with_bandwidth() {
        let mut previous = 0.0;
        for bw in [1.0, 5.0, 10.0, 20.0, 40.0, 80.0, 160.0] {
            let capacity = shannon_capacity_mbps(bw, 15.0);
            assert!(capacity > previous);
            previous = capacity;
        }
    }

    #[test]
    fn test_capacity_increases_with_snr() {
        let mut previous = 0.0;
        for snr in (-20..=50).map(|s| s as f64) {
            let capacity = shannon_capacity_mbps(20.0, snr);
            assert!(capacity > previous, "snr {} not increasing", snr);
            previous = capacity;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let zero_bw = ShannonParams {
            bandwidth_mhz: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            estimate_throughput(&zero_bw),
            Err(CalcError::NonPositive { field: "bandwidth_mhz", .. })
        ));

        let nan_snr = ShannonParams {
            snr_db: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            estimate_throughput(&nan_snr),
            Err(CalcError::NotANumber { field: "snr_db" })
        );

        let empty_file = ShannonParams {
            file_size_mb: -1.0,
            ..Default::default()
        };
        assert!(estimate_throughput(&empty_file).is_err());
    }

    #[test]
    fn test_transmission_time_breakpoints() {
        assert_eq!(TransmissionTime::from_seconds(59.99), TransmissionTime::Seconds(59.99));
        assert_eq!(TransmissionTime::from_seconds(60.0), TransmissionTime::Minutes(1.0));
        assert!(matches!(
            TransmissionTime::from_seconds(3599.9),
            TransmissionTime::Minutes(m) if m < 60.0
        ));
        assert_eq!(TransmissionTime::from_seconds(3600.0), TransmissionTime::Hours(1.0));
        assert_eq!(TransmissionTime::from_seconds(9000.0), TransmissionTime::Hours(2.5));
    }

    #[test]
    fn test_transmission_time_display() {
        assert_eq!(TransmissionTime::Seconds(0.6999).to_string(), "0.70 seconds");
        assert_eq!(TransmissionTime::Minutes(2.5).to_string(), "2.50 minutes");
        assert_eq!(TransmissionTime::Hours(1.0).to_string(), "1.00 hours");
    }

    #[test]
    fn test_large_file_reports_hours() {
        let params = ShannonParams {
            bandwidth_mhz: 1.0,
            snr_db: 0.0,
            file_size_mb: 1000.0,
        };
        let result = estimate_throughput(&params).unwrap();
        // 1 MHz at 0 dB: capacity 1 Mbps, practical 0.9 Mbps
        assert_relative_eq!(result.shannon_capacity_mbps, 1.0, max_relative = 1e-12);
        assert!(matches!(result.transmission_time(), TransmissionTime::Hours(_)));
    }

    #[test]
    fn test_capacity_sweep() {
        let samples: Vec<_> = capacity_sweep(20.0).collect();
        let snrs: Vec<f64> = samples.iter().map(|s| s.snr_db).collect();
        assert_eq!(snrs, vec![5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);

        assert_relative_eq!(samples[0].shannon_capacity_mbps, 41.1474641721359, max_relative = 1e-9);
        assert_relative_eq!(samples[3].shannon_capacity_mbps, 133.16422965503588, max_relative = 1e-9);
        assert_relative_eq!(samples[5].shannon_capacity_mbps, 199.34452517671986, max_relative = 1e-9);
        for sample in &samples {
            assert_relative_eq!(
                sample.practical_speed_mbps,
                sample.shannon_capacity_mbps * PRACTICAL_EFFICIENCY
            );
        }
    }

    #[test]
    fn test_capacity_sweep_restartable() {
        let sweep = capacity_sweep(40.0);
        assert_eq!(sweep.len(), 6);
        let first: Vec<_> = sweep.clone().collect();
        let second: Vec<_> = sweep.collect();
        assert_eq!(first, second);

        let mut partial = capacity_sweep(40.0);
        partial.next();
        partial.next();
        assert_eq!(partial.len(), 4);
    }
}
