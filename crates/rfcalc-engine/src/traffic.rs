//! Traffic and bandwidth estimation.

/// Multiplier applied to raw bitrate for protocol and retransmission overhead.
pub const BANDWIDTH_OVERHEAD_FACTOR: f64 = 1.3;

/// Inputs for a traffic estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TrafficParams {
    /// Devices transferring simultaneously.
    pub active_devices: u64,
    /// Bytes each device transfers during the window.
    pub bytes_per_device: f64,
    /// Observation window (seconds).
    pub window_seconds: f64,
}

impl Default for TrafficParams {
    fn default() -> Self {
        Self {
            active_devices: 80,
            bytes_per_device: 102_400.0,
            window_seconds: 3600.0,
        }
    }
}

/// Average bitrate and the bandwidth to provision for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficEstimate {
    /// Average aggregate bitrate (bits/s).
    pub bitrate_bps: f64,
    /// Bitrate including overhead (bits/s).
    pub bandwidth_bps: f64,
}

impl TrafficEstimate {
    /// Bitrate in Mbps.
    pub fn bitrate_mbps(&self) -> f64 {
        self.bitrate_bps / 1e6
    }

    /// Bandwidth in Mbps.
    pub fn bandwidth_mbps(&self) -> f64 {
        self.bandwidth_bps / 1e6
    }
}

/// Aggregate bitrate in bits per second.
///
/// A window of zero or less yields 0 rather than an error.
pub fn bitrate_bps(params: &TrafficParams) -> f64 {
    if params.window_seconds <= 0.0 {
        return 0.0;
    }
    let total_bits = params.active_devices as f64 * params.bytes_per_device * 8.0;
    total_bits / params.window_seconds
}

/// Estimate bitrate and overhead-adjusted bandwidth.
///
/// This never fails. NaN inputs (other than the window guard) propagate.
pub fn estimate_traffic(params: &TrafficParams) -> TrafficEstimate {
    let bitrate_bps = bitrate_bps(params);
    TrafficEstimate {
        bitrate_bps,
        bandwidth_bps: bitrate_bps * BANDWIDTH_OVERHEAD_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_scenario() {
        let estimate = estimate_traffic(&TrafficParams::default());
        assert_relative_eq!(estimate.bitrate_bps, 18_204.444444444445, max_relative = 1e-12);
        assert_relative_eq!(estimate.bandwidth_bps, 23_665.777777777777, max_relative = 1e-12);
        assert!((estimate.bitrate_mbps() - 0.018).abs() < 0.001);
        assert!((estimate.bandwidth_mbps() - 0.0237).abs() < 0.0001);
    }

    #[test]
    fn test_zero_window_is_zero() {
        let params = TrafficParams {
            window_seconds: 0.0,
            ..Default::default()
        };
        let estimate = estimate_traffic(&params);
        assert_eq!(estimate.bitrate_bps, 0.0);
        assert_eq!(estimate.bandwidth_bps, 0.0);

        let negative = TrafficParams {
            window_seconds: -5.0,
            ..Default::default()
        };
        assert_eq!(bitrate_bps(&negative), 0.0);
    }

    #[test]
    fn test_no_devices() {
        let params = TrafficParams {
            active_devices: 0,
            ..Default::default()
        };
        assert_eq!(estimate_traffic(&params).bitrate_bps, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let params = TrafficParams {
            bytes_per_device: f64::NAN,
            ..Default::default()
        };
        assert!(estimate_traffic(&params).bandwidth_bps.is_nan());
    }
}
