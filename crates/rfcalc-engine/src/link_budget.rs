//! Point-to-point link budget.
//!
//! The same antenna gain is applied at both ends of the link:
//!
//! ```text
//! RX(dBm) = TX(dBm) + 2·G(dB) − FSPL(dB) − cable(dB)
//! ```

use crate::propagation::{free_space_path_loss_db, fresnel_radius_m};
use std::fmt;

/// RX power above which a link is rated excellent (dBm).
pub const EXCELLENT_RX_DBM: f64 = -80.0;
/// RX power above which a link is rated good (dBm).
pub const GOOD_RX_DBM: f64 = -90.0;
/// RX power above which a link is rated fair (dBm).
pub const FAIR_RX_DBM: f64 = -100.0;

/// Qualitative rating of received power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalQuality {
    /// Above -80 dBm.
    Excellent,
    /// Above -90 dBm.
    Good,
    /// Above -100 dBm.
    Fair,
    /// -100 dBm or below.
    Poor,
}

impl SignalQuality {
    /// Rate a received power. Thresholds are strict, so exactly -80 dBm is
    /// `Good`. NaN fails every comparison and rates `Poor`.
    pub fn classify(rx_power_dbm: f64) -> Self {
        if rx_power_dbm > EXCELLENT_RX_DBM {
            SignalQuality::Excellent
        } else if rx_power_dbm > GOOD_RX_DBM {
            SignalQuality::Good
        } else if rx_power_dbm > FAIR_RX_DBM {
            SignalQuality::Fair
        } else {
            SignalQuality::Poor
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SignalQuality::Excellent => "Excellent",
            SignalQuality::Good => "Good",
            SignalQuality::Fair => "Fair",
            SignalQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inputs for a link budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LinkParams {
    /// Distance between antennas (m).
    pub distance_m: f64,
    /// Carrier frequency (GHz).
    pub frequency_ghz: f64,
    /// Transmit power (dBm).
    pub tx_power_dbm: f64,
    /// Gain of each antenna (dB).
    pub antenna_gain_db: f64,
    /// Total cable attenuation (dB).
    pub cable_attenuation_db: f64,
}

impl Default for LinkParams {
    fn default() -> Self {
        Self {
            distance_m: 50.0,
            frequency_ghz: 2.4,
            tx_power_dbm: 20.0,
            antenna_gain_db: 5.0,
            cable_attenuation_db: 2.0,
        }
    }
}

/// Result of a link budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkResult {
    /// Free-space path loss (dB).
    pub path_loss_db: f64,
    /// First Fresnel zone radius at midpoint (m).
    pub fresnel_radius_m: f64,
    /// Received power (dBm).
    pub rx_power_dbm: f64,
    /// Rating of the received power.
    pub quality: SignalQuality,
}

/// Received power from the individual budget terms.
pub fn rx_power_dbm(
    tx_power_dbm: f64,
    antenna_gain_db: f64,
    path_loss_db: f64,
    cable_attenuation_db: f64,
) -> f64 {
    tx_power_dbm + 2.0 * antenna_gain_db - path_loss_db - cable_attenuation_db
}

/// Compose a full link budget.
///
/// Never fails; invalid distance or frequency surface as NaN or infinite
/// fields in the result.
pub fn compose_link_budget(params: &LinkParams) -> LinkResult {
    let path_loss_db = free_space_path_loss_db(params.distance_m, params.frequency_ghz);
    let rx_power_dbm = rx_power_dbm(
        params.tx_power_dbm,
        params.antenna_gain_db,
        path_loss_db,
        params.cable_attenuation_db,
    );

    LinkResult {
        path_loss_db,
        fresnel_radius_m: fresnel_radius_m(params.distance_m, params.frequency_ghz),
        rx_power_dbm,
        quality: SignalQuality::classify(rx_power_dbm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(SignalQuality::classify(-50.0), SignalQuality::Excellent);
        assert_eq!(SignalQuality::classify(-79.99), SignalQuality::Excellent);
        assert_eq!(SignalQuality::classify(-80.0), SignalQuality::Good);
        assert_eq!(SignalQuality::classify(-89.99), SignalQuality::Good);
        assert_eq!(SignalQuality::classify(-90.0), SignalQuality::Fair);
        assert_eq!(SignalQuality::classify(-100.0), SignalQuality::Poor);
        assert_eq!(SignalQuality::classify(-140.0), SignalQuality::Poor);
        assert_eq!(SignalQuality::classify(f64::NAN), SignalQuality::Poor);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SignalQuality::Excellent.to_string(), "Excellent");
        assert_eq!(SignalQuality::Good.to_string(), "Good");
        assert_eq!(SignalQuality::Fair.to_string(), "Fair");
        assert_eq!(SignalQuality::Poor.to_string(), "Poor");
    }

    #[test]
    fn test_rx_power_counts_gain_twice() {
        assert_eq!(rx_power_dbm(20.0, 5.0, 100.0, 2.0), -72.0);
        assert_eq!(rx_power_dbm(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_default_link() {
        let result = compose_link_budget(&LinkParams::default());
        assert_relative_eq!(result.path_loss_db, 217.54722228811482, max_relative = 1e-12);
        assert_relative_eq!(result.rx_power_dbm, -189.54722228811482, max_relative = 1e-12);
        assert_relative_eq!(result.fresnel_radius_m, 0.8835776853461538, max_relative = 1e-9);
        assert_eq!(result.quality, SignalQuality::Poor);
    }

    #[test]
    fn test_invalid_distance_propagates() {
        let params = LinkParams {
            distance_m: -10.0,
            ..Default::default()
        };
        let result = compose_link_budget(&params);
        assert!(result.path_loss_db.is_nan());
        assert!(result.rx_power_dbm.is_nan());
        assert!(result.fresnel_radius_m.is_nan());
        assert_eq!(result.quality, SignalQuality::Poor);
    }

    #[test]
    fn test_idempotent() {
        let params = LinkParams {
            distance_m: 123.4,
            frequency_ghz: 5.8,
            tx_power_dbm: 27.0,
            antenna_gain_db: 11.0,
            cable_attenuation_db: 1.5,
        };
        let a = compose_link_budget(&params);
        let b = compose_link_budget(&params);
        assert_eq!(a.path_loss_db.to_bits(), b.path_loss_db.to_bits());
        assert_eq!(a.rx_power_dbm.to_bits(), b.rx_power_dbm.to_bits());
        assert_eq!(a.fresnel_radius_m.to_bits(), b.fresnel_radius_m.to_bits());
    }
}
