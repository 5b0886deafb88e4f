//! Free-space path loss and first Fresnel zone radius.
//!
//! Path loss uses the Friis free-space formula folded for frequency in GHz
//! and distance in meters:
//!
//! ```text
//! FSPL(dB) = 20·log10(d_m) + 20·log10(f_GHz) + 20·log10(π·2e8)
//! ```
//!
//! The `π·2e8` term is kept exactly as the reference calculator defines it so
//! results match its published figures.
//!
//! Neither function validates its inputs. Non-positive distance or frequency
//! produce the IEEE-754 result of the underlying `log10`/`sqrt` (`-inf` or
//! NaN), which the caller is expected to detect.

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Argument of the constant term of the folded Friis formula.
pub const FRIIS_FOLDED_CONSTANT: f64 = std::f64::consts::PI * 2e8;

/// Distance step of the path loss sweep (m).
pub const SWEEP_DISTANCE_STEP_M: f64 = 10.0;
/// Number of points in the path loss sweep.
pub const SWEEP_POINTS: usize = 20;

/// Free-space path loss in dB.
pub fn free_space_path_loss_db(distance_m: f64, frequency_ghz: f64) -> f64 {
    20.0 * distance_m.log10() + 20.0 * frequency_ghz.log10() + 20.0 * FRIIS_FOLDED_CONSTANT.log10()
}

/// Wavelength in meters for a frequency in GHz.
pub fn wavelength_m(frequency_ghz: f64) -> f64 {
    SPEED_OF_LIGHT_M_S / (frequency_ghz * 1e9)
}

/// First Fresnel zone radius at the path midpoint, in meters.
pub fn fresnel_radius_m(distance_m: f64, frequency_ghz: f64) -> f64 {
    0.5 * (distance_m * wavelength_m(frequency_ghz) / 2.0).sqrt()
}

/// One point of a path-loss-vs-distance sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLossSample {
    /// Distance (m).
    pub distance_m: f64,
    /// Free-space path loss at this distance (dB).
    pub path_loss_db: f64,
}

/// Finite iterator of path loss at 10, 20, ..., 200 m.
#[derive(Debug, Clone)]
pub struct PathLossSweep {
    frequency_ghz: f64,
    index: usize,
}

/// Sweep path loss over distance for a fixed frequency.
pub fn path_loss_sweep(frequency_ghz: f64) -> PathLossSweep {
    PathLossSweep {
        frequency_ghz,
        index: 0,
    }
}

impl Iterator for PathLossSweep {
    type Item = PathLossSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= SWEEP_POINTS {
            return None;
        }
        self.index += 1;
        let distance_m = self.index as f64 * SWEEP_DISTANCE_STEP_M;

        Some(PathLossSample {
            distance_m,
            path_loss_db: free_space_path_loss_db(distance_m, self.frequency_ghz),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = SWEEP_POINTS.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathLossSweep {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_path_loss() {
        let loss = free_space_path_loss_db(50.0, 2.4);
        assert_relative_eq!(loss, 217.54722228811482, max_relative = 1e-12);
        assert_relative_eq!(20.0 * FRIIS_FOLDED_CONSTANT.log10(), 175.96359736716232, max_relative = 1e-12);
    }

    #[test]
    fn test_path_loss_grows_6db_per_doubling() {
        let near = free_space_path_loss_db(100.0, 5.0);
        let far = free_space_path_loss_db(200.0, 5.0);
        assert_relative_eq!(far - near, 20.0 * 2f64.log10(), max_relative = 1e-9);
    }

    #[test]
    fn test_reference_fresnel() {
        assert_relative_eq!(wavelength_m(2.4), 0.12491352416666667, max_relative = 1e-12);
        assert_relative_eq!(fresnel_radius_m(50.0, 2.4), 0.8835776853461538, max_relative = 1e-9);
    }

    #[test]
    fn test_non_positive_inputs_pass_through() {
        assert!(free_space_path_loss_db(-1.0, 2.4).is_nan());
        assert!(free_space_path_loss_db(50.0, -2.4).is_nan());
        assert_eq!(free_space_path_loss_db(0.0, 2.4), f64::NEG_INFINITY);
        assert!(fresnel_radius_m(-50.0, 2.4).is_nan());
        assert!(free_space_path_loss_db(f64::NAN, 2.4).is_nan());
    }

    #[test]
    fn test_path_loss_sweep() {
        let samples: Vec<_> = path_loss_sweep(2.4).collect();
        assert_eq!(samples.len(), SWEEP_POINTS);
        assert_eq!(samples[0].distance_m, 10.0);
        assert_eq!(samples[19].distance_m, 200.0);
        assert_relative_eq!(samples[4].path_loss_db, free_space_path_loss_db(50.0, 2.4));
        assert!(samples.windows(2).all(|w| w[1].path_loss_db > w[0].path_loss_db));
    }

    #[test]
    fn test_path_loss_sweep_restartable() {
        let sweep = path_loss_sweep(5.8);
        let first: Vec<_> = sweep.clone().collect();
        let second: Vec<_> = sweep.collect();
        assert_eq!(first, second);
    }
}
