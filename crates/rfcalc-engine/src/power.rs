//! Power unit conversion between dB, dBm, watts and milliwatts.
//!
//! dB values are taken relative to 1 W, so `dBm = dB + 30` and
//! `W = 10^(dB/10)`. Each constructor takes one known quantity and derives
//! the other three.

use crate::error::{require_number, require_positive, CalcError};

/// Offset between dB (re 1 W) and dBm (re 1 mW).
pub const DBM_OFFSET_DB: f64 = 30.0;

/// A power level expressed in all four supported units.
///
/// Invariant: `dbm = db + 30`, `milliwatts = watts * 1000`,
/// `watts = 10^(db/10)`, up to floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerReading {
    /// Power in dB relative to 1 W.
    pub db: f64,
    /// Power in dBm.
    pub dbm: f64,
    /// Power in watts.
    pub watts: f64,
    /// Power in milliwatts.
    pub milliwatts: f64,
}

impl PowerReading {
    /// Build a reading from a level in dB (re 1 W).
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NotANumber`] if `db` is NaN.
    pub fn from_db(db: f64) -> Result<Self, CalcError> {
        let db = require_number("db", db)?;
        let watts = 10f64.powf(db / 10.0);

        Ok(Self {
            db,
            dbm: db + DBM_OFFSET_DB,
            watts,
            milliwatts: watts * 1000.0,
        })
    }

    /// Build a reading from a level in dBm.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NotANumber`] if `dbm` is NaN.
    pub fn from_dbm(dbm: f64) -> Result<Self, CalcError> {
        let dbm = require_number("dbm", dbm)?;
        let milliwatts = 10f64.powf(dbm / 10.0);

        Ok(Self {
            db: dbm - DBM_OFFSET_DB,
            dbm,
            watts: milliwatts / 1000.0,
            milliwatts,
        })
    }

    /// Build a reading from a power in watts.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::NotANumber`] for NaN and
    /// [`CalcError::NonPositive`] for zero or negative power, since the
    /// logarithm is undefined there.
    pub fn from_watts(watts: f64) -> Result<Self, CalcError> {
        let watts = require_positive("watts", watts)?;
        let milliwatts = watts * 1000.0;
        let dbm = 10.0 * milliwatts.log10();

        Ok(Self {
            db: dbm - DBM_OFFSET_DB,
            dbm,
            watts,
            milliwatts,
        })
    }
}
