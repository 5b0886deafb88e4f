//! Error types for the calculation engine.

use thiserror::Error;

/// Errors returned when an input violates a calculator's precondition.
///
/// Calculators that propagate IEEE-754 semantics instead (path loss, Fresnel
/// radius, link budget, traffic) never return this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input is not-a-number.
    #[error("{field} is not a number")]
    NotANumber {
        /// Name of the offending input.
        field: &'static str,
    },

    /// Input must be strictly positive.
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive {
        /// Name of the offending input.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
    },
}

impl CalcError {
    /// Name of the input that caused the error.
    pub fn field(&self) -> &'static str {
        match self {
            CalcError::NotANumber { field } | CalcError::NonPositive { field, .. } => field,
        }
    }
}

/// Reject NaN.
pub(crate) fn require_number(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_nan() {
        Err(CalcError::NotANumber { field })
    } else {
        Ok(value)
    }
}

/// Reject NaN, zero and negative values.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = require_number(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("x", 2.5), Ok(2.5));
        assert_eq!(
            require_positive("x", 0.0),
            Err(CalcError::NonPositive { field: "x", value: 0.0 })
        );
        assert_eq!(
            require_positive("x", f64::NAN),
            Err(CalcError::NotANumber { field: "x" })
        );
    }

    #[test]
    fn test_error_display() {
        let err = CalcError::NonPositive { field: "watts", value: -1.0 };
        assert_eq!(err.to_string(), "watts must be greater than zero (got -1)");
        assert_eq!(err.field(), "watts");
        assert_eq!(CalcError::NotANumber { field: "db" }.to_string(), "db is not a number");
    }
}
