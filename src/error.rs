//! Error taxonomy shared by every fallible accumulator operation.
//!
//! The set is closed: an operation either divides by zero, receives a
//! symbol outside its accepted set, or finds the register's integer part
//! outside the domain it needs. All three are recoverable and leave the
//! register untouched.

use thiserror::Error;

/// Result alias for accumulator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

/// Accepted range of the factorial operand.
pub const FACTORIAL_RANGE: &str = "[0, 10]";

/// Accepted range of the characteristic predicates.
pub const CHARACTERISTIC_RANGE: &str = "[1, inf)";

/// Errors reported by [`Accumulator`](crate::Accumulator) and
/// [`AdvancedAccumulator`](crate::AdvancedAccumulator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Basic division with a zero divisor (`0.0` or `-0.0`).
    #[error("division by zero")]
    DivisionByZero,

    /// Symbol outside the operator, action or characteristic set.
    #[error("unsupported operation: {0:?}")]
    NotSupportedOperation(char),

    /// Truncated register value outside the operation's domain.
    #[error("expected an integer in {range}, got {value}")]
    NumberNotInArea {
        /// Register value after truncation toward zero.
        value: i32,
        /// Human-readable accepted range.
        range: &'static str,
    },
}

impl CalcError {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::NotSupportedOperation(_) => "not_supported_operation",
            CalcError::NumberNotInArea { .. } => "number_not_in_area",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_display_names_symbol() {
        let err = CalcError::NotSupportedOperation('^');
        assert_eq!(err.to_string(), "unsupported operation: '^'");
    }

    #[test]
    fn test_display_reports_value_and_range() {
        let err = CalcError::NumberNotInArea {
            value: 11,
            range: FACTORIAL_RANGE,
        };
        assert_eq!(err.to_string(), "expected an integer in [0, 10], got 11");
    }

    #[test]
    fn test_kind() {
        assert_eq!(CalcError::DivisionByZero.kind(), "division_by_zero");
        assert_eq!(
            CalcError::NotSupportedOperation('x').kind(),
            "not_supported_operation"
        );
        assert_eq!(
            CalcError::NumberNotInArea {
                value: 0,
                range: CHARACTERISTIC_RANGE
            }
            .kind(),
            "number_not_in_area"
        );
    }
}
