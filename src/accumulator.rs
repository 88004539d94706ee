//! Basic single-register accumulator.
//!
//! The register is a plain `f64`. An absent operand is read as `0.0` at
//! the call boundary, so the register itself always holds a concrete
//! value. Results follow IEEE-754: overflow to `±∞` and NaN are accepted
//! register states, only an exact zero divisor is rejected.

use std::fmt;

use tracing::{debug, trace};

use crate::error::{CalcError, Result};

/// Binary operator applied as `register ∘ value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl Operator {
    /// The operator's symbol.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(CalcError::NotSupportedOperation(other)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Floating-point accumulator with the four basic operations.
///
/// # Examples
/// ```
/// use u_calc::Accumulator;
///
/// let mut acc = Accumulator::new(Some(5.0));
/// acc.apply(Some(1.0), '+').unwrap();
/// acc.apply(Some(4.0), '/').unwrap();
/// assert_eq!(acc.get(), 1.5);
///
/// // Rejected operations leave the register alone.
/// assert!(acc.apply(Some(0.0), '/').is_err());
/// assert!(acc.apply(Some(2.0), '^').is_err());
/// assert_eq!(acc.get(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accumulator {
    register: f64,
}

impl Accumulator {
    /// Creates an accumulator holding `initial`, or `0.0` when absent.
    pub fn new(initial: Option<f64>) -> Self {
        Self {
            register: initial.unwrap_or(0.0),
        }
    }

    /// Current register value, verbatim (may be non-finite).
    pub fn get(&self) -> f64 {
        self.register
    }

    /// Overwrites the register.
    pub fn set(&mut self, value: f64) {
        self.register = value;
    }

    /// Resets the register to `0.0`.
    pub fn clear(&mut self) {
        self.register = 0.0;
    }

    /// Applies `operator` with `value` (absent reads as `0.0`).
    ///
    /// # Errors
    /// - [`CalcError::NotSupportedOperation`] if `operator` is not one of
    ///   `+ - * /`.
    /// - [`CalcError::DivisionByZero`] for `/` with a zero divisor.
    ///
    /// The register is unchanged on error.
    pub fn apply(&mut self, value: Option<f64>, operator: char) -> Result<()> {
        let operator = Operator::try_from(operator).inspect_err(|err| {
            debug!(kind = err.kind(), %err, register = self.register, "rejected basic operation");
        })?;
        self.apply_operator(value.unwrap_or(0.0), operator)
    }

    /// Applies a parsed [`Operator`] with `value`.
    ///
    /// # Errors
    /// [`CalcError::DivisionByZero`] for [`Operator::Divide`] when
    /// `value == 0.0` (negative zero included).
    pub fn apply_operator(&mut self, value: f64, operator: Operator) -> Result<()> {
        match operator {
            Operator::Add => self.register += value,
            Operator::Subtract => self.register -= value,
            Operator::Multiply => self.register *= value,
            Operator::Divide => {
                if value == 0.0 {
                    let err = CalcError::DivisionByZero;
                    debug!(kind = err.kind(), register = self.register, "rejected division by zero");
                    return Err(err);
                }
                self.register /= value;
            }
        }
        trace!(%operator, value, register = self.register, "applied basic operation");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
