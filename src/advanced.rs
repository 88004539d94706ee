//! Accumulator with integer-domain operations over the register.
//!
//! [`AdvancedAccumulator`] wraps an [`Accumulator`] and adds factorial,
//! single-digit exponentiation and two number characteristics (Armstrong
//! and perfect). These read the register through
//! [`truncate_toward_zero`], so `3.99` behaves like `3`.
//!
//! # Non-finite registers
//!
//! [`AdvancedAccumulator::apply_advanced`] resets a NaN or `±∞` register to
//! `0.0` before computing. [`AdvancedAccumulator::has_characteristic`] does
//! not: it truncates with saturation, so NaN is checked as `0` (and
//! rejected) while `+∞` is checked as `i32::MAX`.

use std::fmt;

use tracing::{debug, trace};

use crate::accumulator::Accumulator;
use crate::error::{CalcError, Result, CHARACTERISTIC_RANGE, FACTORIAL_RANGE};
use crate::integer::{factorial, integer_power, is_armstrong, is_perfect, truncate_toward_zero};

/// Largest register value accepted by the factorial.
const FACTORIAL_MAX: f64 = 10.0;

/// Unary operation over the truncated register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdvancedAction {
    /// `!`: factorial of the register, defined on `[0, 10]`.
    Factorial,
    /// `'0'..='9'`: register raised to the digit. Parsing only yields
    /// exponents up to 9; larger ones compute and display the same way.
    Power(u8),
}

impl TryFrom<char> for AdvancedAction {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '!' => Ok(AdvancedAction::Factorial),
            '0'..='9' => Ok(AdvancedAction::Power(symbol as u8 - b'0')),
            other => Err(CalcError::NotSupportedOperation(other)),
        }
    }
}

impl fmt::Display for AdvancedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvancedAction::Factorial => write!(f, "!"),
            AdvancedAction::Power(exponent) => write!(f, "{exponent}"),
        }
    }
}

/// Number characteristic tested against the truncated register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Characteristic {
    /// `A`: equal to the sum of its digits raised to the digit count.
    Armstrong,
    /// `P`: equal to the sum of its proper divisors.
    Perfect,
}

impl Characteristic {
    /// The characteristic's symbol.
    pub fn symbol(self) -> char {
        match self {
            Characteristic::Armstrong => 'A',
            Characteristic::Perfect => 'P',
        }
    }
}

impl TryFrom<char> for Characteristic {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            'A' => Ok(Characteristic::Armstrong),
            'P' => Ok(Characteristic::Perfect),
            other => Err(CalcError::NotSupportedOperation(other)),
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// [`Accumulator`] extended with factorial, powers and characteristics.
///
/// # Examples
/// ```
/// use u_calc::AdvancedAccumulator;
///
/// let mut acc = AdvancedAccumulator::new(Some(5.0));
/// acc.apply_advanced('!').unwrap();
/// assert_eq!(acc.get(), 120.0);
///
/// acc.set(153.0);
/// assert!(acc.has_characteristic('A').unwrap());
///
/// acc.apply(Some(125.0), '-').unwrap();
/// assert!(acc.has_characteristic('P').unwrap()); // 28
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancedAccumulator {
    inner: Accumulator,
}

impl AdvancedAccumulator {
    /// Creates an accumulator holding `initial`, or `0.0` when absent.
    pub fn new(initial: Option<f64>) -> Self {
        Self {
            inner: Accumulator::new(initial),
        }
    }

    /// Current register value, verbatim.
    pub fn get(&self) -> f64 {
        self.inner.get()
    }

    /// Overwrites the register.
    pub fn set(&mut self, value: f64) {
        self.inner.set(value);
    }

    /// Resets the register to `0.0`.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// See [`Accumulator::apply`].
    pub fn apply(&mut self, value: Option<f64>, operator: char) -> Result<()> {
        self.inner.apply(value, operator)
    }

    /// Applies the factorial (`!`) or a power (`'0'..='9'`).
    ///
    /// A NaN or `±∞` register is reset to `0.0` first, whatever the symbol.
    ///
    /// # Errors
    /// - [`CalcError::NotSupportedOperation`] for any other symbol; the
    ///   register keeps its (normalized) value.
    /// - [`CalcError::NumberNotInArea`] from the factorial, see
    ///   [`apply_action`](Self::apply_action).
    pub fn apply_advanced(&mut self, action: char) -> Result<()> {
        self.normalize();
        let action = AdvancedAction::try_from(action).inspect_err(|err| {
            debug!(kind = err.kind(), %err, register = self.get(), "rejected advanced operation");
        })?;
        self.apply_action(action)
    }

    /// Applies a parsed [`AdvancedAction`].
    ///
    /// A NaN or `±∞` register is first reset to `0.0`. The factorial
    /// then requires the register itself to lie in `[0, 10]`, so `10.01`
    /// and `-0.01` are rejected even though they truncate into range.
    /// Powers accept any register.
    ///
    /// # Errors
    /// [`CalcError::NumberNotInArea`] when the factorial's operand is out
    /// of range. The register keeps its (normalized) value.
    pub fn apply_action(&mut self, action: AdvancedAction) -> Result<()> {
        self.normalize();
        let register = self.get();
        let n = truncate_toward_zero(register);

        let result = match action {
            AdvancedAction::Factorial => {
                if !(0.0..=FACTORIAL_MAX).contains(&register) {
                    let err = CalcError::NumberNotInArea {
                        value: n,
                        range: FACTORIAL_RANGE,
                    };
                    debug!(kind = err.kind(), %err, register, "rejected factorial");
                    return Err(err);
                }
                factorial(n)
            }
            AdvancedAction::Power(exponent) => integer_power(n, u32::from(exponent)),
        };

        self.set(f64::from(result));
        trace!(%action, operand = n, result, "applied advanced operation");
        Ok(())
    }

    /// Tests the truncated register for characteristic `A` or `P`.
    ///
    /// The domain is checked before the symbol, so an unknown symbol on a
    /// register below `1` reports [`CalcError::NumberNotInArea`].
    ///
    /// # Errors
    /// - [`CalcError::NumberNotInArea`] if the truncated register is below `1`.
    /// - [`CalcError::NotSupportedOperation`] for any symbol besides `A`
    ///   and `P`.
    pub fn has_characteristic(&self, characteristic: char) -> Result<bool> {
        let n = self.characteristic_operand()?;
        let characteristic = Characteristic::try_from(characteristic).inspect_err(|err| {
            debug!(kind = err.kind(), %err, operand = n, "rejected characteristic");
        })?;
        Ok(evaluate(characteristic, n))
    }

    fn characteristic_operand(&self) -> Result<i32> {
        let n = truncate_toward_zero(self.get());
        if n < 1 {
            let err = CalcError::NumberNotInArea {
                value: n,
                range: CHARACTERISTIC_RANGE,
            };
            debug!(kind = err.kind(), %err, register = self.get(), "rejected characteristic operand");
            return Err(err);
        }
        Ok(n)
    }

    fn normalize(&mut self) {
        if !self.get().is_finite() {
            trace!(register = self.get(), "reset non-finite register");
            self.clear();
        }
    }
}

fn evaluate(characteristic: Characteristic, n: i32) -> bool {
    let holds = match characteristic {
        Characteristic::Armstrong => is_armstrong(n),
        Characteristic::Perfect => is_perfect(n),
    };
    trace!(%characteristic, operand = n, holds, "evaluated characteristic");
    holds
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
