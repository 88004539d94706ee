//! # u-calc
//!
//! Single-register numeric accumulator.
//!
//! An accumulator holds one `f64` and mutates it in place. The basic
//! [`Accumulator`] applies `+ - * /` with a caller-supplied operand; the
//! [`AdvancedAccumulator`] adds factorial, single-digit powers and the
//! Armstrong / perfect-number characteristics over the register's integer
//! part.
//!
//! ## Modules
//!
//! - [`accumulator`] — Basic register and the four binary operators
//! - [`advanced`] — Factorial, powers and number characteristics
//! - [`integer`] — Wrapping 32-bit primitives (power, factorial, digit checks)
//! - [`error`] — The closed [`CalcError`] taxonomy
//!
//! ## Design Philosophy
//!
//! - **No panics**: every failure is a typed [`CalcError`], and a failing
//!   operation leaves the register as it was
//! - **IEEE results are results**: `±∞` and NaN from basic arithmetic are
//!   kept; only an exact zero divisor is refused
//! - **Quiet by default**: operations emit `tracing` events at `trace` and
//!   `debug` level and never print
//!
//! ## Example
//!
//! ```
//! use u_calc::{AdvancedAccumulator, CalcError};
//!
//! let mut acc = AdvancedAccumulator::new(None);
//! acc.apply(Some(3.0), '+').unwrap();
//! acc.apply_advanced('!').unwrap();
//! assert_eq!(acc.get(), 6.0);
//! assert_eq!(acc.has_characteristic('P'), Ok(true));
//!
//! assert_eq!(acc.apply(None, '/'), Err(CalcError::DivisionByZero));
//! assert_eq!(acc.get(), 6.0);
//! ```

pub mod accumulator;
pub mod advanced;
pub mod error;
pub mod integer;

pub use accumulator::{Accumulator, Operator};
pub use advanced::{AdvancedAccumulator, AdvancedAction, Characteristic};
pub use error::{CalcError, Result};
pub use integer::integer_power;
