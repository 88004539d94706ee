//! Integer-domain primitives behind the advanced accumulator.
//!
//! All arithmetic here is 32-bit two's complement and wraps on overflow,
//! so every function is total: no input panics.
//!
//! # Conversion
//!
//! [`truncate_toward_zero`] is the only bridge from the floating register
//! into this module. It discards the fractional part and saturates:
//! NaN maps to `0`, `+∞` and anything above `i32::MAX` map to `i32::MAX`,
//! `-∞` and anything below `i32::MIN` map to `i32::MIN`.

/// Integer part of `x`, discarding the fraction without rounding.
///
/// Non-finite and out-of-range inputs saturate (see the module docs).
///
/// # Examples
/// ```
/// use u_calc::integer::truncate_toward_zero;
/// assert_eq!(truncate_toward_zero(3.99), 3);
/// assert_eq!(truncate_toward_zero(-3.99), -3);
/// assert_eq!(truncate_toward_zero(f64::NAN), 0);
/// assert_eq!(truncate_toward_zero(f64::INFINITY), i32::MAX);
/// ```
pub fn truncate_toward_zero(x: f64) -> i32 {
    x as i32
}

/// Raises `base` to `exponent` by repeated multiplication.
///
/// `exponent == 0` yields `1` for every base, `0` included. Products wrap
/// on overflow.
///
/// # Complexity
/// Time: O(exponent), Space: O(1)
///
/// # Examples
/// ```
/// use u_calc::integer::integer_power;
/// assert_eq!(integer_power(2, 3), 8);
/// assert_eq!(integer_power(0, 0), 1);
/// assert_eq!(integer_power(-3, 3), -27);
/// ```
pub fn integer_power(base: i32, exponent: u32) -> i32 {
    (0..exponent).fold(1_i32, |acc, _| acc.wrapping_mul(base))
}

/// Iterative factorial `n!`, with `0! = 1`.
///
/// Non-positive `n` yields `1` (empty product). Callers that need a
/// bounded domain check it before calling; beyond `12!` the product wraps.
///
/// # Examples
/// ```
/// use u_calc::integer::factorial;
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(factorial(10), 3_628_800);
/// ```
pub fn factorial(n: i32) -> i32 {
    (1..=n).fold(1_i32, |acc, i| acc.wrapping_mul(i))
}

/// Number of decimal digits in `|n|`; `0` has one digit.
///
/// # Examples
/// ```
/// use u_calc::integer::digit_count;
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(153), 3);
/// assert_eq!(digit_count(-42), 2);
/// ```
pub fn digit_count(n: i32) -> u32 {
    let mut rest = n.unsigned_abs();
    let mut count = 1;
    while rest >= 10 {
        rest /= 10;
        count += 1;
    }
    count
}

/// Whether `n` equals the sum of its digits each raised to the digit count.
///
/// Digits are consumed least significant first. Negative inputs are never
/// Armstrong numbers.
///
/// # Examples
/// ```
/// use u_calc::integer::is_armstrong;
/// assert!(is_armstrong(153));
/// assert!(is_armstrong(9474));
/// assert!(!is_armstrong(10));
/// ```
pub fn is_armstrong(n: i32) -> bool {
    let len = digit_count(n);
    let mut rest = n.unsigned_abs();
    let mut sum = 0_i32;
    loop {
        let digit = (rest % 10) as i32;
        sum = sum.wrapping_add(integer_power(digit, len));
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum == n
}

/// Whether `n` equals the sum of its proper divisors.
///
/// The divisor sum starts at `1` and adds every `i` in `[2, n / 2]` that
/// divides `n`, so `1` counts as perfect.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_calc::integer::is_perfect;
/// assert!(is_perfect(6));
/// assert!(is_perfect(28));
/// assert!(!is_perfect(2));
/// ```
pub fn is_perfect(n: i32) -> bool {
    let sum = (2..=n / 2)
        .filter(|i| n % i == 0)
        .fold(1_i32, |acc, i| acc.wrapping_add(i));
    sum == n
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- truncate_toward_zero ---

    #[test]
    fn test_truncate_discards_fraction() {
        assert_eq!(truncate_toward_zero(2.999999), 2);
        assert_eq!(truncate_toward_zero(-2.999999), -2);
        assert_eq!(truncate_toward_zero(0.999), 0);
        assert_eq!(truncate_toward_zero(-0.01), 0);
    }

    #[test]
    fn test_truncate_saturates() {
        assert_eq!(truncate_toward_zero(f64::NAN), 0);
        assert_eq!(truncate_toward_zero(f64::INFINITY), i32::MAX);
        assert_eq!(truncate_toward_zero(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(truncate_toward_zero(1e12), i32::MAX);
        assert_eq!(truncate_toward_zero(-1e12), i32::MIN);
    }

    // --- integer_power ---

    #[test]
    fn test_power_zero_exponent() {
        for base in [-7, -1, 0, 1, 2, 9, i32::MAX, i32::MIN] {
            assert_eq!(integer_power(base, 0), 1, "{base}^0");
        }
    }

    #[test]
    fn test_power_known_values() {
        assert_eq!(integer_power(2, 3), 8);
        assert_eq!(integer_power(5, 2), 25);
        assert_eq!(integer_power(5, 3), 125);
        assert_eq!(integer_power(9, 9), 387_420_489);
        assert_eq!(integer_power(0, 5), 0);
        assert_eq!(integer_power(7, 1), 7);
    }

    #[test]
    fn test_power_wraps() {
        assert_eq!(integer_power(10, 10), 10_i32.wrapping_pow(10));
        assert_eq!(integer_power(2, 31), i32::MIN);
        assert_eq!(integer_power(2, 32), 0);
    }

    // --- factorial ---

    #[test]
    fn test_factorial_table() {
        let expected = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880, 3628800];
        for (n, &f) in expected.iter().enumerate() {
            assert_eq!(factorial(n as i32), f, "{n}!");
        }
    }

    #[test]
    fn test_factorial_non_positive() {
        assert_eq!(factorial(-3), 1);
    }

    // --- digit_count ---

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99_999), 5);
        assert_eq!(digit_count(i32::MAX), 10);
        assert_eq!(digit_count(i32::MIN), 10);
    }

    // --- is_armstrong ---

    #[test]
    fn test_armstrong_numbers() {
        for n in [1, 2, 9, 153, 370, 371, 407, 1634, 8208, 9474] {
            assert!(is_armstrong(n), "{n} should be Armstrong");
        }
    }

    #[test]
    fn test_not_armstrong() {
        for n in [10, 100, 152, 154, 1000, -153] {
            assert!(!is_armstrong(n), "{n} should not be Armstrong");
        }
    }

    #[test]
    fn test_armstrong_below_thousand() {
        let found: Vec<i32> = (1..1000).filter(|&n| is_armstrong(n)).collect();
        assert_eq!(found, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407]);
    }

    // --- is_perfect ---

    #[test]
    fn test_perfect_numbers() {
        for n in [1, 6, 28, 496, 8128] {
            assert!(is_perfect(n), "{n} should be perfect");
        }
    }

    #[test]
    fn test_not_perfect() {
        for n in [2, 3, 12, 27, 495, 0, -6] {
            assert!(!is_perfect(n), "{n} should not be perfect");
        }
    }
}
