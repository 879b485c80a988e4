// ============================================================================
// Precision Scalar
// Arbitrary-precision floating-point element with compile-time mantissa width
// ============================================================================

use arpfloat::{Float, RoundingMode, Semantics};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Exponent field width shared by every scalar, in bits.
///
/// Matches IEEE binary128, giving a dynamic range of roughly 2^16383 at any
/// mantissa width. Matrix arithmetic never changes this; only the mantissa
/// width varies with `P`.
const EXPONENT_WIDTH: usize = 15;

/// Arbitrary-precision floating-point scalar with compile-time mantissa width.
///
/// Wraps an [`arpfloat::Float`] pinned to a semantics of `P` mantissa bits
/// with round-to-nearest (ties to even). Every arithmetic operation rounds
/// back to width `P`. Because the width is a const generic, operations
/// between scalars of different widths are rejected at compile time.
///
/// # Type Parameter
/// - `P`: mantissa width in bits. Determines rounding granularity; each
///   operation costs time proportional to `P`, not O(1).
///
/// # Example
/// ```
/// use precision_matrix::numeric::Scalar;
///
/// let a = Scalar::<128>::from_u64(7);
/// let b = Scalar::<128>::from_u64(6);
/// assert_eq!((&a * &b).to_f64(), 42.0);
/// ```
#[derive(Clone)]
pub struct Scalar<const P: u32>(Float);

impl<const P: u32> Scalar<P> {
    /// Mantissa width in bits.
    pub const PRECISION: u32 = P;

    /// The semantics every scalar of this width is pinned to.
    #[inline]
    fn semantics() -> Semantics {
        Semantics::new(EXPONENT_WIDTH, P as usize, RoundingMode::NearestTiesToEven)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Exact zero at width `P`.
    #[inline]
    pub fn zero() -> Self {
        Self(Float::from_u64(Self::semantics(), 0))
    }

    /// Exact one at width `P`.
    #[inline]
    pub fn one() -> Self {
        Self(Float::from_u64(Self::semantics(), 1))
    }

    /// Create from an unsigned integer, rounded to nearest if `P` cannot
    /// represent it exactly.
    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Self(Float::from_u64(Self::semantics(), value))
    }

    /// Create from a signed integer, rounded to nearest if `P` cannot
    /// represent it exactly.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        Self(Float::from_i64(Self::semantics(), value))
    }

    /// Create from an `f64`, rounded to nearest at width `P`.
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self(Float::from_f64(value).cast_with_rm(Self::semantics(), RoundingMode::NearestTiesToEven))
    }

    /// π at width `P`.
    pub fn pi() -> Self {
        Self(Float::pi(Self::semantics()))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The nearest `f64` to this value.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.as_f64()
    }

    /// Decimal rendering with exactly `fractional_digits` digits after the
    /// point, rounded to nearest (ties to even), derived from the full
    /// width-`P` value rather than an `f64` approximation. With
    /// `fractional_digits == 0` no decimal point is emitted.
    pub fn to_decimal_string(&self, fractional_digits: usize) -> String {
        format_decimal(&self.0.to_string(), fractional_digits)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Integer power by binary exponentiation, rounding to nearest at every
    /// multiply. `powi(0)` is exact one.
    pub fn powi(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            exp >>= 1;
        }
        acc
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const P: u32> Default for Scalar<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const P: u32> PartialEq for Scalar<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const P: u32> Add for &Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 + &rhs.0)
    }
}

impl<const P: u32> Sub for &Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 - &rhs.0)
    }
}

impl<const P: u32> Mul for &Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 * &rhs.0)
    }
}

impl<const P: u32> Add for Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl<const P: u32> Sub for Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<const P: u32> Mul for Scalar<P> {
    type Output = Scalar<P>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl<const P: u32> AddAssign<&Scalar<P>> for Scalar<P> {
    #[inline]
    fn add_assign(&mut self, rhs: &Scalar<P>) {
        self.0 = &self.0 + &rhs.0;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const P: u32> fmt::Display for Scalar<P> {
    /// Decimal rendering from the full width-`P` value. A precision flag
    /// rounds to that many fractional digits (right-justified within any
    /// width, the numeric convention); without one the backend's full
    /// decimal expansion is printed. This is the rendering the matrix grid
    /// output builds on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => {
                let rendered = self.to_decimal_string(digits);
                // Formatter::pad would re-truncate the string at `digits`
                // characters, so pad by hand.
                if let Some(width) = f.width() {
                    for _ in rendered.len()..width {
                        f.write_str(" ")?;
                    }
                }
                f.write_str(&rendered)
            }
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

impl<const P: u32> fmt::Debug for Scalar<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar<{}>({})", P, self.to_f64())
    }
}

/// Normalize a decimal string (optionally signed, optionally in scientific
/// notation) to exactly `fractional_digits` digits after the point, rounding
/// to nearest with ties to even. Non-finite renderings pass through
/// unchanged.
fn format_decimal(raw: &str, fractional_digits: usize) -> String {
    let lower = raw.to_ascii_lowercase();
    if lower.contains("nan") || lower.contains("inf") {
        return raw.to_string();
    }

    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], body[pos + 1..].parse::<i64>().unwrap_or(0)),
        None => (body, 0),
    };

    let (int_raw, frac_raw) = match mantissa.find('.') {
        Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
        None => (mantissa, ""),
    };
    if int_raw.bytes().any(|b| !b.is_ascii_digit()) || frac_raw.bytes().any(|b| !b.is_ascii_digit())
    {
        return raw.to_string();
    }

    let mut digits: Vec<u8> = Vec::with_capacity(int_raw.len() + frac_raw.len());
    digits.extend(int_raw.bytes().map(|b| b - b'0'));
    digits.extend(frac_raw.bytes().map(|b| b - b'0'));

    // Count of digits to the left of the decimal point (may be negative or
    // exceed the digit count after applying the exponent).
    let point = int_raw.len() as i64 + exponent;

    // Digits retained once the value is cut at `fractional_digits`; anything
    // past them decides the rounding.
    let keep = point + fractional_digits as i64;

    let mut kept: Vec<u8> = Vec::new();
    let mut round_up = false;
    if keep >= 0 {
        let keep = keep as usize;
        if keep >= digits.len() {
            kept = digits;
            kept.resize(keep, 0);
        } else {
            kept.extend_from_slice(&digits[..keep]);
            let dropped = &digits[keep..];
            round_up = match dropped[0] {
                d if d > 5 => true,
                d if d < 5 => false,
                _ => {
                    dropped[1..].iter().any(|&d| d != 0)
                        || kept.last().is_some_and(|&d| d % 2 == 1)
                }
            };
        }
    }
    // keep < 0: the whole magnitude is below half an ulp of the last
    // fractional digit, so the result is all zeros.

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    // kept holds int_digits + fractional_digits digits (int_digits <= 0 when
    // the value has no integer part at this scale).
    let int_digits = kept.len() as i64 - fractional_digits as i64;

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    if int_digits <= 0 {
        result.push('0');
    } else {
        let int_part = &kept[..int_digits as usize];
        let first = int_part
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(int_part.len() - 1);
        for &d in &int_part[first..] {
            result.push((b'0' + d) as char);
        }
    }
    if fractional_digits > 0 {
        result.push('.');
        let have = kept.len().min(fractional_digits);
        for _ in 0..fractional_digits - have {
            result.push('0');
        }
        for &d in &kept[kept.len() - have..] {
            result.push((b'0' + d) as char);
        }
    }
    result
}

// ============================================================================
// Tests
// ============================================================================
