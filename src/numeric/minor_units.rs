// ============================================================================
// Minor Units
// Exact integer quantities in the smallest unit of a currency or asset
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An exact quantity counted in minor units (cents, satoshis, lots).
///
/// Internally stores the minor-unit count as an i64; `DECIMALS` is the
/// number of minor-unit digits per major unit (10^DECIMALS minor units
/// make one major unit). All persisted state uses this representation;
/// floating point never touches book state.
///
/// # Example
/// ```
/// use order_tracker::numeric::{MinorUnits, Price};
///
/// let price = Price::new(10_000); // $100.00 in cents
/// assert_eq!(price.to_string(), "100.00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct MinorUnits<const DECIMALS: u8>(i64);

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

impl<const D: u8> MinorUnits<D> {
    /// Minor units per major unit (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    /// Zero quantity
    pub const ZERO: Self = Self(0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw minor-unit count.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Convert from a decimal major-unit value at the API boundary.
    ///
    /// The conversion must be exact: a value with more precision than
    /// `DECIMALS` digits is rejected rather than truncated.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the value has sub-minor-unit digits
    /// - `Overflow` if the scaled value does not fit in an i64
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        let scaled = value
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw minor-unit count.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Check if the quantity is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if the quantity is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Convert back to a decimal major-unit value (display/export only).
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, D as u32)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Subtraction floored at zero.
    ///
    /// Open order sizes never go negative; an over-reported matched
    /// quantity clamps the remainder to zero instead of wrapping.
    #[inline]
    pub fn saturating_sub_floor(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0).max(0))
    }

    /// Returns the minimum of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Returns the maximum of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for MinorUnits<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinorUnits<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for MinorUnits<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.0 / Self::SCALE;
        let frac_part = (self.0 % Self::SCALE).unsigned_abs();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.0 < 0 && int_part == 0 {
            // Handle -0.xxx case
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Price in minor currency units (cents)
pub type Price = MinorUnits<2>;

/// Quantity in minor asset units (satoshis)
pub type Size = MinorUnits<8>;

// ============================================================================
// Tests
// ============================================================================
