//! Fixed-precision numeric samples.
//!
//! A [`Sample`] is a non-negative decimal number together with the number of
//! fraction digits that are *visible*: `1`, `1.0` and `1.00` are three
//! different samples because plural rules can distinguish them (through the
//! `v`, `w`, `f` and `t` operands).
//!
//! Samples are stored as a scaled integer, `integer × 10^v + fraction`, which
//! is also the representation ranges use for adjacency checks.
//!
//! ## Example
//!
//! ```rust
//! use plural_samples::sample::Sample;
//!
//! let sample = Sample::new(1.5, 2).unwrap();
//! assert_eq!(sample.to_string(), "1.50");
//! assert_eq!(sample.scaled(), 150);
//! assert_eq!(sample.t(), 5);
//! ```

use std::fmt;

use crate::error::{Result, SampleError};

/// Largest number of visible fraction digits a sample may carry.
pub const MAX_FRACTION_DIGITS: u8 = 4;

const POWERS_OF_TEN: [u64; MAX_FRACTION_DIGITS as usize + 1] = [1, 10, 100, 1_000, 10_000];

/// `10^visible_fraction_digits`, the factor between a value and its scaled form.
///
/// Callers must have validated the precision against [`MAX_FRACTION_DIGITS`].
#[inline]
pub(crate) fn scale_for(visible_fraction_digits: u8) -> u64 {
    POWERS_OF_TEN[visible_fraction_digits as usize]
}

/// Write a scaled value with the decimal point reinserted.
pub(crate) fn write_scaled(
    f: &mut fmt::Formatter<'_>,
    scaled: u64,
    visible_fraction_digits: u8,
) -> fmt::Result {
    if visible_fraction_digits == 0 {
        return write!(f, "{}", scaled);
    }
    let scale = scale_for(visible_fraction_digits);
    write!(
        f,
        "{}.{:0width$}",
        scaled / scale,
        scaled % scale,
        width = visible_fraction_digits as usize
    )
}

/// A non-negative decimal number with a fixed count of visible fraction digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    scaled: u64,
    visible_fraction_digits: u8,
    source: f64,
}

impl Sample {
    /// Create a sample from a value, rounding it to `visible_fraction_digits`.
    ///
    /// # Errors
    ///
    /// Fails for negative or non-finite values, for precisions above
    /// [`MAX_FRACTION_DIGITS`], and when the scaled value overflows `u64`.
    pub fn new(value: f64, visible_fraction_digits: u8) -> Result<Self> {
        if !value.is_finite() {
            return Err(SampleError::NonFiniteValue(value));
        }
        if value < 0.0 {
            return Err(SampleError::NegativeValue(value));
        }
        if visible_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(SampleError::PrecisionOutOfRange(visible_fraction_digits));
        }
        let scaled = (value * scale_for(visible_fraction_digits) as f64).round();
        if scaled >= u64::MAX as f64 {
            return Err(SampleError::Overflow(value));
        }
        Ok(Self {
            scaled: scaled as u64,
            visible_fraction_digits,
            source: value,
        })
    }

    /// Create an integer sample (no visible fraction digits).
    pub fn integer(value: u64) -> Self {
        Self {
            scaled: value,
            visible_fraction_digits: 0,
            source: value as f64,
        }
    }

    /// Create a sample directly from its scaled representation.
    ///
    /// `from_scaled(150, 2)` is `1.50`.
    ///
    /// # Errors
    ///
    /// Fails for precisions above [`MAX_FRACTION_DIGITS`].
    pub fn from_scaled(scaled: u64, visible_fraction_digits: u8) -> Result<Self> {
        if visible_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(SampleError::PrecisionOutOfRange(visible_fraction_digits));
        }
        let scale = scale_for(visible_fraction_digits);
        Ok(Self {
            scaled,
            visible_fraction_digits,
            source: scaled as f64 / scale as f64,
        })
    }

    /// Scaled representation, `integer × 10^v + fraction`.
    #[inline]
    pub fn scaled(&self) -> u64 {
        self.scaled
    }

    /// `10^v`.
    #[inline]
    pub fn scale(&self) -> u64 {
        scale_for(self.visible_fraction_digits)
    }

    /// Number of visible fraction digits.
    #[inline]
    pub fn visible_fraction_digits(&self) -> u8 {
        self.visible_fraction_digits
    }

    /// The value this sample was built from.
    #[inline]
    pub fn source(&self) -> f64 {
        self.source
    }

    /// Integer part.
    #[inline]
    pub fn integer_part(&self) -> u64 {
        self.scaled / self.scale()
    }

    /// Visible fraction digits as an integer (`1.05` → `5`).
    #[inline]
    pub fn fraction_digits(&self) -> u64 {
        self.scaled % self.scale()
    }

    /// Number of decimal digits in the integer part (`0` has one digit).
    pub fn digit_length(&self) -> usize {
        let mut value = self.integer_part();
        let mut digits = 1;
        while value >= 10 {
            value /= 10;
            digits += 1;
        }
        digits
    }

    /// Operand `n`: absolute value of the source number.
    #[inline]
    pub fn n(&self) -> f64 {
        self.source
    }

    /// Operand `i`: integer digits of `n`.
    #[inline]
    pub fn i(&self) -> u64 {
        self.integer_part()
    }

    /// Operand `v`: number of visible fraction digits, with trailing zeros.
    #[inline]
    pub fn v(&self) -> u64 {
        u64::from(self.visible_fraction_digits)
    }

    /// Operand `w`: number of visible fraction digits, without trailing zeros.
    pub fn w(&self) -> u64 {
        let (_, trimmed_digits) = self.trimmed_fraction();
        trimmed_digits
    }

    /// Operand `f`: visible fraction digits, with trailing zeros.
    #[inline]
    pub fn f(&self) -> u64 {
        self.fraction_digits()
    }

    /// Operand `t`: visible fraction digits, without trailing zeros.
    pub fn t(&self) -> u64 {
        let (trimmed, _) = self.trimmed_fraction();
        trimmed
    }

    fn trimmed_fraction(&self) -> (u64, u64) {
        let mut fraction = self.fraction_digits();
        let mut digits = self.v();
        while digits > 0 && fraction % 10 == 0 {
            fraction /= 10;
            digits -= 1;
        }
        (fraction, digits)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_scaled(f, self.scaled, self.visible_fraction_digits)
    }
}
