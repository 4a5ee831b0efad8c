//! Compile-time parametrized binary fixed-point types
//!
//! Every type in this crate stores a single two's-complement (or unsigned) integer whose value
//! is `raw / 2^FRAC`. The sign, magnitude width and fraction width are fixed when the type is
//! generated, so there is no runtime dispatch and no allocation anywhere.
//!
//! Predefined formats:
//!
//! - **`Q4_4`** / **`UQ4_4`**: 8-bit, 4 fraction bits. Precision: 0.0625
//! - **`Q8_8`** / **`UQ8_8`**: 16-bit, 8 fraction bits. Precision: 0.00390625
//! - **`Q1_15`**: 16-bit DSP format, range [-1, 1)
//! - **`Q16_16`** / **`UQ16_16`**: 32-bit, 16 fraction bits
//! - **`Q32_32`** / **`UQ32_32`**: 64-bit, 32 fraction bits
//! - **`Q64_64`**: 128-bit, 64 fraction bits (256-bit intermediates)
//!
//! ## Semantics
//!
//! - **Wrapping arithmetic**: `+ - * /` and unary `-` wrap silently at the storage width.
//!   `checked_*` and `try_*` variants detect overflow on request.
//! - **Multiplication** floors (arithmetic shift); **division** truncates toward zero.
//! - **Construction** subtracts the fraction when the integer part is negative:
//!   `Q4_4::new(-1, 8)` is `-1.5`.
//! - **Square root** uses a bounded Newton–Raphson iteration.
//! - **Formatting** writes exact decimal digits: every binary fraction terminates.
//!
//! ## Example
//!
//! ```rust
//! use fixbin::{Q4_4, Q16_16};
//!
//! let a = Q4_4::new(4, 3); // 4 + 3/16
//! assert_eq!(a.to_string(), "4.1875");
//! assert_eq!((-a).to_string(), "-4.1875");
//!
//! let two = Q16_16::from_int(2);
//! let root = two.sqrt();
//! assert!((root.to_f64() - core::f64::consts::SQRT_2).abs() < 1e-4);
//! ```
//!
//! ## Custom widths
//!
//! ```rust
//! fixbin::fixed_point! {
//!     /// Signed 12.4 format.
//!     pub struct Q12_4(signed i16, u16, frac = 4);
//! }
//!
//! let x = Q12_4::new(-3, 4);
//! assert_eq!(x.to_string(), "-3.25");
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

#[cfg(test)]
extern crate std;

pub mod digits;
#[macro_use]
mod fixed;
pub mod raw;
pub mod sqrt;
mod types;

pub use digits::{DigitWord, FractionDigits};
pub use raw::{RawInt, WideInt};
pub use types::{Q1_15, Q4_4, Q8_8, Q16_16, Q32_32, Q64_64, UQ4_4, UQ8_8, UQ16_16, UQ32_32};

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedError {
    #[error("overflow: value too large to represent")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a non-positive value")]
    NonPositiveSqrt,

    #[error("square root did not converge within {0} iterations")]
    SqrtDiverged(u32),

    #[error("integer part out of range for the magnitude width")]
    IntegerOutOfRange,

    #[error("fractional numerator does not fit the fraction width")]
    FractionOutOfRange,
}

pub type Result<T> = core::result::Result<T, FixedError>;
