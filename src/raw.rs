//! Storage integers and their double-width companions.
//!
//! A generated fixed-point type only ever touches its backing integer through [`RawInt`]
//! when it needs more than native `const` arithmetic: widening for multiply, divide and
//! square root, and the unsigned magnitude used by the formatter.

use core::ops::{Add, Div, Mul, Shl, Shr, Sub};

use ethnum::{I256, U256};

use crate::digits::DigitWord;

mod sealed {
    pub trait Sealed {}
}

/// Integer wide enough to hold the product of two storage values.
pub trait WideInt:
    Copy
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits.
    const BITS: u32;

    /// The value one.
    const ONE: Self;
}

/// Backing integer of a fixed-point type.
///
/// Sealed: implemented for the native signed and unsigned integers from 8 to 128 bits.
pub trait RawInt: Copy + Ord + sealed::Sealed {
    /// Double-width intermediate for multiply, divide and square root.
    type Wide: WideInt;

    /// Unsigned double-width word used for digit extraction.
    type Word: DigitWord;

    const BITS: u32;
    const SIGNED: bool;

    /// Sign- or zero-extends into the double-width type.
    fn widen(self) -> Self::Wide;

    /// Truncates a double-width value back to the storage width.
    fn narrow(wide: Self::Wide) -> Self;

    /// Narrows only when no significant bits are lost.
    #[inline]
    fn checked_narrow(wide: Self::Wide) -> Option<Self> {
        let narrow = Self::narrow(wide);
        if narrow.widen() == wide {
            Some(narrow)
        } else {
            None
        }
    }

    fn is_negative(self) -> bool;

    fn is_positive(self) -> bool;

    /// Absolute value, zero-extended into the digit word.
    fn magnitude(self) -> Self::Word;

    /// Number of significant bits, `BITS - leading_zeros`.
    fn bit_length(self) -> u32;

    fn to_f64(self) -> f64;
}

macro_rules! impl_wide {
    ($($t:ty => $one:expr),* $(,)?) => {
        $(
            impl WideInt for $t {
                const BITS: u32 = 256;
                const ONE: Self = $one;
            }
        )*
    };
}

impl_wide!(I256 => I256::new(1), U256 => U256::new(1));

macro_rules! impl_wide_native {
    ($($t:ty),*) => {
        $(
            impl WideInt for $t {
                const BITS: u32 = <$t>::BITS;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_wide_native!(i16, i32, i64, i128, u16, u32, u64, u128);

macro_rules! impl_raw_signed {
    ($($t:ty => $wide:ty, $word:ty);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RawInt for $t {
                type Wide = $wide;
                type Word = $word;

                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = true;

                #[inline(always)]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline(always)]
                fn narrow(wide: $wide) -> Self {
                    wide as $t
                }

                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn is_positive(self) -> bool {
                    self > 0
                }

                #[inline(always)]
                fn magnitude(self) -> $word {
                    self.unsigned_abs() as $word
                }

                #[inline(always)]
                fn bit_length(self) -> u32 {
                    <$t>::BITS - self.leading_zeros()
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_raw_unsigned {
    ($($t:ty => $wide:ty);* $(;)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl RawInt for $t {
                type Wide = $wide;
                type Word = $wide;

                const BITS: u32 = <$t>::BITS;
                const SIGNED: bool = false;

                #[inline(always)]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline(always)]
                fn narrow(wide: $wide) -> Self {
                    wide as $t
                }

                #[inline(always)]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline(always)]
                fn is_positive(self) -> bool {
                    self != 0
                }

                #[inline(always)]
                fn magnitude(self) -> $wide {
                    self as $wide
                }

                #[inline(always)]
                fn bit_length(self) -> u32 {
                    <$t>::BITS - self.leading_zeros()
                }

                #[inline(always)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_raw_signed! {
    i8 => i16, u16;
    i16 => i32, u32;
    i32 => i64, u64;
    i64 => i128, u128;
}

impl_raw_unsigned! {
    u8 => u16;
    u16 => u32;
    u32 => u64;
    u64 => u128;
}

// 128-bit storage widens through ethnum's 256-bit integers.

impl sealed::Sealed for i128 {}

impl RawInt for i128 {
    type Wide = I256;
    type Word = U256;

    const BITS: u32 = i128::BITS;
    const SIGNED: bool = true;

    #[inline(always)]
    fn widen(self) -> I256 {
        I256::new(self)
    }

    #[inline(always)]
    fn narrow(wide: I256) -> Self {
        wide.as_i128()
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline(always)]
    fn is_positive(self) -> bool {
        self > 0
    }

    #[inline(always)]
    fn magnitude(self) -> U256 {
        U256::new(self.unsigned_abs())
    }

    #[inline(always)]
    fn bit_length(self) -> u32 {
        i128::BITS - self.leading_zeros()
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl sealed::Sealed for u128 {}

impl RawInt for u128 {
    type Wide = U256;
    type Word = U256;

    const BITS: u32 = u128::BITS;
    const SIGNED: bool = false;

    #[inline(always)]
    fn widen(self) -> U256 {
        U256::new(self)
    }

    #[inline(always)]
    fn narrow(wide: U256) -> Self {
        wide.as_u128()
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        false
    }

    #[inline(always)]
    fn is_positive(self) -> bool {
        self != 0
    }

    #[inline(always)]
    fn magnitude(self) -> U256 {
        U256::new(self)
    }

    #[inline(always)]
    fn bit_length(self) -> u32 {
        u128::BITS - self.leading_zeros()
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_sign_extends() {
        assert_eq!((-1i8).widen(), -1i16);
        assert_eq!(i8::MIN.widen(), -128i16);
        assert_eq!((-5i128).widen(), I256::new(-5));
        assert_eq!(u8::MAX.widen(), 255u16);
    }

    #[test]
    fn test_narrow_truncates() {
        assert_eq!(i8::narrow(0x0180), -128i8);
        assert_eq!(u8::narrow(0x1ff), 0xff);
        assert_eq!(i128::narrow(I256::new(i128::MAX) + I256::new(1)), i128::MIN);
    }

    #[test]
    fn test_checked_narrow() {
        assert_eq!(i8::checked_narrow(127), Some(127));
        assert_eq!(i8::checked_narrow(-128), Some(-128));
        assert_eq!(i8::checked_narrow(128), None);
        assert_eq!(i8::checked_narrow(-129), None);
        assert_eq!(u16::checked_narrow(65_536), None);
        assert_eq!(i128::checked_narrow(I256::new(i128::MIN)), Some(i128::MIN));
        assert_eq!(i128::checked_narrow(I256::new(i128::MIN) - I256::new(1)), None);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(i8::MIN.magnitude(), 128u16);
        assert_eq!((-24i8).magnitude(), 24u16);
        assert_eq!(200u8.magnitude(), 200u16);
        assert_eq!(i128::MIN.magnitude(), U256::new(1u128 << 127));
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(1i8.bit_length(), 1);
        assert_eq!(64i8.bit_length(), 7);
        assert_eq!(0x8000u16.bit_length(), 16);
        assert_eq!((1i128 << 100).bit_length(), 101);
    }

    #[test]
    fn test_sign_predicates() {
        assert!((-1i32).is_negative());
        assert!(!0i32.is_positive());
        assert!(!u32::MAX.is_negative());
        assert!(1u128.is_positive());
    }
}
