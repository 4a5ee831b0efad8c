//! Decimal rendering.
//!
//! A `FRAC`-bit binary fraction always has a finite decimal expansion of at most `FRAC`
//! digits, so the fractional part is produced one digit at a time by repeated
//! multiplication by ten rather than through a fixed-length buffer.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{BitAnd, Mul, Shl, Shr, Sub};

use ethnum::U256;

use crate::raw::RawInt;

/// Unsigned word wide enough to hold `fraction * 10` without overflow.
pub trait DigitWord:
    Copy
    + Eq
    + fmt::Display
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;

    /// Low eight bits; only called on values below ten.
    fn low_byte(self) -> u8;
}

macro_rules! impl_digit_word {
    ($($t:ty),*) => {
        $(
            impl DigitWord for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TEN: Self = 10;

                #[inline(always)]
                fn low_byte(self) -> u8 {
                    self as u8
                }
            }
        )*
    };
}

impl_digit_word!(u16, u32, u64, u128);

impl DigitWord for U256 {
    const ZERO: Self = U256::new(0);
    const ONE: Self = U256::new(1);
    const TEN: Self = U256::new(10);

    #[inline(always)]
    fn low_byte(self) -> u8 {
        self.as_u128() as u8
    }
}

/// Lazy sequence of the decimal digits of a binary fraction.
///
/// Yields `'0'..='9'` and stops once the remainder is exhausted. A zero fraction
/// yields nothing.
#[derive(Clone, Debug)]
pub struct FractionDigits<W> {
    remainder: W,
    mask: W,
    frac_bits: u32,
    remaining: u32,
}

impl<W: DigitWord> FractionDigits<W> {
    /// Digits of `bits & (2^frac_bits - 1)` interpreted as `bits / 2^frac_bits`.
    pub fn new(bits: W, frac_bits: u32) -> Self {
        let mask = (W::ONE << frac_bits) - W::ONE;
        Self {
            remainder: bits & mask,
            mask,
            frac_bits,
            remaining: frac_bits,
        }
    }
}

impl<W: DigitWord> Iterator for FractionDigits<W> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.remainder == W::ZERO {
            return None;
        }

        let scaled = self.remainder * W::TEN;
        let digit = (scaled >> self.frac_bits).low_byte();
        self.remainder = scaled & self.mask;
        self.remaining -= 1;

        Some(char::from(b'0' + digit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remainder == W::ZERO {
            (0, Some(0))
        } else {
            (1, Some(self.remaining as usize))
        }
    }
}

impl<W: DigitWord> FusedIterator for FractionDigits<W> {}

/// Writes `raw / 2^frac_bits` as `[-]<integer>.<digits>`.
///
/// The integer digits are those of the magnitude, so a negative value with a fractional
/// remainder shows the integer part rounded toward zero followed by the remainder's digits,
/// exactly as ordinary decimal notation does. Zero fraction leaves a bare trailing `.`.
pub fn write_decimal<R, S>(sink: &mut S, raw: R, frac_bits: u32) -> fmt::Result
where
    R: RawInt,
    S: fmt::Write + ?Sized,
{
    if raw.is_negative() {
        sink.write_char('-')?;
    }
    write_magnitude(sink, raw.magnitude(), frac_bits, None)
}

/// Formats `raw / 2^frac_bits` honoring the [`fmt::Formatter`] flags.
///
/// Precision truncates the fraction to at most that many digits; it never rounds and never
/// pads with zeros. Width, fill, alignment, `+` and `0` are applied as for integers.
pub fn fmt_decimal<R: RawInt>(f: &mut fmt::Formatter<'_>, raw: R, frac_bits: u32) -> fmt::Result {
    if f.width().is_none() && f.precision().is_none() && !f.sign_plus() {
        return write_decimal(f, raw, frac_bits);
    }

    let mut buf = StackBuf::new();
    write_magnitude(&mut buf, raw.magnitude(), frac_bits, f.precision())?;
    f.pad_integral(!raw.is_negative(), "", buf.as_str()?)
}

fn write_magnitude<W, S>(
    sink: &mut S,
    magnitude: W,
    frac_bits: u32,
    precision: Option<usize>,
) -> fmt::Result
where
    W: DigitWord,
    S: fmt::Write + ?Sized,
{
    write!(sink, "{}.", magnitude >> frac_bits)?;

    let digits = FractionDigits::new(magnitude, frac_bits).take(precision.unwrap_or(usize::MAX));
    for digit in digits {
        sink.write_char(digit)?;
    }
    Ok(())
}

/// Unsigned rendering of any 128-bit layout: at most 39 integer digits, the point and
/// 127 fraction digits.
const MAX_RENDERED: usize = 168;

struct StackBuf {
    bytes: [u8; MAX_RENDERED],
    len: usize,
}

impl StackBuf {
    const fn new() -> Self {
        Self {
            bytes: [0; MAX_RENDERED],
            len: 0,
        }
    }

    fn as_str(&self) -> Result<&str, fmt::Error> {
        core::str::from_utf8(&self.bytes[..self.len]).map_err(|_| fmt::Error)
    }
}

impl fmt::Write for StackBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        if end > MAX_RENDERED {
            return Err(fmt::Error);
        }
        self.bytes[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}
