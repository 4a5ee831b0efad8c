//! Fixed-point square root by integer Newton–Raphson.
//!
//! The operand is rescaled to `v = raw << (FRAC - 1)` in the double-width type, which makes
//! the fixed point of `x = x/2 + v/x` land on `sqrt(value) * 2^FRAC`, the raw encoding of
//! the result.

use core::cmp::Ordering;

use crate::raw::{RawInt, WideInt};
use crate::{FixedError, Result};

/// Square root of `raw / 2^frac_bits`, returned as a raw value of the same scale.
///
/// Fails with [`FixedError::NonPositiveSqrt`] unless `raw > 0`.
pub fn sqrt_raw<R: RawInt>(raw: R, frac_bits: u32) -> Result<R> {
    if !raw.is_positive() {
        return Err(FixedError::NonPositiveSqrt);
    }

    let bitpos = raw.bit_length() as i32 - frac_bits as i32;
    let v = raw.widen() << (frac_bits - 1);
    let limit = 2 * <R::Wide as WideInt>::BITS;
    let root = newton::<R::Wide>(v, seed(bitpos, frac_bits), limit)?;

    Ok(R::narrow(root))
}

/// Initial estimate from the distance between the top set bit and the binary point.
fn seed<W: WideInt>(bitpos: i32, frac_bits: u32) -> W {
    let denom = W::ONE << frac_bits;
    match bitpos.cmp(&0) {
        Ordering::Greater => denom << (bitpos / 2) as u32,
        Ordering::Less => denom << bitpos.unsigned_abs(),
        Ordering::Equal => denom,
    }
}

/// Iterates until two consecutive estimates differ by at most two units, giving up after
/// `limit` steps.
///
/// [`sqrt_raw`] passes twice the width of `W`. Each step from an overestimate at least
/// halves the excess, so every positive seed converges well inside that bound.
fn newton<W: WideInt>(v: W, mut x: W, limit: u32) -> Result<W> {
    let tolerance = W::ONE + W::ONE;

    for _iteration in 1..=limit {
        let next = (x >> 1) + v / x;
        let delta = if next > x { next - x } else { x - next };
        x = next;

        if delta <= tolerance {
            #[cfg(feature = "tracing")]
            tracing::trace!(iterations = _iteration, "square root converged");
            return Ok(x);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(limit, "square root iteration cap reached");
    Err(FixedError::SqrtDiverged(limit))
}
