//! The `fixed_point!` type generator.
//!
//! Each invocation produces one concrete `#[repr(transparent)]` type over a native integer.
//! Construction, addition, subtraction, negation and comparison are `const fn` on the
//! storage integer; multiplication, division and square root go through the
//! double-width type supplied by [`RawInt`](crate::RawInt).

/// Generates a binary fixed-point type.
///
/// ```rust
/// fixbin::fixed_point! {
///     /// Signed, 12 integer bits, 4 fraction bits.
///     pub struct Q12_4(signed i16, u16, frac = 4);
/// }
///
/// fixbin::fixed_point! {
///     /// Unsigned, 4 integer bits, 12 fraction bits.
///     pub struct UQ4_12(unsigned u16, frac = 12);
/// }
///
/// assert_eq!(Q12_4::new(-1, 8).to_string(), "-1.5");
/// assert_eq!(UQ4_12::from_int(3).to_raw(), 3 << 12);
/// ```
///
/// The signed form names the storage integer and its unsigned counterpart, which types the
/// fractional numerator. Storage is always a native integer, so magnitude and fraction
/// widths must add up to 8, 16, 32, 64 or 128 bits; layouts such as 3.4 or 12.12 have no
/// representation.
///
/// A fraction width of zero fails to compile:
///
/// ```compile_fail
/// fixbin::fixed_point! {
///     pub struct NoFraction(signed i8, u8, frac = 0);
/// }
/// ```
///
/// So does one that leaves no magnitude bits:
///
/// ```compile_fail
/// fixbin::fixed_point! {
///     pub struct NoMagnitude(signed i8, u8, frac = 8);
/// }
/// ```
///
/// ```compile_fail
/// fixbin::fixed_point! {
///     pub struct NoMagnitude(unsigned u16, frac = 16);
/// }
/// ```
///
/// `Display` honors width, fill, alignment and the `+` and `0` flags. A precision truncates
/// the fraction digits without rounding:
///
/// ```rust
/// use fixbin::Q4_4;
///
/// assert_eq!(format!("{:>10}", Q4_4::new(4, 3)), "    4.1875");
/// assert_eq!(format!("{:.2}", Q4_4::new(4, 3)), "4.18");
/// ```
#[macro_export]
macro_rules! fixed_point {
    (@common $(#[$attr:meta])* $vis:vis $name:ident, $raw:ident, $uraw:ident, $frac:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name {
            raw: $raw,
        }

        const _: () = {
            assert!($frac > 0, "fraction width must be at least one bit");
            assert!($frac < <$raw>::BITS, "magnitude width must be at least one bit");
        };

        // ====================================================================
        // Constants
        // ====================================================================

        impl $name {
            /// Number of fraction bits.
            pub const FRAC_BITS: u32 = $frac;

            /// Number of integer (magnitude) bits, sign bit included for signed storage.
            pub const INT_BITS: u32 = <$raw>::BITS - $frac;

            /// Whether the storage is two's-complement signed.
            pub const SIGNED: bool = <$raw as $crate::RawInt>::SIGNED;

            /// Mask selecting the fraction bits.
            pub const FRAC_MASK: $uraw = ((1 as $uraw) << $frac) - 1;

            /// Zero
            pub const ZERO: Self = Self { raw: 0 };

            /// Smallest positive increment, `2^-FRAC_BITS`.
            pub const DELTA: Self = Self { raw: 1 };

            pub const MIN: Self = Self { raw: <$raw>::MIN };

            pub const MAX: Self = Self { raw: <$raw>::MAX };
        }

        // ====================================================================
        // Constructors and Raw Access
        // ====================================================================

        impl $name {
            /// Wraps a raw value already scaled by `2^FRAC_BITS`.
            #[inline(always)]
            pub const fn from_raw(raw: $raw) -> Self {
                Self { raw }
            }

            /// Returns the raw storage.
            #[inline(always)]
            pub const fn to_raw(self) -> $raw {
                self.raw
            }

            /// Builds a value from an integer part and a fractional numerator over
            /// `2^FRAC_BITS`. See [`Self::try_new`] for the sign convention.
            ///
            /// # Panics
            /// Panics if `int` is outside `[MIN_INT, MAX_INT]` or `frac` does not fit in
            /// `FRAC_BITS` bits.
            pub const fn new(int: $raw, frac: $uraw) -> Self {
                match Self::try_new(int, frac) {
                    Ok(value) => value,
                    Err($crate::FixedError::IntegerOutOfRange) => {
                        panic!("integer part out of range for the magnitude width")
                    }
                    Err(_) => panic!("fractional numerator does not fit the fraction width"),
                }
            }

            /// Integer value with a zero fraction.
            #[inline(always)]
            pub const fn from_int(int: $raw) -> Self {
                Self::new(int, 0)
            }

            /// The low `FRAC_BITS` bits of the storage.
            #[inline(always)]
            pub const fn fraction(self) -> $uraw {
                (self.raw as $uraw) & Self::FRAC_MASK
            }

            #[inline(always)]
            pub const fn is_zero(self) -> bool {
                self.raw == 0
            }

            /// Approximate value as a float, for diagnostics.
            pub fn to_f64(self) -> f64 {
                <$raw as $crate::RawInt>::to_f64(self.raw) / ((1u128 << $frac) as f64)
            }
        }

        // ====================================================================
        // Addition, Subtraction, Negation
        // ====================================================================

        impl $name {
            /// Wrapping addition of the raw storage.
            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn wrapping_add(self, rhs: Self) -> Self {
                Self { raw: self.raw.wrapping_add(rhs.raw) }
            }

            /// Checked addition. Returns `None` if the storage overflowed.
            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn checked_add(self, rhs: Self) -> Option<Self> {
                match self.raw.checked_add(rhs.raw) {
                    Some(raw) => Some(Self { raw }),
                    None => None,
                }
            }

            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn wrapping_sub(self, rhs: Self) -> Self {
                Self { raw: self.raw.wrapping_sub(rhs.raw) }
            }

            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
                match self.raw.checked_sub(rhs.raw) {
                    Some(raw) => Some(Self { raw }),
                    None => None,
                }
            }

            /// Two's-complement negation. `MIN` maps to itself.
            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn wrapping_neg(self) -> Self {
                Self { raw: self.raw.wrapping_neg() }
            }

            #[inline(always)]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub const fn checked_neg(self) -> Option<Self> {
                match self.raw.checked_neg() {
                    Some(raw) => Some(Self { raw }),
                    None => None,
                }
            }

            /// `self + new(int, frac)`.
            #[inline]
            pub const fn add_parts(self, int: $raw, frac: $uraw) -> Self {
                self.wrapping_add(Self::new(int, frac))
            }

            /// `self - new(int, frac)`.
            #[inline]
            pub const fn sub_parts(self, int: $raw, frac: $uraw) -> Self {
                self.wrapping_sub(Self::new(int, frac))
            }
        }

        // ====================================================================
        // Multiplication and Division
        // ====================================================================

        impl $name {
            #[inline(always)]
            fn wide_mul(self, rhs: Self) -> <$raw as $crate::RawInt>::Wide {
                use $crate::RawInt;
                (self.raw.widen() * rhs.raw.widen()) >> Self::FRAC_BITS
            }

            #[inline(always)]
            fn wide_div(self, rhs: Self) -> <$raw as $crate::RawInt>::Wide {
                use $crate::RawInt;
                (self.raw.widen() << Self::FRAC_BITS) / rhs.raw.widen()
            }

            /// Multiplies in the double-width type, shifts right by `FRAC_BITS` (rounding
            /// toward negative infinity) and truncates to the storage width.
            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn wrapping_mul(self, rhs: Self) -> Self {
                Self { raw: <$raw as $crate::RawInt>::narrow(self.wide_mul(rhs)) }
            }

            /// Checked multiplication. Returns `None` if the product does not fit.
            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$raw as $crate::RawInt>::checked_narrow(self.wide_mul(rhs)).map(Self::from_raw)
            }

            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn try_mul(self, rhs: Self) -> $crate::Result<Self> {
                self.checked_mul(rhs).ok_or($crate::FixedError::Overflow)
            }

            /// Shifts the dividend left by `FRAC_BITS` in the double-width type, divides
            /// truncating toward zero and truncates to the storage width.
            ///
            /// # Panics
            /// Panics if `rhs` is zero.
            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn wrapping_div(self, rhs: Self) -> Self {
                if rhs.raw == 0 {
                    panic!("attempt to divide by zero");
                }
                Self { raw: <$raw as $crate::RawInt>::narrow(self.wide_div(rhs)) }
            }

            /// Checked division. Returns `None` if `rhs` is zero or the quotient does not fit.
            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn checked_div(self, rhs: Self) -> Option<Self> {
                if rhs.raw == 0 {
                    return None;
                }
                <$raw as $crate::RawInt>::checked_narrow(self.wide_div(rhs)).map(Self::from_raw)
            }

            #[inline]
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn try_div(self, rhs: Self) -> $crate::Result<Self> {
                if rhs.raw == 0 {
                    return Err($crate::FixedError::DivisionByZero);
                }
                self.checked_div(rhs).ok_or($crate::FixedError::Overflow)
            }

            /// `self * new(int, frac)`.
            #[inline]
            pub fn mul_parts(self, int: $raw, frac: $uraw) -> Self {
                self.wrapping_mul(Self::new(int, frac))
            }

            /// `self / new(int, frac)`.
            ///
            /// # Panics
            /// Panics if the divisor is zero.
            #[inline]
            pub fn div_parts(self, int: $raw, frac: $uraw) -> Self {
                self.wrapping_div(Self::new(int, frac))
            }
        }

        // ====================================================================
        // Square Root
        // ====================================================================

        impl $name {
            /// Approximate square root by Newton–Raphson, accurate to a couple of ulps.
            ///
            /// Returns an error for zero and negative operands.
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn try_sqrt(self) -> $crate::Result<Self> {
                $crate::sqrt::sqrt_raw(self.raw, $frac).map(Self::from_raw)
            }

            /// Approximate square root.
            ///
            /// # Panics
            /// Panics if `self` is zero or negative.
            #[must_use = "this returns the result of the operation, without modifying the original"]
            pub fn sqrt(self) -> Self {
                match self.try_sqrt() {
                    Ok(root) => root,
                    Err(err) => panic!("{}", err),
                }
            }
        }

        // ====================================================================
        // Formatting
        // ====================================================================

        impl $name {
            /// Decimal digits of the fractional magnitude, most significant first.
            pub fn fraction_digits(
                self,
            ) -> $crate::FractionDigits< <$raw as $crate::RawInt>::Word> {
                $crate::FractionDigits::new(
                    <$raw as $crate::RawInt>::magnitude(self.raw),
                    $frac,
                )
            }

            /// Writes `[-]<integer>.<digits>` to `sink`, without the padding or precision
            /// handling of `Display`.
            pub fn write_to<S: ::core::fmt::Write + ?Sized>(
                self,
                sink: &mut S,
            ) -> ::core::fmt::Result {
                $crate::digits::write_decimal(sink, self.raw, $frac)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::digits::fmt_decimal(f, self.raw, $frac)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                if f.alternate() {
                    f.debug_struct(stringify!($name)).field("raw", &self.raw).finish()
                } else {
                    write!(f, concat!(stringify!($name), "({})"), self)
                }
            }
        }

        // ====================================================================
        // Operator Overloading
        // ====================================================================

        impl ::core::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }
        }

        impl ::core::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }
        }

        impl ::core::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }
        }

        impl ::core::ops::Div for $name {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                self.wrapping_neg()
            }
        }

        impl ::core::ops::AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::core::ops::SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::core::ops::MulAssign for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ::core::ops::DivAssign for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl ::core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl<'a> ::core::iter::Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + *x)
            }
        }
    };

    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident(signed $raw:ident, $uraw:ident, frac = $frac:literal);
    ) => {
        $crate::fixed_point!(@common $(#[$attr])* $vis $name, $raw, $uraw, $frac);

        impl $name {
            /// Smallest integer part accepted by [`Self::new`].
            pub const MIN_INT: $raw = <$raw>::MIN >> $frac;

            /// Largest integer part accepted by [`Self::new`].
            pub const MAX_INT: $raw = <$raw>::MAX >> $frac;

            /// Builds `int + frac / 2^FRAC_BITS` for a non-negative `int`, and
            /// `int - frac / 2^FRAC_BITS` for a negative one.
            ///
            /// The fractional numerator always extends the magnitude away from zero, so
            /// `new(-1, 8)` with four fraction bits is `-1.5`.
            pub const fn try_new(int: $raw, frac: $uraw) -> $crate::Result<Self> {
                if int < Self::MIN_INT || int > Self::MAX_INT {
                    return Err($crate::FixedError::IntegerOutOfRange);
                }
                if frac > Self::FRAC_MASK {
                    return Err($crate::FixedError::FractionOutOfRange);
                }

                let raw = if int >= 0 {
                    (int << $frac) | frac as $raw
                } else if frac == 0 {
                    int << $frac
                } else {
                    // Borrow one from the integer part and complement the numerator.
                    ((int - 1) << $frac) | (!(frac - 1) & Self::FRAC_MASK) as $raw
                };

                Ok(Self { raw })
            }

            #[inline(always)]
            pub const fn is_negative(self) -> bool {
                self.raw < 0
            }

            #[inline(always)]
            pub const fn is_positive(self) -> bool {
                self.raw > 0
            }
        }
    };

    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident(unsigned $raw:ident, frac = $frac:literal);
    ) => {
        $crate::fixed_point!(@common $(#[$attr])* $vis $name, $raw, $raw, $frac);

        impl $name {
            /// Smallest integer part accepted by [`Self::new`].
            pub const MIN_INT: $raw = 0;

            /// Largest integer part accepted by [`Self::new`].
            pub const MAX_INT: $raw = <$raw>::MAX >> $frac;

            /// Builds `int + frac / 2^FRAC_BITS`.
            pub const fn try_new(int: $raw, frac: $raw) -> $crate::Result<Self> {
                if int > Self::MAX_INT {
                    return Err($crate::FixedError::IntegerOutOfRange);
                }
                if frac > Self::FRAC_MASK {
                    return Err($crate::FixedError::FractionOutOfRange);
                }

                Ok(Self {
                    raw: (int << $frac) | frac,
                })
            }

            #[inline(always)]
            pub const fn is_negative(self) -> bool {
                false
            }

            #[inline(always)]
            pub const fn is_positive(self) -> bool {
                self.raw != 0
            }
        }
    };
}
