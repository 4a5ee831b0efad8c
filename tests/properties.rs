use fixbin::{Q4_4, Q16_16, Q32_32, UQ16_16};
use proptest::prelude::*;

fixbin::fixed_point! {
    /// Signed 12.4, generated outside the crate.
    pub struct Q12_4(signed i16, u16, frac = 4);
}

proptest! {
    #[test]
    fn new_encodes_signed_parts(int in -8i8..=7, frac in 0u8..16) {
        let value = Q4_4::new(int, frac).to_f64();
        let fraction = f64::from(frac) / 16.0;
        let expected = if int >= 0 {
            f64::from(int) + fraction
        } else {
            f64::from(int) - fraction
        };
        // -8 with a non-zero numerator is below MIN and wraps
        prop_assume!(expected >= -8.0);
        prop_assert_eq!(value, expected);
    }

    #[test]
    fn new_matches_custom_width(int in -2047i16..=2047, frac in 0u16..16) {
        let value = Q12_4::new(int, frac);
        let frac = i32::from(frac);
        let expected = i32::from(int) * 16 + if int < 0 { -frac } else { frac };
        prop_assert_eq!(i32::from(value.to_raw()), expected);
    }

    #[test]
    fn add_then_sub_is_identity(a in any::<i32>(), b in any::<i32>()) {
        let (a, b) = (Q16_16::from_raw(a), Q16_16::from_raw(b));
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn add_then_sub_is_identity_unsigned(a in any::<u32>(), b in any::<u32>()) {
        let (a, b) = (UQ16_16::from_raw(a), UQ16_16::from_raw(b));
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn double_negation_is_identity(a in any::<i64>()) {
        let a = Q32_32::from_raw(a);
        prop_assert_eq!(-(-a), a);
    }

    #[test]
    fn mul_then_div_round_trips(
        a in -(1i32 << 20)..(1i32 << 20),
        b in (1i32 << 16)..=(1i32 << 22),
        negative in any::<bool>(),
    ) {
        let a = Q16_16::from_raw(a);
        let b = Q16_16::from_raw(if negative { -b } else { b });
        let round_trip = (a * b) / b;
        prop_assert!(
            (round_trip.to_raw() - a.to_raw()).abs() <= 1,
            "{} * {} / {} = {}", a, b, b, round_trip
        );
    }

    #[test]
    fn sqrt_squares_back(raw in 1i64..=i64::MAX) {
        let x = Q32_32::from_raw(raw);
        let root = x.sqrt().to_f64();
        let err = (root * root / x.to_f64() - 1.0).abs();
        prop_assert!(err < 1e-4, "sqrt({}) = {}, relative error {}", x, root, err);
    }

    #[test]
    fn comparison_follows_value(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (Q16_16::from_raw(a), Q16_16::from_raw(b));
        prop_assert_eq!(x < y, x.to_f64() < y.to_f64());
        prop_assert_eq!(x > y, x.to_f64() > y.to_f64());
    }

    #[test]
    fn display_digits_are_exact(raw in any::<i32>()) {
        let x = Q16_16::from_raw(raw);
        let text = x.to_string();
        let parsed: f64 = text.parse().unwrap();
        prop_assert_eq!(parsed, x.to_f64());
        prop_assert!(text.contains('.'));
        prop_assert!(!text.ends_with('0'));
    }

    #[test]
    fn fraction_digits_terminate(raw in any::<i64>()) {
        let digits = Q32_32::from_raw(raw).fraction_digits().count();
        prop_assert!(digits <= 32);
    }
}
