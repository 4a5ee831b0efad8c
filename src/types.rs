//! Predefined Q-format types.

fixed_point! {
    /// Signed 4.4 fixed point: range [-8, 8), precision 0.0625.
    pub struct Q4_4(signed i8, u8, frac = 4);
}

fixed_point! {
    /// Unsigned 4.4 fixed point: range [0, 16), precision 0.0625.
    pub struct UQ4_4(unsigned u8, frac = 4);
}

fixed_point! {
    /// Signed 8.8 fixed point: range [-128, 128), precision 0.00390625.
    pub struct Q8_8(signed i16, u16, frac = 8);
}

fixed_point! {
    /// Unsigned 8.8 fixed point: range [0, 256), precision 0.00390625.
    pub struct UQ8_8(unsigned u16, frac = 8);
}

fixed_point! {
    /// Signed 1.15 fixed point, the usual DSP sample format: range [-1, 1).
    pub struct Q1_15(signed i16, u16, frac = 15);
}

fixed_point! {
    /// Signed 16.16 fixed point: range [-32768, 32768), precision ~0.0000153.
    pub struct Q16_16(signed i32, u32, frac = 16);
}

fixed_point! {
    /// Unsigned 16.16 fixed point: range [0, 65536).
    pub struct UQ16_16(unsigned u32, frac = 16);
}

fixed_point! {
    /// Signed 32.32 fixed point: range ±2,147,483,648, precision ~2.3e-10.
    pub struct Q32_32(signed i64, u64, frac = 32);
}

fixed_point! {
    /// Unsigned 32.32 fixed point: range [0, 4,294,967,296).
    pub struct UQ32_32(unsigned u64, frac = 32);
}

fixed_point! {
    /// Signed 64.64 fixed point. Intermediates use 256-bit integers.
    pub struct Q64_64(signed i128, u128, frac = 64);
}





#[cfg(test)]
mod display_tests {
    use std::format;
    use std::string::{String, ToString};

    use super::*;

    #[test]
    fn test_display_known_values() {
        assert_eq!(Q4_4::new(-1, 0).to_string(), "-1.");
        assert_eq!(Q4_4::new(-1, 8).to_string(), "-1.5");
        assert_eq!(Q4_4::new(4, 3).to_string(), "4.1875");
        assert_eq!((-Q4_4::new(4, 3)).to_string(), "-4.1875");
    }

    #[test]
    fn test_display_zero_and_small() {
        assert_eq!(Q4_4::ZERO.to_string(), "0.");
        assert_eq!(Q4_4::DELTA.to_string(), "0.0625");
        assert_eq!((-Q4_4::new(0, 8)).to_string(), "-0.5");
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(Q4_4::MIN.to_string(), "-8.");
        assert_eq!(Q4_4::MAX.to_string(), "7.9375");
        assert_eq!(UQ4_4::MAX.to_string(), "15.9375");
        assert_eq!(Q1_15::MIN.to_string(), "-1.");
        assert_eq!(Q16_16::MIN.to_string(), "-32768.");
        assert_eq!(Q64_64::new(-1, 1 << 62).to_string(), "-1.25");
    }

    #[test]
    fn test_display_full_precision() {
        assert_eq!(Q16_16::DELTA.to_string(), "0.0000152587890625");
        assert_eq!(Q1_15::new(0, 1).to_string(), "0.000030517578125");
    }

    #[test]
    fn test_display_width_and_alignment() {
        let x = Q4_4::new(4, 3);
        assert_eq!(format!("{:>10}", x), "    4.1875");
        assert_eq!(format!("{:<10}|", x), "4.1875    |");
        assert_eq!(format!("{:*^10}", x), "**4.1875**");
        assert_eq!(format!("{:>7}", -Q4_4::new(0, 8)), "   -0.5");
        assert_eq!(format!("{:3}", x), "4.1875");
    }

    #[test]
    fn test_display_sign_flags() {
        assert_eq!(format!("{:+}", Q4_4::new(4, 3)), "+4.1875");
        assert_eq!(format!("{:+}", Q4_4::new(-1, 8)), "-1.5");
        assert_eq!(format!("{:08}", Q4_4::new(-1, 8)), "-00001.5");
    }

    #[test]
    fn test_display_precision_truncates() {
        assert_eq!(format!("{:.2}", Q4_4::new(4, 3)), "4.18");
        assert_eq!(format!("{:.3}", Q4_4::new(-4, 15)), "-4.937");
        assert_eq!(format!("{:.0}", Q4_4::new(4, 3)), "4.");
        assert_eq!(format!("{:.10}", Q4_4::new(4, 3)), "4.1875");
        assert_eq!(format!("{:>8.1}", Q16_16::new(-1, 0x8000)), "    -1.5");
        assert_eq!(format!("{:.4}", Q64_64::DELTA), "0.0000");
    }

    #[test]
    fn test_write_to_sink() {
        let mut out = String::new();
        Q8_8::new(-12, 64).write_to(&mut out).unwrap();
        out.push(';');
        UQ8_8::new(200, 32).write_to(&mut out).unwrap();
        assert_eq!(out, "-12.25;200.125");
    }

    #[test]
    fn test_fraction_digits() {
        let digits: String = Q4_4::new(4, 3).fraction_digits().collect();
        assert_eq!(digits, "1875");
        let digits: String = Q4_4::new(-1, 8).fraction_digits().collect();
        assert_eq!(digits, "5");
        assert_eq!(Q4_4::from_int(3).fraction_digits().next(), None);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Q4_4::new(-1, 8)), "Q4_4(-1.5)");
        assert_eq!(format!("{:#?}", Q4_4::new(-1, 8)), "Q4_4 {\n    raw: -24,\n}");
    }
}
