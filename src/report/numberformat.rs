/// 預設輸出精度（有效位數），與 C++ iostream 預設相同
pub const DEFAULT_PRECISION: usize = 6;

/// 視為整數的容許誤差
pub fn integral_tolerance() -> f64 {
    f64::EPSILON * 1000.0
}

/// 若數值與最接近的整數相差小於 `integral_tolerance()`，輸出該整數；
/// 否則以固定小數點輸出一位小數。
///
/// 固定小數輸出為 `-0.0` 時一律視為 `0`；非有限值沿用 C 函式庫的 `nan` / `inf` 寫法。
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format_general(value, DEFAULT_PRECISION);
    }

    let nearest = value.round();
    if (value - nearest).abs() < integral_tolerance() {
        return format_integer(nearest);
    }

    let fixed = format!("{:.1}", value);
    if fixed == "-0.0" {
        return "0".to_owned();
    }
    fixed
}

/// 已知為整數值的浮點數，不帶小數點、不帶負零
pub fn format_integer(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else {
        format!("{:.0}", value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// format_general：等同 printf("%.*g")
// ─────────────────────────────────────────────────────────────────────────────
//
// 先以科學記號取 precision 位有效數字，得到十進位指數 X：
//   X < -4 或 X >= precision  → 科學記號，指數至少兩位並帶正負號
//   其他                        → 固定小數，precision - 1 - X 位小數
// 最後移除小數部分結尾的 0 及多餘的小數點。

pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(21.0), "21");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(21.0 + 1e-14), "21");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(21.33333), "21.3");
        assert_eq!(format_number(64.0 / 3.0), "21.3");
        assert_eq!(format_number(31.275), "31.3");
        assert_eq!(format_number(-2.46), "-2.5");
        assert_eq!(format_number(0.04), "0.0");
    }

    #[test]
    fn test_format_number_negative_zero_rendering() {
        assert_eq!(format_number(-0.00000001), "0");
        assert_eq!(format_number(-0.04), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_general_fixed_range() {
        assert_eq!(format_general(22.0, DEFAULT_PRECISION), "22");
        assert_eq!(format_general(64.0 / 3.0, DEFAULT_PRECISION), "21.3333");
        assert_eq!(format_general(1.5, DEFAULT_PRECISION), "1.5");
        assert_eq!(format_general(-2.5, DEFAULT_PRECISION), "-2.5");
        assert_eq!(format_general(0.1, DEFAULT_PRECISION), "0.1");
        assert_eq!(format_general(0.0001, DEFAULT_PRECISION), "0.0001");
        assert_eq!(format_general(100000.0, DEFAULT_PRECISION), "100000");
        assert_eq!(format_general(123456.7, DEFAULT_PRECISION), "123457");
    }

    #[test]
    fn test_format_general_scientific_range() {
        assert_eq!(format_general(1e-5, DEFAULT_PRECISION), "1e-05");
        assert_eq!(format_general(1234567.0, DEFAULT_PRECISION), "1.23457e+06");
        assert_eq!(format_general(999999.5, DEFAULT_PRECISION), "1e+06");
        assert_eq!(format_general(-2.5e-7, DEFAULT_PRECISION), "-2.5e-07");
        assert_eq!(format_general(1e100, DEFAULT_PRECISION), "1e+100");
    }

    #[test]
    fn test_format_general_special_values() {
        assert_eq!(format_general(0.0, DEFAULT_PRECISION), "0");
        assert_eq!(format_general(-0.0, DEFAULT_PRECISION), "-0");
        assert_eq!(format_general(f64::INFINITY, DEFAULT_PRECISION), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, DEFAULT_PRECISION), "-inf");
        assert_eq!(format_general(f64::NAN, DEFAULT_PRECISION), "nan");
    }

    #[test]
    fn test_format_general_precision() {
        assert_eq!(format_general(3.14159265, 3), "3.14");
        assert_eq!(format_general(3.14159265, 0), "3");
    }
}
