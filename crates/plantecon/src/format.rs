//! Human-readable formatting for monetary values, rates and durations.

/// Format a currency value without cents, with thousands separators.
pub fn format_currency(value: f64) -> String {
    let abs_value = value.abs();
    let dollars = abs_value.round() as i64;

    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let dollars_formatted: String = result.chars().rev().collect();

    if value >= 0.0 {
        format!("${dollars_formatted}")
    } else {
        format!("-${dollars_formatted}")
    }
}

/// Format a decimal fraction as a percentage (0.1234 -> "12.34%").
pub fn format_rate(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a value already expressed in percent (12.34 -> "12.34%").
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format a fractional year count.
pub fn format_years(value: f64) -> String {
    format!("{value:.2} years")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_separators() {
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1_000_000.0), "-$1,000,000");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.1234), "12.34%");
        assert_eq!(format_rate(-0.05), "-5.00%");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20.00%");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(6.51), "6.51 years");
    }
}
