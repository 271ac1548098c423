//! Number formatting for the en-IN locale (lakh / crore grouping)

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;
const RUPEE: &str = "₹";

/// Formats a rupee amount, collapsing large values into lakhs or crores
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_currency;
/// assert_eq!(format_currency(10_000_000.0), "₹1.00 Cr");
/// assert_eq!(format_currency(250_000.0), "₹2.50 L");
/// assert_eq!(format_currency(9_999.0), "₹9,999");
/// ```
pub fn format_currency(value: f64) -> String {
    if value >= CRORE {
        format!("{}{:.2} Cr", RUPEE, round_half_up(value / CRORE, 2))
    } else if value >= LAKH {
        format!("{}{:.2} L", RUPEE, round_half_up(value / LAKH, 2))
    } else {
        format!("{}{}", RUPEE, format_number(value))
    }
}

/// Formats a number with Indian digit grouping and at most three fraction digits
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number;
/// assert_eq!(format_number(1_234_567.0), "12,34,567");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else {
        ""
    };
    if value.is_infinite() {
        return format!("{}∞", sign);
    }

    let formatted = format!("{:.3}", round_half_up(value.abs(), 3));
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let decimal_part = decimal_part.trim_end_matches('0');

    // -0.0004 rounds to zero and must not keep its sign
    let sign = if integer_part == "0" && decimal_part.is_empty() {
        ""
    } else {
        sign
    };

    let grouped = group_indian(integer_part);
    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Ties go away from zero (`toFixed` semantics); `{:.N}` alone would pick the even digit
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Inserts separators: last three digits, then every two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
