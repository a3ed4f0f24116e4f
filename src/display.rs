//! Number and label formatting for summaries and chart axes

/// Currency symbol for a display currency code, `$` when unknown
pub fn currency_symbol(code: &str) -> &'static str {
    match code.trim().to_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "NGN" => "₦",
        _ => "$",
    }
}

/// Chart tick label for a 1-based month
pub fn year_label(month: u32) -> String {
    format!("Yr {}", month.saturating_sub(1) / 12 + 1)
}

/// Group a string of ASCII digits with commas: "1234567" -> "1,234,567"
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit amount with thousands separators, truncated toward zero
pub fn format_full_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let truncated = value.trunc();
    let grouped = group_thousands(&format!("{:.0}", truncated.abs()));
    if truncated < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// At most two decimals, trailing zeros dropped
fn format_scaled(n: f64) -> String {
    if n.fract() == 0.0 {
        return group_thousands(&format!("{:.0}", n));
    }
    let fixed = format!("{:.2}", n);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed.split_once('.') {
        Some((whole, frac)) => format!("{}.{}", group_thousands(whole), frac),
        None => group_thousands(trimmed),
    }
}

/// Amount for narrow layouts: 10m and above collapse to m/b/t suffixes
///
/// With `compact` false this is the same as [`format_full_number`].
pub fn format_abbrev_number(value: f64, compact: bool) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if !compact {
        return format_full_number(value);
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1e12 {
        format!("{}{}t", sign, format_scaled(abs / 1e12))
    } else if abs >= 1e9 {
        format!("{}{}b", sign, format_scaled(abs / 1e9))
    } else if abs >= 1e7 {
        format!("{}{}m", sign, format_scaled(abs / 1e6))
    } else {
        format_full_number(value)
    }
}

/// Y-axis tick label: thousands shown as `k`
pub fn format_axis_value(value: f64) -> String {
    if value >= 1000.0 {
        format!("{}k", value / 1000.0)
    } else {
        format!("{}", value)
    }
}

/// Amount prefixed with its currency symbol; negative or invalid amounts show as 0
pub fn format_currency(value: f64, currency_code: &str) -> String {
    let shown = if value.is_finite() && value >= 0.0 { value } else { 0.0 };
    format!("{}{}", currency_symbol(currency_code), format_full_number(shown))
}
