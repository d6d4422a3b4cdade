//! Display formatting for dates, money, areas and status keys.

use shared_types::parse_date;

/// Currency code shown next to coverage, premium and claim amounts.
pub const CURRENCY: &str = "RWF";

/// Format a date or ISO datetime as "Jan 20, 2026".
///
/// Unparseable input is shown as-is; missing input as "-".
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => "-".to_string(),
        Some(s) if s.trim().is_empty() => "-".to_string(),
        Some(s) => parse_date(s)
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

/// Group the integer part of `value` in thousands ("1,250,000").
fn group_thousands(value: f64) -> String {
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 && rounded > 0 {
        out.insert(0, '-');
    }
    out
}

/// "RWF 1,250,000"
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY} {}", group_thousands(amount))
}

/// Farm area in hectares, one decimal place.
pub fn format_area(hectares: f64) -> String {
    format!("{hectares:.1} ha")
}

/// A 0-100 percentage, or a dash when there is nothing to divide by.
pub fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{p:.1}%"),
        None => "-".to_string(),
    }
}

/// Convert a snake_case key to Title Case (e.g. "in_progress" → "In Progress").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
