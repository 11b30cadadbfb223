//! Monetary input parsing and display formatting.
//!
//! # Responsibility
//! - Normalize free-form user amounts (`"1.234,56"`) into a non-negative
//!   `f64`.
//! - Render amounts in the decimal-comma display form used throughout the
//!   app.
//!
//! # Invariants
//! - `parse_money` is total: absent, malformed or negative input becomes 0.
//! - `format_money` always yields two decimals and the ` €` suffix.

/// Parses a user-entered amount using decimal-comma conventions.
///
/// Every `.` is treated as a thousands separator and removed; the first `,`
/// becomes the decimal point. Input that does not survive as a finite
/// number maps to `0.0`. Negative amounts are clamped to `0.0`; payments
/// and rates are never negative in this model.
pub fn parse_money(input: Option<&str>) -> f64 {
    let Some(raw) = input else {
        return 0.0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = trimmed.replace('.', "").replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}

/// Formats an amount as a fixed two-decimal string with `.` thousands
/// grouping, `,` decimal separator and a trailing euro marker.
///
/// Display-only; the result never round-trips except through
/// [`parse_money`]. Non-finite input renders as zero. Negative amounts keep
/// their sign; an overpaid balance shows as `-50,00 €`.
pub fn format_money(amount: f64) -> String {
    let value = if amount.is_finite() { amount } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}{},{:02} €", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits: Vec<char> = value.to_string().chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }
    grouped
}
