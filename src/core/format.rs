//! en-US presentation of amounts and date ranges.

use chrono::{Datelike, NaiveDate};

/// Formats `amount` as en-US currency, e.g. `$1,234.56` or `-$50.00`.
///
/// Codes without a known symbol render as `1,234.56 CHF`.
pub fn format_currency(amount: f64, currency_code: &str) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let code = currency_code.trim().to_ascii_uppercase();
    let digits = group_thousands(amount.abs());
    let sign = if amount < 0.0 && digits != "0.00" { "-" } else { "" };
    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{digits}"),
        None => format!("{sign}{digits} {code}"),
    }
}

/// Like [`format_currency`] but renders a missing value as an empty string.
pub fn format_optional_currency(amount: Option<f64>, currency_code: &str) -> String {
    amount
        .map(|value| format_currency(value, currency_code))
        .unwrap_or_default()
}

/// Human label for an inclusive date range.
///
/// `Feb 1 - 15, 2024` within a month, `Jan 16 - Feb 2, 2024` within a year,
/// `Dec 16, 2023 - Jan 15, 2024` across years.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() == end.year() {
        if start.month() == end.month() {
            return format!("{} - {}, {}", start.format("%b %-d"), end.day(), end.year());
        }
        return format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"));
    }
    format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
}

/// Percent with one decimal place, e.g. `40.0%`.
pub fn format_percent(percent: f64) -> String {
    if percent.is_finite() {
        format!("{percent:.1}%")
    } else {
        "0.0%".into()
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));
    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    format!("{grouped}.{dec_part}")
}
