//! Display formatting helpers shared by views.

use chrono::{DateTime, Utc};

/// Currencies the product form offers.
pub const SUPPORTED_CURRENCIES: [&str; 7] = ["USD", "EUR", "GBP", "JPY", "CAD", "AUD", "INR"];

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "INR" => Some("₹"),
        _ => None,
    }
}

fn currency_decimals(code: &str) -> usize {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an amount the way an en-US currency formatter would.
///
/// Known codes use their symbol (`$1,234.50`); unknown codes are prefixed
/// with the code itself (`CHF 12.50`).
pub fn format_currency(amount: f64, currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    let decimals = currency_decimals(&code);
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (fixed.clone(), None),
    };

    let mut number = group_thousands(&int_part);
    if let Some(frac) = frac_part {
        number.push('.');
        number.push_str(&frac);
    }

    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match currency_symbol(&code) {
        Some(symbol) => format!("{sign}{symbol}{number}"),
        None => format!("{sign}{code}\u{a0}{number}"),
    }
}

/// Prefix `https://` when the URL has no scheme. Blank input stays blank.
pub fn ensure_url_protocol(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Host part of a product link, for compact display ("amazon.com").
pub fn display_host(url: &str) -> String {
    let full = ensure_url_protocol(url);
    let without_scheme = full.split_once("://").map_or(full.as_str(), |(_, rest)| rest);
    let host = without_scheme.split(['/', '?', '#']).next().unwrap_or_default();
    host.trim_start_matches("www.").to_string()
}

/// Short relative timestamp ("just now", "5m ago", "3h ago", "2d ago"),
/// falling back to a calendar date after a week.
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let seconds = elapsed.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = elapsed.num_days();
    if days < 7 {
        return format!("{days}d ago");
    }
    at.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn formats_zero_dollars() {
        assert_eq!(format_currency(0.0, "USD"), "$0.00");
    }

    #[test]
    fn formats_euro_with_two_decimals() {
        assert_eq!(format_currency(12.5, "EUR"), "€12.50");
    }

    #[test]
    fn groups_thousands_and_handles_negative() {
        assert_eq!(format_currency(1234567.891, "USD"), "$1,234,567.89");
        assert_eq!(format_currency(-5.0, "GBP"), "-£5.00");
        assert_eq!(format_currency(-0.001, "USD"), "$0.00");
    }

    #[test]
    fn yen_has_no_minor_units() {
        assert_eq!(format_currency(1500.4, "JPY"), "¥1,500");
    }

    #[test]
    fn unknown_currency_uses_code_prefix() {
        assert_eq!(format_currency(12.5, "chf"), "CHF\u{a0}12.50");
    }

    #[test]
    fn adds_https_when_missing() {
        assert_eq!(ensure_url_protocol("example.com"), "https://example.com");
        assert_eq!(ensure_url_protocol("http://x.com"), "http://x.com");
        assert_eq!(ensure_url_protocol("HTTPS://Shop.com/a"), "HTTPS://Shop.com/a");
        assert_eq!(ensure_url_protocol("   "), "");
    }

    #[test]
    fn display_host_strips_scheme_path_and_www() {
        assert_eq!(display_host("https://www.amazon.com/dp/123?ref=x"), "amazon.com");
        assert_eq!(display_host("etsy.com/listing/9"), "etsy.com");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(format_relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(format_relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(format_relative_time(now - Duration::days(30), now), "Feb 8, 2026");
    }
}
