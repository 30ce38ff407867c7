//! Money helpers.
//!
//! Product prices travel on the wire as decimal strings. Parsing is
//! tolerant of a leading currency symbol and of comma decimal separators
//! so that hand-entered catalog data still sums correctly.

/// Parse a decimal price string into a number. Unparseable input counts
/// as zero so that one bad record never poisons a cart total.
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .trim()
        .replace('\u{a0}', "")
        .replace(' ', "");
    // "12,50" means twelve and a half only when there is no dot already.
    let normalized = if cleaned.contains(',') && !cleaned.contains('.') {
        cleaned.replace(',', ".")
    } else {
        cleaned.replace(',', "")
    };
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Format an amount as currency: "$1 234,56" with a non-breaking space
/// as the thousands separator.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${},{:02}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_plain() {
        assert_eq!(parse_price("12.50"), 12.5);
        assert_eq!(parse_price("0"), 0.0);
        assert_eq!(parse_price("1999.99"), 1999.99);
    }

    #[test]
    fn test_parse_price_decorated() {
        assert_eq!(parse_price("$ 12.50"), 12.5);
        assert_eq!(parse_price("12,50"), 12.5);
        assert_eq!(parse_price("1,234.56"), 1234.56);
    }

    #[test]
    fn test_parse_price_garbage_is_zero() {
        assert_eq!(parse_price("n/a"), 0.0);
        assert_eq!(parse_price(""), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0,00");
        assert_eq!(format_currency(12.5), "$12,50");
        assert_eq!(format_currency(1234.56), "$1\u{a0}234,56");
        assert_eq!(format_currency(1234567.0), "$1\u{a0}234\u{a0}567,00");
    }

    #[test]
    fn test_format_currency_rounds_cents() {
        assert_eq!(format_currency(9.999), "$10,00");
    }
}
