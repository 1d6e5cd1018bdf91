//! Display formatting for amounts, percentages and dates.

use chrono::NaiveDate;

use crate::config::Config;

/// Decimal and grouping separators for a BCP 47 language tag.
pub fn separators_for(locale: &str) -> (char, char) {
    let language = locale.split(['-', '_']).next().unwrap_or("en");
    match language {
        "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => (',', '.'),
        _ => ('.', ','),
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `value` with fixed precision and digit grouping.
pub fn format_number(locale: &str, value: f64, precision: u8) -> String {
    let (decimal, grouping) = separators_for(locale);
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body.as_str(), None),
    };
    let mut out = String::new();
    if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push(decimal);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Currency amount such as `$1,234.56` or `-$5.00`.
pub fn format_currency(amount: f64, config: &Config) -> String {
    let code = config.currency.to_uppercase();
    let number = format_number(&config.locale, amount, minor_units_for(&code));
    let symbol = symbol_for(&code);
    match number.strip_prefix('-') {
        Some(unsigned) => format!("-{symbol}{unsigned}"),
        None => format!("{symbol}{number}"),
    }
}

/// Share with one decimal place, e.g. `66.7%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Medium date such as `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_amounts_use_symbol_grouping_and_cents() {
        let config = Config::default();
        assert_eq!(format_currency(1234.5, &config), "$1,234.50");
        assert_eq!(format_currency(0.0, &config), "$0.00");
        assert_eq!(format_currency(-40.0, &config), "-$40.00");
        assert_eq!(format_currency(1_000_000.0, &config), "$1,000,000.00");
    }

    #[test]
    fn locale_and_currency_change_separators_and_precision() {
        let config = Config {
            locale: "de-DE".into(),
            currency: "eur".into(),
            ..Config::default()
        };
        assert_eq!(format_currency(1234.5, &config), "€1.234,50");

        let yen = Config {
            currency: "JPY".into(),
            ..Config::default()
        };
        assert_eq!(format_currency(1500.0, &yen), "¥1,500");
    }

    #[test]
    fn negative_values_that_round_to_zero_drop_the_sign() {
        assert_eq!(format_number("en-US", -0.001, 2), "0.00");
    }

    #[test]
    fn dates_and_percentages() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
        assert_eq!(format_percentage(200.0 / 3.0), "66.7%");
    }
}
