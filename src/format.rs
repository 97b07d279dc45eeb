//! US date and currency formatting.
//!
//! Checkout dates arrive as `M/d/yy` or `MM/dd/yy` and are always printed as
//! `MM/dd/yy`. Monetary amounts print as US dollars with thousands
//! separators.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::CURRENCY_DECIMAL_PLACES;
use crate::error::{RentalError, RentalResult};

const US_DATE_FORMAT: &str = "%m/%d/%y";

/// Parses a checkout date in `M/d/yy` or `MM/dd/yy` form.
///
/// Two-digit years are read as 2000 through 2099.
///
/// # Example
///
/// ```
/// use tool_rental::format::parse_checkout_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// assert_eq!(parse_checkout_date("7/2/20").unwrap(), expected);
/// assert_eq!(parse_checkout_date("07/02/20").unwrap(), expected);
/// assert!(parse_checkout_date("2020-07-02").is_err());
/// ```
pub fn parse_checkout_date(input: &str) -> RentalResult<NaiveDate> {
    let invalid = || RentalError::InvalidCheckoutDate {
        input: input.to_string(),
    };
    let trimmed = input.trim();

    // %y alone would also accept a single digit year
    let year_digits = trimmed.rsplit('/').next().unwrap_or_default();
    if year_digits.len() != 2 {
        return Err(invalid());
    }

    let parsed = NaiveDate::parse_from_str(trimmed, US_DATE_FORMAT).map_err(|_| invalid())?;
    if parsed.year() >= 2000 {
        return Ok(parsed);
    }
    parsed.with_year(parsed.year() + 100).ok_or_else(invalid)
}

/// Formats a date as `MM/dd/yy`.
///
/// # Example
///
/// ```
/// use tool_rental::format::format_us_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2015, 9, 9).unwrap();
/// assert_eq!(format_us_date(date), "09/09/15");
/// ```
pub fn format_us_date(date: NaiveDate) -> String {
    date.format(US_DATE_FORMAT).to_string()
}

/// Formats an amount as US dollars, e.g. `$1,234.50` or `-$1.00`.
///
/// Amounts with more than two decimal places are rounded half to even.
///
/// # Example
///
/// ```
/// use tool_rental::format::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1.99").unwrap()), "$1.99");
/// assert_eq!(format_currency(Decimal::from_str("1234.5").unwrap()), "$1,234.50");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Formats a whole percentage, e.g. `10%`.
pub fn format_percent(percent: u32) -> String {
    format!("{percent}%")
}
