//! Rental request model.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{RentalError, RentalResult};
use crate::format::parse_checkout_date;

/// A validated request to rent a tool.
///
/// Construction fails on invalid input, so every `RentalRequest` in
/// existence has at least one rental day and a discount between 0 and 100.
/// The fields are read-only.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalRequest;
/// use chrono::NaiveDate;
///
/// let request = RentalRequest::parse("LADW", 3, 10, "7/2/20").unwrap();
/// assert_eq!(request.tool_code(), "LADW");
/// assert_eq!(request.checkout_date(), NaiveDate::from_ymd_opt(2020, 7, 2).unwrap());
///
/// assert!(RentalRequest::parse("JAKR", 5, 101, "9/3/15").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalRequest {
    tool_code: String,
    rental_days: u32,
    discount_percent: u32,
    checkout_date: NaiveDate,
}

impl RentalRequest {
    /// Creates a request, validating the day count and discount.
    ///
    /// # Errors
    ///
    /// - `InvalidRentalDayCount` if `rental_days` is below 1
    /// - `InvalidDiscountPercent` if `discount_percent` is outside 0..=100
    pub fn new(
        tool_code: impl Into<String>,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: NaiveDate,
    ) -> RentalResult<Self> {
        Ok(Self {
            tool_code: tool_code.into(),
            rental_days: validate_rental_days(rental_days)?,
            discount_percent: validate_discount_percent(discount_percent)?,
            checkout_date,
        })
    }

    /// Creates a request from a `M/d/yy` or `MM/dd/yy` checkout date string.
    ///
    /// The day count and discount are validated before the date.
    pub fn parse(
        tool_code: impl Into<String>,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: &str,
    ) -> RentalResult<Self> {
        Ok(Self {
            tool_code: tool_code.into(),
            rental_days: validate_rental_days(rental_days)?,
            discount_percent: validate_discount_percent(discount_percent)?,
            checkout_date: parse_checkout_date(checkout_date)?,
        })
    }

    /// The requested tool code.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// The number of days the tool is rented for.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// The discount, as a whole percentage.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// The day the tool leaves the store.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }
}

fn validate_rental_days(rental_days: i32) -> RentalResult<u32> {
    u32::try_from(rental_days)
        .ok()
        .filter(|days| *days >= 1)
        .ok_or(RentalError::InvalidRentalDayCount {
            days: rental_days.into(),
        })
}

fn validate_discount_percent(discount_percent: i32) -> RentalResult<u32> {
    u32::try_from(discount_percent)
        .ok()
        .filter(|percent| *percent <= 100)
        .ok_or(RentalError::InvalidDiscountPercent {
            percent: discount_percent.into(),
        })
}
