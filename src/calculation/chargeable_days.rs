//! Chargeable day counting.
//!
//! This module walks the rental window one calendar day at a time and asks
//! the tool's [`ChargePolicy`] whether each day is billed. The window starts
//! the day after checkout and ends on the due date, inclusive.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{RentalError, RentalResult};

use super::calendar::{
    DayType, Holiday, get_day_type, holiday_on, is_independence_day, is_labor_day, is_weekend,
};

/// Which days of the rental window a tool type is billed for.
///
/// Weekdays are always billable. The variant records whether weekends and
/// the two recognised holidays are billed as well.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::ChargePolicy;
///
/// assert_eq!(ChargePolicy::from_flags(true, false), ChargePolicy::SkipHolidays);
/// assert_eq!(ChargePolicy::from_flags(false, false), ChargePolicy::SkipWeekendsAndHolidays);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargePolicy {
    /// Weekends and holidays are both billed.
    Everyday,
    /// Weekends are billed, holidays are free (subject to the observed-holiday shift).
    SkipHolidays,
    /// Weekends are free, holidays are billed when they fall on a weekday.
    SkipWeekends,
    /// Only ordinary weekdays are billed.
    SkipWeekendsAndHolidays,
}

impl ChargePolicy {
    /// Selects the policy for the given weekend and holiday charge flags.
    pub fn from_flags(weekend_charge: bool, holiday_charge: bool) -> Self {
        match (weekend_charge, holiday_charge) {
            (true, true) => ChargePolicy::Everyday,
            (true, false) => ChargePolicy::SkipHolidays,
            (false, true) => ChargePolicy::SkipWeekends,
            (false, false) => ChargePolicy::SkipWeekendsAndHolidays,
        }
    }

    fn day_rule(self) -> DayRule {
        match self {
            ChargePolicy::Everyday => charge_every_day,
            ChargePolicy::SkipHolidays => charge_skipping_holidays,
            ChargePolicy::SkipWeekends => charge_skipping_weekends,
            ChargePolicy::SkipWeekendsAndHolidays => charge_skipping_weekends_and_holidays,
        }
    }
}

/// Contribution of one day to the running tally: -1, 0 or +1.
type DayRule = fn(&RentalWindow, NaiveDate) -> i64;

/// The span of days covered by a rental.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::RentalWindow;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let window = RentalWindow::new(checkout, 3).unwrap();
/// assert_eq!(window.due_date(), NaiveDate::from_ymd_opt(2020, 7, 5).unwrap());
/// assert_eq!(window.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalWindow {
    checkout_date: NaiveDate,
    rental_days: u32,
    due_date: NaiveDate,
}

impl RentalWindow {
    /// Creates the window for a rental starting on `checkout_date`.
    ///
    /// Returns a `CalculationError` if the due date is outside the supported
    /// calendar range.
    pub fn new(checkout_date: NaiveDate, rental_days: u32) -> RentalResult<Self> {
        let due_date = checkout_date
            .checked_add_days(Days::new(u64::from(rental_days)))
            .ok_or_else(|| RentalError::CalculationError {
                message: format!(
                    "due date overflows the calendar: {} + {} days",
                    checkout_date, rental_days
                ),
            })?;

        Ok(Self {
            checkout_date,
            rental_days,
            due_date,
        })
    }

    /// The day the tool was checked out. It is never billed.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The last day of the rental.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// The number of days in the window.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// Iterates the candidate days, from the day after checkout through the due date.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.checkout_date
            .iter_days()
            .skip(1)
            .take(self.rental_days as usize)
    }
}

/// How a single day of the window was charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAssessment {
    /// The calendar day.
    pub date: NaiveDate,
    /// Weekday, Saturday or Sunday.
    pub day_type: DayType,
    /// The recognised holiday on this day, if any.
    pub holiday: Option<Holiday>,
    /// The amount this day added to the chargeable day tally.
    pub contribution: i64,
}

/// Assesses every day of the rental window under the given policy.
///
/// The policy's rule is chosen once and applied to each day in order.
pub fn assess_rental_days(policy: ChargePolicy, window: &RentalWindow) -> Vec<DayAssessment> {
    let rule = policy.day_rule();

    window
        .days()
        .map(|date| {
            let contribution = rule(window, date);
            trace!(%date, ?policy, contribution, "assessed rental day");
            DayAssessment {
                date,
                day_type: get_day_type(date),
                holiday: holiday_on(date),
                contribution,
            }
        })
        .collect()
}

/// Counts the chargeable days of a rental.
///
/// Walks each day from `checkout_date + 1` through the due date and sums the
/// per-day contributions of `policy`. The running tally is never clamped.
///
/// # Errors
///
/// Returns a `CalculationError` if the due date overflows the calendar or if
/// the tally ends below zero. A negative tally can only come from the
/// Independence-Day-on-a-weekend correction of
/// [`ChargePolicy::SkipWeekendsAndHolidays`].
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{count_chargeable_days, ChargePolicy};
/// use chrono::NaiveDate;
///
/// // Thursday 07/02/15 for 9 days: Independence Day falls on Saturday.
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let days = count_chargeable_days(ChargePolicy::SkipWeekendsAndHolidays, checkout, 9).unwrap();
/// assert_eq!(days, 5);
/// ```
pub fn count_chargeable_days(
    policy: ChargePolicy,
    checkout_date: NaiveDate,
    rental_days: u32,
) -> RentalResult<u32> {
    let window = RentalWindow::new(checkout_date, rental_days)?;
    let rule = policy.day_rule();
    let tally: i64 = window.days().map(|date| rule(&window, date)).sum();

    u32::try_from(tally).map_err(|_| RentalError::CalculationError {
        message: format!(
            "chargeable day tally is {} for {:?} checkout on {} for {} days",
            tally, policy, checkout_date, rental_days
        ),
    })
}

fn charge_every_day(_window: &RentalWindow, _date: NaiveDate) -> i64 {
    1
}

fn charge_skipping_weekends(_window: &RentalWindow, date: NaiveDate) -> i64 {
    if is_weekend(date) { 0 } else { 1 }
}

fn charge_skipping_holidays(window: &RentalWindow, date: NaiveDate) -> i64 {
    if is_independence_day(date) {
        // A weekend holiday is observed on the adjacent weekday. When that
        // weekday lies outside the window, the holiday itself is billed.
        let observed_outside_window = match date.weekday() {
            Weekday::Sat => date.pred_opt() == Some(window.checkout_date),
            Weekday::Sun => date == window.due_date,
            _ => false,
        };
        i64::from(observed_outside_window)
    } else if is_labor_day(date) {
        0
    } else {
        1
    }
}

fn charge_skipping_weekends_and_holidays(_window: &RentalWindow, date: NaiveDate) -> i64 {
    if is_independence_day(date) {
        // The holiday is already free on a weekend, so the observed weekday
        // is removed from the tally instead.
        if is_weekend(date) { -1 } else { 0 }
    } else if is_labor_day(date) || is_weekend(date) {
        0
    } else {
        1
    }
}
