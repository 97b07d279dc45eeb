//! Calendar predicates for rental day classification.
//!
//! This module decides whether a date is a weekend day and whether it is one
//! of the two recognised holidays (Independence Day and Labor Day).

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day within the rental window.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// A holiday recognised by the rental charge rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4th.
    IndependenceDay,
    /// First Monday in September.
    LaborDay,
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2020-07-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2020, 7, 6).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    get_day_type(date) != DayType::Weekday
}

/// Returns true if the date is July 4th, whatever day of the week it falls on.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_independence_day;
/// use chrono::NaiveDate;
///
/// assert!(is_independence_day(NaiveDate::from_ymd_opt(2015, 7, 4).unwrap()));
/// assert!(!is_independence_day(NaiveDate::from_ymd_opt(2015, 7, 3).unwrap()));
/// ```
pub fn is_independence_day(date: NaiveDate) -> bool {
    date.month() == 7 && date.day() == 4
}

/// Returns true if the date is the first Monday in September.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_labor_day;
/// use chrono::NaiveDate;
///
/// assert!(is_labor_day(NaiveDate::from_ymd_opt(2015, 9, 7).unwrap()));
/// assert!(!is_labor_day(NaiveDate::from_ymd_opt(2015, 9, 14).unwrap()));
/// ```
pub fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() < 8
}

/// Classifies a date as one of the recognised holidays, if any.
pub fn holiday_on(date: NaiveDate) -> Option<Holiday> {
    if is_independence_day(date) {
        Some(Holiday::IndependenceDay)
    } else if is_labor_day(date) {
        Some(Holiday::LaborDay)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_is_weekday() {
        assert_eq!(get_day_type(make_date("2020-07-06")), DayType::Weekday);
        assert!(!is_weekend(make_date("2020-07-06")));
    }

    #[test]
    fn test_friday_is_weekday() {
        assert_eq!(get_day_type(make_date("2020-07-03")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_is_weekend() {
        assert_eq!(get_day_type(make_date("2020-07-04")), DayType::Saturday);
        assert!(is_weekend(make_date("2020-07-04")));
    }

    #[test]
    fn test_sunday_is_weekend() {
        assert_eq!(get_day_type(make_date("2020-07-05")), DayType::Sunday);
        assert!(is_weekend(make_date("2020-07-05")));
    }

    #[test]
    fn test_independence_day_on_every_weekday() {
        // Saturday, Sunday, Monday, Tuesday, Thursday, Friday
        for date in [
            "2020-07-04",
            "2021-07-04",
            "2022-07-04",
            "2023-07-04",
            "2019-07-04",
            "2025-07-04",
        ] {
            assert!(is_independence_day(make_date(date)), "{date}");
        }
    }

    #[test]
    fn test_neighbouring_days_are_not_independence_day() {
        assert!(!is_independence_day(make_date("2020-07-03")));
        assert!(!is_independence_day(make_date("2020-07-05")));
        assert!(!is_independence_day(make_date("2020-06-04")));
    }

    #[test]
    fn test_labor_day_is_first_monday_of_september() {
        assert!(is_labor_day(make_date("2015-09-07")));
        assert!(is_labor_day(make_date("2021-09-06")));
        assert!(is_labor_day(make_date("2025-09-01")));
    }

    #[test]
    fn test_second_monday_of_september_is_not_labor_day() {
        assert!(!is_labor_day(make_date("2015-09-14")));
        // Day 8 is the earliest possible second Monday
        assert!(!is_labor_day(make_date("2025-09-08")));
    }

    #[test]
    fn test_non_monday_early_september_is_not_labor_day() {
        assert!(!is_labor_day(make_date("2015-09-04")));
        assert!(!is_labor_day(make_date("2015-09-01")));
    }

    #[test]
    fn test_first_monday_of_other_month_is_not_labor_day() {
        // 2015-08-03 is the first Monday of August
        assert!(!is_labor_day(make_date("2015-08-03")));
    }

    #[test]
    fn test_holiday_on_classifies_dates() {
        assert_eq!(
            holiday_on(make_date("2015-07-04")),
            Some(Holiday::IndependenceDay)
        );
        assert_eq!(holiday_on(make_date("2015-09-07")), Some(Holiday::LaborDay));
        assert_eq!(holiday_on(make_date("2015-09-08")), None);
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(DayType::Weekday.to_string(), "Weekday");
        assert_eq!(DayType::Sunday.to_string(), "Sunday");
        assert_eq!(Holiday::IndependenceDay.to_string(), "Independence Day");
        assert_eq!(Holiday::LaborDay.to_string(), "Labor Day");
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Saturday).unwrap();
        assert_eq!(json, "\"saturday\"");

        let json = serde_json::to_string(&Holiday::IndependenceDay).unwrap();
        assert_eq!(json, "\"independence_day\"");
    }
}
