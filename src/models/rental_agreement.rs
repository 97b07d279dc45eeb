//! Rental agreement model.
//!
//! The [`RentalAgreement`] is the finalized output of a checkout. Its
//! [`Display`](std::fmt::Display) implementation renders the report handed to
//! the customer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_currency, format_percent, format_us_date};

/// A finalized rental agreement.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalAgreement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let agreement = RentalAgreement {
///     tool_code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     tool_brand: "Werner".to_string(),
///     rental_days: 3,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     due_date: NaiveDate::from_ymd_opt(2020, 7, 5).unwrap(),
///     daily_charge: Decimal::new(199, 2),
///     charge_days: 2,
///     pre_discount_charge: Decimal::new(398, 2),
///     discount_percent: 10,
///     discount_amount: Decimal::new(40, 2),
///     final_charge: Decimal::new(358, 2),
/// };
///
/// let report = agreement.to_string();
/// assert!(report.contains("Due date: 07/05/20"));
/// assert!(report.contains("Final charge: $3.58"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The rented tool's code.
    pub tool_code: String,
    /// The rented tool's type name.
    pub tool_type: String,
    /// The rented tool's brand.
    pub tool_brand: String,
    /// The number of days rented.
    pub rental_days: u32,
    /// The day the tool was checked out.
    pub checkout_date: NaiveDate,
    /// Checkout date plus the rental days.
    pub due_date: NaiveDate,
    /// The charge per chargeable day.
    pub daily_charge: Decimal,
    /// The number of days billed, from the day after checkout through the due date.
    pub charge_days: u32,
    /// Charge days multiplied by the daily charge.
    pub pre_discount_charge: Decimal,
    /// The discount as a whole percentage.
    pub discount_percent: u32,
    /// The discount taken off the pre-discount charge.
    pub discount_amount: Decimal,
    /// The amount owed.
    pub final_charge: Decimal,
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tool code: {}", self.tool_code)?;
        writeln!(f, "Tool type: {}", self.tool_type)?;
        writeln!(f, "Tool brand: {}", self.tool_brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(f, "Checkout date: {}", format_us_date(self.checkout_date))?;
        writeln!(f, "Due date: {}", format_us_date(self.due_date))?;
        writeln!(f, "Daily charge: {}", format_currency(self.daily_charge))?;
        writeln!(f, "Charge days: {}", self.charge_days)?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge)
        )?;
        writeln!(f, "Discount %: {}", format_percent(self.discount_percent))?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount)
        )?;
        write!(f, "Final charge: {}", format_currency(self.final_charge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_agreement() -> RentalAgreement {
        RentalAgreement {
            tool_code: "JAKR".to_string(),
            tool_type: "Jackhammer".to_string(),
            tool_brand: "Ridgid".to_string(),
            rental_days: 4,
            checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2020, 7, 6).unwrap(),
            daily_charge: dec("2.99"),
            charge_days: 1,
            pre_discount_charge: dec("2.99"),
            discount_percent: 50,
            discount_amount: dec("1.50"),
            final_charge: dec("1.49"),
        }
    }

    #[test]
    fn test_report_lists_every_field_in_order() {
        let expected = "\
Tool code: JAKR
Tool type: Jackhammer
Tool brand: Ridgid
Rental days: 4
Checkout date: 07/02/20
Due date: 07/06/20
Daily charge: $2.99
Charge days: 1
Pre-discount charge: $2.99
Discount %: 50%
Discount amount: $1.50
Final charge: $1.49";
        assert_eq!(create_agreement().to_string(), expected);
    }

    #[test]
    fn test_report_pads_whole_dollar_amounts() {
        let mut agreement = create_agreement();
        agreement.discount_percent = 0;
        agreement.discount_amount = Decimal::ZERO;
        agreement.final_charge = dec("2.99");

        let report = agreement.to_string();
        assert!(report.contains("Discount %: 0%"));
        assert!(report.contains("Discount amount: $0.00"));
    }

    #[test]
    fn test_serialize_agreement() {
        let json = serde_json::to_value(create_agreement()).unwrap();
        assert_eq!(json["tool_code"], "JAKR");
        assert_eq!(json["checkout_date"], "2020-07-02");
        assert_eq!(json["discount_amount"], "1.50");
        assert_eq!(json["charge_days"], 1);

        let deserialized: RentalAgreement = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, create_agreement());
    }
}
