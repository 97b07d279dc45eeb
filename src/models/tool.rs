//! Tool catalog entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ChargePolicy;

/// A rentable tool with its pricing rules.
///
/// The daily charge and the three charge flags come from the tool's type;
/// the code and brand identify the individual tool.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::ChargePolicy;
/// use tool_rental::models::ToolPolicy;
/// use rust_decimal::Decimal;
///
/// let ladder = ToolPolicy {
///     code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     brand: "Werner".to_string(),
///     daily_charge: Decimal::new(199, 2),
///     weekday_charge: true,
///     weekend_charge: true,
///     holiday_charge: false,
/// };
/// assert_eq!(ladder.charge_policy(), ChargePolicy::SkipHolidays);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPolicy {
    /// Unique tool code (e.g., "LADW").
    pub code: String,
    /// The tool type name (e.g., "Ladder").
    pub tool_type: String,
    /// The brand name (e.g., "Werner").
    pub brand: String,
    /// The charge for each chargeable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed.
    pub weekday_charge: bool,
    /// Whether Saturdays and Sundays are billed.
    pub weekend_charge: bool,
    /// Whether Independence Day and Labor Day are billed.
    pub holiday_charge: bool,
}

impl ToolPolicy {
    /// Returns the charge policy selected by the weekend and holiday flags.
    pub fn charge_policy(&self) -> ChargePolicy {
        ChargePolicy::from_flags(self.weekend_charge, self.holiday_charge)
    }
}
