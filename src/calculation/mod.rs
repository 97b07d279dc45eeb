//! Calculation logic for the tool rental engine.
//!
//! This module contains the calendar predicates used to classify rental days,
//! the chargeable day counter that applies a tool's charge policy across the
//! rental window, and the pricing functions that turn a day count into money.

mod calendar;
mod chargeable_days;
mod pricing;

pub use calendar::{
    DayType, Holiday, get_day_type, holiday_on, is_independence_day, is_labor_day, is_weekend,
};
pub use chargeable_days::{
    ChargePolicy, DayAssessment, RentalWindow, assess_rental_days, count_chargeable_days,
};
pub use pricing::{
    CURRENCY_DECIMAL_PLACES, ChargeBreakdown, calculate_charges, discount_amount, final_charge,
    pre_discount_charge,
};
