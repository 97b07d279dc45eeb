//! Tool Rental Pricing Engine
//!
//! This crate prices multi-day tool rentals: it counts the chargeable days of
//! a rental under the tool's weekend and holiday rules, applies the daily
//! charge and discount, and produces a printable rental agreement.

#![warn(missing_docs)]

pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
