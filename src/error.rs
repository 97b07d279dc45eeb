//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while pricing a rental.

use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// Errors fall into two groups. Validation errors describe a caller mistake
/// (bad input, unknown tool) and are surfaced verbatim. Every other failure
/// is internal and reaches callers of
/// [`CheckoutService`](crate::checkout::CheckoutService) as
/// [`RentalError::CheckoutFailed`].
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::UnknownTool {
///     code: "DRIL".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown tool code: DRIL");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed or is inconsistent.
    #[error("Failed to parse catalog file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The tool code is not present in the catalog.
    #[error("Unknown tool code: {code}")]
    UnknownTool {
        /// The tool code that was not found.
        code: String,
    },

    /// The rental must cover at least one day.
    #[error("Tool must be rented for at least 1 day, got {days}")]
    InvalidRentalDayCount {
        /// The rejected day count.
        days: i64,
    },

    /// The discount percent must lie in the 0 to 100 range.
    #[error("Discount percent must be between 0 and 100, got {percent}")]
    InvalidDiscountPercent {
        /// The rejected discount percent.
        percent: i64,
    },

    /// The checkout date matched neither `M/d/yy` nor `MM/dd/yy`.
    #[error("Invalid checkout date '{input}': expected M/d/yy or MM/dd/yy")]
    InvalidCheckoutDate {
        /// The raw input that failed to parse.
        input: String,
    },

    /// An internal calculation step failed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// The checkout could not be processed.
    #[error("Unable to process checkout: {message}")]
    CheckoutFailed {
        /// A description of the underlying failure.
        message: String,
    },
}

impl RentalError {
    /// Returns true for errors caused by invalid caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RentalError::UnknownTool { .. }
                | RentalError::InvalidRentalDayCount { .. }
                | RentalError::InvalidDiscountPercent { .. }
                | RentalError::InvalidCheckoutDate { .. }
        )
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
