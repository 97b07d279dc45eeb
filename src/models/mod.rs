//! Core data models for the tool rental engine.
//!
//! This module contains the catalog entry for a rentable tool, the validated
//! rental request and the finalized rental agreement.

mod rental_agreement;
mod rental_request;
mod tool;

pub use rental_agreement::RentalAgreement;
pub use rental_request::RentalRequest;
pub use tool::ToolPolicy;
