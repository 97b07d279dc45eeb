//! Rental checkout.
//!
//! Looks up the requested tool, counts its chargeable days, prices the rental
//! and assembles the [`RentalAgreement`](crate::models::RentalAgreement).

mod service;

pub use service::{CheckoutService, build_agreement};
