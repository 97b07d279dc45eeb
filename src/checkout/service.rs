//! The checkout service.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::calculation::{RentalWindow, calculate_charges, count_chargeable_days};
use crate::config::ToolCatalog;
use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, RentalRequest, ToolPolicy};

/// Produces rental agreements from validated requests.
///
/// The catalog is read-only once loaded, so the service is cheap to clone
/// and may be shared between threads.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::CheckoutService;
/// use tool_rental::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let service = CheckoutService::new(ConfigLoader::builtin().unwrap().into_catalog());
/// let agreement = service.checkout("LADW", 3, 10, "7/2/20").unwrap();
/// assert_eq!(agreement.charge_days, 2);
/// assert_eq!(agreement.final_charge, Decimal::new(358, 2));
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutService {
    catalog: Arc<ToolCatalog>,
}

impl CheckoutService {
    /// Creates a service over the given catalog.
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the catalog the service prices against.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Validates the raw inputs and checks the tool out.
    ///
    /// Validation errors are returned as-is, before any catalog lookup.
    pub fn checkout(
        &self,
        tool_code: &str,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: &str,
    ) -> RentalResult<RentalAgreement> {
        let request =
            RentalRequest::parse(tool_code, rental_days, discount_percent, checkout_date)
                .inspect_err(|err| {
                    warn!(
                        tool_code = %tool_code,
                        rental_days,
                        discount_percent,
                        checkout_date = %checkout_date,
                        error = %err,
                        "Rejected rental request"
                    );
                })?;
        self.process_checkout(&request)
    }

    /// Builds the rental agreement for a request.
    ///
    /// # Errors
    ///
    /// - `UnknownTool` if the tool code is not in the catalog
    /// - `CheckoutFailed` if the agreement could not be computed
    pub fn process_checkout(&self, request: &RentalRequest) -> RentalResult<RentalAgreement> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            tool_code = %request.tool_code(),
            rental_days = request.rental_days(),
            discount_percent = request.discount_percent(),
            checkout_date = %request.checkout_date(),
            "Processing checkout"
        );

        let tool = self.catalog.get_tool(request.tool_code()).inspect_err(|_| {
            warn!(
                correlation_id = %correlation_id,
                tool_code = %request.tool_code(),
                "Tool not found"
            );
        })?;

        let start_time = Instant::now();
        match build_agreement(tool, request) {
            Ok(agreement) => {
                info!(
                    correlation_id = %correlation_id,
                    tool_code = %agreement.tool_code,
                    charge_days = agreement.charge_days,
                    final_charge = %agreement.final_charge,
                    duration_us = start_time.elapsed().as_micros(),
                    "Checkout completed successfully"
                );
                Ok(agreement)
            }
            Err(err) => {
                error!(
                    correlation_id = %correlation_id,
                    tool_code = %request.tool_code(),
                    checkout_date = %request.checkout_date(),
                    rental_days = request.rental_days(),
                    error = %err,
                    "Checkout failed"
                );
                Err(RentalError::CheckoutFailed {
                    message: err.to_string(),
                })
            }
        }
    }
}

/// Computes the agreement for a tool and a validated request.
///
/// This is the unlogged core of [`CheckoutService::process_checkout`]; its
/// errors are the raw computation failures.
pub fn build_agreement(tool: &ToolPolicy, request: &RentalRequest) -> RentalResult<RentalAgreement> {
    let window = RentalWindow::new(request.checkout_date(), request.rental_days())?;
    let policy = tool.charge_policy();
    let charge_days =
        count_chargeable_days(policy, request.checkout_date(), request.rental_days())?;
    let charges = calculate_charges(charge_days, tool.daily_charge, request.discount_percent())?;

    debug!(
        tool_code = %tool.code,
        policy = ?policy,
        due_date = %window.due_date(),
        charge_days,
        pre_discount_charge = %charges.pre_discount_charge,
        discount_amount = %charges.discount_amount,
        "Priced rental"
    );

    Ok(RentalAgreement {
        tool_code: tool.code.clone(),
        tool_type: tool.tool_type.clone(),
        tool_brand: tool.brand.clone(),
        rental_days: request.rental_days(),
        checkout_date: request.checkout_date(),
        due_date: window.due_date(),
        daily_charge: tool.daily_charge,
        charge_days,
        pre_discount_charge: charges.pre_discount_charge,
        discount_percent: request.discount_percent(),
        discount_amount: charges.discount_amount,
        final_charge: charges.final_charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service() -> CheckoutService {
        CheckoutService::new(ConfigLoader::builtin().unwrap().into_catalog())
    }

    fn create_tool(weekend_charge: bool, holiday_charge: bool) -> ToolPolicy {
        ToolPolicy {
            code: "TEST".to_string(),
            tool_type: "Test".to_string(),
            brand: "Acme".to_string(),
            daily_charge: dec("2.00"),
            weekday_charge: true,
            weekend_charge,
            holiday_charge,
        }
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<CheckoutService>();
    }

    #[test]
    fn test_checkout_ladder_over_independence_day() {
        let agreement = service().checkout("LADW", 3, 10, "7/2/20").unwrap();
        assert_eq!(agreement.tool_type, "Ladder");
        assert_eq!(agreement.tool_brand, "Werner");
        assert_eq!(agreement.due_date, NaiveDate::from_ymd_opt(2020, 7, 5).unwrap());
        assert_eq!(agreement.charge_days, 2);
        assert_eq!(agreement.pre_discount_charge, dec("3.98"));
        assert_eq!(agreement.discount_amount, dec("0.40"));
        assert_eq!(agreement.final_charge, dec("3.58"));
    }

    #[test]
    fn test_unknown_tool_surfaced_verbatim() {
        match service().checkout("DRIL", 3, 10, "7/2/20") {
            Err(RentalError::UnknownTool { code }) => assert_eq!(code, "DRIL"),
            other => panic!("Expected UnknownTool, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_runs_before_lookup() {
        let result = service().checkout("DRIL", 5, 101, "9/3/15");
        assert!(matches!(
            result,
            Err(RentalError::InvalidDiscountPercent { percent: 101 })
        ));
    }

    #[test]
    fn test_bad_date_surfaced_verbatim() {
        let err = service().checkout("LADW", 3, 10, "July 2").unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, RentalError::InvalidCheckoutDate { .. }));
    }

    #[test]
    fn test_negative_tally_becomes_checkout_failed() {
        // Friday 07/03/15 for one day: only Saturday the 4th is in the window.
        let result = service().checkout("JAKR", 1, 0, "7/3/15");
        match result {
            Err(RentalError::CheckoutFailed { message }) => {
                assert!(message.contains("tally is -1"), "{message}");
            }
            other => panic!("Expected CheckoutFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_build_agreement_raw_error_is_calculation_error() {
        let request =
            RentalRequest::new("TEST", 1, 0, NaiveDate::from_ymd_opt(2015, 7, 3).unwrap())
                .unwrap();
        let result = build_agreement(&create_tool(false, false), &request);
        assert!(matches!(result, Err(RentalError::CalculationError { .. })));
    }

    #[test]
    fn test_build_agreement_everyday_tool() {
        let request =
            RentalRequest::new("TEST", 7, 25, NaiveDate::from_ymd_opt(2015, 7, 1).unwrap())
                .unwrap();
        let agreement = build_agreement(&create_tool(true, true), &request).unwrap();
        assert_eq!(agreement.charge_days, 7);
        assert_eq!(agreement.pre_discount_charge, dec("14.00"));
        assert_eq!(agreement.discount_amount, dec("3.50"));
        assert_eq!(agreement.final_charge, dec("10.50"));
    }

    #[test]
    fn test_date_overflow_becomes_checkout_failed() {
        let request = RentalRequest::new("LADW", i32::MAX, 0, NaiveDate::MAX).unwrap();
        assert!(matches!(
            service().process_checkout(&request),
            Err(RentalError::CheckoutFailed { .. })
        ));
    }

    #[test]
    fn test_shared_service_across_threads() {
        let service = service();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || service.checkout("CHNS", 5, 25, "7/2/15").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().final_charge, dec("3.35"));
        }
    }
}
