// Egyptian Rent Calculator - Core Library
// Statutory rent escalation for old-rent residential and commercial leases.
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod tables;      // Category / construction period lookup
pub mod escalation;  // Dated rule blocks applied to a running value
pub mod residential;
pub mod commercial;
pub mod form;        // Raw request validation
pub mod report;
pub mod config;

// Re-export commonly used types
pub use error::{RentError, Result};
pub use tables::{Category, ConstructionPeriod, Period, RentCategory};
pub use escalation::{
    Adjustment, Escalation, Gate, GateContext, IncreaseStep, Outcome, RuleBlock,
};
pub use residential::{compute_residential_rent, ResidentialInput, ResidentialResult};
pub use commercial::{compute_commercial_rent, CommercialInput, CommercialResult};
pub use form::{CommercialRequest, ResidentialRequest};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PROPERTY TESTS
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn any_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn any_period() -> impl Strategy<Value = Period> {
        prop::sample::select(Period::ALL.to_vec())
    }

    /// Any date between 1940 and 2045
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (0i64..38_000).prop_map(|days| {
            NaiveDate::from_ymd_opt(1940, 1, 1).unwrap() + chrono::Duration::days(days)
        })
    }

    proptest! {
        #[test]
        fn residential_never_decreases(
            rent in 0.01f64..100_000.0,
            category in any_category(),
            as_of in any_date(),
        ) {
            let result = compute_residential_rent(&ResidentialInput {
                original_rent: rent,
                category,
                as_of,
                contract_date: None,
                notes: None,
            }).unwrap();

            prop_assert!(result.final_rent >= result.original_rent.round());
            prop_assert!(result.base_rent >= category.params().minimum_rent);
        }

        #[test]
        fn commercial_steps_are_contiguous(
            rent in 0.01f64..100_000.0,
            period in any_period(),
            contract_date in any_date(),
            as_of in any_date(),
        ) {
            let result = compute_commercial_rent(&CommercialInput {
                original_rent: rent,
                construction_period: period,
                contract_date,
                as_of,
                notes: None,
            }).unwrap();

            prop_assert!(result.final_rent >= result.original_rent.round());
            if let Some(first) = result.steps.first() {
                prop_assert_eq!(first.before_amount, rent);
            }
            for pair in result.steps.windows(2) {
                prop_assert_eq!(pair[0].after_amount, pair[1].before_amount);
            }
            for step in &result.steps {
                prop_assert!(step.after_amount >= step.before_amount);
            }
            prop_assert_eq!(result.final_rent, result.unrounded_rent().round());
        }

        #[test]
        fn lookup_is_idempotent(category in any_category(), period in any_period()) {
            prop_assert_eq!(category.params(), category.params());
            prop_assert_eq!(period.params(), period.params());
        }
    }
}
