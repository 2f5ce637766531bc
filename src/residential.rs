// 🏠 Residential Calculator
// Category multiplier with a minimum floor, then 15% yearly from 1/9/2026.

use crate::error::{ensure_finite_result, ensure_positive_rent, RentError, Result};
use crate::escalation::{annual_series, Adjustment, Escalation, Gate, GateContext};
use crate::tables::Category;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// First date the yearly residential increase applies
pub const ESCALATION_START: (i32, u32, u32) = (2026, 9, 1);

pub const ANNUAL_RATE: f64 = 0.15;

/// Latest evaluation year accepted; keeps the yearly loop bounded
pub const MAX_AS_OF_YEAR: i32 = 2100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentialInput {
    pub original_rent: f64,
    pub category: Category,
    pub as_of: NaiveDate,
    /// Recorded only; no residential rule is keyed on it
    #[serde(default)]
    pub contract_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentialResult {
    pub original_rent: f64,
    pub category: Category,
    pub category_label: String,
    pub category_label_ar: String,
    pub multiplier: f64,
    pub minimum_rent: f64,

    /// original_rent × multiplier, before the floor
    pub multiplied_rent: f64,

    /// max(multiplied_rent, minimum_rent)
    pub base_rent: f64,

    /// Rounded to the whole pound
    pub final_rent: f64,

    pub as_of: NaiveDate,
    pub contract_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

fn escalation_start() -> NaiveDate {
    let (y, m, d) = ESCALATION_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MAX)
}

/// Yearly 15% blocks for every calendar year from 2026 through `as_of`'s year
pub fn residential_escalation(as_of: NaiveDate) -> Escalation {
    let gate = Gate::AsOfOnOrAfter(escalation_start());

    Escalation::new().then_all(annual_series(
        ESCALATION_START.0..=as_of.year(),
        Adjustment::Increase(ANNUAL_RATE),
        |_| gate.clone(),
        |year| year.to_string(),
        |year| format!("15% annual increase - {}", year),
    ))
}

pub fn compute_residential_rent(input: &ResidentialInput) -> Result<ResidentialResult> {
    let original_rent = ensure_positive_rent(input.original_rent)?;
    if input.as_of.year() > MAX_AS_OF_YEAR {
        return Err(RentError::invalid(
            "as_of",
            format!("must be in {} or earlier (got {})", MAX_AS_OF_YEAR, input.as_of),
        ));
    }
    let params = input.category.params();

    let multiplied_rent = original_rent * params.multiplier;
    let base_rent = multiplied_rent.max(params.minimum_rent);

    let current = residential_escalation(input.as_of)
        .apply_value(base_rent, &GateContext::as_of(input.as_of));
    let final_rent = ensure_finite_result(current.round())?;

    debug!(
        category = %input.category,
        base_rent,
        final_rent,
        "computed residential rent"
    );

    Ok(ResidentialResult {
        original_rent,
        category: input.category,
        category_label: params.label.to_string(),
        category_label_ar: params.label_ar.to_string(),
        multiplier: params.multiplier,
        minimum_rent: params.minimum_rent,
        multiplied_rent,
        base_rent,
        final_rent,
        as_of: input.as_of,
        contract_date: input.contract_date,
        notes: input.notes.clone(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
