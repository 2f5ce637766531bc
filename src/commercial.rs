// 🏪 Commercial Calculator
// Statutory timeline for commercial leases with a full audit trail:
//
//   Law 6/1997    - one-off multiplier by construction period, then 10% for
//                   1998, 1999 and 2000 (contracts before 26/3/1997 only)
//   Law 14/2001   - 1% or 2% every year 2001..=2024
//   Law 164/2025  - April 2025 annual rate, ×5 from 1/9/2025, then 15% each
//                   1 September 2026..=2030

use crate::error::{ensure_finite_result, ensure_positive_rent, Result};
use crate::escalation::{
    annual_series, Adjustment, Escalation, Gate, GateContext, IncreaseStep, RuleBlock,
};
use crate::tables::Period;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

// Legislated cutoffs. Literal on purpose: they are not derived from other dates.
const LAW_1997_CONTRACT_CUTOFF: (i32, u32, u32) = (1997, 3, 26);
const LAW_1997_TRANSITION_YEARS: (i32, i32) = (1998, 2000);
const LAW_1997_TRANSITION_RATE: f64 = 0.10;
const LAW_2001_START: (i32, u32, u32) = (2001, 1, 1);
const LAW_2001_LAST_YEAR: i32 = 2024;
const LAW_2025_APRIL: (i32, u32, u32) = (2025, 4, 1);
const LAW_2025_SEPTEMBER: (i32, u32, u32) = (2025, 9, 1);
const LAW_2025_MULTIPLIER: f64 = 5.0;
const LAW_2025_ANNUAL_YEARS: (i32, i32) = (2026, 2030);
const LAW_2025_ANNUAL_RATE: f64 = 0.15;

/// Statutory notes shown alongside a commercial audit trail
pub const STATUTORY_NOTES: [&str; 5] = [
    "Laws 6/1997, 14/2001 and 164/2025 have been applied",
    "Law 6/1997: first rent due after 26/3/1997 is multiplied by construction period, then raised 10% yearly for 3 years (1998-2000) from 26 March",
    "Law 14/2001: yearly increase of 1% or 2% by construction period from 2001",
    "Law 164/2025: annual-rate increase in April 2025, fivefold increase in September 2025, 15% yearly from September 2026",
    "The lease ends 5 years after the date of the increase",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialInput {
    pub original_rent: f64,
    pub construction_period: Period,
    pub contract_date: NaiveDate,
    pub as_of: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommercialResult {
    pub original_rent: f64,
    pub construction_period: Period,
    pub construction_period_label: String,
    pub construction_period_label_ar: String,

    /// Rounded to the whole pound
    pub final_rent: f64,

    /// Every applied adjustment, in legal order
    pub steps: Vec<IncreaseStep>,

    pub as_of: NaiveDate,
    pub notes: Option<String>,
}

impl CommercialResult {
    /// Unrounded value after the last step
    pub fn unrounded_rent(&self) -> f64 {
        self.steps
            .last()
            .map_or(self.original_rent, |step| step.after_amount)
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MAX)
}

/// Build the full commercial timeline for one construction period
pub fn commercial_escalation(period: Period) -> Escalation {
    let params = period.params();
    let annual_rate = Adjustment::Increase(params.annual_rate_post_2001);
    let rate_percent = annual_rate.describe();

    // Law 6/1997
    let law_1997 = Gate::ContractBefore(ymd(LAW_1997_CONTRACT_CUTOFF));
    let base_multiplier = RuleBlock::new(
        "1997",
        law_1997.clone(),
        Adjustment::Multiply(params.multiplier_1997),
        format!("{} - 26 March 1997 (Law 6/1997)", params.note_1997),
    );
    let (first, last) = LAW_1997_TRANSITION_YEARS;
    let transition = annual_series(
        first..=last,
        Adjustment::Increase(LAW_1997_TRANSITION_RATE),
        |_| law_1997.clone(),
        |year| year.to_string(),
        |year| format!("10% annual increase - 26 March {} (Law 6/1997)", year),
    );

    // Law 14/2001
    let law_2001 = Gate::AsOfOnOrAfter(ymd(LAW_2001_START));
    let yearly_2001 = annual_series(
        LAW_2001_START.0..=LAW_2001_LAST_YEAR,
        annual_rate,
        |_| law_2001.clone(),
        |year| year.to_string(),
        |year| format!("{} annual increase per Law 14/2001 - {}", rate_percent, year),
    );

    // Law 164/2025
    let april = RuleBlock::new(
        "April 2025",
        Gate::AsOfOnOrAfter(ymd(LAW_2025_APRIL)),
        annual_rate,
        format!("{} annual increase per Law 14/2001 - 2025", rate_percent),
    );
    let september_gate = Gate::AsOfOnOrAfter(ymd(LAW_2025_SEPTEMBER));
    let september = RuleBlock::new(
        "September 2025",
        september_gate.clone(),
        Adjustment::Multiply(LAW_2025_MULTIPLIER),
        "Fivefold increase - 1 September 2025 (Law 164/2025)",
    );
    let (first, last) = LAW_2025_ANNUAL_YEARS;
    let yearly_2025 = annual_series(
        first..=last,
        Adjustment::Increase(LAW_2025_ANNUAL_RATE),
        |year| Gate::AsOfOnOrAfter(ymd((year, 9, 1))).within(&september_gate),
        |year| year.to_string(),
        |year| format!("15% annual increase - 1 September {} (Law 164/2025)", year),
    );

    Escalation::new()
        .then(base_multiplier)
        .then_all(transition)
        .then_all(yearly_2001)
        .then(april)
        .then(september)
        .then_all(yearly_2025)
}

pub fn compute_commercial_rent(input: &CommercialInput) -> Result<CommercialResult> {
    let original_rent = ensure_positive_rent(input.original_rent)?;
    let params = input.construction_period.params();

    let ctx = GateContext::with_contract(input.as_of, input.contract_date);
    let outcome = commercial_escalation(input.construction_period).apply(original_rent, &ctx);
    let final_rent = ensure_finite_result(outcome.value.round())?;

    debug!(
        period = %input.construction_period,
        steps = outcome.steps.len(),
        final_rent,
        "computed commercial rent"
    );

    Ok(CommercialResult {
        original_rent,
        construction_period: input.construction_period,
        construction_period_label: params.label.to_string(),
        construction_period_label_ar: params.label_ar.to_string(),
        final_rent,
        steps: outcome.steps,
        as_of: input.as_of,
        notes: input.notes.clone(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
