// 📈 Escalation Pipeline - Rules as Data
// An ordered list of dated rule blocks applied to a running rent value.
//
// Each block is (gate, adjustment, description). Gates are evaluated in
// order and independently: a closed gate skips its block, later blocks still
// run. Values keep full precision; only callers round the final figure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, trace};

// ============================================================================
// GATES
// ============================================================================

/// Dates a gate can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateContext {
    /// Evaluation "now", supplied by the caller
    pub as_of: NaiveDate,

    /// Lease contract date (commercial only)
    pub contract_date: Option<NaiveDate>,
}

impl GateContext {
    pub fn as_of(as_of: NaiveDate) -> Self {
        GateContext {
            as_of,
            contract_date: None,
        }
    }

    pub fn with_contract(as_of: NaiveDate, contract_date: NaiveDate) -> Self {
        GateContext {
            as_of,
            contract_date: Some(contract_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Always,

    /// Inclusive: open when `as_of >= date`
    AsOfOnOrAfter(NaiveDate),

    /// Exclusive: open when `contract_date < date`; closed without a contract date
    ContractBefore(NaiveDate),

    /// Open only when every inner gate is open (nested conditions)
    All(Vec<Gate>),
}

impl Gate {
    pub fn is_open(&self, ctx: &GateContext) -> bool {
        match self {
            Gate::Always => true,
            Gate::AsOfOnOrAfter(date) => ctx.as_of >= *date,
            Gate::ContractBefore(date) => ctx.contract_date.map_or(false, |c| c < *date),
            Gate::All(gates) => gates.iter().all(|g| g.is_open(ctx)),
        }
    }

    /// Nest this gate inside `outer`
    pub fn within(self, outer: &Gate) -> Gate {
        match (outer, self) {
            (Gate::Always, inner) => inner,
            (Gate::All(gates), inner) => {
                let mut gates = gates.clone();
                gates.push(inner);
                Gate::All(gates)
            }
            (outer, inner) => Gate::All(vec![outer.clone(), inner]),
        }
    }
}

// ============================================================================
// ADJUSTMENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Flat multiplier, e.g. ×5
    Multiply(f64),

    /// Percentage increase as a fraction, e.g. 0.15 for 15%
    Increase(f64),
}

impl Adjustment {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Adjustment::Multiply(factor) => value * factor,
            Adjustment::Increase(rate) => value * (1.0 + rate),
        }
    }

    /// Short human form: "×5", "15%", "1.5%"
    pub fn describe(&self) -> String {
        match self {
            Adjustment::Multiply(factor) => format!("×{}", factor),
            Adjustment::Increase(rate) => {
                let percent = (rate * 1000.0).round() / 10.0;
                if percent.fract() == 0.0 {
                    format!("{:.0}%", percent)
                } else {
                    format!("{:.1}%", percent)
                }
            }
        }
    }
}

// ============================================================================
// RULE BLOCK & AUDIT STEP
// ============================================================================

/// One legally mandated adjustment
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBlock {
    pub label: String,
    pub gate: Gate,
    pub adjustment: Adjustment,
    pub note: String,
}

impl RuleBlock {
    pub fn new(
        label: impl Into<String>,
        gate: Gate,
        adjustment: Adjustment,
        note: impl Into<String>,
    ) -> Self {
        RuleBlock {
            label: label.into(),
            gate,
            adjustment,
            note: note.into(),
        }
    }

    fn describe(&self, before: f64, after: f64) -> IncreaseStep {
        IncreaseStep {
            period_label: self.label.clone(),
            before_amount: before,
            after_amount: after,
            change_description: self.adjustment.describe(),
            note: self.note.clone(),
        }
    }
}

/// Audit entry for one applied block. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncreaseStep {
    pub period_label: String,
    pub before_amount: f64,
    pub after_amount: f64,
    pub change_description: String,
    pub note: String,
}

impl IncreaseStep {
    pub fn before_display(&self) -> String {
        format!("{:.2}", self.before_amount)
    }

    pub fn after_display(&self) -> String {
        format!("{:.2}", self.after_amount)
    }
}

/// One block per year, in ascending order, each compounding on the last
///
/// Residential and commercial yearly escalations are both built from this.
pub fn annual_series<G, L, N>(
    years: RangeInclusive<i32>,
    adjustment: Adjustment,
    gate: G,
    label: L,
    note: N,
) -> Vec<RuleBlock>
where
    G: Fn(i32) -> Gate,
    L: Fn(i32) -> String,
    N: Fn(i32) -> String,
{
    years
        .map(|year| RuleBlock::new(label(year), gate(year), adjustment, note(year)))
        .collect()
}

// ============================================================================
// PIPELINE
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub value: f64,
    pub steps: Vec<IncreaseStep>,
}

#[derive(Debug, Clone, Default)]
pub struct Escalation {
    blocks: Vec<RuleBlock>,
}

impl Escalation {
    pub fn new() -> Self {
        Escalation { blocks: Vec::new() }
    }

    /// Append a block; insertion order is application order
    pub fn then(mut self, block: RuleBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn then_all(mut self, blocks: impl IntoIterator<Item = RuleBlock>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn blocks(&self) -> &[RuleBlock] {
        &self.blocks
    }

    /// Run every block and record a step for each one applied
    pub fn apply(&self, start: f64, ctx: &GateContext) -> Outcome {
        let mut steps = Vec::new();
        let value = self.run(start, ctx, Some(&mut steps));
        Outcome { value, steps }
    }

    /// Run every block without recording steps
    pub fn apply_value(&self, start: f64, ctx: &GateContext) -> f64 {
        self.run(start, ctx, None)
    }

    fn run(&self, start: f64, ctx: &GateContext, mut trail: Option<&mut Vec<IncreaseStep>>) -> f64 {
        let mut current = start;

        for block in &self.blocks {
            if !block.gate.is_open(ctx) {
                trace!(block = %block.label, "gate closed, skipping");
                continue;
            }

            let before = current;
            current = block.adjustment.apply(current);
            debug!(
                block = %block.label,
                before,
                after = current,
                change = %block.adjustment.describe(),
                "applied rule block"
            );

            if let Some(steps) = trail.as_deref_mut() {
                steps.push(block.describe(before, current));
            }
        }

        current
    }
}

// ============================================================================
// TESTS
// ============================================================================
