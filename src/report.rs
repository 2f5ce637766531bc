// 🧾 Plain-text Reports
// Renders calculator results for the terminal. Amounts in the audit table
// are shown with 2 decimals; the final rent is a whole number.

use crate::commercial::{CommercialResult, STATUTORY_NOTES};
use crate::escalation::{Adjustment, IncreaseStep};
use crate::residential::ResidentialResult;
use crate::tables::{commercial_table, residential_table};
use std::fmt::Write;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn push_notes(out: &mut String, notes: &Option<String>) {
    if let Some(notes) = notes {
        let _ = writeln!(out, "Notes:                       {}", notes);
    }
}

pub fn render_residential(result: &ResidentialResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🏠 Residential rent (as of {})", result.as_of);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Original rent:               {:.2} EGP", result.original_rent);
    if let Some(contract_date) = result.contract_date {
        let _ = writeln!(out, "Contract date:               {}", contract_date);
    }
    let _ = writeln!(
        out,
        "Category:                    {} ({})",
        result.category_label, result.category_label_ar
    );
    let _ = writeln!(out, "Multiplier:                  ×{}", result.multiplier);
    let _ = writeln!(out, "Category minimum:            {:.2} EGP", result.minimum_rent);
    let _ = writeln!(out, "Rent after multiplier:       {:.2} EGP", result.multiplied_rent);
    let _ = writeln!(out, "Base rent (after minimum):   {:.2} EGP", result.base_rent);
    let _ = writeln!(out, "Final monthly rent:          {:.0} EGP", result.final_rent);
    push_notes(&mut out, &result.notes);
    out
}

pub fn render_steps(steps: &[IncreaseStep]) -> String {
    if steps.is_empty() {
        return "No increases to display\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:>14} {:>8} {:>14}  {}",
        "Period", "Before", "Change", "After", "Note"
    );
    for step in steps {
        let _ = writeln!(
            out,
            "{:<16} {:>14} {:>8} {:>14}  {}",
            step.period_label,
            step.before_display(),
            step.change_description,
            step.after_display(),
            step.note
        );
    }
    out
}

pub fn render_commercial(result: &CommercialResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🏪 Commercial rent (as of {})", result.as_of);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Original rent:               {:.2} EGP", result.original_rent);
    let _ = writeln!(
        out,
        "Construction date:           {} ({})",
        result.construction_period_label, result.construction_period_label_ar
    );
    let _ = writeln!(out, "Final monthly rent:          {:.0} EGP", result.final_rent);
    push_notes(&mut out, &result.notes);

    let _ = writeln!(out, "\n📊 Increase schedule");
    out.push_str(&render_steps(&result.steps));

    let _ = writeln!(out, "\nℹ️  Important notes");
    for note in STATUTORY_NOTES {
        let _ = writeln!(out, "  - {}", note);
    }
    out
}

/// Both lookup tables
pub fn render_tables() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Residential categories");
    let _ = writeln!(out, "{:<10} {:>10} {:>10}", "code", "minimum", "multiplier");
    for row in residential_table() {
        let _ = writeln!(
            out,
            "{:<10} {:>10} {:>10}",
            row.category.as_str(),
            row.minimum_rent,
            format!("×{}", row.multiplier)
        );
    }

    let _ = writeln!(out, "\nCommercial construction periods");
    let _ = writeln!(
        out,
        "{:<12} {:>8} {:>8}  {}",
        "code", "1997", "2001+", "built"
    );
    for row in commercial_table() {
        let _ = writeln!(
            out,
            "{:<12} {:>8} {:>8}  {}",
            row.period.as_str(),
            format!("×{}", row.multiplier_1997),
            Adjustment::Increase(row.annual_rate_post_2001).describe(),
            row.label
        );
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commercial::{compute_commercial_rent, CommercialInput};
    use crate::residential::{compute_residential_rent, ResidentialInput};
    use crate::tables::{Category, Period};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(render_steps(&[]), "No increases to display\n");
    }

    #[test]
    fn test_residential_report() {
        let result = compute_residential_rent(&ResidentialInput {
            original_rent: 60.0,
            category: Category::Premium,
            as_of: date(2027, 1, 1),
            contract_date: None,
            notes: Some("top floor".to_string()),
        })
        .unwrap();

        let text = render_residential(&result);
        assert!(text.contains("Base rent (after minimum):   1200.00 EGP"));
        assert!(text.contains("Final monthly rent:          1587 EGP"));
        assert!(text.contains("top floor"));
    }

    #[test]
    fn test_commercial_report_lists_every_step() {
        let result = compute_commercial_rent(&CommercialInput {
            original_rent: 1000.0,
            construction_period: Period::After1977,
            contract_date: date(1990, 1, 1),
            as_of: date(2000, 1, 1),
            notes: None,
        })
        .unwrap();

        let text = render_commercial(&result);
        assert!(text.contains("Final monthly rent:          1464 EGP"));
        assert!(text.contains("1464.10"));
        assert!(text.contains("Law 14/2001"));
        assert!(!text.contains("Notes:"));
    }

    #[test]
    fn test_tables_render_every_code() {
        let text = render_tables();
        for period in Period::ALL {
            assert!(text.contains(period.as_str()));
        }
        for category in Category::ALL {
            assert!(text.contains(category.as_str()));
        }
    }

    #[test]
    fn test_table_rates_match_step_format() {
        let text = render_tables();
        let before_1944 = text
            .lines()
            .find(|line| line.starts_with("before-1944"))
            .unwrap();
        assert!(before_1944.contains(" 2% "));

        let after_1977 = text
            .lines()
            .find(|line| line.starts_with("after-1977"))
            .unwrap();
        assert!(after_1977.contains(" 1% "));
        assert!(after_1977.contains("×1.1"));
    }
}
