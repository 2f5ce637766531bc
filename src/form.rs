// 📝 Form Layer - Raw requests → validated calculator inputs
// Everything a caller submits passes through here before reaching the core:
// required fields, enum codes, and the contract-date ceiling.

use crate::commercial::CommercialInput;
use crate::error::{ensure_positive_rent, RentError, Result};
use crate::residential::ResidentialInput;
use crate::tables::{Category, Period};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Latest contract date the form accepts
pub const MAX_CONTRACT_DATE: (i32, u32, u32) = (1996, 1, 30);

pub fn max_contract_date() -> NaiveDate {
    let (y, m, d) = MAX_CONTRACT_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResidentialRequest {
    pub original_rent: Option<f64>,
    pub category: Option<String>,
    /// Defaults to the caller's "today"
    pub as_of: Option<NaiveDate>,
    pub contract_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommercialRequest {
    pub original_rent: Option<f64>,
    pub construction_period: Option<String>,
    pub contract_date: Option<NaiveDate>,
    pub as_of: Option<NaiveDate>,
    pub notes: Option<String>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| RentError::invalid(field, "required field is missing"))
}

fn check_contract_date(contract_date: NaiveDate) -> Result<NaiveDate> {
    if contract_date > max_contract_date() {
        return Err(RentError::invalid(
            "contract_date",
            format!(
                "must be on or before {} (got {})",
                max_contract_date(),
                contract_date
            ),
        ));
    }
    Ok(contract_date)
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

impl ResidentialRequest {
    pub fn into_input(self, today: NaiveDate) -> Result<ResidentialInput> {
        let original_rent = ensure_positive_rent(required(self.original_rent, "original_rent")?)?;
        let category: Category = required(self.category, "category")?.parse()?;
        let contract_date = self.contract_date.map(check_contract_date).transpose()?;

        Ok(ResidentialInput {
            original_rent,
            category,
            as_of: self.as_of.unwrap_or(today),
            contract_date,
            notes: clean_notes(self.notes),
        })
    }
}

impl CommercialRequest {
    pub fn into_input(self, today: NaiveDate) -> Result<CommercialInput> {
        let original_rent = ensure_positive_rent(required(self.original_rent, "original_rent")?)?;
        let construction_period: Period =
            required(self.construction_period, "construction_period")?.parse()?;
        let contract_date = check_contract_date(required(self.contract_date, "contract_date")?)?;

        Ok(CommercialInput {
            original_rent,
            construction_period,
            contract_date,
            as_of: self.as_of.unwrap_or(today),
            notes: clean_notes(self.notes),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_residential_request_defaults_as_of_to_today() {
        let request = ResidentialRequest {
            original_rent: Some(100.0),
            category: Some("economic".to_string()),
            as_of: None,
            contract_date: None,
            notes: Some("   ".to_string()),
        };

        let input = request.into_input(date(2026, 10, 16)).unwrap();
        assert_eq!(input.as_of, date(2026, 10, 16));
        assert_eq!(input.category, Category::Economic);
        assert_eq!(input.notes, None);
    }

    #[test]
    fn test_residential_contract_date_ceiling() {
        let request = ResidentialRequest {
            original_rent: Some(100.0),
            category: Some("premium".to_string()),
            contract_date: Some(date(1996, 1, 30)),
            ..Default::default()
        };
        let input = request.clone().into_input(date(2025, 1, 1)).unwrap();
        assert_eq!(input.contract_date, Some(date(1996, 1, 30)));

        let err = ResidentialRequest {
            contract_date: Some(date(2001, 6, 1)),
            ..request
        }
        .into_input(date(2025, 1, 1))
        .unwrap_err();
        assert_eq!(err.field(), "contract_date");
    }

    #[test]
    fn test_missing_rent() {
        let err = ResidentialRequest {
            category: Some("medium".to_string()),
            ..Default::default()
        }
        .into_input(date(2025, 1, 1))
        .unwrap_err();

        assert_eq!(err.field(), "original_rent");
    }

    #[test]
    fn test_unknown_category() {
        let err = ResidentialRequest {
            original_rent: Some(50.0),
            category: Some("villa".to_string()),
            ..Default::default()
        }
        .into_input(date(2025, 1, 1))
        .unwrap_err();

        assert_eq!(err.field(), "category");
    }

    #[test]
    fn test_commercial_request_from_json() {
        let request: CommercialRequest = serde_json::from_str(
            r#"{
                "original_rent": 100,
                "construction_period": "before-1944",
                "contract_date": "1990-01-01",
                "as_of": "2026-09-01",
                "notes": "shop on main street"
            }"#,
        )
        .unwrap();

        let input = request.into_input(date(2030, 1, 1)).unwrap();
        assert_eq!(input.construction_period, Period::Before1944);
        assert_eq!(input.as_of, date(2026, 9, 1));
        assert_eq!(input.notes.as_deref(), Some("shop on main street"));
    }

    #[test]
    fn test_contract_date_ceiling() {
        let request = CommercialRequest {
            original_rent: Some(100.0),
            construction_period: Some("after-1977".to_string()),
            contract_date: Some(date(1996, 1, 30)),
            ..Default::default()
        };
        assert!(request.clone().into_input(date(2025, 1, 1)).is_ok());

        let late = CommercialRequest {
            contract_date: Some(date(1996, 1, 31)),
            ..request
        };
        let err = late.into_input(date(2025, 1, 1)).unwrap_err();
        assert_eq!(err.field(), "contract_date");
    }

    #[test]
    fn test_missing_contract_date() {
        let err = CommercialRequest {
            original_rent: Some(100.0),
            construction_period: Some("1944-1961".to_string()),
            ..Default::default()
        }
        .into_input(date(2025, 1, 1))
        .unwrap_err();

        assert_eq!(err.field(), "contract_date");
    }
}
