// 📋 Statutory Tables - Category & Construction Period Lookup
// Fixed legal parameters keyed by residential category or commercial
// construction period. Lookups are total: every enum value has an entry.

use crate::error::{RentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// RESIDENTIAL CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Economic,
    Medium,
    Premium,
}

/// Legal parameters for a residential category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentCategory {
    pub category: Category,

    /// Floor applied after the multiplier
    pub minimum_rent: f64,

    pub multiplier: f64,

    pub label: &'static str,
    pub label_ar: &'static str,
}

const RESIDENTIAL_TABLE: [RentCategory; 3] = [
    RentCategory {
        category: Category::Economic,
        minimum_rent: 250.0,
        multiplier: 10.0,
        label: "Economic",
        label_ar: "الفئة الاقتصادية",
    },
    RentCategory {
        category: Category::Medium,
        minimum_rent: 400.0,
        multiplier: 10.0,
        label: "Medium",
        label_ar: "الفئة المتوسطة",
    },
    RentCategory {
        category: Category::Premium,
        minimum_rent: 1000.0,
        multiplier: 20.0,
        label: "Premium",
        label_ar: "الفئة المتميزة",
    },
];

impl Category {
    pub const ALL: [Category; 3] = [Category::Economic, Category::Medium, Category::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Economic => "economic",
            Category::Medium => "medium",
            Category::Premium => "premium",
        }
    }

    pub fn params(&self) -> &'static RentCategory {
        match self {
            Category::Economic => &RESIDENTIAL_TABLE[0],
            Category::Medium => &RESIDENTIAL_TABLE[1],
            Category::Premium => &RESIDENTIAL_TABLE[2],
        }
    }
}

impl FromStr for Category {
    type Err = RentError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| RentError::invalid("category", format!("unknown category `{}`", s)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// COMMERCIAL CONSTRUCTION PERIOD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "before-1944")]
    Before1944,
    #[serde(rename = "1944-1961")]
    From1944To1961,
    #[serde(rename = "1961-1973")]
    From1961To1973,
    #[serde(rename = "1973-1977")]
    From1973To1977,
    #[serde(rename = "after-1977")]
    After1977,
}

/// Legal parameters for a commercial construction period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstructionPeriod {
    pub period: Period,

    /// One-off multiplier under Law 6/1997
    pub multiplier_1997: f64,

    /// Yearly rate under Law 14/2001 (0.02 = 2%)
    pub annual_rate_post_2001: f64,

    pub label: &'static str,
    pub label_ar: &'static str,

    /// Wording of the 1997 adjustment
    pub note_1997: &'static str,
}

const COMMERCIAL_TABLE: [ConstructionPeriod; 5] = [
    ConstructionPeriod {
        period: Period::Before1944,
        multiplier_1997: 8.0,
        annual_rate_post_2001: 0.02,
        label: "before 1/1/1944",
        label_ar: "قبل 1/1/1944",
        note_1997: "eight times the rent - premises built before 1/1/1944",
    },
    ConstructionPeriod {
        period: Period::From1944To1961,
        multiplier_1997: 5.0,
        annual_rate_post_2001: 0.02,
        label: "1/1/1944 to 4/11/1961",
        label_ar: "من 1/1/1944 إلى 4/11/1961",
        note_1997: "five times the rent - premises built 1/1/1944 to 4/11/1961",
    },
    ConstructionPeriod {
        period: Period::From1961To1973,
        multiplier_1997: 4.0,
        annual_rate_post_2001: 0.02,
        label: "5/11/1961 to 6/10/1973",
        label_ar: "من 5/11/1961 إلى 6/10/1973",
        note_1997: "four times the rent - premises built 5/11/1961 to 6/10/1973",
    },
    ConstructionPeriod {
        period: Period::From1973To1977,
        multiplier_1997: 3.0,
        annual_rate_post_2001: 0.02,
        label: "7/10/1973 to 9/9/1977",
        label_ar: "من 7/10/1973 إلى 9/9/1977",
        note_1997: "three times the rent - premises built 7/10/1973 to 9/9/1977",
    },
    ConstructionPeriod {
        period: Period::After1977,
        multiplier_1997: 1.1,
        annual_rate_post_2001: 0.01,
        label: "10/9/1977 to 30/1/1996",
        label_ar: "من 10/9/1977 إلى 30/1/1996",
        note_1997: "10% increase - premises built 10/9/1977 to 30/1/1996",
    },
];

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Before1944,
        Period::From1944To1961,
        Period::From1961To1973,
        Period::From1973To1977,
        Period::After1977,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Before1944 => "before-1944",
            Period::From1944To1961 => "1944-1961",
            Period::From1961To1973 => "1961-1973",
            Period::From1973To1977 => "1973-1977",
            Period::After1977 => "after-1977",
        }
    }

    pub fn params(&self) -> &'static ConstructionPeriod {
        match self {
            Period::Before1944 => &COMMERCIAL_TABLE[0],
            Period::From1944To1961 => &COMMERCIAL_TABLE[1],
            Period::From1961To1973 => &COMMERCIAL_TABLE[2],
            Period::From1973To1977 => &COMMERCIAL_TABLE[3],
            Period::After1977 => &COMMERCIAL_TABLE[4],
        }
    }
}

impl FromStr for Period {
    type Err = RentError;

    fn from_str(s: &str) -> Result<Self> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| {
                RentError::invalid(
                    "construction_period",
                    format!("unknown construction period `{}`", s),
                )
            })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both lookup tables, in declaration order
pub fn residential_table() -> &'static [RentCategory] {
    &RESIDENTIAL_TABLE
}

pub fn commercial_table() -> &'static [ConstructionPeriod] {
    &COMMERCIAL_TABLE
}

// ============================================================================
// TESTS
// ============================================================================
