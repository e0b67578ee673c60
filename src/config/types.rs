//! Configuration types for the payroll register.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML configuration files, together with the built-in salary tables used
//! when no rules file is configured.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// The marital status value that marks an employee as married.
pub const MARRIED_STATUS: &str = "Nikah";

/// The position whose allowance is a multiple of base pay.
pub const TOP_POSITION: &str = "Guru Besar";

/// Default number of records shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// The position whose allowance scales with base pay instead of a flat amount.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopPosition {
    /// The position name (e.g., "Guru Besar").
    pub name: String,
    /// Multiplier applied to base pay.
    pub multiplier: Decimal,
}

/// The family allowance rule.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FamilyAllowanceRule {
    /// The marital status that qualifies for the allowance.
    pub married_status: String,
    /// Fraction of base pay paid as allowance.
    pub rate: Decimal,
}

/// Salary lookup tables consumed by the rule engine.
///
/// Loaded from `rules.yaml`, or taken from [`SalaryRules::default`], which
/// carries the standard grade and position tables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryRules {
    /// Pay grade (golongan) to monthly base pay.
    pub base_pay: HashMap<String, u64>,
    /// Position (jabatan) to flat monthly allowance.
    pub position_allowance: HashMap<String, u64>,
    /// The position paid as a multiple of base pay.
    pub top_position: TopPosition,
    /// Child count to fraction of base pay.
    pub child_allowance_rates: HashMap<u32, Decimal>,
    /// Allowance for married employees.
    pub family_allowance: FamilyAllowanceRule,
}

impl Default for SalaryRules {
    fn default() -> Self {
        let base_pay = HashMap::from([
            ("IIIA".to_string(), 2_500_000),
            ("IIIB".to_string(), 3_000_000),
            ("IIIC".to_string(), 3_500_000),
            ("IIID".to_string(), 4_000_000),
        ]);

        let position_allowance = HashMap::from([
            ("Asisten Ahli".to_string(), 300_000),
            ("Lektor".to_string(), 700_000),
            ("Lektor Kepala".to_string(), 1_300_000),
        ]);

        let child_allowance_rates = HashMap::from([
            (1, Decimal::new(5, 2)),
            (2, Decimal::new(8, 2)),
            (3, Decimal::new(12, 2)),
        ]);

        Self {
            base_pay,
            position_allowance,
            top_position: TopPosition {
                name: TOP_POSITION.to_string(),
                multiplier: Decimal::from(3),
            },
            child_allowance_rates,
            family_allowance: FamilyAllowanceRule {
                married_status: MARRIED_STATUS.to_string(),
                rate: Decimal::new(10, 2),
            },
        }
    }
}

impl SalaryRules {
    /// Returns the known pay grades in ascending order.
    pub fn grades(&self) -> Vec<&str> {
        let mut grades: Vec<&str> = self.base_pay.keys().map(String::as_str).collect();
        grades.sort_unstable();
        grades
    }

    /// Returns every position with an allowance rule, including the top position.
    pub fn positions(&self) -> Vec<&str> {
        let mut positions: Vec<&str> = self
            .position_allowance
            .keys()
            .map(String::as_str)
            .chain(std::iter::once(self.top_position.name.as_str()))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

/// Application settings from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Socket address the HTTP API binds to.
    pub bind_address: String,
    /// Number of records per page in listings.
    pub page_size: usize,
    /// Optional salary rules file, relative to the configuration directory.
    pub rules_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("payroll.db"),
            bind_address: "127.0.0.1:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            rules_path: None,
        }
    }
}
