//! Configuration loading and management for the payroll register.
//!
//! This module loads application settings and the salary rule tables
//! (grade base pay, position allowances, child and family rates) from YAML.
//!
//! # Example
//!
//! ```no_run
//! use payroll_register::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Grades: {:?}", config.rules().grades());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PAGE_SIZE, FamilyAllowanceRule, MARRIED_STATUS, SalaryRules, Settings, TOP_POSITION,
    TopPosition,
};
