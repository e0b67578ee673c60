//! Core data models for the payroll register.
//!
//! This module contains all the domain models used throughout the register.

mod employee;
mod report;
mod salary_breakdown;

pub use employee::{Employee, EmployeeForm, SalaryInputs};
pub use report::{EmployeePage, FormattedSummary, ReportSummary, format_rupiah};
pub use salary_breakdown::{AuditStep, SalaryBreakdown};
