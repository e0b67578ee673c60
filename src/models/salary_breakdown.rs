//! Salary breakdown models.
//!
//! This module contains the [`SalaryBreakdown`] produced by the rule engine
//! and the [`AuditStep`] entries that record each rule application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Employee;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The derived salary components for one employee.
///
/// # Example
///
/// ```
/// use payroll_register::models::{Employee, SalaryBreakdown};
/// use chrono::Utc;
///
/// let breakdown = SalaryBreakdown {
///     base_pay: 3_000_000,
///     family_allowance: 300_000,
///     child_allowance: 240_000,
///     position_allowance: 700_000,
///     net_pay: 4_240_000,
///     calculated_at: Utc::now(),
///     audit_trace: vec![],
/// };
///
/// let mut employee = Employee::default();
/// breakdown.apply_to(&mut employee);
/// assert_eq!(employee.net_pay, 4_240_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Base pay from the grade table.
    pub base_pay: u64,
    /// Allowance for married employees.
    pub family_allowance: u64,
    /// Allowance scaled by child count.
    pub child_allowance: u64,
    /// Allowance attached to the position.
    pub position_allowance: u64,
    /// Sum of base pay and the three allowances.
    pub net_pay: u64,
    /// When the calculation ran.
    pub calculated_at: DateTime<Utc>,
    /// One step per rule, in computation order.
    pub audit_trace: Vec<AuditStep>,
}

impl SalaryBreakdown {
    /// Writes the derived amounts into a record.
    pub fn apply_to(&self, employee: &mut Employee) {
        employee.base_pay = self.base_pay;
        employee.family_allowance = self.family_allowance;
        employee.child_allowance = self.child_allowance;
        employee.position_allowance = self.position_allowance;
        employee.net_pay = self.net_pay;
    }
}
