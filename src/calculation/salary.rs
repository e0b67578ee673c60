//! Full salary recalculation.
//!
//! This module runs the rule functions in their fixed order (base pay first,
//! since the three allowances depend on it, then net pay) and records each
//! application as an [`AuditStep`].

use chrono::Utc;
use tracing::debug;

use crate::config::SalaryRules;
use crate::models::{AuditStep, Employee, EmployeeForm, SalaryBreakdown, SalaryInputs};

use super::{
    compute_base_pay, compute_child_allowance, compute_family_allowance, compute_net_pay,
    compute_position_allowance,
};

/// Calculates every derived salary component for a set of rule inputs.
///
/// # Examples
///
/// ```
/// use payroll_register::calculation::calculate_salary;
/// use payroll_register::config::SalaryRules;
/// use payroll_register::models::SalaryInputs;
///
/// let inputs = SalaryInputs {
///     grade: "IIIB",
///     marital_status: "Nikah",
///     child_count: 2,
///     position: "Lektor",
/// };
///
/// let breakdown = calculate_salary(inputs, &SalaryRules::default());
/// assert_eq!(breakdown.net_pay, 4_240_000);
/// assert_eq!(breakdown.audit_trace.len(), 5);
/// ```
pub fn calculate_salary(inputs: SalaryInputs<'_>, rules: &SalaryRules) -> SalaryBreakdown {
    let base_pay = compute_base_pay(inputs.grade, rules);
    let family_allowance = compute_family_allowance(base_pay, inputs.marital_status, rules);
    let child_allowance = compute_child_allowance(base_pay, inputs.child_count, rules);
    let position_allowance = compute_position_allowance(base_pay, inputs.position, rules);
    let net_pay = compute_net_pay(base_pay, family_allowance, child_allowance, position_allowance);

    let base_pay_reasoning = if base_pay == 0 {
        format!("Grade '{}' is not in the base pay table", inputs.grade)
    } else {
        format!("Grade '{}' maps to base pay {}", inputs.grade, base_pay)
    };

    let family_reasoning = if inputs.marital_status == rules.family_allowance.married_status {
        format!(
            "Married: {} x {} = {}",
            base_pay,
            rules.family_allowance.rate.normalize(),
            family_allowance
        )
    } else {
        format!(
            "Status '{}' does not qualify for family allowance",
            inputs.marital_status
        )
    };

    let child_reasoning = match rules.child_allowance_rates.get(&inputs.child_count) {
        Some(rate) => format!(
            "{} children: {} x {} = {}",
            inputs.child_count,
            base_pay,
            rate.normalize(),
            child_allowance
        ),
        None => format!(
            "No child allowance rate for {} children",
            inputs.child_count
        ),
    };

    let position_reasoning = if inputs.position == rules.top_position.name {
        format!(
            "'{}' earns {} x base pay {} = {}",
            inputs.position,
            rules.top_position.multiplier.normalize(),
            base_pay,
            position_allowance
        )
    } else if rules.position_allowance.contains_key(inputs.position) {
        format!(
            "'{}' carries a flat allowance of {}",
            inputs.position, position_allowance
        )
    } else {
        format!("Position '{}' has no allowance", inputs.position)
    };

    let audit_trace = vec![
        AuditStep {
            step_number: 1,
            rule_id: "base_pay_lookup".to_string(),
            rule_name: "Base Pay Lookup".to_string(),
            input: serde_json::json!({ "grade": inputs.grade }),
            output: serde_json::json!({ "base_pay": base_pay }),
            reasoning: base_pay_reasoning,
        },
        AuditStep {
            step_number: 2,
            rule_id: "family_allowance".to_string(),
            rule_name: "Family Allowance".to_string(),
            input: serde_json::json!({
                "base_pay": base_pay,
                "marital_status": inputs.marital_status
            }),
            output: serde_json::json!({ "family_allowance": family_allowance }),
            reasoning: family_reasoning,
        },
        AuditStep {
            step_number: 3,
            rule_id: "child_allowance".to_string(),
            rule_name: "Child Allowance".to_string(),
            input: serde_json::json!({
                "base_pay": base_pay,
                "child_count": inputs.child_count
            }),
            output: serde_json::json!({ "child_allowance": child_allowance }),
            reasoning: child_reasoning,
        },
        AuditStep {
            step_number: 4,
            rule_id: "position_allowance".to_string(),
            rule_name: "Position Allowance".to_string(),
            input: serde_json::json!({
                "base_pay": base_pay,
                "position": inputs.position
            }),
            output: serde_json::json!({ "position_allowance": position_allowance }),
            reasoning: position_reasoning,
        },
        AuditStep {
            step_number: 5,
            rule_id: "net_pay".to_string(),
            rule_name: "Net Pay".to_string(),
            input: serde_json::json!({
                "base_pay": base_pay,
                "family_allowance": family_allowance,
                "child_allowance": child_allowance,
                "position_allowance": position_allowance
            }),
            output: serde_json::json!({ "net_pay": net_pay }),
            reasoning: format!(
                "{} + {} + {} + {} = {}",
                base_pay, family_allowance, child_allowance, position_allowance, net_pay
            ),
        },
    ];

    debug!(
        grade = inputs.grade,
        position = inputs.position,
        child_count = inputs.child_count,
        net_pay,
        "Salary calculated"
    );

    SalaryBreakdown {
        base_pay,
        family_allowance,
        child_allowance,
        position_allowance,
        net_pay,
        calculated_at: Utc::now(),
        audit_trace,
    }
}

/// Recomputes the derived fields of a record from its own rule inputs.
///
/// Returns the breakdown that was written into the record.
pub fn recalculate(employee: &mut Employee, rules: &SalaryRules) -> SalaryBreakdown {
    let breakdown = calculate_salary(employee.salary_inputs(), rules);
    breakdown.apply_to(employee);
    breakdown
}

/// Builds an unsaved record from a form, with every derived field computed.
///
/// The child count is dropped to 0 for employees who are not married.
pub fn employee_from_form(form: &EmployeeForm, rules: &SalaryRules) -> Employee {
    let mut employee = Employee {
        id: None,
        name: form.name.trim().to_string(),
        nik: form.nik.trim().to_string(),
        grade: form.grade.clone(),
        marital_status: form.marital_status.clone(),
        child_count: form.effective_child_count(&rules.family_allowance.married_status),
        position: form.position.clone(),
        ..Default::default()
    };
    recalculate(&mut employee, rules);
    employee
}
