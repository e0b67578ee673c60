//! Salary rule engine for the payroll register.
//!
//! This module contains the pure calculation functions for base pay lookup,
//! family allowance, child allowance, position allowance and net pay, plus
//! the fixed-order recalculation that derives all of them for a record.

mod amount;
mod base_pay;
mod child_allowance;
mod family_allowance;
mod net_pay;
mod position_allowance;
mod salary;

pub use amount::scaled_amount;
pub use base_pay::compute_base_pay;
pub use child_allowance::compute_child_allowance;
pub use family_allowance::compute_family_allowance;
pub use net_pay::compute_net_pay;
pub use position_allowance::compute_position_allowance;
pub use salary::{calculate_salary, employee_from_form, recalculate};
