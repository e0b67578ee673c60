//! Application layer for the payroll register.
//!
//! [`RecordActions`] is the capability contract a presentation layer is
//! given; [`PayrollApp`] implements it on top of the record store and the
//! salary rule engine.

mod actions;
mod payroll_app;

pub use actions::RecordActions;
pub use payroll_app::PayrollApp;
