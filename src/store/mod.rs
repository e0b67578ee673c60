//! Persistent storage for employee records.
//!
//! [`EmployeeStore`] wraps a SQLite database holding one `employees` table
//! with a unique index on `nik` and a secondary index on `nama`.

mod employee_store;
mod schema;

pub use employee_store::EmployeeStore;
