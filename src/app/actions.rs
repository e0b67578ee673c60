//! The record actions a presentation layer can invoke.

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeForm, EmployeePage};

/// Capabilities handed to a presentation layer at construction.
///
/// Implementors own the record list the presentation layer displays. Every
/// mutating action leaves that list unchanged when it fails.
pub trait RecordActions {
    /// Saves a form, adding a record when `editing_id` is `None` and
    /// replacing the identified record otherwise. Returns the stored record.
    fn submit(&mut self, form: &EmployeeForm, editing_id: Option<i64>) -> PayrollResult<Employee>;

    /// Fetches a record to populate an edit form.
    fn edit(&self, id: i64) -> PayrollResult<Employee>;

    /// Deletes a record.
    fn delete(&mut self, id: i64) -> PayrollResult<()>;

    /// Filters the list by name or NIK and returns its first page.
    fn search(&mut self, query: &str) -> EmployeePage;

    /// Renders every stored record as CSV.
    fn export(&self) -> PayrollResult<String>;
}
