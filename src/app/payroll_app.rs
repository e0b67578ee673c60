//! Application state behind the record actions.
//!
//! [`PayrollApp`] owns the store and keeps a cached copy of all records plus
//! the currently filtered view. The cache is refreshed from the store only
//! after a mutation succeeds. If that refresh fails the write still stands:
//! the action reports success and the cache is patched in memory instead.

use tracing::{info, warn};

use crate::calculation::{calculate_salary, employee_from_form};
use crate::config::SalaryRules;
use crate::error::{PayrollError, PayrollResult};
use crate::export::export_csv;
use crate::models::{Employee, EmployeeForm, EmployeePage, ReportSummary, SalaryBreakdown};
use crate::store::EmployeeStore;

use super::RecordActions;

/// The payroll register application.
///
/// # Example
///
/// ```
/// use payroll_register::app::{PayrollApp, RecordActions};
/// use payroll_register::config::SalaryRules;
/// use payroll_register::models::EmployeeForm;
/// use payroll_register::store::EmployeeStore;
///
/// let store = EmployeeStore::open_in_memory()?;
/// let mut app = PayrollApp::new(store, SalaryRules::default(), 6)?;
///
/// let form = EmployeeForm {
///     name: "Budi".to_string(),
///     nik: "1001".to_string(),
///     grade: "IIIB".to_string(),
///     marital_status: "Nikah".to_string(),
///     child_count: 2,
///     position: "Lektor".to_string(),
/// };
/// let saved = app.submit(&form, None)?;
/// assert_eq!(saved.net_pay, 4_240_000);
/// assert_eq!(app.employees().len(), 1);
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct PayrollApp {
    store: EmployeeStore,
    rules: SalaryRules,
    employees: Vec<Employee>,
    filtered: Vec<Employee>,
    current_page: usize,
    page_size: usize,
}

impl PayrollApp {
    /// Builds the application over an initialized store and loads all records.
    pub fn new(store: EmployeeStore, rules: SalaryRules, page_size: usize) -> PayrollResult<Self> {
        let employees = store.get_all()?;
        info!(employees = employees.len(), page_size, "Payroll register loaded");
        Ok(Self {
            filtered: employees.clone(),
            store,
            rules,
            employees,
            current_page: 1,
            page_size: page_size.max(1),
        })
    }

    /// All cached records, in store order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// The salary rules in use.
    pub fn rules(&self) -> &SalaryRules {
        &self.rules
    }

    /// Selects a page of the current filtered list.
    pub fn page(&mut self, page: usize) -> EmployeePage {
        let view = EmployeePage::paginate(&self.filtered, page, self.page_size);
        self.current_page = view.page;
        view
    }

    /// The page currently selected.
    pub fn current_page(&self) -> EmployeePage {
        EmployeePage::paginate(&self.filtered, self.current_page, self.page_size)
    }

    /// Calculates the salary a form would produce, without saving anything.
    pub fn preview(&self, form: &EmployeeForm) -> SalaryBreakdown {
        let employee = employee_from_form(form, &self.rules);
        calculate_salary(employee.salary_inputs(), &self.rules)
    }

    /// Pay totals over every cached record.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary::from_records(&self.employees)
    }

    fn reload(&mut self) -> PayrollResult<()> {
        self.employees = self.store.get_all()?;
        self.filtered = self.employees.clone();
        self.current_page = 1;
        Ok(())
    }

    /// Reloads after a persisted write, falling back to applying `change` to
    /// the cached list when the store cannot be read back.
    fn refresh(&mut self, change: CacheChange<'_>) {
        let Err(err) = self.reload() else {
            return;
        };
        warn!(error = %err, "Record list refresh failed, patching cached list");

        match change {
            CacheChange::Saved(saved) => {
                match self.employees.iter_mut().find(|e| e.id == saved.id) {
                    Some(cached) => *cached = saved.clone(),
                    None => self.employees.push(saved.clone()),
                }
            }
            CacheChange::Removed(id) => self.employees.retain(|e| e.id != Some(id)),
        }
        self.filtered = self.employees.clone();
        self.current_page = 1;
    }
}

/// A write that has already reached the store.
enum CacheChange<'a> {
    Saved(&'a Employee),
    Removed(i64),
}

impl RecordActions for PayrollApp {
    fn submit(&mut self, form: &EmployeeForm, editing_id: Option<i64>) -> PayrollResult<Employee> {
        form.validate()?;

        let mut employee = employee_from_form(form, &self.rules);

        match editing_id {
            Some(id) => {
                employee.id = Some(id);
                self.store.update(&employee)?;
                info!(employee_id = id, net_pay = employee.net_pay, "Employee record saved");
            }
            None => {
                if self.employees.iter().any(|e| e.nik == employee.nik) {
                    warn!(nik = %employee.nik, "NIK already registered");
                    return Err(PayrollError::DuplicateKey {
                        field: "nik".to_string(),
                        value: employee.nik,
                    });
                }
                let id = self.store.add(&employee)?;
                employee.id = Some(id);
                info!(employee_id = id, net_pay = employee.net_pay, "Employee record created");
            }
        }

        self.refresh(CacheChange::Saved(&employee));
        Ok(employee)
    }

    fn edit(&self, id: i64) -> PayrollResult<Employee> {
        self.store
            .get_by_id(id)?
            .ok_or_else(|| PayrollError::NotFound { id: id.to_string() })
    }

    fn delete(&mut self, id: i64) -> PayrollResult<()> {
        self.store.delete(id)?;
        self.refresh(CacheChange::Removed(id));
        Ok(())
    }

    fn search(&mut self, query: &str) -> EmployeePage {
        self.filtered = self
            .employees
            .iter()
            .filter(|employee| employee.matches_query(query))
            .cloned()
            .collect();
        self.page(1)
    }

    fn export(&self) -> PayrollResult<String> {
        let records = self.store.get_all()?;
        if records.is_empty() {
            warn!("Export requested with no records");
            return Err(PayrollError::NothingToExport);
        }
        info!(records = records.len(), "Exporting employee records");
        Ok(export_csv(&records))
    }
}
