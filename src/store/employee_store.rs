//! SQLite-backed employee record store.
//!
//! The store owns a single connection for the process lifetime. Every
//! operation is one SQL statement, so each call is atomic on its own; there
//! is no transaction spanning calls.

use std::path::Path;

use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, ffi, params};
use tracing::{debug, info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::schema::{
    COUNT, CREATE_SCHEMA, DELETE_BY_ID, INSERT_EMPLOYEE, SELECT_COLUMNS, UPDATE_BY_ID,
};

/// Durable CRUD over employee records.
///
/// Records are keyed by an auto-incremented `id`. The `nik` column carries a
/// unique index and `nama` a plain index used for name-ordered searches.
///
/// # Example
///
/// ```
/// use payroll_register::models::Employee;
/// use payroll_register::store::EmployeeStore;
///
/// let store = EmployeeStore::open_in_memory()?;
/// let id = store.add(&Employee {
///     name: "Siti Rahma".to_string(),
///     nik: "3201010101010001".to_string(),
///     ..Default::default()
/// })?;
///
/// let stored = store.get_by_id(id)?.unwrap();
/// assert_eq!(stored.name, "Siti Rahma");
/// # Ok::<(), payroll_register::error::PayrollError>(())
/// ```
#[derive(Debug)]
pub struct EmployeeStore {
    conn: Connection,
}

impl EmployeeStore {
    /// Opens (or creates) a database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PayrollError::StorageUnavailable {
                message: format!("cannot create {}: {}", parent.display(), e),
            })?;
        }

        let conn = Connection::open(path).map_err(storage_error)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(storage_error)?;

        let store = Self { conn };
        store.init()?;
        info!(path = %path.display(), "Employee store opened");
        Ok(store)
    }

    /// Opens a private in-memory database, initialized and empty.
    pub fn open_in_memory() -> PayrollResult<Self> {
        let conn = Connection::open_in_memory().map_err(storage_error)?;
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// Creates the record table and its indexes if they do not exist.
    ///
    /// Safe to call any number of times.
    pub fn init(&self) -> PayrollResult<()> {
        self.conn
            .execute_batch(CREATE_SCHEMA)
            .map_err(storage_error)
    }

    /// Inserts a record and returns its id.
    ///
    /// A new id is assigned when the record has none. Fails with
    /// `DuplicateKey` when the NIK (or an explicit id) is already taken.
    pub fn add(&self, employee: &Employee) -> PayrollResult<i64> {
        self.conn
            .execute(
                INSERT_EMPLOYEE,
                params![
                    employee.id,
                    employee.name,
                    employee.nik,
                    employee.grade,
                    employee.base_pay,
                    employee.marital_status,
                    employee.family_allowance,
                    employee.child_count,
                    employee.child_allowance,
                    employee.position,
                    employee.position_allowance,
                    employee.net_pay,
                ],
            )
            .map_err(|e| write_error(e, employee))?;

        let id = self.conn.last_insert_rowid();
        info!(employee_id = id, nik = %employee.nik, "Employee added");
        Ok(id)
    }

    /// Returns every record in id order.
    pub fn get_all(&self) -> PayrollResult<Vec<Employee>> {
        self.select(&format!("SELECT {} FROM employees ORDER BY id", SELECT_COLUMNS))
    }

    /// Looks up a record by id; `None` when absent.
    pub fn get_by_id(&self, id: i64) -> PayrollResult<Option<Employee>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM employees WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_employee,
            )
            .optional()
            .map_err(storage_error)
    }

    /// Replaces a stored record.
    ///
    /// The record must carry the id of an existing row, otherwise this fails
    /// with `NotFound`. A NIK already used by another record fails with
    /// `DuplicateKey`.
    pub fn update(&self, employee: &Employee) -> PayrollResult<()> {
        let id = employee.id.ok_or_else(|| PayrollError::NotFound {
            id: "<none>".to_string(),
        })?;

        let changed = self
            .conn
            .execute(
                UPDATE_BY_ID,
                params![
                    id,
                    employee.name,
                    employee.nik,
                    employee.grade,
                    employee.base_pay,
                    employee.marital_status,
                    employee.family_allowance,
                    employee.child_count,
                    employee.child_allowance,
                    employee.position,
                    employee.position_allowance,
                    employee.net_pay,
                ],
            )
            .map_err(|e| write_error(e, employee))?;

        if changed == 0 {
            warn!(employee_id = id, "Update of missing employee");
            return Err(PayrollError::NotFound { id: id.to_string() });
        }

        info!(employee_id = id, "Employee updated");
        Ok(())
    }

    /// Removes a record. Deleting an absent id succeeds.
    pub fn delete(&self, id: i64) -> PayrollResult<()> {
        let removed = self
            .conn
            .execute(DELETE_BY_ID, params![id])
            .map_err(storage_error)?;

        if removed == 0 {
            debug!(employee_id = id, "Delete of absent employee ignored");
        } else {
            info!(employee_id = id, "Employee deleted");
        }
        Ok(())
    }

    /// Returns records whose name contains `query` (ignoring case) or whose
    /// NIK contains it, ordered by name. The query is trimmed first; an
    /// empty query returns everything.
    pub fn find_by_name_or_nik(&self, query: &str) -> PayrollResult<Vec<Employee>> {
        let by_name = self.select(&format!(
            "SELECT {} FROM employees ORDER BY nama, id",
            SELECT_COLUMNS
        ))?;

        let matches: Vec<Employee> = by_name
            .into_iter()
            .filter(|employee| employee.matches_query(query))
            .collect();

        debug!(query, results = matches.len(), "Employee search");
        Ok(matches)
    }

    /// Returns the number of stored records.
    pub fn count(&self) -> PayrollResult<usize> {
        self.conn
            .query_row(COUNT, [], |row| row.get::<_, i64>(0))
            .map(|count| count as usize)
            .map_err(storage_error)
    }

    /// Borrow the underlying connection (for tests that need raw SQL).
    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    fn select(&self, sql: &str) -> PayrollResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(sql).map_err(storage_error)?;
        let rows = stmt.query_map([], row_to_employee).map_err(storage_error)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(storage_error)
    }
}

fn row_to_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        nik: row.get(2)?,
        grade: row.get(3)?,
        base_pay: row.get(4)?,
        marital_status: row.get(5)?,
        family_allowance: row.get(6)?,
        child_count: row.get(7)?,
        child_allowance: row.get(8)?,
        position: row.get(9)?,
        position_allowance: row.get(10)?,
        net_pay: row.get(11)?,
    })
}

fn storage_error(err: rusqlite::Error) -> PayrollError {
    PayrollError::StorageUnavailable {
        message: err.to_string(),
    }
}

/// Maps uniqueness violations on insert/update to `DuplicateKey`.
fn write_error(err: rusqlite::Error, employee: &Employee) -> PayrollError {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            let detail = message.as_deref().unwrap_or_default();
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || detail.contains("employees.id")
            {
                return PayrollError::DuplicateKey {
                    field: "id".to_string(),
                    value: employee.id.map(|id| id.to_string()).unwrap_or_default(),
                };
            }
            if detail.contains("employees.nik") {
                warn!(nik = %employee.nik, "Duplicate NIK rejected");
                return PayrollError::DuplicateKey {
                    field: "nik".to_string(),
                    value: employee.nik.clone(),
                };
            }
        }
    }
    storage_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(name: &str, nik: &str) -> Employee {
        Employee {
            id: None,
            name: name.to_string(),
            nik: nik.to_string(),
            grade: "IIIB".to_string(),
            base_pay: 3_000_000,
            marital_status: "Nikah".to_string(),
            family_allowance: 300_000,
            child_count: 2,
            child_allowance: 240_000,
            position: "Lektor".to_string(),
            position_allowance: 700_000,
            net_pay: 4_240_000,
        }
    }

    fn store() -> EmployeeStore {
        EmployeeStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_add_then_get_returns_same_record_with_id() {
        let store = store();
        let employee = create_test_employee("Budi Santoso", "1001");

        let id = store.add(&employee).unwrap();
        let stored = store.get_by_id(id).unwrap().unwrap();

        assert_eq!(stored.id, Some(id));
        assert_eq!(Employee { id: None, ..stored }, employee);
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let store = store();
        let first = store.add(&create_test_employee("A", "1")).unwrap();
        let second = store.add(&create_test_employee("B", "2")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_add_keeps_explicit_id() {
        let store = store();
        let mut employee = create_test_employee("A", "1");
        employee.id = Some(500);

        assert_eq!(store.add(&employee).unwrap(), 500);
        assert!(store.get_by_id(500).unwrap().is_some());
    }

    #[test]
    fn test_add_duplicate_nik_fails() {
        let store = store();
        store.add(&create_test_employee("A", "1001")).unwrap();

        match store.add(&create_test_employee("B", "1001")) {
            Err(PayrollError::DuplicateKey { field, value }) => {
                assert_eq!(field, "nik");
                assert_eq!(value, "1001");
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_add_duplicate_explicit_id_fails() {
        let store = store();
        let mut first = create_test_employee("A", "1");
        first.id = Some(9);
        store.add(&first).unwrap();

        let mut second = create_test_employee("B", "2");
        second.id = Some(9);
        match store.add(&second) {
            Err(PayrollError::DuplicateKey { field, value }) => {
                assert_eq!(field, "id");
                assert_eq!(value, "9");
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_get_all_empty() {
        assert!(store().get_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_all_in_insertion_order() {
        let store = store();
        store.add(&create_test_employee("Zainal", "3")).unwrap();
        store.add(&create_test_employee("Ani", "1")).unwrap();

        let names: Vec<String> = store.get_all().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Zainal", "Ani"]);
    }

    #[test]
    fn test_get_by_id_missing_is_none() {
        assert!(store().get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_record() {
        let store = store();
        let id = store.add(&create_test_employee("Budi", "1001")).unwrap();

        let mut changed = store.get_by_id(id).unwrap().unwrap();
        changed.name = "Budi Santoso".to_string();
        changed.position = "Lektor Kepala".to_string();
        changed.position_allowance = 1_300_000;
        changed.net_pay = 4_840_000;
        store.update(&changed).unwrap();

        assert_eq!(store.get_by_id(id).unwrap().unwrap(), changed);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_update_missing_id_fails_not_found() {
        let store = store();
        let mut employee = create_test_employee("A", "1");
        employee.id = Some(77);

        match store.update(&employee) {
            Err(PayrollError::NotFound { id }) => assert_eq!(id, "77"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_update_without_id_fails_not_found() {
        let store = store();
        assert!(matches!(
            store.update(&create_test_employee("A", "1")),
            Err(PayrollError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_to_taken_nik_fails() {
        let store = store();
        store.add(&create_test_employee("A", "1")).unwrap();
        let id = store.add(&create_test_employee("B", "2")).unwrap();

        let mut second = store.get_by_id(id).unwrap().unwrap();
        second.nik = "1".to_string();

        assert!(matches!(
            store.update(&second),
            Err(PayrollError::DuplicateKey { ref field, .. }) if field == "nik"
        ));
        assert_eq!(store.get_by_id(id).unwrap().unwrap().nik, "2");
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = store();
        let id = store.add(&create_test_employee("A", "1")).unwrap();

        store.delete(id).unwrap();
        assert!(store.get_by_id(id).unwrap().is_none());
    }

    #[test]
    fn test_delete_absent_id_succeeds() {
        assert!(store().delete(12345).is_ok());
    }

    #[test]
    fn test_deleted_nik_can_be_reused() {
        let store = store();
        let id = store.add(&create_test_employee("A", "1")).unwrap();
        store.delete(id).unwrap();

        assert!(store.add(&create_test_employee("B", "1")).is_ok());
    }

    #[test]
    fn test_find_empty_query_returns_all() {
        let store = store();
        store.add(&create_test_employee("Budi", "1")).unwrap();
        store.add(&create_test_employee("Ani", "2")).unwrap();

        assert_eq!(store.find_by_name_or_nik("").unwrap().len(), 2);
    }

    #[test]
    fn test_find_by_name_ignores_case_and_orders_by_name() {
        let store = store();
        store.add(&create_test_employee("Rahmat Hidayat", "11")).unwrap();
        store.add(&create_test_employee("Budi", "22")).unwrap();
        store.add(&create_test_employee("Ahmad Rahman", "33")).unwrap();

        let names: Vec<String> = store
            .find_by_name_or_nik("RAHM")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ahmad Rahman", "Rahmat Hidayat"]);
    }

    #[test]
    fn test_find_by_nik_substring() {
        let store = store();
        store.add(&create_test_employee("Budi", "3201990001")).unwrap();
        store.add(&create_test_employee("Ani", "3301000002")).unwrap();

        let found = store.find_by_name_or_nik("9900").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Budi");
    }

    #[test]
    fn test_find_trims_the_query() {
        let store = store();
        store.add(&create_test_employee("Budi", "3201990001")).unwrap();
        store.add(&create_test_employee("Ani", "3301000002")).unwrap();

        assert_eq!(store.find_by_name_or_nik("   ").unwrap().len(), 2);

        let found = store.find_by_name_or_nik(" budi ").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nik, "3201990001");
    }

    #[test]
    fn test_find_no_match_is_empty() {
        let store = store();
        store.add(&create_test_employee("Budi", "1")).unwrap();
        assert!(store.find_by_name_or_nik("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_init_is_idempotent() {
        let store = store();
        store.add(&create_test_employee("A", "1")).unwrap();
        store.init().unwrap();
        store.init().unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("payroll.db");

        let id = {
            let store = EmployeeStore::open(&path).unwrap();
            store.add(&create_test_employee("Budi", "1001")).unwrap()
        };

        let reopened = EmployeeStore::open(&path).unwrap();
        assert_eq!(reopened.get_by_id(id).unwrap().unwrap().nik, "1001");
    }

    #[test]
    fn test_open_unwritable_location_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            EmployeeStore::open(dir.path()),
            Err(PayrollError::StorageUnavailable { .. })
        ));
    }
}
