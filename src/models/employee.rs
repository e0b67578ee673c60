//! Employee model and related types.
//!
//! This module defines the persisted [`Employee`] record and the
//! [`EmployeeForm`] that carries the user-entered fields of the normal entry
//! path before salary components are derived.

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// Rule inputs that drive the salary calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryInputs<'a> {
    /// The pay grade (golongan).
    pub grade: &'a str,
    /// The marital status (statusKeluarga).
    pub marital_status: &'a str,
    /// Number of dependent children.
    pub child_count: u32,
    /// The position (jabatan).
    pub position: &'a str,
}

/// An employee payroll record.
///
/// Field names on the wire follow the persisted record layout (`nama`,
/// `golongan`, `gajiPokok`, ...). Missing numeric fields read as 0 and
/// missing string fields as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Store-assigned identifier; `None` until the record is added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Full name.
    #[serde(rename = "nama")]
    pub name: String,
    /// National identity number, unique across records.
    pub nik: String,
    /// Pay grade code (e.g., "IIIB").
    #[serde(rename = "golongan")]
    pub grade: String,
    /// Monthly base pay derived from the grade.
    #[serde(rename = "gajiPokok")]
    pub base_pay: u64,
    /// Marital status ("Nikah" for married).
    #[serde(rename = "statusKeluarga")]
    pub marital_status: String,
    /// Allowance for married employees.
    #[serde(rename = "tunjanganKeluarga")]
    pub family_allowance: u64,
    /// Number of dependent children.
    #[serde(rename = "jumlahAnak")]
    pub child_count: u32,
    /// Allowance scaled by child count.
    #[serde(rename = "tunjanganAnak")]
    pub child_allowance: u64,
    /// Position title (e.g., "Lektor").
    #[serde(rename = "jabatan")]
    pub position: String,
    /// Allowance attached to the position.
    #[serde(rename = "tunjanganJabatan")]
    pub position_allowance: u64,
    /// Base pay plus all allowances.
    #[serde(rename = "gajiBersih")]
    pub net_pay: u64,
}

impl Employee {
    /// Returns the rule inputs carried by this record.
    pub fn salary_inputs(&self) -> SalaryInputs<'_> {
        SalaryInputs {
            grade: &self.grade,
            marital_status: &self.marital_status,
            child_count: self.child_count,
            position: &self.position,
        }
    }

    /// Returns true if the record matches a search query.
    ///
    /// The name is matched case-insensitively as a substring, the NIK as a
    /// plain substring. Surrounding whitespace in the query is ignored, and
    /// an empty (or blank) query matches everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_register::models::Employee;
    ///
    /// let employee = Employee {
    ///     name: "Siti Rahma".to_string(),
    ///     nik: "3201010101010001".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(employee.matches_query("rahma"));
    /// assert!(employee.matches_query("0101"));
    /// assert!(!employee.matches_query("budi"));
    /// ```
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.nik.contains(query)
    }
}

/// User-entered employee fields, before salary components are derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeForm {
    /// Full name.
    #[serde(rename = "nama")]
    pub name: String,
    /// National identity number.
    pub nik: String,
    /// Pay grade code.
    #[serde(rename = "golongan")]
    pub grade: String,
    /// Marital status.
    #[serde(rename = "statusKeluarga")]
    pub marital_status: String,
    /// Number of dependent children.
    #[serde(rename = "jumlahAnak")]
    pub child_count: u32,
    /// Position title.
    #[serde(rename = "jabatan")]
    pub position: String,
}

impl EmployeeForm {
    /// Checks that every required field is present.
    ///
    /// Name, NIK, grade and position are required; blank values count as
    /// missing.
    pub fn validate(&self) -> PayrollResult<()> {
        let required = [
            ("nama", &self.name),
            ("nik", &self.nik),
            ("golongan", &self.grade),
            ("jabatan", &self.position),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(PayrollError::required(field)),
            None => Ok(()),
        }
    }

    /// Returns the child count that applies given the married status value.
    ///
    /// Children only count for married employees; otherwise this is 0.
    pub fn effective_child_count(&self, married_status: &str) -> u32 {
        if self.marital_status == married_status {
            self.child_count
        } else {
            0
        }
    }
}
