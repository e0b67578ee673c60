//! Request types for the payroll register API.
//!
//! Employee bodies use [`EmployeeForm`](crate::models::EmployeeForm)
//! directly; this module holds the query-string types.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /employees`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Name or NIK filter; empty or absent lists everything.
    #[serde(default)]
    pub q: Option<String>,
    /// 1-based page number; defaults to the first page.
    #[serde(default)]
    pub page: Option<usize>,
}
