//! Listing and report models.
//!
//! [`EmployeePage`] is one page of a (possibly filtered) record list and
//! [`ReportSummary`] aggregates pay totals over a set of records.
//! [`format_rupiah`] renders amounts the way the summary is displayed.

use serde::{Deserialize, Serialize};

use super::Employee;

/// One page of employee records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePage {
    /// Records on this page.
    pub items: Vec<Employee>,
    /// The 1-based page number.
    pub page: usize,
    /// Maximum records per page.
    pub page_size: usize,
    /// Number of records across all pages.
    pub total_items: usize,
    /// Number of pages (at least 1).
    pub total_pages: usize,
}

impl EmployeePage {
    /// Slices `records` into the requested page.
    ///
    /// Page numbers below 1 select the first page and numbers past the end
    /// select the last page.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_register::models::{Employee, EmployeePage};
    ///
    /// let records = vec![Employee::default(); 7];
    /// let page = EmployeePage::paginate(&records, 2, 6);
    /// assert_eq!(page.items.len(), 1);
    /// assert_eq!(page.total_pages, 2);
    /// ```
    pub fn paginate(records: &[Employee], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_items = records.len();
        let total_pages = total_items.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        let items = records.get(start..end).unwrap_or_default().to_vec();

        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

/// Pay totals over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of records summarised.
    pub employee_count: usize,
    /// Total net pay.
    pub total_net_pay: u64,
    /// Total family allowance.
    pub total_family_allowance: u64,
    /// Total child allowance.
    pub total_child_allowance: u64,
    /// Total position allowance.
    pub total_position_allowance: u64,
}

impl ReportSummary {
    /// Sums the pay components of `records`.
    pub fn from_records(records: &[Employee]) -> Self {
        records.iter().fold(
            Self {
                employee_count: records.len(),
                ..Default::default()
            },
            |mut summary, employee| {
                summary.total_net_pay = summary.total_net_pay.saturating_add(employee.net_pay);
                summary.total_family_allowance =
                    summary.total_family_allowance.saturating_add(employee.family_allowance);
                summary.total_child_allowance =
                    summary.total_child_allowance.saturating_add(employee.child_allowance);
                summary.total_position_allowance =
                    summary.total_position_allowance.saturating_add(employee.position_allowance);
                summary
            },
        )
    }

    /// Sum of the three allowance totals.
    pub fn total_allowances(&self) -> u64 {
        self.total_family_allowance
            .saturating_add(self.total_child_allowance)
            .saturating_add(self.total_position_allowance)
    }

    /// The totals rendered as Rupiah strings.
    pub fn formatted(&self) -> FormattedSummary {
        FormattedSummary {
            total_net_pay: format_rupiah(self.total_net_pay),
            total_family_allowance: format_rupiah(self.total_family_allowance),
            total_child_allowance: format_rupiah(self.total_child_allowance),
            total_position_allowance: format_rupiah(self.total_position_allowance),
            total_allowances: format_rupiah(self.total_allowances()),
        }
    }
}

/// [`ReportSummary`] totals as display strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedSummary {
    /// Total net pay.
    pub total_net_pay: String,
    /// Total family allowance.
    pub total_family_allowance: String,
    /// Total child allowance.
    pub total_child_allowance: String,
    /// Total position allowance.
    pub total_position_allowance: String,
    /// Family, child and position allowances combined.
    pub total_allowances: String,
}

/// Formats a whole-rupiah amount for display.
///
/// Thousands are grouped with `.` and no fraction digits are shown.
///
/// # Examples
///
/// ```
/// use payroll_register::models::format_rupiah;
///
/// assert_eq!(format_rupiah(4_240_000), "Rp 4.240.000");
/// assert_eq!(format_rupiah(0), "Rp 0");
/// ```
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("Rp {}", grouped)
}
