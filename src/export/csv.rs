//! CSV export of employee records.

use crate::models::Employee;

/// Suggested file name for downloaded exports.
pub const EXPORT_FILENAME: &str = "data-gaji-pegawai.csv";

/// Header row: name, NIK, grade, base pay, marital status, family allowance,
/// child count, child allowance, position, position allowance, net pay.
pub const CSV_HEADER: &str = "Nama,NIK,Golongan,Gaji Pokok,Status Keluarga,Tunjangan Keluarga,\
Jumlah Anak,Tunjangan Anak,Jabatan,Tunjangan Jabatan,Gaji Bersih";

/// Renders records as CSV, one row per record after the header.
///
/// Every value is double-quoted; embedded quotes are doubled.
///
/// # Examples
///
/// ```
/// use payroll_register::export::export_csv;
/// use payroll_register::models::Employee;
///
/// let csv = export_csv(&[Employee {
///     name: "Ani".to_string(),
///     nik: "123".to_string(),
///     ..Default::default()
/// }]);
///
/// let row = csv.lines().nth(1).unwrap();
/// assert_eq!(row, r#""Ani","123","","0","","0","0","0","","0","0""#);
/// ```
pub fn export_csv(records: &[Employee]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + records.len() * 128);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for employee in records {
        let fields = [
            employee.name.clone(),
            employee.nik.clone(),
            employee.grade.clone(),
            employee.base_pay.to_string(),
            employee.marital_status.clone(),
            employee.family_allowance.to_string(),
            employee.child_count.to_string(),
            employee.child_allowance.to_string(),
            employee.position.clone(),
            employee.position_allowance.to_string(),
            employee.net_pay.to_string(),
        ];

        let row: Vec<String> = fields.iter().map(|value| quote(value)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    csv
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
