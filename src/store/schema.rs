//! Table layout of the employee store.

/// Creates the `employees` table and its indexes when absent.
pub(crate) const CREATE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    nama               TEXT    NOT NULL,
    nik                TEXT    NOT NULL,
    golongan           TEXT    NOT NULL DEFAULT '',
    gaji_pokok         INTEGER NOT NULL DEFAULT 0,
    status_keluarga    TEXT    NOT NULL DEFAULT '',
    tunjangan_keluarga INTEGER NOT NULL DEFAULT 0,
    jumlah_anak        INTEGER NOT NULL DEFAULT 0,
    tunjangan_anak     INTEGER NOT NULL DEFAULT 0,
    jabatan            TEXT    NOT NULL DEFAULT '',
    tunjangan_jabatan  INTEGER NOT NULL DEFAULT 0,
    gaji_bersih        INTEGER NOT NULL DEFAULT 0
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_employees_nik ON employees (nik);
CREATE INDEX IF NOT EXISTS idx_employees_nama ON employees (nama);
";

/// Column list shared by every SELECT, in the order rows are decoded.
pub(crate) const SELECT_COLUMNS: &str = "id, nama, nik, golongan, gaji_pokok, status_keluarga, \
     tunjangan_keluarga, jumlah_anak, tunjangan_anak, jabatan, tunjangan_jabatan, gaji_bersih";

/// A NULL `?1` lets SQLite assign the next id.
pub(crate) const INSERT_EMPLOYEE: &str = "INSERT INTO employees (id, nama, nik, golongan, \
     gaji_pokok, status_keluarga, tunjangan_keluarga, jumlah_anak, tunjangan_anak, jabatan, \
     tunjangan_jabatan, gaji_bersih) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";

pub(crate) const UPDATE_BY_ID: &str = "UPDATE employees SET nama = ?2, nik = ?3, golongan = ?4, \
     gaji_pokok = ?5, status_keluarga = ?6, tunjangan_keluarga = ?7, jumlah_anak = ?8, \
     tunjangan_anak = ?9, jabatan = ?10, tunjangan_jabatan = ?11, gaji_bersih = ?12 WHERE id = ?1";

pub(crate) const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?1";

pub(crate) const COUNT: &str = "SELECT COUNT(*) FROM employees";
