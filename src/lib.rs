//! Payroll Register for lecturer salary records
//!
//! This crate keeps employee records in a local SQLite store, computes salary
//! components (base pay, family, child and position allowances, net pay) from
//! lookup-table rules, and exposes list, search, edit, delete and CSV export
//! actions over an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod app;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
