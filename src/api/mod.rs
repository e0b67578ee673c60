//! HTTP API module for the payroll register.
//!
//! This module exposes the record actions (list, create, edit, delete,
//! search, export) and the salary preview as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{RuleOptions, SummaryResponse, create_router};
pub use request::ListQuery;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
