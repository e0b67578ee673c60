//! Application state for the payroll register API.
//!
//! This module defines the shared state available to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::app::PayrollApp;

/// Shared application state.
///
/// Wraps the single [`PayrollApp`] so that mutating requests are applied
/// one at a time.
#[derive(Clone)]
pub struct AppState {
    app: Arc<Mutex<PayrollApp>>,
}

impl AppState {
    /// Creates a new application state around the given application.
    pub fn new(app: PayrollApp) -> Self {
        Self {
            app: Arc::new(Mutex::new(app)),
        }
    }

    /// Returns the shared application handle.
    pub fn app(&self) -> &Mutex<PayrollApp> {
        &self.app
    }
}
