use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_register::api::{AppState, create_router};
use payroll_register::app::PayrollApp;
use payroll_register::config::ConfigLoader;
use payroll_register::store::EmployeeStore;

const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("PAYROLL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let settings = config.settings().clone();

    let store = EmployeeStore::open(&settings.database_path)?;
    let app = PayrollApp::new(store, config.rules().clone(), settings.page_size)?;
    let router = create_router(AppState::new(app));

    let listener = TcpListener::bind(&settings.bind_address).await?;
    info!(
        bind_address = %settings.bind_address,
        database = %settings.database_path.display(),
        "Payroll register listening"
    );
    axum::serve(listener, router).await?;

    Ok(())
}
