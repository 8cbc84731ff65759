use crate::app::AppContext;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod calculators;
mod config;
mod content;
mod db;
mod domain;
mod errors;
mod leads;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.database_path.to_string_lossy().into_owned());

    let schema_path = config.schema_path.to_string_lossy().into_owned();
    if let Err(e) = init_db(&db, &schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let app = match AppContext::from_config(&config, db) {
        Ok(app) => app,
        Err(e) => {
            error!("content backend setup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    info!(%addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
