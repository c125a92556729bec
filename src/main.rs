use std::io;
use std::net::TcpListener;

use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};
use scoreboard::{Config, ScoreStore, server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logger (RUST_LOG overrides default if set)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // A missing or corrupt score file is fatal: there is nothing to serve.
    let store = ScoreStore::load(&config.database_path).await.map_err(|e| {
        error!("Failed to load scores: {}", e);
        io::Error::other(e)
    })?;

    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    info!("Server running at http://{}", listener.local_addr()?);
    if config.swagger {
        info!("Swagger UI at http://{}/swagger-ui/", listener.local_addr()?);
    }

    server::build(store, config.swagger, listener)?.await
}
