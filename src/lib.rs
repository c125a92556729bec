pub mod api;
pub mod client;
pub mod config;
pub mod database;
pub mod errors;
pub mod routes;
pub mod server;

pub use client::ScoreClient;
pub use config::Config;
pub use database::ScoreStore;
pub use errors::StoreError;
