use std::path::PathBuf;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access score file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("score file {} is not a JSON array of scores: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot append to an empty score store: no previous id to increment")]
    EmptyStore,
    #[error("request body has no `score` field")]
    MissingScore,
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("id {0} is the largest representable id")]
    IdOverflow(i64),
}

// Every failure is reported the same way: there is no client/server fault split.
impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("Request failed: {}", self);
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
