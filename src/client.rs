//! HTTP client for submitting and listing scores, as the game does when a
//! round ends.

use reqwest::StatusCode;
use serde_json::{Number, json};
use thiserror::Error;

use crate::database::model::score::Score;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Clone, Debug)]
pub struct ScoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScoreClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn scores_url(&self) -> String {
        format!("{}/scores", self.base_url)
    }

    /// Posts `score` and returns the server's confirmation string.
    pub async fn submit(&self, score: impl Into<Number>) -> Result<String, ClientError> {
        let res = self
            .http
            .post(self.scores_url())
            .json(&json!({ "score": score.into() }))
            .send()
            .await?;
        let res = check(res).await?;
        Ok(res.json::<String>().await?)
    }

    pub async fn list(&self) -> Result<Vec<Score>, ClientError> {
        let res = self.http.get(self.scores_url()).send().await?;
        let res = check(res).await?;
        Ok(res.json::<Vec<Score>>().await?)
    }
}

async fn check(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
