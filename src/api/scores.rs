use actix_web::{HttpResponse, get, middleware, post, web};
use log::{debug, info};

use crate::database::ScoreStore;
use crate::database::model::score::{NewScore, Score};
use crate::errors::StoreError;

pub const SCORE_ADDED: &str = "Score added";

#[utoipa::path(
    get,
    path = "/scores",
    tag = "Scores",
    responses(
        (status = 200, description = "All scores in insertion order", body = Vec<Score>)
    )
)]

#[get("")]
pub async fn list_scores(store: web::Data<ScoreStore>) -> HttpResponse {
    let scores = store.list().await;
    debug!("Listing {} scores", scores.len());
    HttpResponse::Ok().json(scores)
}

#[utoipa::path(
    post,
    path = "/scores",
    tag = "Scores",
    request_body = NewScore,
    responses(
        (status = 200, description = "Score stored under the next id", body = String),
        (status = 500, description = "Empty store, missing score or malformed body")
    )
)]

#[post("")]
pub async fn add_score(
    store: web::Data<ScoreStore>,
    req: web::Json<NewScore>,
) -> Result<HttpResponse, StoreError> {
    let stored = store.append(req.into_inner()).await?;
    info!("Stored score {} with id {}", stored.score, stored.id);
    Ok(HttpResponse::Ok().json(SCORE_ADDED))
}

/// Routes body extraction failures (bad JSON, wrong content type, non-numeric
/// score) through [`StoreError`] so they render like every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| StoreError::MalformedBody(err.to_string()).into())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/scores")
            .wrap(middleware::NormalizePath::trim())
            .service(list_scores)
            .service(add_score)
    );
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::api::scores::SCORE_ADDED;
    use crate::database::ScoreStore;
    use crate::server::app_config;

    async fn store_with(contents: &str) -> (TempDir, web::Data<ScoreStore>) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        std::fs::write(&path, contents).unwrap();
        let store = ScoreStore::load(&path).await.unwrap();
        (dir, web::Data::new(store))
    }

    fn post_score(body: Value) -> test::TestRequest {
        test::TestRequest::post().uri("/scores").set_json(body)
    }

    fn get_scores() -> test::TestRequest {
        test::TestRequest::get().uri("/scores")
    }

    #[actix_web::test]
    async fn post_then_get_returns_appended_score() {
        let (_dir, store) = store_with(r#"[{"id":1,"score":10}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store, false))).await;

        let resp = test::call_service(&app, post_score(json!({ "score": 20 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!(SCORE_ADDED));

        let body: Value = test::call_and_read_body_json(&app, get_scores().to_request()).await;
        assert_eq!(body, json!([{ "id": 1, "score": 10 }, { "id": 2, "score": 20 }]));
    }

    #[actix_web::test]
    async fn get_on_untouched_store_returns_records_in_order() {
        let (_dir, store) = store_with(r#"[{"id":1,"score":5},{"id":2,"score":3}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store, false))).await;

        let body: Value = test::call_and_read_body_json(&app, get_scores().to_request()).await;
        assert_eq!(body, json!([{ "id": 1, "score": 5 }, { "id": 2, "score": 3 }]));
    }

    #[actix_web::test]
    async fn caller_supplied_id_is_ignored() {
        let (_dir, store) = store_with(r#"[{"id":7,"score":1}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store.clone(), false))).await;

        let resp = test::call_service(&app, post_score(json!({ "id": 100, "score": 2 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.list().await.last().map(|s| s.id), Some(8));
    }

    #[actix_web::test]
    async fn post_to_empty_store_is_a_server_error() {
        let (_dir, store) = store_with("[]").await;
        let app = test::init_service(App::new().configure(app_config(store, false))).await;

        let resp = test::call_service(&app, post_score(json!({ "score": 20 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("empty score store"));
    }

    #[actix_web::test]
    async fn post_without_score_is_a_server_error() {
        let (_dir, store) = store_with(r#"[{"id":1,"score":10}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store.clone(), false))).await;

        let resp = test::call_service(&app, post_score(json!({ "points": 20 })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "request body has no `score` field");
        assert_eq!(store.list().await.len(), 1);
    }

    #[actix_web::test]
    async fn malformed_body_is_a_server_error() {
        let (_dir, store) = store_with(r#"[{"id":1,"score":10}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store.clone(), false))).await;

        let req = test::TestRequest::post()
            .uri("/scores")
            .insert_header(ContentType::json())
            .set_payload("{score: twenty")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("malformed request body"));

        let resp = test::call_service(&app, post_score(json!({ "score": "twenty" })).to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.list().await.len(), 1);
    }

    #[actix_web::test]
    async fn trailing_slash_reaches_scores() {
        let (_dir, store) = store_with(r#"[{"id":1,"score":10}]"#).await;
        let app = test::init_service(App::new().configure(app_config(store, false))).await;

        let req = test::TestRequest::get().uri("/scores/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!([{ "id": 1, "score": 10 }]));
    }

    #[actix_web::test]
    async fn unknown_path_is_not_found() {
        let (_dir, store) = store_with("[]").await;
        let app = test::init_service(App::new().configure(app_config(store, false))).await;

        let req = test::TestRequest::get().uri("/highscores").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
