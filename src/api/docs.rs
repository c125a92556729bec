use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::scores;
use crate::database::model::score::{NewScore, Score};

#[derive(OpenApi)]
#[openapi(
    paths(scores::list_scores, scores::add_score),
    components(schemas(Score, NewScore)),
    tags((name = "Scores", description = "Stored game scores"))
)]
pub struct ApiDoc;

pub const OPENAPI_URL: &str = "/api-docs/openapi.json";

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_URL, ApiDoc::openapi()));
}
