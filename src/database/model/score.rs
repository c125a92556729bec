use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// A stored score. `id` is assigned by the store, never by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Score {
    pub id: i64,
    #[schema(value_type = f64)]
    pub score: Number,
}

/// Body of `POST /scores`. Any other field, `id` included, is ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewScore {
    #[schema(value_type = Option<f64>)]
    pub score: Option<Number>,
}

impl NewScore {
    pub fn new(score: impl Into<Number>) -> Self {
        Self { score: Some(score.into()) }
    }
}
