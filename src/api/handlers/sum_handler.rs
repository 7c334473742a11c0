//! Addition handlers.

use axum::{response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Addition request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SumRequest {
    /// First addend
    #[schema(example = 40)]
    pub num_1: i64,
    /// Second addend
    #[schema(example = 2)]
    pub num_2: i64,
}

/// Create addition routes
pub fn sum_routes() -> Router<AppState> {
    Router::new().route("/", post(sum))
}

/// Add two integers
#[utoipa::path(
    post,
    path = "/",
    tag = "Sum",
    request_body = SumRequest,
    responses(
        (status = 200, description = "Sum computed successfully", body = MessageResponse),
        (status = 422, description = "Missing or non-integer fields")
    )
)]
pub async fn sum(
    ValidatedJson(payload): ValidatedJson<SumRequest>,
) -> AppResult<Json<MessageResponse>> {
    // Widen before adding so i64 extremes cannot overflow.
    let sum = i128::from(payload.num_1) + i128::from(payload.num_2);

    Ok(Json(MessageResponse::new(format!("the sum is {sum}"))))
}
