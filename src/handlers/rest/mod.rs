use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{ApiResponse, CreateMemoRequest, MemoResponse},
    service::MemoService,
};

const MEMO_NOT_FOUND: &str = "memo is not found";

#[derive(OpenApi)]
#[openapi(
    paths(create_memo, get_memo_by_id, get_all_memo),
    components(schemas(MemoResponse, CreateMemoRequest)),
    tags(
        (name = "memo", description = "Memo management API")
    )
)]
pub struct ApiDoc;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<MemoResponse>::error(message))).into_response()
}

#[utoipa::path(
    post,
    path = "/memo",
    request_body = CreateMemoRequest,
    responses(
        (status = 201, description = "Memo created successfully", body = MemoResponse),
        (status = 400, description = "Validation or persistence failure"),
        (status = 422, description = "Malformed request body")
    ),
    tag = "memo"
)]
#[debug_handler]
pub async fn create_memo(
    State(service): State<Arc<MemoService>>,
    payload: Result<Json<CreateMemoRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    match service.create_memo(payload).await {
        Ok(memo) => (StatusCode::CREATED, Json(ApiResponse::success(memo))).into_response(),
        Err(e) => {
            tracing::error!("failed to create memo: {}", e);
            // Persistence failures share the 400 with validation here,
            // matching the service's historical create behavior.
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

#[utoipa::path(
    get,
    path = "/memo/{memo_id}",
    params(
        ("memo_id" = i64, Path, description = "Memo ID")
    ),
    responses(
        (status = 200, description = "Memo found", body = MemoResponse),
        (status = 404, description = "Memo not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "memo"
)]
#[debug_handler]
pub async fn get_memo_by_id(
    State(service): State<Arc<MemoService>>,
    Path(memo_id): Path<String>,
) -> Response {
    // A non-integer segment is indistinguishable from an unknown memo.
    let Ok(id) = memo_id.parse::<i64>() else {
        return error_response(StatusCode::NOT_FOUND, MEMO_NOT_FOUND);
    };

    match service.get_memo_by_id(id).await {
        Ok(Some(memo)) => (StatusCode::OK, Json(ApiResponse::success(memo))).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, MEMO_NOT_FOUND),
        Err(e) => {
            tracing::error!("failed to get memo: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[utoipa::path(
    get,
    path = "/memo",
    responses(
        (status = 200, description = "List of all memos", body = Vec<MemoResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "memo"
)]
#[debug_handler]
pub async fn get_all_memo(State(service): State<Arc<MemoService>>) -> Response {
    match service.get_all_memo().await {
        Ok(memos) => (StatusCode::OK, Json(ApiResponse::success(memos))).into_response(),
        Err(e) => {
            tracing::error!("failed to get memos: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
