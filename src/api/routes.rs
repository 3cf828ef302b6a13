//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::api::types::{ErrorResponse, QueryRequest, QueryResponse};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// `POST /query` — translate the free-text query, search the registry, and
/// return the envelope. Every pipeline failure is converted to a structured
/// error body here; nothing propagates past this boundary.
pub async fn query_trials(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> ApiResult<QueryResponse> {
    match state.pipeline.run(&request.query).await {
        Ok(outcome) => Ok(Json(QueryResponse {
            parsed_query_params: outcome.params,
            results: outcome.results,
        })),
        Err(err) => {
            warn!(%err, "query failed");
            Err((
                err.status(),
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
