//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

use crate::{registry::summary::TrialSummary, translate::ParamMap};

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub parsed_query_params: ParamMap,
    pub results: Vec<TrialSummary>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
