//! HTTP layer exposing the query pipeline.

pub mod routes;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Settings,
    pipeline::QueryPipeline,
    registry::RegistryFetcher,
    translate::{openai::OpenAiClient, QueryTranslator},
};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: QueryPipeline,
}

/// Build the application router around a pipeline. Exposed separately from
/// [`serve`] so tests can wire in stub collaborators.
pub fn router(pipeline: QueryPipeline) -> Router {
    Router::new()
        .route("/query", post(routes::query_trials))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pipeline })
}

/// Run the API with production collaborators. Fails fast when the
/// completion-provider credential is not configured.
pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let chat = OpenAiClient::from_settings(&settings)?;
    let translator = QueryTranslator::new(Arc::new(chat));
    let fetcher = RegistryFetcher::from_settings(&settings)?;
    let app = router(QueryPipeline::new(translator, fetcher));

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving trial-scout API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
