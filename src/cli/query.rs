//! CLI entry-point for running one query end to end.

use std::sync::Arc;

use anyhow::Result;
use clap::Args as ClapArgs;
use serde_json::json;
use tracing::instrument;

use crate::{
    config::Settings,
    pipeline::QueryPipeline,
    registry::RegistryFetcher,
    translate::{openai::OpenAiClient, QueryTranslator},
};

/// Args for the `query` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Free-text research query, e.g. "completed phase 3 diabetes trials in Canada".
    pub query: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let chat = OpenAiClient::from_settings(&settings)?;
    let translator = QueryTranslator::new(Arc::new(chat));
    let fetcher = RegistryFetcher::from_settings(&settings)?;
    let pipeline = QueryPipeline::new(translator, fetcher);

    let outcome = pipeline.run(&args.query).await?;
    let envelope = json!({
        "parsed_query_params": outcome.params,
        "results": outcome.results,
    });
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
