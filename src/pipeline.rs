//! End-to-end query pipeline shared by the HTTP handler and the CLI.

use tracing::info;

use crate::{
    error::AppError,
    registry::{summary, summary::TrialSummary, RegistryFetcher},
    translate::{ParamMap, QueryTranslator},
};

/// Outcome of one query: the parameters used and the projected summaries.
pub struct QueryOutcome {
    pub params: ParamMap,
    pub results: Vec<TrialSummary>,
}

/// Translate, fetch, project. The two outbound calls are strictly
/// sequential; nothing is cached or retried across requests.
#[derive(Clone)]
pub struct QueryPipeline {
    translator: QueryTranslator,
    fetcher: RegistryFetcher,
}

impl QueryPipeline {
    pub fn new(translator: QueryTranslator, fetcher: RegistryFetcher) -> Self {
        Self {
            translator,
            fetcher,
        }
    }

    pub async fn run(&self, query: &str) -> Result<QueryOutcome, AppError> {
        let params = self.translator.translate(query).await?;
        info!(?params, "parsed query params");
        let studies = self.fetcher.fetch_studies(&params).await?;
        let results = studies.iter().map(summary::project).collect();
        Ok(QueryOutcome { params, results })
    }
}
