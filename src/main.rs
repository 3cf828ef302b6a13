//! Entry point wiring CLI dispatch to the query pipeline.

use anyhow::Result;
use tracing::info;
use trial_scout::{cli::Cli, config::Settings, logging};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
