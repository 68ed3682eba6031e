use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "brawlstats_bot=info,serenity=warn";

/// Installs the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn initialize() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
