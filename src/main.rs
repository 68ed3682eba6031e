use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use brawlstats_bot::api::BrawlClient;
use brawlstats_bot::config::Config;
use brawlstats_bot::constants::VIEW_TIMEOUT_SECS;
use brawlstats_bot::handler::Handler;
use brawlstats_bot::sessions::SessionManager;
use brawlstats_bot::{AppState, logging};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the real environment.
    dotenv::dotenv().ok();
    logging::initialize().map_err(|e| anyhow::anyhow!(e))?;

    // Startup precondition: both tokens must be present before anything connects.
    let config = Arc::new(Config::from_env().context("invalid configuration")?);
    info!(?config, "configuration loaded");

    let api = BrawlClient::new(&config).context("failed to build Brawl Stars API client")?;
    let app_state = Arc::new(AppState::new(
        Arc::clone(&config),
        Arc::new(api),
        SessionManager::new(Duration::from_secs(VIEW_TIMEOUT_SECS)),
    ));

    // Slash commands and components arrive with GUILDS; the prefix form needs message content.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler {
            guild_id: config.guild_id,
            prefix: config.prefix.clone(),
        })
        .await
        .context("error creating the Discord client")?;

    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app_state);
    }

    if let Err(why) = client.start().await {
        error!(error = ?why, "client error");
    }

    info!("Shutting down");
    Ok(())
}
