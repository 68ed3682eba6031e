//! Implements the run logic for the `/profile` command, supporting both prefix and slash forms.

use super::logic::{open_profile, tag_from_args};
use super::ui::render_page;
use crate::AppState;
use crate::pager::PagedSelector;
use crate::sessions::{ProfileSession, spawn_expiry_watcher};
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateMessage, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use serenity::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

pub fn register() -> CreateCommand {
    CreateCommand::new("profile")
        .description("Display a Brawl Stars player's profile")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "tag",
                "Brawl Stars player tag (e.g. #PY9J8Q)",
            )
            .required(true),
        )
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    interaction.defer(&ctx.http).await.ok();

    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let tag = interaction
        .data
        .options
        .iter()
        .find(|opt| opt.name == "tag")
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();
    info!(target: "cmd.profile", user_id = %interaction.user.id, tag, "slash invocation");

    let selector = match open_profile(app_state.api.as_ref(), tag).await {
        Ok(selector) => selector,
        Err(e) => {
            let builder = EditInteractionResponse::new().content(e.user_message());
            interaction.edit_response(&ctx.http, builder).await.ok();
            return;
        }
    };

    let (embed, components) = render_page(&selector);
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(components);
    match interaction.edit_response(&ctx.http, builder).await {
        Ok(message) => track_view(ctx, &app_state, &message, interaction.user.id, selector).await,
        Err(e) => {
            error!(target: "cmd.profile", error = ?e, "failed to send profile view");
        }
    }
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>) {
    let Some(app_state) = AppState::from_ctx(ctx).await else {
        return;
    };
    let Some(tag) = tag_from_args(&args) else {
        let usage = format!("Usage: `{}profile <tag>`", app_state.config.prefix);
        msg.reply(&ctx.http, usage).await.ok();
        return;
    };
    info!(target: "cmd.profile", user_id = %msg.author.id, tag, "prefix invocation");

    let selector = match open_profile(app_state.api.as_ref(), tag).await {
        Ok(selector) => selector,
        Err(e) => {
            msg.reply(&ctx.http, e.user_message()).await.ok();
            return;
        }
    };

    let (embed, components) = render_page(&selector);
    let builder = CreateMessage::new()
        .embed(embed)
        .components(components)
        .reference_message(msg);
    match msg.channel_id.send_message(&ctx.http, builder).await {
        Ok(message) => track_view(ctx, &app_state, &message, msg.author.id, selector).await,
        Err(e) => {
            error!(target: "cmd.profile", error = ?e, "failed to send profile view");
        }
    }
}

/// Registers the rendered message as a live session and arms its inactivity timer.
async fn track_view(
    ctx: &Context,
    app_state: &Arc<AppState>,
    message: &Message,
    owner: UserId,
    selector: PagedSelector,
) {
    // A single page has nothing to navigate, so there is no session to keep.
    if selector.max_page() == 0 {
        return;
    }
    app_state.sessions.write().await.start(
        message.id,
        ProfileSession::new(owner, message.channel_id, selector),
    );
    spawn_expiry_watcher(
        ctx.http.clone(),
        app_state.sessions.clone(),
        message.channel_id,
        message.id,
    );
}
