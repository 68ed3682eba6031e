use crate::interactions::ids::{BRAWL_FAMILY, family};
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command, Interaction};
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use tracing::{error, info, warn};

enum PrefixCommand {
    Profile,
    Unknown,
}

impl FromStr for PrefixCommand {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" | "p" | "bs" => Ok(PrefixCommand::Profile),
            _ => Ok(PrefixCommand::Unknown),
        }
    }
}

pub struct Handler {
    /// Guild to register slash commands on; global registration when `None`.
    pub guild_id: Option<GuildId>,
    pub prefix: String,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Some(app_state) = AppState::from_ctx(&ctx).await else {
            error!("AppState missing from TypeMap");
            return;
        };
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "profile" => commands::profile::run::run_slash(&ctx, command).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            match family(&component.data.custom_id) {
                BRAWL_FAMILY => {
                    interactions::profile_handler::handle(&ctx, component, app_state).await
                }
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let Some(command_body) = msg.content.strip_prefix(self.prefix.as_str()) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = PrefixCommand::from_str(command_str).unwrap_or(PrefixCommand::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            PrefixCommand::Profile => {
                commands::profile::run::run_prefix(&ctx, &msg, args_vec).await
            }
            PrefixCommand::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
        let commands_to_register = vec![commands::profile::run::register()];

        let result = match self.guild_id {
            Some(guild_id) => guild_id
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|cmds| cmds.len()),
            None => Command::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|cmds| cmds.len()),
        };
        match result {
            Ok(count) => info!(target: "handler", count, guild = ?self.guild_id, "registered slash commands"),
            Err(e) => warn!(target: "handler", error = ?e, "error registering slash commands"),
        }
    }
}
