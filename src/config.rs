//! Process-wide configuration, read once from the environment at startup.
//! The resulting `Config` is stored in `AppState` and handed to the API client by reference.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_PREFIX};
use serenity::model::id::GuildId;
use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing env variable `{0}`")]
    Missing(&'static str),
    #[error("failed to parse env variable `{name}={value}`; expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Clone)]
pub struct Config {
    /// Discord bot token used to log into the gateway.
    pub discord_token: String,
    /// Bearer token for the Brawl Stars API.
    pub api_token: String,
    /// Base URL without trailing slash, e.g. `https://api.brawlstars.com/v1`.
    pub api_base_url: String,
    /// When set, slash commands are registered on this guild only.
    pub guild_id: Option<GuildId>,
    pub prefix: String,
}

// Tokens stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("guild_id", &self.guild_id)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests never touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let discord_token = required("DISCORD_TOKEN")?;
        let api_token = required("BRAWL_API_KEY")?;

        let api_base_url = lookup("BRAWL_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let guild_id = match lookup("SERVER_ID").filter(|v| !v.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(id) if id != 0 => Some(GuildId::new(id)),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "SERVER_ID",
                        value: raw,
                        expected: "a non-zero integer",
                    });
                }
            },
            None => None,
        };

        let prefix = lookup("COMMAND_PREFIX")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

        Ok(Self {
            discord_token,
            api_token,
            api_base_url,
            guild_id,
            prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &[(&'static str, &'static str)],
    ) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("BRAWL_API_KEY")));
    }

    #[test]
    fn blank_discord_token_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "  "),
            ("BRAWL_API_KEY", "key"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DISCORD_TOKEN")));
    }

    #[test]
    fn defaults_apply_when_optional_values_absent() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("BRAWL_API_KEY", "key"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.prefix, DEFAULT_PREFIX);
        assert!(cfg.guild_id.is_none());
    }

    #[test]
    fn base_url_trailing_slash_trimmed_and_guild_parsed() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("BRAWL_API_KEY", "key"),
            ("BRAWL_API_URL", "http://127.0.0.1:9000/v1/"),
            ("SERVER_ID", "1234"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(cfg.guild_id, Some(GuildId::new(1234)));
    }

    #[test]
    fn bad_server_id_reports_value() {
        let err = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("BRAWL_API_KEY", "key"),
            ("SERVER_ID", "guild"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SERVER_ID=guild"));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "discord-secret"),
            ("BRAWL_API_KEY", "api-secret"),
        ]))
        .unwrap();
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("discord-secret"));
        assert!(!dbg.contains("api-secret"));
    }
}
