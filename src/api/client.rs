//! Thin client over the Brawl Stars REST API.
//! One GET per call, no caching, no retry. Every failure is folded into `ProfileError`.

use super::error::ProfileError;
use super::models::ProfileRecord;
use crate::config::Config;
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Anything that can turn a raw player tag into a profile.
/// The command flow only depends on this trait so it can run against a stub in tests.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, raw_tag: &str) -> Result<ProfileRecord, ProfileError>;
}

pub struct BrawlClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl BrawlClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub fn player_url(&self, raw_tag: &str) -> String {
        format!("{}/players/{}", self.base_url, normalize_tag(raw_tag))
    }

    #[instrument(level = "debug", target = "api.fetch", skip(self))]
    pub async fn get_player(&self, raw_tag: &str) -> Result<ProfileRecord, ProfileError> {
        let url = self.player_url(raw_tag);
        debug!(target: "api.fetch", %url, "requesting player profile");

        let result = self.request(&url).await;
        if let Err(e) = &result {
            warn!(target: "api.fetch", %url, error = ?e, "player profile fetch failed");
        }
        result
    }

    async fn request(&self, url: &str) -> Result<ProfileRecord, ProfileError> {
        let response = self.http.get(url).bearer_auth(&self.token).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProfileError::Api(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_profile_body(&body)
    }
}

#[async_trait]
impl ProfileSource for BrawlClient {
    async fn fetch_profile(&self, raw_tag: &str) -> Result<ProfileRecord, ProfileError> {
        self.get_player(raw_tag).await
    }
}

/// Uppercases the tag and percent-encodes `#`. No other validation happens here;
/// malformed tags are left for the API to reject.
pub fn normalize_tag(raw_tag: &str) -> String {
    raw_tag.to_uppercase().replace('#', "%23")
}

/// Decodes a 200 body. An empty or `null` body means the player does not exist.
pub fn parse_profile_body(body: &[u8]) -> Result<ProfileRecord, ProfileError> {
    let body = body.trim_ascii();
    if body.is_empty() || body == b"null" {
        return Err(ProfileError::NotFound);
    }
    Ok(serde_json::from_slice(body)?)
}
