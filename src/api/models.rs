//! Response shapes for the `/players/{tag}` endpoint.
//! Only the fields the bot renders are modeled; everything else in the payload is ignored.

use crate::constants::BRAWLER_ICON_BASE_URL;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub trophies: u32,
    #[serde(default)]
    pub highest_trophies: u32,
    #[serde(default)]
    pub exp_level: u32,
    /// The API sends `{}` for players without a club, so both layers are optional.
    #[serde(default)]
    pub club: Option<ClubRef>,
    #[serde(rename = "3vs3Victories", default)]
    pub three_vs_three_victories: u32,
    #[serde(default)]
    pub solo_victories: u32,
    #[serde(default)]
    pub duo_victories: u32,
    #[serde(default)]
    pub brawlers: Vec<BrawlerEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ClubRef {
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BrawlerEntry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub trophies: u32,
    #[serde(default)]
    pub power: u32,
}

impl ProfileRecord {
    pub fn club_name(&self) -> Option<&str> {
        self.club.as_ref().and_then(|c| c.name.as_deref())
    }

    /// Solo and duo showdown wins combined.
    pub fn showdown_victories(&self) -> u32 {
        self.solo_victories.saturating_add(self.duo_victories)
    }
}

impl BrawlerEntry {
    pub fn is_unlocked(&self) -> bool {
        self.power > 0 || self.trophies > 0
    }

    pub fn icon_url(&self) -> String {
        format!("{BRAWLER_ICON_BASE_URL}/{}.png", self.id)
    }
}
