//! Brawl Stars API access: the HTTP client, its error type and the response models.

pub mod client;
pub mod error;
pub mod models;

pub use client::{BrawlClient, ProfileSource, normalize_tag};
pub use error::ProfileError;
pub use models::{BrawlerEntry, ClubRef, ProfileRecord};
