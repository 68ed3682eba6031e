//! Centralized custom_id string constants for interaction components.

/// Family prefix routed to `profile_handler`.
pub const BRAWL_FAMILY: &str = "brawl";
pub const BRAWL_PREV: &str = "brawl_prev";
pub const BRAWL_NEXT: &str = "brawl_next";

/// The routing family of a custom_id, e.g. `brawl` for `brawl_next`.
pub fn family(id: &str) -> &str {
    id.split('_').next().unwrap_or("")
}
