// Central constants for the API, paging and session lifetime.
pub const DEFAULT_API_BASE_URL: &str = "https://api.brawlstars.com/v1";
pub const BRAWLER_ICON_BASE_URL: &str = "https://cdn.brawlstats.com/brawlers";
pub const DEFAULT_PREFIX: &str = "!";

pub const BRAWLERS_PER_PAGE: usize = 18;
pub const VIEW_TIMEOUT_SECS: u64 = 180; // inactivity window before buttons stop responding

pub const NO_CLUB: &str = "No club";

pub const EXPIRED_VIEW_NOTICE: &str = "This profile view has expired. Run `/profile` again.";
pub const NOT_OWNER_NOTICE: &str = "Only the person who ran this command can turn its pages.";
