use crate::api::{ProfileError, ProfileSource};
use crate::pager::PagedSelector;

/// Fetches the player and builds a selector over their unlocked brawlers.
/// Any error ends the invocation; nothing is rendered in that case.
pub async fn open_profile(
    source: &dyn ProfileSource,
    raw_tag: &str,
) -> Result<PagedSelector, ProfileError> {
    let profile = source.fetch_profile(raw_tag).await?;
    PagedSelector::from_profile(profile)
}

/// First whitespace-separated argument of the prefix form, e.g. `!profile #PY9J8Q`.
pub fn tag_from_args<'a>(args: &[&'a str]) -> Option<&'a str> {
    args.first().copied().filter(|t| !t.is_empty())
}
