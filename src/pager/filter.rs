use crate::api::BrawlerEntry;

/// Keeps brawlers the player actually has: any power level or any trophies.
/// Input order is preserved so the later trophy sort stays stable.
pub fn unlocked_brawlers(brawlers: &[BrawlerEntry]) -> Vec<BrawlerEntry> {
    brawlers
        .iter()
        .filter(|b| b.is_unlocked())
        .cloned()
        .collect()
}
