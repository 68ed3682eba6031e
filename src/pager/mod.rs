//! Paging over a player's unlocked brawlers.
//!
//! `filter` narrows the raw list, `selector` owns the sorted copy and the page cursor,
//! and `reducer` applies button events to a selector.

pub mod filter;
pub mod reducer;
pub mod selector;

pub use filter::unlocked_brawlers;
pub use reducer::{PagerEvent, Transition, reduce};
pub use selector::{PageHeader, PageView, PagedSelector};
