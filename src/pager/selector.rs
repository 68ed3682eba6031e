//! Bounded page cursor over a trophy-sorted copy of a player's brawlers.
//!
//! The sorted list is built once in `new` and never re-filtered. The cursor always stays
//! inside `0..=max_page`; moving past either end is a no-op that reports `false`.

use super::filter::unlocked_brawlers;
use crate::api::{BrawlerEntry, ProfileError, ProfileRecord};
use crate::constants::{BRAWLERS_PER_PAGE, NO_CLUB};

#[derive(Debug, Clone)]
pub struct PagedSelector {
    profile: ProfileRecord,
    items: Vec<BrawlerEntry>,
    page_size: usize,
    cursor: usize,
}

/// Summary block shown above every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHeader<'a> {
    pub name: &'a str,
    pub tag: &'a str,
    pub trophies: u32,
    pub highest_trophies: u32,
    pub exp_level: u32,
    pub club: &'a str,
    pub three_vs_three_wins: u32,
    pub showdown_wins: u32,
}

/// Everything needed to render one page. Borrowed from the selector, so it is cheap to build.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub header: PageHeader<'a>,
    pub items: &'a [BrawlerEntry],
    /// Icon of the first brawler on the page.
    pub icon_url: Option<String>,
    pub footer: String,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagedSelector {
    /// Sorts `items` by trophies, highest first. `sort_by` is stable so equal
    /// trophy counts keep their input order. A zero page size is treated as 1.
    pub fn new(profile: ProfileRecord, mut items: Vec<BrawlerEntry>, page_size: usize) -> Self {
        items.sort_by(|a, b| b.trophies.cmp(&a.trophies));
        Self {
            profile,
            items,
            page_size: page_size.max(1),
            cursor: 0,
        }
    }

    /// Filters the profile's brawlers and builds a selector with the default page size.
    /// Refuses to build one over zero rows.
    pub fn from_profile(profile: ProfileRecord) -> Result<Self, ProfileError> {
        let items = unlocked_brawlers(&profile.brawlers);
        if items.is_empty() {
            return Err(ProfileError::NoUnlockedItems);
        }
        Ok(Self::new(profile, items, BRAWLERS_PER_PAGE))
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn items(&self) -> &[BrawlerEntry] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_page(&self) -> usize {
        self.items.len().div_ceil(self.page_size).saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.max_page()
    }

    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn current_view(&self) -> PageView<'_> {
        let start = (self.cursor * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        let items = &self.items[start..end];

        let p = &self.profile;
        let header = PageHeader {
            name: &p.name,
            tag: &p.tag,
            trophies: p.trophies,
            highest_trophies: p.highest_trophies,
            exp_level: p.exp_level,
            club: p.club_name().unwrap_or(NO_CLUB),
            three_vs_three_wins: p.three_vs_three_victories,
            showdown_wins: p.showdown_victories(),
        };

        PageView {
            header,
            items,
            icon_url: items.first().map(BrawlerEntry::icon_url),
            footer: format!("Page {}/{}", self.cursor + 1, self.max_page() + 1),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }
}
