//! Handles the UI creation for the `/profile` command.

use crate::api::BrawlerEntry;
use crate::interactions::ids::{BRAWL_NEXT, BRAWL_PREV};
use crate::pager::{PageView, PagedSelector};
use crate::ui::buttons::Btn;
use crate::ui::style::{
    COLOR_PROFILE, EMOJI_NEXT, EMOJI_PREV, EMOJI_TROPHY, FIELD_VALUE_LIMIT, truncate_chars,
};
use serenity::builder::{CreateActionRow, CreateEmbed, CreateEmbedFooter};
use std::fmt::Write;

pub fn render_page(selector: &PagedSelector) -> (CreateEmbed, Vec<CreateActionRow>) {
    let view = selector.current_view();
    (
        create_profile_embed(&view),
        vec![create_pager_buttons(&view)],
    )
}

pub fn header_description(view: &PageView<'_>) -> String {
    let h = &view.header;
    let trophies = if h.highest_trophies > h.trophies {
        format!("{} (best {})", h.trophies, h.highest_trophies)
    } else {
        h.trophies.to_string()
    };
    format!(
        "Trophies: {trophies} | Level: {}\nClub: {}\n3v3 Wins: {} | Showdown Wins: {}",
        h.exp_level, h.club, h.three_vs_three_wins, h.showdown_wins
    )
}

pub fn brawler_lines(items: &[BrawlerEntry]) -> String {
    let mut out = String::with_capacity(items.len() * 40);
    for b in items {
        let _ = writeln!(
            out,
            "**{}** - {} {EMOJI_TROPHY} (Power {})",
            b.name, b.trophies, b.power
        );
    }
    if out.is_empty() {
        out.push('-');
    }
    truncate_chars(out.trim_end(), FIELD_VALUE_LIMIT)
}

pub fn create_profile_embed(view: &PageView<'_>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("{} ({})", view.header.name, view.header.tag))
        .description(header_description(view))
        .color(COLOR_PROFILE)
        .field("Unlocked Brawlers", brawler_lines(view.items), false)
        .footer(CreateEmbedFooter::new(view.footer.clone()));
    if let Some(icon) = &view.icon_url {
        embed = embed.thumbnail(icon);
    }
    embed
}

pub fn create_pager_buttons(view: &PageView<'_>) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        Btn::pager(BRAWL_PREV, EMOJI_PREV, view.has_previous),
        Btn::pager(BRAWL_NEXT, EMOJI_NEXT, view.has_next),
    ])
}
