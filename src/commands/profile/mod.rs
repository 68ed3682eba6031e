//! The `/profile` command: fetch a Brawl Stars player and show their brawlers page by page.

pub mod logic;
pub mod run;
pub mod ui;
