//! This module acts as a central router for all component interactions.
//!
//! The main `handler.rs` file delegates here based on the component's "family"
//! (the custom_id segment before the first `_`).

pub mod ids;
pub mod profile_handler;
pub mod util;
