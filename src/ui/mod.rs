//! Shared embed styling and component helpers.
pub mod buttons;
pub mod style;
