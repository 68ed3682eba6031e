//! Button events for a profile view, reduced against the selector independent of Discord types.

use super::selector::PagedSelector;
use crate::interactions::ids::{BRAWL_NEXT, BRAWL_PREV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerEvent {
    Previous,
    Next,
}

/// Outcome of applying an event: the view must be redrawn, or nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Render,
    NoOp,
}

impl PagerEvent {
    pub fn from_custom_id(id: &str) -> Option<Self> {
        match id {
            BRAWL_PREV => Some(PagerEvent::Previous),
            BRAWL_NEXT => Some(PagerEvent::Next),
            _ => None,
        }
    }

    pub fn custom_id(self) -> &'static str {
        match self {
            PagerEvent::Previous => BRAWL_PREV,
            PagerEvent::Next => BRAWL_NEXT,
        }
    }
}

pub fn reduce(selector: &mut PagedSelector, event: PagerEvent) -> Transition {
    let moved = match event {
        PagerEvent::Previous => selector.retreat(),
        PagerEvent::Next => selector.advance(),
    };
    if moved {
        Transition::Render
    } else {
        Transition::NoOp
    }
}
