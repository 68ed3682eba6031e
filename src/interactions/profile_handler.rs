//! Handles the previous/next buttons on a profile view.
//!
//! The session lock is only held while the reducer runs and the next page is built;
//! every Discord call happens after it is released.

use super::util::{defer_component, edit_component, reply_ephemeral};
use crate::AppState;
use crate::commands::profile::ui::render_page;
use crate::constants::{EXPIRED_VIEW_NOTICE, NOT_OWNER_NOTICE};
use crate::pager::{PagerEvent, Transition, reduce};
use crate::sessions::{SessionLookup, SessionManager};
use serenity::builder::{CreateActionRow, CreateEmbed, EditInteractionResponse};
use serenity::model::application::ComponentInteraction;
use serenity::model::id::{MessageId, UserId};
use serenity::prelude::Context;
use std::sync::Arc;

/// What the handler has to do on Discord's side after the reducer ran.
pub enum PressOutcome {
    Render(CreateEmbed, Vec<CreateActionRow>),
    Unchanged,
    NotOwner,
    Expired,
}

/// Applies a button event to the session shown in `message_id`.
/// Pure with respect to Discord so it can be exercised directly.
pub fn apply_press(
    sessions: &mut SessionManager,
    message_id: &MessageId,
    presser: UserId,
    event: PagerEvent,
) -> PressOutcome {
    match sessions.get_active(message_id) {
        SessionLookup::Active(session) if session.owner != presser => PressOutcome::NotOwner,
        SessionLookup::Active(session) => match reduce(&mut session.selector, event) {
            Transition::Render => {
                let (embed, components) = render_page(&session.selector);
                PressOutcome::Render(embed, components)
            }
            Transition::NoOp => PressOutcome::Unchanged,
        },
        SessionLookup::Expired | SessionLookup::Missing => PressOutcome::Expired,
    }
}

#[tracing::instrument(level="debug", skip(ctx, component, app_state), fields(user_id = component.user.id.get(), cid = %component.data.custom_id))]
pub async fn handle(ctx: &Context, component: &ComponentInteraction, app_state: Arc<AppState>) {
    let Some(event) = PagerEvent::from_custom_id(&component.data.custom_id) else {
        return;
    };

    let outcome = {
        let mut sessions = app_state.sessions.write().await;
        apply_press(
            &mut sessions,
            &component.message.id,
            component.user.id,
            event,
        )
    };

    match outcome {
        PressOutcome::Render(embed, components) => {
            defer_component(ctx, component).await;
            edit_component(
                ctx,
                component,
                "brawl.page",
                EditInteractionResponse::new()
                    .embed(embed)
                    .components(components),
            )
            .await;
        }
        // Boundary press: acknowledge so the client doesn't show a failure.
        PressOutcome::Unchanged => defer_component(ctx, component).await,
        PressOutcome::NotOwner => reply_ephemeral(ctx, component, NOT_OWNER_NOTICE).await,
        PressOutcome::Expired => reply_ephemeral(ctx, component, EXPIRED_VIEW_NOTICE).await,
    }
}
