//! Tracks live profile views keyed by the message that displays them.
//!
//! Each entry owns its `PagedSelector` exclusively. Entries expire after a period of
//! inactivity; lookups past the deadline evict the entry and report `Expired` so late
//! button presses are answered instead of silently mutating a dead view.

use crate::pager::PagedSelector;
use serenity::builder::EditMessage;
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub struct ProfileSession {
    pub owner: UserId,
    pub channel_id: ChannelId,
    pub selector: PagedSelector,
    last_activity: Instant,
}

impl ProfileSession {
    pub fn new(owner: UserId, channel_id: ChannelId, selector: PagedSelector) -> Self {
        Self::started_at(owner, channel_id, selector, Instant::now())
    }

    pub fn started_at(
        owner: UserId,
        channel_id: ChannelId,
        selector: PagedSelector,
        now: Instant,
    ) -> Self {
        Self {
            owner,
            channel_id,
            selector,
            last_activity: now,
        }
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }
}

pub enum SessionLookup<'a> {
    Active(&'a mut ProfileSession),
    Expired,
    Missing,
}

pub struct SessionManager {
    ttl: Duration,
    sessions: HashMap<MessageId, ProfileSession>,
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: HashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn start(&mut self, message_id: MessageId, session: ProfileSession) {
        self.sessions.insert(message_id, session);
    }

    pub fn get_active(&mut self, message_id: &MessageId) -> SessionLookup<'_> {
        self.get_active_at(message_id, Instant::now())
    }

    /// Returns the live session and refreshes its inactivity timer.
    /// An entry found past its deadline is evicted on the spot.
    pub fn get_active_at(&mut self, message_id: &MessageId, now: Instant) -> SessionLookup<'_> {
        let expired = match self.sessions.get(message_id) {
            None => return SessionLookup::Missing,
            Some(s) => now.saturating_duration_since(s.last_activity) >= self.ttl,
        };
        if expired {
            self.sessions.remove(message_id);
            return SessionLookup::Expired;
        }
        match self.sessions.get_mut(message_id) {
            Some(session) => {
                session.last_activity = now;
                SessionLookup::Active(session)
            }
            None => SessionLookup::Missing,
        }
    }

    pub fn deadline(&self, message_id: &MessageId) -> Option<Instant> {
        self.sessions
            .get(message_id)
            .map(|s| s.last_activity + self.ttl)
    }

    /// Removes the session if it has been idle for the full TTL. Returns true if it was removed.
    pub fn expire_if_stale(&mut self, message_id: &MessageId, now: Instant) -> bool {
        let stale = self
            .deadline(message_id)
            .is_some_and(|deadline| now >= deadline);
        if stale {
            self.sessions.remove(message_id);
        }
        stale
    }

    pub fn remove(&mut self, message_id: &MessageId) -> Option<ProfileSession> {
        self.sessions.remove(message_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Sleeps until the session's deadline, re-arming whenever a button press pushed it back.
/// Once the view has been idle for the full TTL it is dropped and its buttons are removed.
pub fn spawn_expiry_watcher(
    http: Arc<Http>,
    sessions: Arc<RwLock<SessionManager>>,
    channel_id: ChannelId,
    message_id: MessageId,
) {
    tokio::spawn(async move {
        loop {
            let Some(deadline) = sessions.read().await.deadline(&message_id) else {
                // Already gone (evicted by a late lookup).
                return;
            };
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await;

            if !sessions
                .write()
                .await
                .expire_if_stale(&message_id, Instant::now())
            {
                continue;
            }

            tracing::debug!(target: "session", message_id = %message_id, "profile view expired");
            if let Err(e) = channel_id
                .edit_message(&http, message_id, EditMessage::new().components(vec![]))
                .await
            {
                tracing::debug!(target: "session", message_id = %message_id, error = ?e, "failed to strip buttons from expired view");
            }
            return;
        }
    });
}
