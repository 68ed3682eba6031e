use std::error::Error as StdError;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Every way a `/profile` invocation can end without a rendered view.
/// Each variant is terminal for that invocation and shown to the user once.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("API Error: {0}")]
    Api(u16),
    #[error("Could not reach the Brawl Stars API.")]
    Transport(#[source] BoxError),
    #[error("Profile not found.")]
    NotFound,
    #[error("No brawlers unlocked.")]
    NoUnlockedItems,
}

impl ProfileError {
    /// Message sent back to the invoking user.
    pub fn user_message(&self) -> String {
        format!("❌ {self}")
    }
}

impl From<reqwest::Error> for ProfileError {
    fn from(err: reqwest::Error) -> Self {
        ProfileError::Transport(Box::new(err))
    }
}

// A 200 with a body we cannot decode is treated like any other failed exchange.
impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::Transport(Box::new(err))
    }
}
