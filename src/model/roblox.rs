//! Roblox identity models.

use serde::Deserialize;

/// A Roblox account as returned by the users API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RobloxUser {
    /// Stable numeric Roblox user ID
    pub id: u64,
    /// Roblox username with its canonical capitalization
    pub name: String,
}

impl RobloxUser {
    /// URL of the account's avatar headshot.
    pub fn headshot_url(&self) -> String {
        format!(
            "https://www.roblox.com/headshot-thumbnail/image?userId={}&width=420&height=420&format=png",
            self.id
        )
    }
}

/// Result of resolving a username against the Roblox users API.
///
/// Upstream failures are kept apart from a genuine "no such user" so members are
/// not told their account does not exist while Roblox is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The username belongs to this account.
    Found(RobloxUser),
    /// Roblox answered and has no (non-banned) account with that username.
    NotFound,
    /// Roblox could not be asked or gave an unusable answer.
    Unavailable(String),
}
