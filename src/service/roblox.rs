//! Roblox identity lookup client.
//!
//! Resolves a Roblox username to its account through the public users API. The
//! lookup is exposed through the [`IdentityLookup`] trait so the verification
//! handler receives it as an injected capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::roblox::{LookupOutcome, RobloxUser};

/// Default base URL of the Roblox users API.
pub const ROBLOX_USERS_API_URL: &str = "https://users.roblox.com";

/// Resolves external game usernames to accounts.
#[async_trait]
pub trait IdentityLookup: Send + Sync {
    /// Looks up the account owning `username`.
    ///
    /// Never fails: upstream problems are reported as [`LookupOutcome::Unavailable`].
    async fn lookup(&self, username: &str) -> LookupOutcome;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernamesRequest<'a> {
    usernames: [&'a str; 1],
    exclude_banned_users: bool,
}

#[derive(Deserialize)]
struct UsernamesResponse {
    #[serde(default)]
    data: Vec<RobloxUser>,
}

impl UsernamesResponse {
    /// Only the first match is used; the API returns at most one per username.
    fn into_outcome(self) -> LookupOutcome {
        match self.data.into_iter().next() {
            Some(user) => LookupOutcome::Found(user),
            None => LookupOutcome::NotFound,
        }
    }
}

/// HTTP client for the Roblox users API.
#[derive(Clone)]
pub struct RobloxClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RobloxClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Shared reqwest client
    /// - `base_url` - API base URL without path, e.g. `https://users.roblox.com`
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn request(&self, username: &str) -> Result<LookupOutcome, reqwest::Error> {
        let response = self
            .http_client
            .post(format!("{}/v1/usernames/users", self.base_url))
            .json(&UsernamesRequest {
                usernames: [username],
                exclude_banned_users: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Ok(LookupOutcome::Unavailable(format!(
                "Roblox users API returned {}",
                status
            )));
        }

        let body = response.json::<UsernamesResponse>().await?;

        Ok(body.into_outcome())
    }
}

#[async_trait]
impl IdentityLookup for RobloxClient {
    async fn lookup(&self, username: &str) -> LookupOutcome {
        let username = username.trim();
        if username.is_empty() {
            return LookupOutcome::NotFound;
        }

        let outcome = match self.request(username).await {
            Ok(outcome) => outcome,
            Err(e) => LookupOutcome::Unavailable(e.to_string()),
        };

        if let LookupOutcome::Unavailable(reason) = &outcome {
            tracing::warn!("Roblox lookup for '{}' failed: {}", username, reason);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_request_body() {
        let body = serde_json::to_value(UsernamesRequest {
            usernames: ["Builderman"],
            exclude_banned_users: true,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "usernames": ["Builderman"],
                "excludeBannedUsers": true
            })
        );
    }

    #[test]
    fn uses_first_match_from_response() {
        let response: UsernamesResponse = serde_json::from_value(serde_json::json!({
            "data": [
                {
                    "requestedUsername": "builderman",
                    "hasVerifiedBadge": true,
                    "id": 156,
                    "name": "Builderman",
                    "displayName": "Builderman"
                }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.into_outcome(),
            LookupOutcome::Found(RobloxUser {
                id: 156,
                name: "Builderman".to_string(),
            })
        );
    }

    #[test]
    fn empty_or_missing_data_is_not_found() {
        let empty: UsernamesResponse =
            serde_json::from_value(serde_json::json!({ "data": [] })).unwrap();
        let missing: UsernamesResponse = serde_json::from_value(serde_json::json!({})).unwrap();

        assert_eq!(empty.into_outcome(), LookupOutcome::NotFound);
        assert_eq!(missing.into_outcome(), LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn blank_username_is_not_found_without_request() {
        // Nothing listens on port 1; a request would come back as Unavailable
        let client = RobloxClient::new(reqwest::Client::new(), "http://127.0.0.1:1");

        assert_eq!(client.lookup("   ").await, LookupOutcome::NotFound);
    }

    #[tokio::test]
    async fn unreachable_api_is_unavailable() {
        let client = RobloxClient::new(reqwest::Client::new(), "http://127.0.0.1:1/");

        assert!(matches!(
            client.lookup("Builderman").await,
            LookupOutcome::Unavailable(_)
        ));
    }
}
