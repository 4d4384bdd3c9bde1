use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error::UpstreamError, spotify::SpotifyClient, types::AccessToken, utils};

/// Seconds before expiry at which a cached token is no longer handed out.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// In-memory cache holding the most recent client-credentials token.
///
/// Clones share the same slot. Refreshes hold the lock across the exchange,
/// so concurrent callers wait for one refresh instead of racing.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached token.
    pub async fn store(&self, token: AccessToken) {
        *self.token.lock().await = Some(token);
    }

    pub async fn current(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }

    /// Returns a cached token that is still valid, or exchanges for a new one.
    pub async fn valid_token(&self, client: &SpotifyClient) -> Result<String, UpstreamError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            if !is_expired(token, utils::now_timestamp()) {
                return Ok(token.access_token.clone());
            }
            tracing::debug!("cached token expired, refreshing");
        }

        let fresh = client.request_client_credentials_token().await?;
        let access_token = fresh.access_token.clone();
        *slot = Some(fresh);
        Ok(access_token)
    }
}

fn is_expired(token: &AccessToken, now: u64) -> bool {
    // expires_in comes from upstream JSON and may be arbitrarily large
    now.saturating_add(EXPIRY_MARGIN_SECS) >= token.obtained_at.saturating_add(token.expires_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(obtained_at: u64, expires_in: u64) -> AccessToken {
        AccessToken {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            scope: None,
            expires_in,
            obtained_at,
        }
    }

    #[test]
    fn fresh_token_is_not_expired() {
        assert!(!is_expired(&token(1_000, 3600), 1_000));
        assert!(!is_expired(&token(1_000, 3600), 1_000 + 3600 - 61));
    }

    #[test]
    fn token_inside_margin_counts_as_expired() {
        assert!(is_expired(&token(1_000, 3600), 1_000 + 3600 - 60));
        assert!(is_expired(&token(1_000, 3600), 10_000));
    }

    #[test]
    fn short_lived_token_is_always_expired() {
        assert!(is_expired(&token(1_000, 30), 1_000));
    }

    #[test]
    fn huge_lifetime_does_not_overflow() {
        assert!(!is_expired(&token(1_000, u64::MAX), 1_000));
        assert!(!is_expired(&token(u64::MAX, u64::MAX), u64::MAX - EXPIRY_MARGIN_SECS - 1));
    }

    #[tokio::test]
    async fn store_replaces_previous_token() {
        let cache = TokenCache::new();
        assert!(cache.current().await.is_none());

        cache.store(token(1, 3600)).await;
        let mut second = token(2, 3600);
        second.access_token = "def".to_string();
        cache.store(second).await;

        let current = cache.current().await.unwrap();
        assert_eq!(current.access_token, "def");
        assert_eq!(current.obtained_at, 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let cache = TokenCache::new();
        let other = cache.clone();
        other.store(token(5, 3600)).await;
        assert_eq!(cache.current().await.unwrap().obtained_at, 5);
    }
}
