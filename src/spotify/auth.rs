use reqwest::header::AUTHORIZATION;

use crate::{
    error::UpstreamError,
    types::{AccessToken, TokenResponse},
    utils,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Performs one OAuth 2.0 client-credentials exchange.
    ///
    /// Sends exactly one `POST` to the configured token URL with the form
    /// body `grant_type=client_credentials` and the client id and secret as
    /// an HTTP Basic `Authorization` header.
    ///
    /// # Returns
    ///
    /// The access token together with its type, scope and lifetime. The
    /// token is not cached here; see
    /// [`TokenCache`](crate::management::TokenCache).
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Unavailable`] if the accounts service cannot be reached
    /// - [`UpstreamError::Rejected`] for any non-2xx answer, e.g. invalid credentials
    /// - [`UpstreamError::Malformed`] if the body is not JSON or has no `access_token`
    pub async fn request_client_credentials_token(&self) -> Result<AccessToken, UpstreamError> {
        let config = self.config();
        let res = self
            .http
            .post(&config.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&config.client_id, &config.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::Malformed(format!("token response: {e}")))?;
        if token.access_token.is_empty() {
            return Err(UpstreamError::Malformed(
                "token response: empty access_token".to_string(),
            ));
        }

        tracing::debug!(
            token_type = %token.token_type,
            expires_in = token.expires_in,
            token_len = token.access_token.len(),
            "obtained client-credentials token"
        );

        Ok(AccessToken {
            access_token: token.access_token,
            token_type: token.token_type,
            scope: token.scope,
            expires_in: token.expires_in,
            obtained_at: utils::now_timestamp(),
        })
    }
}
