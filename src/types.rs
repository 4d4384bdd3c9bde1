use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Catalog resource the lookup proxy forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Artist,
    Album,
    Track,
}

impl ResourceKind {
    /// Collection segment of the Web API, as in `/artists/{id}`.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::Artist => "artists",
            ResourceKind::Album => "albums",
            ResourceKind::Track => "tracks",
        }
    }

    /// Value of the `type` parameter of `/search`.
    pub fn search_type(&self) -> &'static str {
        match self {
            ResourceKind::Artist => "artist",
            ResourceKind::Album => "album",
            ResourceKind::Track => "track",
        }
    }
}

/// Which upstream operation a lookup request selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    ById(String),
    ByName(String),
    ListAll,
}

impl LookupQuery {
    /// Selects the operation from raw query parameters.
    ///
    /// Presence decides: `id` wins over `name`, and an empty `?id=` still
    /// counts as a by-id lookup.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        if let Some(id) = params.get("id") {
            LookupQuery::ById(id.clone())
        } else if let Some(name) = params.get("name") {
            LookupQuery::ByName(name.clone())
        } else {
            LookupQuery::ListAll
        }
    }
}

/// Body of a successful token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Tabled)]
pub struct TokenTableRow {
    pub token_type: String,
    pub expires_in: String,
    pub scope: String,
    pub length: usize,
}

/// Query string of the authorization-code callback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn id_takes_precedence_over_name() {
        let query = LookupQuery::from_params(&params(&[("name", "Thriller"), ("id", "123")]));
        assert_eq!(query, LookupQuery::ById("123".to_string()));
    }

    #[test]
    fn name_is_used_without_id() {
        let query = LookupQuery::from_params(&params(&[("name", "Thriller")]));
        assert_eq!(query, LookupQuery::ByName("Thriller".to_string()));
    }

    #[test]
    fn no_params_lists_all() {
        assert_eq!(LookupQuery::from_params(&params(&[])), LookupQuery::ListAll);
        assert_eq!(
            LookupQuery::from_params(&params(&[("limit", "5")])),
            LookupQuery::ListAll
        );
    }

    #[test]
    fn empty_id_still_selects_by_id() {
        let query = LookupQuery::from_params(&params(&[("id", ""), ("name", "x")]));
        assert_eq!(query, LookupQuery::ById(String::new()));
    }

    #[test]
    fn token_response_fills_defaults() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert!(token.scope.is_none());
    }

    #[test]
    fn resource_kinds_map_to_api_names() {
        assert_eq!(ResourceKind::Artist.collection(), "artists");
        assert_eq!(ResourceKind::Album.search_type(), "album");
        assert_eq!(ResourceKind::Track.collection(), "tracks");
    }
}
