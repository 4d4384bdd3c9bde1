use reqwest::Url;

use crate::{
    error::UpstreamError,
    types::{LookupQuery, ResourceKind},
    utils,
};

use super::{SpotifyClient, UpstreamBody};

impl SpotifyClient {
    /// Forwards a lookup to exactly one upstream operation.
    ///
    /// - [`LookupQuery::ById`] → [`get_by_id`](Self::get_by_id)
    /// - [`LookupQuery::ByName`] → [`get_by_name`](Self::get_by_name)
    /// - [`LookupQuery::ListAll`] → [`list_all`](Self::list_all)
    pub async fn lookup(
        &self,
        token: &str,
        kind: ResourceKind,
        query: &LookupQuery,
    ) -> Result<UpstreamBody, UpstreamError> {
        match query {
            LookupQuery::ById(id) => self.get_by_id(token, kind, id).await,
            LookupQuery::ByName(name) => self.get_by_name(token, kind, name).await,
            LookupQuery::ListAll => self.list_all(token, kind).await,
        }
    }

    /// `GET {api}/{artists|albums|tracks}/{id}`, the id sent as one path segment.
    pub async fn get_by_id(
        &self,
        token: &str,
        kind: ResourceKind,
        id: &str,
    ) -> Result<UpstreamBody, UpstreamError> {
        let mut url = self.api_url()?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Unavailable {
                message: format!("cannot append path to {}", self.config().api_url),
                timed_out: false,
            })?
            .pop_if_empty()
            .push(kind.collection())
            .push(id);

        self.fetch(token, url).await
    }

    /// `GET {api}/search?q={name}&type={kind}`.
    pub async fn get_by_name(
        &self,
        token: &str,
        kind: ResourceKind,
        name: &str,
    ) -> Result<UpstreamBody, UpstreamError> {
        self.search(token, kind, name).await
    }

    /// A catalog search scoped to the current year.
    pub async fn list_all(&self, token: &str, kind: ResourceKind) -> Result<UpstreamBody, UpstreamError> {
        self.search(token, kind, &utils::current_list_all_query()).await
    }

    async fn search(
        &self,
        token: &str,
        kind: ResourceKind,
        q: &str,
    ) -> Result<UpstreamBody, UpstreamError> {
        let mut url = self.api_url()?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::Unavailable {
                message: format!("cannot append path to {}", self.config().api_url),
                timed_out: false,
            })?
            .pop_if_empty()
            .push("search");
        url.query_pairs_mut()
            .append_pair("q", q)
            .append_pair("type", kind.search_type());

        self.fetch(token, url).await
    }

    async fn fetch(&self, token: &str, url: Url) -> Result<UpstreamBody, UpstreamError> {
        tracing::debug!(%url, "forwarding lookup");
        let res = self.http.get(url).bearer_auth(token).send().await?;
        UpstreamBody::read(res).await
    }

    fn api_url(&self) -> Result<Url, UpstreamError> {
        Url::parse(&self.config().api_url).map_err(|e| UpstreamError::Unavailable {
            message: format!("invalid api url {}: {e}", self.config().api_url),
            timed_out: false,
        })
    }
}
