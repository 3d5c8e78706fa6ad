/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

mod chats;
mod hosted_contents;
mod installed_apps;
mod last_message_preview;
mod members;
mod messages;
mod operations;
mod permission_grants;
mod pinned_messages;
mod replies;
mod tabs;

use std::sync::Arc;

use form_urlencoded::Serializer;
use graph_http::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{Error, Result};

/// Supplies the bearer token attached to outgoing requests.
///
/// Token acquisition and refresh live behind this seam; the client asks for
/// the current token right before a request goes out and never caches it.
pub trait TokenProvider: Send + Sync {
    /// The current access token, if one is available. Returning `None`
    /// sends the request without an `Authorization` header.
    fn access_token(&self) -> Option<String>;
}

/// A client for the chats surface of the Graph API, rooted at
/// `/users/{user-id}/chats`.
///
/// The client holds the configured service endpoint and the HTTP agent used
/// to reach it, and nothing else: every method translates its arguments
/// into exactly one HTTP exchange, whose decoded response (or error) goes
/// straight back to the caller. Pagination, retries and backoff are the
/// caller's business.
pub struct GraphClient {
    http: graph_http::Client,
    endpoint: Url,
    token_provider: Option<Arc<dyn TokenProvider>>,
}

impl GraphClient {
    /// Creates a client for the service at `endpoint`
    /// (e.g. `https://graph.microsoft.com/v1.0`) that sends unauthenticated
    /// requests.
    pub fn new(endpoint: Url) -> GraphClient {
        GraphClient {
            http: graph_http::Client::new(),
            endpoint,
            token_provider: None,
        }
    }

    /// Creates a client that authenticates its requests with the tokens
    /// handed out by `token_provider`.
    pub fn with_token_provider(
        endpoint: Url,
        token_provider: Arc<dyn TokenProvider>,
    ) -> GraphClient {
        GraphClient {
            http: graph_http::Client::new(),
            endpoint,
            token_provider: Some(token_provider),
        }
    }

    /// Resolves a resource path (and its query options) against the
    /// configured endpoint.
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let endpoint = self.endpoint.as_str().trim_end_matches('/');

        let url = if params.is_empty() {
            format!("{endpoint}{path}")
        } else {
            let mut serializer = Serializer::new(String::new());
            for (key, value) in params {
                serializer.append_pair(key, value);
            }
            let params = serializer.finish();
            format!("{endpoint}{path}?{params}")
        };

        Url::parse(&url).map_err(|_| Error::Uri)
    }

    /// Performs the single HTTP exchange behind every operation.
    fn send(
        &self,
        method: Method,
        url: &Url,
        body: Option<(&[u8], &str)>,
    ) -> Result<graph_http::Response> {
        log::debug!("sending {} request to {}", method.as_str(), url);

        let auth_header_value = self
            .token_provider
            .as_ref()
            .and_then(|provider| provider.access_token())
            .map(|token| format!("Bearer {token}"));

        let mut builder = self.http.request(method, url)?;

        if let Some(ref header_value) = auth_header_value {
            builder = builder.header("Authorization", header_value);
        }

        if let Some((content, content_type)) = body {
            log::trace!("request body is {} bytes of {content_type}", content.len());
            builder = builder.body(content, content_type);
        }

        Ok(builder.send()?.error_from_status()?)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        let response = self.send(Method::GET, &url, None)?;
        serde_json::from_slice(response.body()).map_err(Error::Json)
    }

    /// Fetches the raw bytes of a `$value` media endpoint.
    fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.build_url(path, &[])?;
        let response = self.send(Method::GET, &url, None)?;
        Ok(response.body().to_vec())
    }

    /// Fetches a `$count` endpoint, which answers with a bare integer.
    fn get_count(&self, path: &str, params: &[(&str, String)]) -> Result<i64> {
        let url = self.build_url(path, params)?;
        let response = self.send(Method::GET, &url, None)?;
        let text = String::from_utf8_lossy(response.body());
        text.trim()
            .parse()
            .map_err(|_| Error::UnexpectedResponse(text.into_owned()))
    }

    fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Map<String, Value>,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        let payload = serde_json::to_vec(body).map_err(Error::Json)?;
        let response = self.send(Method::POST, &url, Some((&payload, "application/json")))?;
        serde_json::from_slice(response.body()).map_err(Error::Json)
    }

    /// Invokes an action that answers with no content.
    fn post_empty(&self, path: &str, body: &Map<String, Value>) -> Result<()> {
        let url = self.build_url(path, &[])?;
        let payload = serde_json::to_vec(body).map_err(Error::Json)?;
        self.send(Method::POST, &url, Some((&payload, "application/json")))?;
        Ok(())
    }

    fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Map<String, Value>,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        let payload = serde_json::to_vec(body).map_err(Error::Json)?;
        let response = self.send(Method::PATCH, &url, Some((&payload, "application/json")))?;
        serde_json::from_slice(response.body()).map_err(Error::Json)
    }

    /// Uploads raw bytes to a `$value` media endpoint. The payload is sent
    /// as-is, never JSON-encoded.
    fn put_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let url = self.build_url(path, &[])?;
        self.send(
            Method::PUT,
            &url,
            Some((content, "application/octet-stream")),
        )?;
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path, &[])?;
        self.send(Method::DELETE, &url, None)?;
        Ok(())
    }
}

/// Checks that a required path parameter has a value, naming the parameter
/// the way the API spells it. Runs before the URL is assembled, so a bad
/// call never reaches the network.
pub(crate) fn required<'v>(name: &'static str, value: &'v str) -> Result<&'v str> {
    if value.is_empty() {
        return Err(Error::MissingParameter(name));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{required, GraphClient};
    use crate::error::Error;
    use crate::query::Query;
    use url::Url;

    fn client() -> GraphClient {
        GraphClient::new(Url::parse("https://graph.example.com/v1.0").unwrap())
    }

    #[test]
    fn path_interpolation_is_exact() {
        let url = client().build_url("/users/u1/chats/c1", &[]).unwrap();
        assert_eq!(url.as_str(), "https://graph.example.com/v1.0/users/u1/chats/c1");
    }

    #[test]
    fn trailing_endpoint_slash_is_absorbed() {
        let client = GraphClient::new(Url::parse("https://graph.example.com/v1.0/").unwrap());
        let url = client.build_url("/users/u1/chats", &[]).unwrap();
        assert_eq!(url.as_str(), "https://graph.example.com/v1.0/users/u1/chats");
    }

    #[test]
    fn query_options_are_percent_encoded() {
        let query = Query::new().top(5).select(["id", "topic"]);
        let url = client()
            .build_url("/users/u1/chats", &query.pairs())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://graph.example.com/v1.0/users/u1/chats?%24top=5&%24select=id%2Ctopic"
        );
    }

    #[test]
    fn empty_query_appends_nothing() {
        let url = client()
            .build_url("/users/u1/chats", &Query::new().pairs())
            .unwrap();
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn required_names_the_missing_parameter() {
        assert!(matches!(
            required("user-id", ""),
            Err(Error::MissingParameter("user-id"))
        ));
        assert_eq!(required("user-id", "u1").unwrap(), "u1");
    }
}
