/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use url::Url;

use crate::request::RequestBuilder;

/// An HTTP method that can be used when sending a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    PATCH,
}

impl Method {
    /// Convenience to easily convert enum members into strings, e.g. for
    /// logging outgoing requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::PATCH => "PATCH",
        }
    }
}

/// An HTTP client capable of building and sending requests.
///
/// The underlying agent is configured so that 4xx/5xx responses are returned
/// as regular [`Response`](crate::Response) values rather than errors; status
/// interpretation belongs to the consumer (see
/// [`Response::error_from_status`](crate::Response::error_from_status)).
#[derive(Clone)]
pub struct Client {
    agent: ureq::Agent,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new HTTP client.
    pub fn new() -> Client {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();

        Client { agent }
    }

    /// Starts building an HTTP request to the given method and URL.
    pub fn request<'rb>(
        &'rb self,
        method: Method,
        url: &'rb Url,
    ) -> crate::Result<RequestBuilder<'rb>> {
        RequestBuilder::new(&self.agent, method, url)
    }

    /// Shorthand for [`request`][req] for a GET request.
    ///
    /// [req]: crate::client::Client::request
    pub fn get<'rb>(&'rb self, url: &'rb Url) -> crate::Result<RequestBuilder<'rb>> {
        self.request(Method::GET, url)
    }

    /// Shorthand for [`request`][req] for a POST request.
    ///
    /// [req]: crate::client::Client::request
    pub fn post<'rb>(&'rb self, url: &'rb Url) -> crate::Result<RequestBuilder<'rb>> {
        self.request(Method::POST, url)
    }

    /// Shorthand for [`request`][req] for a PUT request.
    ///
    /// [req]: crate::client::Client::request
    pub fn put<'rb>(&'rb self, url: &'rb Url) -> crate::Result<RequestBuilder<'rb>> {
        self.request(Method::PUT, url)
    }

    /// Shorthand for [`request`][req] for a PATCH request.
    ///
    /// [req]: crate::client::Client::request
    pub fn patch<'rb>(&'rb self, url: &'rb Url) -> crate::Result<RequestBuilder<'rb>> {
        self.request(Method::PATCH, url)
    }

    /// Shorthand for [`request`][req] for a DELETE request.
    ///
    /// [req]: crate::client::Client::request
    pub fn delete<'rb>(&'rb self, url: &'rb Url) -> crate::Result<RequestBuilder<'rb>> {
        self.request(Method::DELETE, url)
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn method_names() {
        assert_eq!(Method::GET.as_str(), "GET");
        assert_eq!(Method::PATCH.as_str(), "PATCH");
        assert_eq!(Method::DELETE.as_str(), "DELETE");
    }
}
