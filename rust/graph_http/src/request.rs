/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use url::Url;

use crate::client::Method;
use crate::error::Error;
use crate::response::{Response, StatusCode};

/// The bytes to use as body in a request.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body<'bo>(&'bo [u8]);

impl<'bo> From<&'bo [u8]> for Body<'bo> {
    fn from(value: &'bo [u8]) -> Self {
        Body(value)
    }
}

impl<'bo> From<&'bo str> for Body<'bo> {
    fn from(value: &'bo str) -> Self {
        Body(value.as_bytes())
    }
}

/// The representation of a request body, with its content type.
struct RequestBody<'b> {
    content: Body<'b>,
    content_type: &'b str,
}

/// A builder to create and send HTTP requests.
pub struct RequestBuilder<'rb> {
    agent: &'rb ureq::Agent,
    url: &'rb Url,
    method: Method,
    headers: Vec<(&'rb str, &'rb str)>,
    body: Option<RequestBody<'rb>>,
}

impl<'rb> RequestBuilder<'rb> {
    /// Instantiates a new [`RequestBuilder`] to create a request to the
    /// specified URL with the specified HTTP method.
    ///
    /// If the URL is not a valid HTTP URL, i.e. if its protocol scheme is
    /// neither HTTP nor HTTPS, an error is returned.
    pub(crate) fn new(
        agent: &'rb ureq::Agent,
        method: Method,
        url: &'rb Url,
    ) -> crate::Result<RequestBuilder<'rb>> {
        // We only support HTTP(S) URLs.
        // url.scheme() is always lower-cased.
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::UnsupportedScheme(url.scheme().into()));
        }

        let builder = RequestBuilder {
            agent,
            url,
            method,
            headers: Vec::new(),
            body: None,
        };

        Ok(builder)
    }

    /// Adds an HTTP header to the request.
    pub fn header(mut self, key: &'rb str, value: &'rb str) -> RequestBuilder<'rb> {
        self.headers.push((key, value));

        self
    }

    /// Sets the provided content as the request body, and sets its
    /// Content-Type header.
    pub fn body<T: Into<Body<'rb>>>(
        mut self,
        body: T,
        content_type: &'rb str,
    ) -> RequestBuilder<'rb> {
        self.body = Some(RequestBody {
            content: body.into(),
            content_type,
        });

        self
    }

    /// Builds and sends an HTTP request from the builder's configuration.
    ///
    /// Blocks until the server has responded (or the transport has failed)
    /// and the full response body has been read.
    pub fn send(self) -> crate::Result<Response> {
        let uri = self.url.as_str();

        let mut response = match self.method {
            Method::GET | Method::HEAD | Method::DELETE => {
                let mut request = match self.method {
                    Method::GET => self.agent.get(uri),
                    Method::HEAD => self.agent.head(uri),
                    _ => self.agent.delete(uri),
                };
                for (key, value) in &self.headers {
                    request = request.header(*key, *value);
                }
                request.call()?
            }
            Method::POST | Method::PUT | Method::PATCH => {
                let mut request = match self.method {
                    Method::POST => self.agent.post(uri),
                    Method::PUT => self.agent.put(uri),
                    _ => self.agent.patch(uri),
                };
                for (key, value) in &self.headers {
                    request = request.header(*key, *value);
                }
                match &self.body {
                    Some(body) => request
                        .content_type(body.content_type)
                        .send(body.content.0)?,
                    None => request.send_empty()?,
                }
            }
        };

        let status = StatusCode(response.status().as_u16());
        let headers = response
            .headers()
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_vec()?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Client;

    #[test]
    fn rejects_non_http_schemes() {
        let client = Client::new();
        let url = Url::parse("ftp://example.com/file").unwrap();
        match client.get(&url) {
            Err(Error::UnsupportedScheme(scheme)) => assert_eq!(scheme, "ftp"),
            other => panic!("expected unsupported scheme error, got {:?}", other.is_ok()),
        }
    }
}
