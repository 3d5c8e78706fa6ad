/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

use crate::error::Error;

/// The status code of an HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub(crate) u16);

impl StatusCode {
    /// The status code as a plain number.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Check if status is within 400-499.
    pub fn is_client_error(&self) -> bool {
        500 > self.0 && self.0 >= 400
    }

    /// Check if status is within 500-599.
    pub fn is_server_error(&self) -> bool {
        600 > self.0 && self.0 >= 500
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An HTTP response resulting from a previous request.
///
/// The response body can be read through [`Response::body`].
#[derive(Debug)]
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
}

impl Response {
    /// Retrieves the status code from the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns an [`Error`] if the server responded with either a client or
    /// server error (i.e. if the response's status code is between 400 and
    /// 599).
    ///
    /// [`Error`]: crate::Error
    pub fn error_from_status(self) -> crate::Result<Self> {
        let status = self.status();

        if status.is_client_error() || status.is_server_error() {
            return Err(Error::StatusCode {
                status,
                response: self,
            });
        }

        Ok(self)
    }

    /// Retrieves a single header from the response, if present. Header names
    /// are matched case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Retrieves the body bytes from the response.
    pub fn body(&self) -> &[u8] {
        self.body.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::{Response, StatusCode};
    use crate::error::Error;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status: StatusCode(status),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_vec(),
        }
    }

    #[test]
    fn status_ranges() {
        assert!(StatusCode(404).is_client_error());
        assert!(!StatusCode(404).is_server_error());
        assert!(StatusCode(503).is_server_error());
        assert!(!StatusCode(204).is_client_error());
        assert!(!StatusCode(204).is_server_error());
    }

    #[test]
    fn error_from_status_passes_success_through() {
        let response = response(200, b"{}");
        assert!(response.error_from_status().is_ok());
    }

    #[test]
    fn error_from_status_surfaces_failure_with_body() {
        let result = response(403, b"denied").error_from_status();
        match result {
            Err(Error::StatusCode { status, response }) => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(response.body(), b"denied");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = response(200, b"");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }
}
