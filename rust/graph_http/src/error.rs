/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use thiserror::Error;

use crate::{Response, StatusCode};

/// An error that happened either when building a request, sending it, or
/// reading its response.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided URL features a protocol scheme that is not supported
    /// (i.e. which is neither HTTP nor HTTPS).
    #[error("url scheme is not supported: {0}")]
    UnsupportedScheme(String),

    /// The request could not be sent, or its response body could not be
    /// read. Covers DNS failures, connection failures and timeouts.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The status of the response is either a client error or a server error
    /// (i.e. its status code is within the 400-599 range).
    #[error("HTTP error ({status})")]
    StatusCode {
        status: StatusCode,
        response: Response,
    },
}

/// A result which error type is always an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
