/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use thiserror::Error;

/// An error raised while building a request to the Graph API, sending it, or
/// interpreting its response.
#[derive(Debug, Error)]
pub enum Error {
    /// A required path parameter has no value. Raised with the Graph name of
    /// the offending parameter, before any network activity happens.
    #[error("required parameter has no value: {0}")]
    MissingParameter(&'static str),

    /// The object does not have this property set.
    #[error("object does not have this property set")]
    NotFound,

    /// A property or response has an unexpected shape.
    #[error("unexpected response content: {0}")]
    UnexpectedResponse(String),

    /// The request could not be completed, either because of a transport
    /// failure or because the service answered with an error status. Status
    /// errors carry the status code and the full response.
    #[error(transparent)]
    Http(#[from] graph_http::Error),

    /// A request or response body could not be (de)serialized.
    #[error("an error occurred while (de)serializing JSON")]
    Json(#[from] serde_json::Error),

    /// The configured endpoint cannot absorb the resource path.
    #[error("an error occurred building the Graph resource URI")]
    Uri,
}

/// A result which error type is always an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
