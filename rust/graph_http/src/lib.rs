/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! This crate provides idiomatic Rust data structures for building and
//! sending blocking HTTP requests through a shared [`ureq`] agent.
//!
//!
//! ## Sending requests
//!
//! A simple request can be built and sent using the helper methods on
//! [`Client`]:
//!
//! ```rust,no_run
//! # use graph_http::Client;
//! # use url::Url;
//! # fn run() -> graph_http::Result<()> {
//! let client = Client::new();
//!
//! let url = Url::parse("https://example.com").unwrap();
//! let response = client.get(&url)?.send()?;
//! # Ok(())
//! # }
//! ```
//!
//! Setting a request's body is done this way:
//!
//! ```rust,no_run
//! # use graph_http::Client;
//! # use url::Url;
//! # fn run() -> graph_http::Result<()> {
//! let client = Client::new();
//!
//! let url = Url::parse("https://example.com").unwrap();
//! let response = client.post(&url)?
//!     .body(
//!         "{\"foo\": \"bar\"}",
//!         "application/json",
//!     )
//!     .send()?;
//! # Ok(())
//! # }
//! ```
//!
//! Status interpretation is left to the caller: a 4xx/5xx response is
//! returned as data, and can be turned into an [`Error`] with
//! [`Response::error_from_status`].

mod client;
mod error;
mod request;
mod response;

pub use client::{Client, Method};
pub use error::{Error, Result};
pub use request::RequestBuilder;
pub use response::{Response, StatusCode};
