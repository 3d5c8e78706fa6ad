/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A client for the chats surface of the Microsoft Graph API: the chats a
//! user participates in, their messages and replies, members, hosted
//! contents, installed apps, tabs, pinned messages, permission grants and
//! async operations, all rooted at `/users/{user-id}/chats`.
//!
//! Every public method on [`GraphClient`] maps to exactly one documented
//! Graph endpoint and performs exactly one HTTP exchange through
//! [`graph_http`]: required path parameters are checked up front, optional
//! query options and body fields that were never set are dropped, and the
//! response comes back decoded but otherwise exactly as the server shaped
//! it. Anything beyond a single exchange, like following a collection's
//! `@odata.nextLink`, is left to the caller.
//!
//! ## Example
//!
//! ```rust,no_run
//! # use ms_graph_teams::{GraphClient, Query};
//! # use ms_graph_teams::types::chat_request_body::ChatRequestBody;
//! # use url::Url;
//! # fn run() -> ms_graph_teams::Result<()> {
//! let endpoint = Url::parse("https://graph.microsoft.com/v1.0").unwrap();
//! let client = GraphClient::new(endpoint);
//!
//! let chat = client.create_chat(
//!     "8ea0e38b-efb3-4757-924a-5f94061cf8c2",
//!     ChatRequestBody {
//!         topic: Some("Release planning".to_string()),
//!         ..Default::default()
//!     },
//! )?;
//!
//! let messages = client.list_chat_messages(
//!     "8ea0e38b-efb3-4757-924a-5f94061cf8c2",
//!     chat.entity().id()?,
//!     &Query::new().top(5),
//! )?;
//! # Ok(())
//! # }
//! ```

mod body;
mod client;
mod error;
mod query;
pub mod types;

pub use client::{GraphClient, TokenProvider};
pub use error::{Error, Result};
pub use query::{CountQuery, Query};
