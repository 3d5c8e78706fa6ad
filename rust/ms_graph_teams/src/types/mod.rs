/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The resources of the Teams chat surface.
//!
//! Response resources are property bags: a flattened map of the raw JSON
//! properties, with typed accessors on top. Request bodies are structs of
//! optional fields; fields left unset are dropped when the body is
//! serialized.

pub mod activity_notification_request_body;
pub mod chat;
pub mod chat_message;
pub mod chat_message_hosted_content;
pub mod chat_message_info;
pub mod chat_message_info_request_body;
pub mod chat_message_request_body;
pub mod chat_request_body;
pub mod collection_response;
pub mod conversation_member;
pub mod conversation_member_request_body;
pub mod entity;
pub mod hosted_content_request_body;
pub mod permission_grant_request_body;
pub mod pinned_chat_message;
pub mod pinned_chat_message_request_body;
mod prop;
pub mod resource_specific_permission_grant;
pub mod teams_app;
pub mod teams_app_definition;
pub mod teams_app_installation;
pub mod teams_app_installation_request_body;
pub mod teams_async_operation;
pub mod teams_tab;
pub mod teams_tab_request_body;
