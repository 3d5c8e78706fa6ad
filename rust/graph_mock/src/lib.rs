/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! An in-process mock of the Graph Teams chat surface, for integration
//! tests.
//!
//! The mock stores chats, messages, members and hosted contents in memory
//! and answers the routes the client exercises in its tests. Two things are
//! recorded for the tests to inspect through [`GraphState`]: how many
//! requests the server received in total, and the content type of every
//! binary upload.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// The timestamp stamped onto soft-deleted messages.
const DELETED_AT: &str = "2024-01-01T00:00:00Z";

type Shared = Arc<GraphState>;
type ApiError = (StatusCode, Json<Value>);

#[derive(Default)]
struct StoredHostedContent {
    properties: Map<String, Value>,
    bytes: Vec<u8>,
    content_type: Option<String>,
}

#[derive(Default)]
struct StoredMessage {
    properties: Map<String, Value>,
    hosted_contents: HashMap<String, StoredHostedContent>,
}

#[derive(Default)]
struct StoredChat {
    properties: Map<String, Value>,
    members: HashMap<String, Map<String, Value>>,
    messages: HashMap<String, StoredMessage>,
}

#[derive(Default)]
struct Store {
    chats: HashMap<String, StoredChat>,
}

/// The shared state of a mock server, also handed to the test that spawned
/// it so it can inspect what the server observed.
#[derive(Default)]
pub struct GraphState {
    requests: AtomicUsize,
    upload_content_types: Mutex<Vec<String>>,
    store: RwLock<Store>,
}

impl GraphState {
    /// Creates an empty server state, to be shared between the router and
    /// the test inspecting it.
    pub fn new() -> Arc<GraphState> {
        Arc::new(GraphState::default())
    }

    /// The number of requests the server has received so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// The content types of the binary uploads received so far, in order.
    pub fn upload_content_types(&self) -> Vec<String> {
        self.upload_content_types.lock().unwrap().clone()
    }
}

/// Builds the mock router on top of the given state.
pub fn app(state: Arc<GraphState>) -> Router {
    Router::new()
        .route("/users/{user_id}/chats", get(list_chats).post(create_chat))
        .route("/users/{user_id}/chats/$count", get(count_chats))
        .route(
            "/users/{user_id}/chats/{chat_id}",
            get(get_chat).patch(update_chat).delete(delete_chat),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/members",
            get(list_members).post(add_member),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/members/{member_id}",
            get(get_member).delete(remove_member),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages",
            get(list_messages).post(create_message),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}",
            get(get_message).patch(update_message).delete(delete_message),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.setReaction",
            post(set_reaction),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.unsetReaction",
            post(unset_reaction),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.softDelete",
            post(soft_delete),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/microsoft.graph.undoSoftDelete",
            post(undo_soft_delete),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents",
            get(list_hosted_contents).post(create_hosted_content),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}",
            get(get_hosted_content),
        )
        .route(
            "/users/{user_id}/chats/{chat_id}/messages/{message_id}/hostedContents/{hosted_content_id}/$value",
            get(get_hosted_content_value)
                .put(upload_hosted_content_value)
                .delete(delete_hosted_content_value),
        )
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .with_state(state)
}

/// Serves the mock on the given listener until the task is dropped.
pub async fn run(listener: TcpListener, state: Arc<GraphState>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn count_requests(State(state): State<Shared>, request: Request, next: Next) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

fn not_found(resource: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "code": "NotFound",
                "message": format!("{resource} not found"),
            }
        })),
    )
}

fn merge_properties(target: &mut Map<String, Value>, input: Map<String, Value>) {
    for (key, value) in input {
        target.insert(key, value);
    }
}

async fn list_chats(State(state): State<Shared>) -> Json<Value> {
    let store = state.store.read().await;
    let chats: Vec<Value> = store
        .chats
        .values()
        .map(|chat| Value::Object(chat.properties.clone()))
        .collect();
    Json(json!({ "value": chats }))
}

async fn create_chat(
    State(state): State<Shared>,
    Json(input): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4().to_string();
    let mut properties = input;
    properties.insert("id".to_string(), id.clone().into());

    state.store.write().await.chats.insert(
        id,
        StoredChat {
            properties: properties.clone(),
            ..Default::default()
        },
    );

    (StatusCode::CREATED, Json(Value::Object(properties)))
}

async fn count_chats(State(state): State<Shared>) -> String {
    state.store.read().await.chats.len().to_string()
}

async fn get_chat(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    store
        .chats
        .get(&chat_id)
        .map(|chat| Json(Value::Object(chat.properties.clone())))
        .ok_or_else(|| not_found("chat"))
}

async fn update_chat(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    merge_properties(&mut chat.properties, input);
    Ok(Json(Value::Object(chat.properties.clone())))
}

async fn delete_chat(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store
        .chats
        .remove(&chat_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found("chat"))
}

async fn list_members(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    let members: Vec<Value> = chat
        .members
        .values()
        .map(|member| Value::Object(member.clone()))
        .collect();
    Ok(Json(json!({ "value": members })))
}

async fn add_member(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;

    let id = Uuid::new_v4().to_string();
    let mut properties = input;
    properties.insert("id".to_string(), id.clone().into());
    chat.members.insert(id, properties.clone());

    Ok((StatusCode::CREATED, Json(Value::Object(properties))))
}

async fn get_member(
    State(state): State<Shared>,
    Path((_, chat_id, member_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    chat.members
        .get(&member_id)
        .map(|member| Json(Value::Object(member.clone())))
        .ok_or_else(|| not_found("member"))
}

async fn remove_member(
    State(state): State<Shared>,
    Path((_, chat_id, member_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    chat.members
        .remove(&member_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found("member"))
}

async fn list_messages(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    let messages: Vec<Value> = chat
        .messages
        .values()
        .map(|message| Value::Object(message.properties.clone()))
        .collect();
    Ok(Json(json!({ "value": messages })))
}

async fn create_message(
    State(state): State<Shared>,
    Path((_, chat_id)): Path<(String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;

    let id = Uuid::new_v4().to_string();
    let mut properties = input;
    properties.insert("id".to_string(), id.clone().into());
    properties.insert("chatId".to_string(), chat_id.clone().into());
    properties
        .entry("messageType".to_string())
        .or_insert_with(|| "message".into());

    chat.messages.insert(
        id,
        StoredMessage {
            properties: properties.clone(),
            ..Default::default()
        },
    );

    Ok((StatusCode::CREATED, Json(Value::Object(properties))))
}

async fn get_message(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    chat.messages
        .get(&message_id)
        .map(|message| Json(Value::Object(message.properties.clone())))
        .ok_or_else(|| not_found("message"))
}

async fn update_message(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;
    merge_properties(&mut message.properties, input);
    Ok(Json(Value::Object(message.properties.clone())))
}

async fn delete_message(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    chat.messages
        .remove(&message_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| not_found("message"))
}

async fn set_reaction(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;

    let reaction = json!({
        "reactionType": input.get("reactionType").cloned().unwrap_or(Value::Null),
    });
    match message
        .properties
        .entry("reactions".to_string())
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        Value::Array(reactions) => reactions.push(reaction),
        _ => return Err(not_found("reactions")),
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn unset_reaction(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;

    let reaction_type = input.get("reactionType").cloned().unwrap_or(Value::Null);
    if let Some(Value::Array(reactions)) = message.properties.get_mut("reactions") {
        reactions.retain(|reaction| reaction["reactionType"] != reaction_type);
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn soft_delete(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;
    message
        .properties
        .insert("deletedDateTime".to_string(), DELETED_AT.into());
    Ok(StatusCode::NO_CONTENT)
}

async fn undo_soft_delete(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;
    message
        .properties
        .insert("deletedDateTime".to_string(), Value::Null);
    Ok(StatusCode::NO_CONTENT)
}

async fn list_hosted_contents(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get(&message_id)
        .ok_or_else(|| not_found("message"))?;
    let contents: Vec<Value> = message
        .hosted_contents
        .values()
        .map(|content| Value::Object(content.properties.clone()))
        .collect();
    Ok(Json(json!({ "value": contents })))
}

async fn create_hosted_content(
    State(state): State<Shared>,
    Path((_, chat_id, message_id)): Path<(String, String, String)>,
    Json(input): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;

    let id = Uuid::new_v4().to_string();
    let mut properties = input;
    properties.insert("id".to_string(), id.clone().into());
    message.hosted_contents.insert(
        id,
        StoredHostedContent {
            properties: properties.clone(),
            ..Default::default()
        },
    );

    Ok((StatusCode::CREATED, Json(Value::Object(properties))))
}

async fn get_hosted_content(
    State(state): State<Shared>,
    Path((_, chat_id, message_id, hosted_content_id)): Path<(String, String, String, String)>,
) -> Result<Json<Value>, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get(&message_id)
        .ok_or_else(|| not_found("message"))?;
    message
        .hosted_contents
        .get(&hosted_content_id)
        .map(|content| Json(Value::Object(content.properties.clone())))
        .ok_or_else(|| not_found("hosted content"))
}

async fn get_hosted_content_value(
    State(state): State<Shared>,
    Path((_, chat_id, message_id, hosted_content_id)): Path<(String, String, String, String)>,
) -> Result<Response, ApiError> {
    let store = state.store.read().await;
    let chat = store.chats.get(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get(&message_id)
        .ok_or_else(|| not_found("message"))?;
    let content = message
        .hosted_contents
        .get(&hosted_content_id)
        .ok_or_else(|| not_found("hosted content"))?;

    let content_type = content
        .content_type
        .clone()
        .unwrap_or_else(|| "application/octet-stream".to_string());
    Ok((
        [(header::CONTENT_TYPE, content_type)],
        content.bytes.clone(),
    )
        .into_response())
}

async fn upload_hosted_content_value(
    State(state): State<Shared>,
    Path((_, chat_id, message_id, hosted_content_id)): Path<(String, String, String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state
        .upload_content_types
        .lock()
        .unwrap()
        .push(content_type.clone());

    let mut store = state.store.write().await;

    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;
    let content = message
        .hosted_contents
        .get_mut(&hosted_content_id)
        .ok_or_else(|| not_found("hosted content"))?;

    content.bytes = body.to_vec();
    content.content_type = Some(content_type);

    Ok(StatusCode::NO_CONTENT)
}

async fn delete_hosted_content_value(
    State(state): State<Shared>,
    Path((_, chat_id, message_id, hosted_content_id)): Path<(String, String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    let chat = store.chats.get_mut(&chat_id).ok_or_else(|| not_found("chat"))?;
    let message = chat
        .messages
        .get_mut(&message_id)
        .ok_or_else(|| not_found("message"))?;
    let content = message
        .hosted_contents
        .get_mut(&hosted_content_id)
        .ok_or_else(|| not_found("hosted content"))?;

    content.bytes.clear();
    content.content_type = None;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_is_graph_shaped() {
        let (status, Json(body)) = not_found("chat");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NotFound");
        assert_eq!(body["error"]["message"], "chat not found");
    }

    #[test]
    fn merge_overwrites_and_preserves() {
        let mut target = json!({"topic": "old", "chatType": "group"})
            .as_object()
            .unwrap()
            .clone();
        let input = json!({"topic": "new"}).as_object().unwrap().clone();

        merge_properties(&mut target, input);

        assert_eq!(target["topic"], "new");
        assert_eq!(target["chatType"], "group");
    }

    #[test]
    fn fresh_state_observed_nothing() {
        let state = GraphState::new();
        assert_eq!(state.request_count(), 0);
    }
}
