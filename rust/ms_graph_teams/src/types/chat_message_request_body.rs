/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde_json::{Map, Value};

use crate::body::compact;
use crate::types::chat_message::ChatMessageImportance;

/// The fields accepted when creating or updating a chat message or reply.
#[derive(Clone, Debug, Default)]
pub struct ChatMessageRequestBody {
    pub id: Option<String>,
    pub reply_to_id: Option<String>,
    pub from: Option<Value>,
    pub etag: Option<String>,
    pub message_type: Option<String>,
    pub created_date_time: Option<String>,
    pub last_modified_date_time: Option<String>,
    pub last_edited_date_time: Option<String>,
    pub deleted_date_time: Option<String>,
    pub subject: Option<String>,
    pub summary: Option<String>,
    pub chat_id: Option<String>,
    pub importance: Option<ChatMessageImportance>,
    pub locale: Option<String>,
    pub web_url: Option<String>,
    pub channel_identity: Option<Value>,
    pub policy_violation: Option<Value>,
    pub event_detail: Option<Value>,
    pub body: Option<Value>,
    pub attachments: Option<Value>,
    pub mentions: Option<Value>,
    pub reactions: Option<Value>,
    pub message_history: Option<Value>,
    pub replies: Option<Value>,
    pub hosted_contents: Option<Value>,
}

impl ChatMessageRequestBody {
    pub(crate) fn into_object(self) -> Map<String, Value> {
        compact([
            ("id", self.id.map(Value::from)),
            ("replyToId", self.reply_to_id.map(Value::from)),
            ("from", self.from),
            ("etag", self.etag.map(Value::from)),
            ("messageType", self.message_type.map(Value::from)),
            ("createdDateTime", self.created_date_time.map(Value::from)),
            (
                "lastModifiedDateTime",
                self.last_modified_date_time.map(Value::from),
            ),
            (
                "lastEditedDateTime",
                self.last_edited_date_time.map(Value::from),
            ),
            ("deletedDateTime", self.deleted_date_time.map(Value::from)),
            ("subject", self.subject.map(Value::from)),
            ("summary", self.summary.map(Value::from)),
            ("chatId", self.chat_id.map(Value::from)),
            ("importance", self.importance.map(|v| v.to_string().into())),
            ("locale", self.locale.map(Value::from)),
            ("webUrl", self.web_url.map(Value::from)),
            ("channelIdentity", self.channel_identity),
            ("policyViolation", self.policy_violation),
            ("eventDetail", self.event_detail),
            ("body", self.body),
            ("attachments", self.attachments),
            ("mentions", self.mentions),
            ("reactions", self.reactions),
            ("messageHistory", self.message_history),
            ("replies", self.replies),
            ("hostedContents", self.hosted_contents),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::ChatMessageRequestBody;
    use crate::types::chat_message::ChatMessageImportance;
    use serde_json::{json, Value};

    #[test]
    fn importance_serializes_as_its_graph_name() {
        let body = ChatMessageRequestBody {
            importance: Some(ChatMessageImportance::Urgent),
            body: Some(json!({"contentType": "text", "content": "Hi"})),
            ..Default::default()
        };

        let object = body.into_object();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("importance"), Some(&Value::from("urgent")));
    }
}
