// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /api/reply`. Both fields are loose so that `{}` and odd
/// tone values reach the service instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplyRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tone: Option<Value>,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>, tone: Option<&str>) -> Self {
        Self {
            message: Some(message.into()),
            tone: tone.map(|t| Value::String(t.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResponse {
    pub reply: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub success: bool,
    pub personalized_result: String,
    pub quiz_id: String,
    pub submission_id: String,
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    New,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::New => "New",
            ClientStatus::FollowUp => "Follow-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub tags: Vec<String>,
    pub status: ClientStatus,
    pub notes: String,
    pub last_contact: String,
}

/// Query string accepted by `GET /api/clients`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientQuery {
    pub status: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientList {
    pub success: bool,
    pub data: Vec<ClientRecord>,
}

/// Generated identifier attached to an acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordId {
    #[serde(rename = "reminderId")]
    Reminder(String),
    #[serde(rename = "campaignId")]
    Campaign(String),
    #[serde(rename = "clientId")]
    Client(String),
}

impl RecordId {
    pub fn reminder() -> Self {
        RecordId::Reminder(new_id("reminder"))
    }

    pub fn campaign() -> Self {
        RecordId::Campaign(new_id("campaign"))
    }

    pub fn client() -> Self {
        RecordId::Client(new_id("client"))
    }
}

/// `<prefix>_<uuid>` identifiers handed back to the dashboard.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

/// Field of a dashboard payload for logging; `null` when absent or when the
/// body is not an object.
pub fn field<'a>(body: &'a Value, key: &str) -> &'a Value {
    static NULL: Value = Value::Null;
    body.get(key).unwrap_or(&NULL)
}

/// Canned success envelope for the pass-through endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement<T> {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub id: Option<RecordId>,
    pub data: T,
}

impl<T> Acknowledgement<T> {
    pub fn new(message: &'static str, id: Option<RecordId>, data: T) -> Self {
        Self { success: true, message, id, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reply_request_tolerates_missing_fields() {
        let req: ReplyRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.message.is_none());
        assert!(req.tone.is_none());

        let req: ReplyRequest = serde_json::from_value(json!({ "message": "hi", "tone": 7 })).unwrap();
        assert_eq!(req.message.as_deref(), Some("hi"));
        assert_eq!(req.tone, Some(json!(7)));
    }

    #[test]
    fn field_reads_objects_and_tolerates_everything_else() {
        let body = json!({ "title": null, "tone": "professional" });
        assert_eq!(field(&body, "tone"), "professional");
        assert!(field(&body, "title").is_null());
        assert!(field(&body, "missing").is_null());
        assert!(field(&json!(["not", "an", "object"]), "tone").is_null());
    }

    #[test]
    fn acknowledgement_flattens_its_id() {
        let ack = Acknowledgement::new(
            "Reminder scheduled successfully",
            Some(RecordId::Reminder("reminder_1".into())),
            json!({}),
        );
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["reminderId"], "reminder_1");

        let bare = serde_json::to_value(Acknowledgement::new("ok", None, json!({}))).unwrap();
        assert!(bare.get("reminderId").is_none());
        assert_eq!(bare.as_object().unwrap().len(), 3);
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = new_id("campaign");
        let b = new_id("campaign");
        assert!(a.starts_with("campaign_"));
        assert_ne!(a, b);
    }

    #[test]
    fn follow_up_status_uses_dashboard_label() {
        let status: ClientStatus = serde_json::from_value(json!("Follow-up")).unwrap();
        assert_eq!(status, ClientStatus::FollowUp);
        assert_eq!(serde_json::to_value(status).unwrap(), json!("Follow-up"));
    }
}
