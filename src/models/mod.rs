use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in user as the auth endpoints describe it.
///
/// Opaque to the dashboard beyond display.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        default,
        alias = "profilePicture",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture_url: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub content: String,
    /// Unique, insertion ordered.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of note create/edit requests.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NoteInput {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PinRequest {
    pub is_pinned: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_contract_deserialize() {
        let json = r#"{
            "_id": "65f0c1",
            "title": "Groceries",
            "content": "milk, eggs",
            "tags": ["home", "weekly"],
            "isPinned": true,
            "userId": "u1",
            "createdAt": "2024-03-05T10:00:00.000Z",
            "__v": 0
        }"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.id, "65f0c1");
        assert_eq!(note.tags, vec!["home", "weekly"]);
        assert!(note.is_pinned);
        assert!(note.created_at.is_some());
    }

    #[test]
    fn test_note_missing_optional_fields() {
        let note: Note =
            serde_json::from_str(r#"{"id": "n1", "title": "t", "content": "c"}"#).unwrap();
        assert!(note.tags.is_empty());
        assert!(!note.is_pinned);
        assert!(note.created_at.is_none());
    }

    #[test]
    fn test_user_summary_accepts_profile_picture_alias() {
        let user: UserSummary = serde_json::from_str(
            r#"{"_id": "u1", "username": "jane", "email": "j@x.io", "profilePicture": "p.png"}"#,
        )
        .unwrap();
        assert_eq!(user.profile_picture_url.as_deref(), Some("p.png"));
    }

    #[test]
    fn test_pin_and_sign_in_requests_use_camel_case() {
        let v = serde_json::to_value(PinRequest { is_pinned: true }).unwrap();
        assert_eq!(v, serde_json::json!({ "isPinned": true }));

        let v = serde_json::to_value(SignInRequest {
            email: "a@b.co".into(),
            password: "secret".into(),
            remember_me: false,
        })
        .unwrap();
        assert_eq!(v["rememberMe"], false);
    }
}
