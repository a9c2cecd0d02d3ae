use crate::models::{Note, NoteInput, PinRequest, SignInRequest, SignUpRequest, UserSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// HTTP 401: the session cookie is missing or expired.
    Unauthorized,
    /// The request never produced a response.
    Network,
    /// The server answered with `success: false`.
    Rejected,
    /// Any other non-2xx status.
    Http,
    /// The body was not the JSON we expected.
    Parse,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn network(e: reqwest::Error) -> Self {
        Self::new(ApiErrorKind::Network, e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self::new(ApiErrorKind::Parse, e.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Uniform `{ success, message }` envelope shared by every endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
struct NoteListResponse {
    #[serde(default)]
    notes: Vec<Note>,
}

fn envelope_message(data: &serde_json::Value) -> Option<String> {
    serde_json::from_value::<Envelope>(data.clone())
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

/// Turns a raw HTTP response into the payload or a classified error.
///
/// A missing `success` field counts as success; only an explicit `false` is a rejection.
pub(crate) fn decode_response(status: u16, body: &str) -> ApiResult<serde_json::Value> {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let server_message = parsed.as_ref().and_then(envelope_message);

    if status == 401 {
        return Err(ApiError::new(
            ApiErrorKind::Unauthorized,
            server_message.unwrap_or_else(|| "Unauthorized".to_string()),
        ));
    }

    if !(200..300).contains(&status) {
        return Err(ApiError::new(
            ApiErrorKind::Http,
            server_message.unwrap_or_else(|| format!("Request failed ({status})")),
        ));
    }

    let data = match parsed {
        Some(data) => data,
        None => return Err(ApiError::parse(format!("Invalid JSON response: {body}"))),
    };

    if data.get("success").and_then(|v| v.as_bool()) == Some(false) {
        return Err(ApiError::new(
            ApiErrorKind::Rejected,
            server_message.unwrap_or_else(|| "Request failed".to_string()),
        ));
    }

    Ok(data)
}

pub(crate) fn parse_note_list(data: serde_json::Value) -> ApiResult<Vec<Note>> {
    serde_json::from_value::<NoteListResponse>(data)
        .map(|r| r.notes)
        .map_err(ApiError::parse)
}

pub(crate) fn parse_message(data: &serde_json::Value, fallback: &str) -> String {
    envelope_message(data).unwrap_or_else(|| fallback.to_string())
}

/// The auth endpoints return the user either under `rest` or at the top level.
pub(crate) fn parse_auth_user(mut data: serde_json::Value) -> ApiResult<UserSummary> {
    let user = if data.get("rest").is_some_and(|v| v.is_object()) {
        data["rest"].take()
    } else {
        data
    };
    serde_json::from_value(user).map_err(ApiError::parse)
}

/// Note endpoints the dashboard depends on.
pub(crate) trait NotesApi {
    async fn fetch_all(&self) -> ApiResult<Vec<Note>>;
    async fn create(&self, input: &NoteInput) -> ApiResult<String>;
    async fn update(&self, id: &str, input: &NoteInput) -> ApiResult<String>;
    async fn delete(&self, id: &str) -> ApiResult<String>;
    async fn set_pinned(&self, id: &str, pinned: bool) -> ApiResult<String>;
    async fn search(&self, query: &str) -> ApiResult<Vec<Note>>;
}

/// Session endpoints used by the auth forms and the navbar.
pub(crate) trait AuthApi {
    async fn sign_in(&self, req: &SignInRequest) -> ApiResult<UserSummary>;
    async fn sign_up(&self, req: &SignUpRequest) -> ApiResult<UserSummary>;
    async fn sign_out(&self) -> ApiResult<String>;
}

/// reqwest-backed client. Session credentials travel in the cookie the browser keeps
/// for `base_url`, so the client itself is stateless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_credentials(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            req.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            req
        }
    }

    async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<serde_json::Value> {
        let client = reqwest::Client::new();
        let mut req = Self::with_credentials(client.request(method.clone(), self.url(path)));

        if let Some(b) = body {
            req = req.json(&b);
        }

        let res = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "request failed before a response");
            ApiError::network(e)
        })?;

        let status = res.status().as_u16();
        let text = res.text().await.map_err(ApiError::network)?;
        let decoded = decode_response(status, &text);

        match &decoded {
            Ok(_) => tracing::debug!(%method, path, status, "request ok"),
            Err(e) => tracing::warn!(%method, path, status, kind = ?e.kind, error = %e, "request rejected"),
        }
        decoded
    }

    async fn request_with<B: Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> ApiResult<serde_json::Value> {
        let body = serde_json::to_value(body).map_err(ApiError::parse)?;
        self.request(method, path, Some(body)).await
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> ApiResult<T> {
        let data = self.request(method, path, None).await?;
        serde_json::from_value(data).map_err(ApiError::parse)
    }
}

fn encoded(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

impl NotesApi for ApiClient {
    async fn fetch_all(&self) -> ApiResult<Vec<Note>> {
        let data = self
            .request(reqwest::Method::GET, "/api/note/all", None)
            .await?;
        parse_note_list(data)
    }

    async fn create(&self, input: &NoteInput) -> ApiResult<String> {
        let data = self
            .request_with(reqwest::Method::POST, "/api/note/add", input)
            .await?;
        Ok(parse_message(&data, "Note added successfully"))
    }

    async fn update(&self, id: &str, input: &NoteInput) -> ApiResult<String> {
        let path = format!("/api/note/edit/{}", encoded(id));
        let data = self.request_with(reqwest::Method::POST, &path, input).await?;
        Ok(parse_message(&data, "Note updated successfully"))
    }

    async fn delete(&self, id: &str) -> ApiResult<String> {
        let path = format!("/api/note/delete/{}", encoded(id));
        let data = self.request(reqwest::Method::DELETE, &path, None).await?;
        Ok(parse_message(&data, "Note deleted successfully"))
    }

    async fn set_pinned(&self, id: &str, pinned: bool) -> ApiResult<String> {
        let path = format!("/api/note/update-note-pinned/{}", encoded(id));
        let data = self
            .request_with(reqwest::Method::PUT, &path, &PinRequest { is_pinned: pinned })
            .await?;
        Ok(parse_message(&data, "Note updated successfully"))
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Note>> {
        let path = format!("/api/note/search?query={}", urlencoding::encode(query));
        let data = self.request(reqwest::Method::GET, &path, None).await?;
        parse_note_list(data)
    }
}

impl AuthApi for ApiClient {
    async fn sign_in(&self, req: &SignInRequest) -> ApiResult<UserSummary> {
        let data = self
            .request_with(reqwest::Method::POST, "/api/auth/signin", req)
            .await?;
        parse_auth_user(data)
    }

    async fn sign_up(&self, req: &SignUpRequest) -> ApiResult<UserSummary> {
        let data = self
            .request_with(reqwest::Method::POST, "/api/auth/signup", req)
            .await?;
        parse_auth_user(data)
    }

    async fn sign_out(&self) -> ApiResult<String> {
        let envelope: Envelope = self
            .request_as(reqwest::Method::GET, "/api/auth/signout")
            .await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Signed out successfully".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/".to_string());
        assert_eq!(client.base_url, "http://localhost:3000");
        assert_eq!(client.url("/api/note/all"), "http://localhost:3000/api/note/all");
    }

    #[test]
    fn test_decode_success_without_flag() {
        let data = decode_response(200, r#"{"notes": []}"#).expect("should decode");
        assert!(data["notes"].is_array());
    }

    #[test]
    fn test_decode_explicit_failure_uses_server_message() {
        let err = decode_response(200, r#"{"success": false, "message": "Note not found"}"#)
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert_eq!(err.message, "Note not found");
    }

    #[test]
    fn test_decode_failure_without_message() {
        let err = decode_response(200, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.message, "Request failed");
    }

    #[test]
    fn test_decode_http_error_prefers_body_message() {
        let err = decode_response(400, r#"{"success": false, "message": "Title is required"}"#)
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.message, "Title is required");

        let err = decode_response(502, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.message, "Request failed (502)");
    }

    #[test]
    fn test_decode_unauthorized() {
        let err = decode_response(401, "").unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn test_decode_invalid_json_on_success_status() {
        let err = decode_response(200, "not json").unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_parse_note_list_preserves_server_order() {
        let data = serde_json::json!({
            "success": true,
            "notes": [
                {"_id": "b", "title": "B", "content": "b", "tags": [], "isPinned": false},
                {"_id": "a", "title": "A", "content": "a", "tags": ["x"], "isPinned": true}
            ]
        });
        let notes = parse_note_list(data).unwrap();
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_auth_user_from_rest_field() {
        let data = serde_json::json!({
            "success": true,
            "rest": {"_id": "u1", "username": "jane", "email": "jane@example.com"}
        });
        let user = parse_auth_user(data).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.username, "jane");
    }

    #[test]
    fn test_parse_auth_user_top_level() {
        let data = serde_json::json!({"_id": "u2", "username": "bo", "email": "bo@example.com"});
        assert_eq!(parse_auth_user(data).unwrap().id, "u2");
    }

    #[test]
    fn test_parse_message_fallback() {
        let data = serde_json::json!({"success": true});
        assert_eq!(parse_message(&data, "Done"), "Done");
        let data = serde_json::json!({"success": true, "message": "Note deleted"});
        assert_eq!(parse_message(&data, "Done"), "Note deleted");
    }
}
