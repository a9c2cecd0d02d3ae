mod api;
mod app;
mod components;
mod config;
mod dashboard;
mod drafts;
mod logging;
mod models;
mod pages;
mod state;
mod storage;
mod util;
mod validation;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(&EnvConfig::new().log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting notes app");
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignOutPolicy;

    #[test]
    fn test_env_config_without_window_uses_defaults() {
        let config = EnvConfig::new();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.sign_out_policy, SignOutPolicy::Pessimistic);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_sign_in_response_contract() {
        // Shape returned by POST /api/auth/signin.
        let body = r#"{
            "success": true,
            "message": "Login successful",
            "rest": {"_id": "65f0", "username": "jane", "email": "jane@example.com"}
        }"#;
        let data = api::decode_response(200, body).expect("envelope should decode");
        let user = api::parse_auth_user(data).expect("user should parse");
        assert_eq!(user.id, "65f0");
        assert_eq!(user.username, "jane");
        assert!(user.profile_picture_url.is_none());
    }

    #[test]
    fn test_note_list_contract() {
        let body = r#"{
            "success": true,
            "notes": [
                {"_id": "n1", "title": "T", "content": "C", "tags": ["a"], "isPinned": true,
                 "createdAt": "2024-03-05T10:00:00.000Z"}
            ]
        }"#;
        let data = api::decode_response(200, body).expect("envelope should decode");
        let notes = api::parse_note_list(data).expect("notes should parse");
        assert_eq!(notes.len(), 1);
        assert!(notes[0].is_pinned);
        assert_eq!(util::format_note_date(notes[0].created_at.as_ref()), "5 Mar 2024");
    }
}
