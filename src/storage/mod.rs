use crate::models::UserSummary;
use crate::util::browser_window;
use serde::{Deserialize, Serialize};

pub(crate) const USER_KEY: &str = "notes_user";
pub(crate) const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
    browser_window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn save_user_to_storage(user: &UserSummary) {
    save_json_to_storage(USER_KEY, user);
}

pub(crate) fn load_user_from_storage() -> Option<UserSummary> {
    load_json_from_storage(USER_KEY)
}

pub(crate) fn clear_user_from_storage() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Raw stored theme preference (`"dark"` / `"light"`), if the user ever picked one.
pub(crate) fn load_theme_preference() -> Option<String> {
    local_storage()?.get_item(THEME_KEY).ok().flatten()
}

pub(crate) fn save_theme_preference(value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, value);
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_user_storage_roundtrip() {
        let user = UserSummary {
            id: "u1".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            profile_picture_url: None,
        };
        save_user_to_storage(&user);
        assert_eq!(load_user_from_storage(), Some(user));

        clear_user_from_storage();
        assert!(load_user_from_storage().is_none());
    }

    #[wasm_bindgen_test]
    fn test_theme_preference_roundtrip() {
        save_theme_preference("dark");
        assert_eq!(load_theme_preference().as_deref(), Some("dark"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_storage_is_inert_off_browser() {
        save_theme_preference("dark");
        assert!(load_theme_preference().is_none());
        assert!(load_user_from_storage().is_none());
        clear_user_from_storage();
    }
}
