use crate::util::browser_window;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// What to do with the local session when the sign-out request never reaches the server.
///
/// A server that answers with `success: false` always keeps the session; this only covers
/// transport failures.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub(crate) enum SignOutPolicy {
    /// Keep the user signed in locally and report the failure.
    #[default]
    Pessimistic,
    /// Treat the session as ended locally anyway.
    Optimistic,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub sign_out_policy: SignOutPolicy,
    pub log_level: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // We support BOTH `window.ENV.API_URL` (upper case, documented) and
        // `window.ENV.api_url` for every key.
        let env = browser_window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        Self::from_lookup(|key| {
            let env = env.as_ref()?;
            [key.to_uppercase(), key.to_lowercase()]
                .iter()
                .find_map(|k| js_sys::Reflect::get(env, &k.as_str().into()).ok()?.as_string())
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = non_empty("api_url")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let sign_out_policy = non_empty("sign_out_policy")
            .and_then(|v| SignOutPolicy::from_str(v.trim()).ok())
            .unwrap_or_default();

        let log_level = non_empty("log_level")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            api_url,
            sign_out_policy,
            log_level,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
