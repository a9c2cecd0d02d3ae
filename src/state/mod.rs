mod notify;
mod session;
mod theme;

pub(crate) use notify::{Notifier, Toast, ToastKind};
pub(crate) use session::{AuthError, SessionStore};
pub(crate) use theme::ThemeStore;

use crate::api::ApiClient;
use crate::config::EnvConfig;

/// Everything the pages need, built once at startup and handed down via context.
#[derive(Clone)]
pub(crate) struct AppState {
    pub config: EnvConfig,
    pub api_client: ApiClient,
    pub notifier: Notifier,
    pub session: SessionStore,
    pub theme: ThemeStore,
}

impl AppState {
    pub fn init(config: EnvConfig) -> Self {
        let notifier = Notifier::new();
        let api_client = ApiClient::new(config.api_url.clone());

        tracing::info!(api_url = %config.api_url, sign_out_policy = %config.sign_out_policy, "app state initialized");

        Self {
            api_client,
            notifier,
            session: SessionStore::init(notifier),
            theme: ThemeStore::init(),
            config,
        }
    }

    pub fn teardown(&self) {
        self.session.teardown();
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
