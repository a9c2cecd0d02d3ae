use crate::api::{ApiError, ApiErrorKind, ApiResult, AuthApi};
use crate::config::SignOutPolicy;
use crate::models::{SignInRequest, SignUpRequest, UserSummary};
use crate::state::notify::Notifier;
use crate::storage::{clear_user_from_storage, load_user_from_storage, save_user_to_storage};
use crate::validation::{Credentials, Registration, ValidationError};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Who is signed in, plus coarse progress/error flags for the auth flows.
///
/// The dashboard only reads `user`; every mutation goes through the sign-in/up/out flows
/// here or through `expire` when the API reports the session as gone.
#[derive(Clone, Copy)]
pub(crate) struct SessionStore {
    user: RwSignal<Option<UserSummary>>,
    is_loading: RwSignal<bool>,
    last_error: RwSignal<Option<String>>,
    notifier: Notifier,
}

impl SessionStore {
    pub fn new(user: Option<UserSummary>, notifier: Notifier) -> Self {
        Self {
            user: RwSignal::new(user),
            is_loading: RwSignal::new(false),
            last_error: RwSignal::new(None),
            notifier,
        }
    }

    /// Restores the user persisted by a previous page load.
    pub fn init(notifier: Notifier) -> Self {
        Self::new(load_user_from_storage(), notifier)
    }

    pub fn teardown(&self) {
        self.is_loading.set(false);
        self.last_error.set(None);
    }

    pub fn user(&self) -> Option<UserSummary> {
        self.user.get()
    }

    pub fn user_untracked(&self) -> Option<UserSummary> {
        self.user.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(|u| u.is_some())
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.get()
    }

    pub async fn sign_in<A: AuthApi>(
        &self,
        api: &A,
        creds: &Credentials,
    ) -> Result<UserSummary, AuthError> {
        creds.validate()?;

        self.begin();
        let res = api
            .sign_in(&SignInRequest {
                email: creds.email.clone(),
                password: creds.password.clone(),
                remember_me: creds.remember_me,
            })
            .await;
        self.finish_auth(res, "Login successful!")
    }

    pub async fn sign_up<A: AuthApi>(
        &self,
        api: &A,
        registration: &Registration,
    ) -> Result<UserSummary, AuthError> {
        registration.validate()?;

        self.begin();
        let res = api
            .sign_up(&SignUpRequest {
                username: registration.username.trim().to_string(),
                email: registration.email.clone(),
                password: registration.password.clone(),
            })
            .await;
        self.finish_auth(res, "Sign up successful!")
    }

    /// Soft failures (`success: false`) always keep the session. Transport failures follow
    /// `policy`. A 401 means the server already forgot us, so the session is cleared.
    pub async fn sign_out<A: AuthApi>(
        &self,
        api: &A,
        policy: SignOutPolicy,
    ) -> Result<(), AuthError> {
        self.begin();
        let res = api.sign_out().await;
        self.is_loading.set(false);

        match res {
            Ok(message) => {
                self.clear();
                self.notifier.success(message);
                Ok(())
            }
            Err(e) => {
                let end_locally = match e.kind {
                    ApiErrorKind::Unauthorized => true,
                    ApiErrorKind::Network => policy == SignOutPolicy::Optimistic,
                    _ => false,
                };
                tracing::warn!(error = %e, kind = ?e.kind, end_locally, "sign out failed");

                self.notifier.error(e.message.clone());
                if end_locally {
                    self.clear();
                } else {
                    self.last_error.set(Some(e.message.clone()));
                }
                Err(e.into())
            }
        }
    }

    /// The API rejected our cookie: drop the user without a round trip.
    pub fn expire(&self) {
        if self.user.get_untracked().is_none() {
            return;
        }
        tracing::info!("session expired");
        self.clear();
        self.notifier.info("Your session has expired. Please sign in again.");
    }

    fn begin(&self) {
        self.is_loading.set(true);
        self.last_error.set(None);
    }

    fn finish_auth(
        &self,
        res: ApiResult<UserSummary>,
        success_message: &str,
    ) -> Result<UserSummary, AuthError> {
        self.is_loading.set(false);

        match res {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "signed in");
                save_user_to_storage(&user);
                self.user.set(Some(user.clone()));
                self.notifier.success(success_message);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = ?e.kind, "authentication failed");
                self.last_error.set(Some(e.message.clone()));
                self.notifier.error(e.message.clone());
                Err(e.into())
            }
        }
    }

    fn clear(&self) {
        clear_user_from_storage();
        self.user.set(None);
        self.last_error.set(None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::state::notify::ToastKind;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct FakeAuth {
        calls: Arc<Mutex<Vec<&'static str>>>,
        sign_in: Option<ApiResult<UserSummary>>,
        sign_out: Option<ApiResult<String>>,
    }

    fn user() -> UserSummary {
        UserSummary {
            id: "u1".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            profile_picture_url: None,
        }
    }

    fn err(kind: ApiErrorKind, message: &str) -> ApiError {
        ApiError {
            kind,
            message: message.to_string(),
        }
    }

    impl AuthApi for FakeAuth {
        async fn sign_in(&self, _req: &SignInRequest) -> ApiResult<UserSummary> {
            self.calls.lock().unwrap().push("sign_in");
            self.sign_in.clone().unwrap_or_else(|| Ok(user()))
        }

        async fn sign_up(&self, _req: &SignUpRequest) -> ApiResult<UserSummary> {
            self.calls.lock().unwrap().push("sign_up");
            Ok(user())
        }

        async fn sign_out(&self) -> ApiResult<String> {
            self.calls.lock().unwrap().push("sign_out");
            self.sign_out
                .clone()
                .unwrap_or_else(|| Ok("Signed out".to_string()))
        }
    }

    fn creds(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "secret1".to_string(),
            remember_me: true,
        }
    }

    #[tokio::test]
    async fn test_sign_in_bad_email_makes_no_call() {
        let notifier = Notifier::new();
        let session = SessionStore::new(None, notifier);
        let api = FakeAuth::default();

        let res = session.sign_in(&api, &creds("bad")).await;

        assert_eq!(
            res,
            Err(AuthError::Validation(ValidationError::InvalidEmail))
        );
        assert!(api.calls.lock().unwrap().is_empty());
        assert!(notifier.snapshot().is_empty());
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_success_sets_user_and_notifies_once() {
        let notifier = Notifier::new();
        let session = SessionStore::new(None, notifier);

        let got = session
            .sign_in(&FakeAuth::default(), &creds("jane@example.com"))
            .await
            .unwrap();

        assert_eq!(got, user());
        assert_eq!(session.user_untracked(), Some(user()));
        assert!(session.last_error.get_untracked().is_none());
        let toasts = notifier.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
    }

    #[tokio::test]
    async fn test_sign_in_rejection_records_server_message() {
        let notifier = Notifier::new();
        let session = SessionStore::new(None, notifier);
        let api = FakeAuth {
            sign_in: Some(Err(err(ApiErrorKind::Rejected, "Wrong credentials"))),
            ..Default::default()
        };

        let res = session.sign_in(&api, &creds("jane@example.com")).await;

        assert!(matches!(res, Err(AuthError::Api(_))));
        assert!(session.user_untracked().is_none());
        assert_eq!(
            session.last_error.get_untracked().as_deref(),
            Some("Wrong credentials")
        );
        assert_eq!(notifier.snapshot().len(), 1);
        assert!(!session.is_loading.get_untracked());
    }

    #[tokio::test]
    async fn test_sign_up_mismatch_makes_no_call() {
        let session = SessionStore::new(None, Notifier::new());
        let api = FakeAuth::default();
        let reg = Registration {
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret2".to_string(),
            accepted_terms: true,
        };

        let err = session.sign_up(&api, &reg).await.unwrap_err();

        assert_eq!(err.to_string(), "Passwords do not match");
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_success_sets_user_and_notifies_once() {
        let notifier = Notifier::new();
        let session = SessionStore::new(None, notifier);
        session.last_error.set(Some("Email already registered".to_string()));
        let api = FakeAuth::default();
        let reg = Registration {
            username: "  jane ".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            accepted_terms: true,
        };

        let got = session.sign_up(&api, &reg).await.unwrap();

        assert_eq!(got, user());
        assert_eq!(*api.calls.lock().unwrap(), vec!["sign_up"]);
        assert_eq!(session.user_untracked(), Some(user()));
        assert!(session.last_error.get_untracked().is_none());
        assert!(!session.is_loading.get_untracked());
        let toasts = notifier.snapshot();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Sign up successful!");
    }

    #[tokio::test]
    async fn test_sign_out_success_clears_user() {
        let session = SessionStore::new(Some(user()), Notifier::new());
        session
            .sign_out(&FakeAuth::default(), SignOutPolicy::Pessimistic)
            .await
            .unwrap();
        assert!(session.user_untracked().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_soft_failure_keeps_user_under_any_policy() {
        let session = SessionStore::new(Some(user()), Notifier::new());
        let api = FakeAuth {
            sign_out: Some(Err(err(ApiErrorKind::Rejected, "nope"))),
            ..Default::default()
        };
        assert!(session
            .sign_out(&api, SignOutPolicy::Optimistic)
            .await
            .is_err());
        assert_eq!(session.user_untracked(), Some(user()));
    }

    #[tokio::test]
    async fn test_sign_out_transport_failure_follows_policy() {
        let api = FakeAuth {
            sign_out: Some(Err(err(ApiErrorKind::Network, "offline"))),
            ..Default::default()
        };

        let pessimistic = SessionStore::new(Some(user()), Notifier::new());
        let _ = pessimistic.sign_out(&api, SignOutPolicy::Pessimistic).await;
        assert_eq!(pessimistic.user_untracked(), Some(user()));
        assert_eq!(
            pessimistic.last_error.get_untracked().as_deref(),
            Some("offline")
        );

        let optimistic = SessionStore::new(Some(user()), Notifier::new());
        let _ = optimistic.sign_out(&api, SignOutPolicy::Optimistic).await;
        assert!(optimistic.user_untracked().is_none());
    }

    #[test]
    fn test_expire_is_noop_without_user() {
        let notifier = Notifier::new();
        let session = SessionStore::new(None, notifier);
        session.expire();
        assert!(notifier.snapshot().is_empty());

        let session = SessionStore::new(Some(user()), notifier);
        session.expire();
        assert!(!session.is_authenticated());
        assert_eq!(notifier.snapshot().len(), 1);
    }
}
