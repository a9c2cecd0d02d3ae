mod state;

pub(crate) use state::{DashboardPhase, DashboardState, EditorError, EmptyReason, ReadyState};

use crate::api::{ApiError, NotesApi};
use crate::drafts::{EditorDraft, EditorMode};
use crate::models::Note;
use crate::state::{Notifier, SessionStore};
use leptos::prelude::*;

/// Drives the notes dashboard: session gating, list retrieval, search, and the
/// mutate-then-refetch cycle for create/edit/delete/pin.
///
/// All list state lives in one `DashboardState` signal. Every successful mutation funnels
/// through [`DashboardController::refresh_list`]; nothing patches the list locally.
#[derive(Clone)]
pub(crate) struct DashboardController<C> {
    client: C,
    state: RwSignal<DashboardState>,
    session: SessionStore,
    notifier: Notifier,
}

impl<C> DashboardController<C>
where
    C: NotesApi + Clone + Send + Sync + 'static,
{
    pub fn new(client: C, session: SessionStore, notifier: Notifier) -> Self {
        Self {
            client,
            state: RwSignal::new(DashboardState::default()),
            session,
            notifier,
        }
    }

    pub fn state(&self) -> RwSignal<DashboardState> {
        self.state
    }

    fn mutate<U>(&self, f: impl FnOnce(&mut DashboardState) -> U) -> Option<U> {
        self.state.try_update(f)
    }

    /// Reacts to the session's user appearing or disappearing.
    pub async fn on_session_changed(&self, authenticated: bool) {
        if !authenticated {
            self.mutate(|s| s.reset());
            return;
        }
        self.mutate(|s| s.mark_authenticated());
        self.refresh_list().await;
    }

    /// Drops in-flight work and clears the snapshot. Called when the page unmounts.
    pub fn teardown(&self) {
        self.mutate(|s| s.reset());
    }

    /// Logs, notifies, and expires the session on 401.
    fn report(&self, action: &'static str, e: &ApiError) {
        tracing::warn!(action, kind = ?e.kind, error = %e, "notes request failed");
        if e.is_unauthorized() {
            self.session.expire();
            return;
        }
        self.notifier.error(e.message.clone());
    }

    /// Replaces the snapshot with the server's full list.
    ///
    /// A failure is logged and shown as the load-failed empty state, not as a toast.
    pub async fn refresh_list(&self) {
        let Some(token) = self.mutate(|s| s.begin_list_request()) else {
            return;
        };

        match self.client.fetch_all().await {
            Ok(notes) => {
                let count = notes.len();
                if self.mutate(|s| s.apply_fetch(token, notes)) == Some(true) {
                    tracing::debug!(count, "notes loaded");
                } else {
                    tracing::debug!(?token, "discarding stale note list");
                }
            }
            Err(e) => {
                tracing::error!(kind = ?e.kind, error = %e, "failed to load notes");
                if e.is_unauthorized() {
                    self.session.expire();
                }
                self.mutate(|s| s.fail_fetch(token, e.message.clone()));
            }
        }
    }

    /// Substitutes the server's search result for the list. Blank queries are ignored.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let Some(token) = self.mutate(|s| s.begin_list_request()) else {
            return;
        };

        match self.client.search(query).await {
            Ok(notes) => {
                let count = notes.len();
                if self.mutate(|s| s.apply_search(token, notes)) == Some(true) {
                    tracing::debug!(query, count, "search applied");
                } else {
                    tracing::debug!(?token, query, "discarding stale search result");
                }
            }
            Err(e) => {
                self.mutate(|s| s.fail_search(token, e.message.clone()));
                self.report("search", &e);
            }
        }
    }

    /// Leaves search mode. The search results stay up until the full list lands, which
    /// clears the search flag in the same update.
    pub async fn clear_search(&self) {
        self.refresh_list().await;
    }

    pub fn open_editor(&self, draft: EditorDraft) {
        self.mutate(|s| s.open_editor(draft));
    }

    pub fn open_add(&self) {
        self.open_editor(EditorDraft::new_note());
    }

    pub fn open_edit(&self, note: &Note) {
        self.open_editor(EditorDraft::from_note(note));
    }

    pub fn close_editor(&self) {
        self.mutate(|s| s.close_editor());
    }

    /// Validates, then creates or updates (never both). On success the overlay closes and
    /// the list is refetched; on failure the overlay stays open with the message inline.
    pub async fn submit_editor(&self, draft: EditorDraft) -> Result<(), EditorError> {
        let epoch = self
            .mutate(|s| s.begin_submit(draft.clone()))
            .unwrap_or(Err(EditorError::Closed))?;

        let input = draft.to_input();
        let res = match &draft.mode {
            EditorMode::Add => self.client.create(&input).await,
            EditorMode::Edit { note_id } => self.client.update(note_id, &input).await,
        };

        match res {
            Ok(message) => {
                self.notifier.success(message);
                self.mutate(|s| s.finish_submit(epoch));
                self.refresh_list().await;
                Ok(())
            }
            Err(e) => {
                self.report("save note", &e);
                self.mutate(|s| s.fail_submit(epoch, e.message.clone()));
                Err(e.into())
            }
        }
    }

    pub async fn delete_note(&self, id: &str) {
        match self.client.delete(id).await {
            Ok(message) => {
                self.notifier.success(message);
                self.refresh_list().await;
            }
            Err(e) => self.report("delete note", &e),
        }
    }

    /// Sends the flipped flag; the list shows whatever the refetch returns.
    pub async fn toggle_pin(&self, note: &Note) {
        match self.client.set_pinned(&note.id, !note.is_pinned).await {
            Ok(message) => {
                self.notifier.success(message);
                self.refresh_list().await;
            }
            Err(e) => self.report("pin note", &e),
        }
    }
}
