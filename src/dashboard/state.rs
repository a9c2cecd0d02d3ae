use crate::api::ApiError;
use crate::drafts::EditorDraft;
use crate::models::Note;
use crate::validation::ValidationError;

/// Identity of one list-writing request (`fetch_all` or `search`).
///
/// Both operations write the same snapshot, so they share one counter: whichever was issued
/// last is the only one whose result is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ListToken(u64);

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("The editor is not open")]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EmptyReason {
    /// The user has no notes yet.
    NoNotes,
    /// A search matched nothing.
    NoSearchResults,
    /// The last `fetch_all` failed.
    LoadFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReadyState {
    Viewing,
    Searching,
    Editing,
    Empty(EmptyReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DashboardPhase {
    Unauthenticated,
    Loading,
    Ready(ReadyState),
}

/// The overlay's state while it is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EditorSession {
    pub draft: EditorDraft,
    pub error: Option<String>,
    pub submitting: bool,
    epoch: u64,
}

/// What the list renders: either the full snapshot ordered pinned-first, or a search result
/// set exactly as the server returned it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NoteListView {
    pub notes: Vec<Note>,
    pub is_search_active: bool,
}

/// Pinned notes first; server order is kept inside each group.
pub(crate) fn pinned_first(notes: &[Note]) -> Vec<Note> {
    let mut out = notes.to_vec();
    // `sort_by_key` is stable.
    out.sort_by_key(|n| !n.is_pinned);
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DashboardState {
    authenticated: bool,
    notes: Vec<Note>,
    is_search_active: bool,
    loaded_once: bool,
    load_error: Option<String>,

    list_token: u64,
    list_in_flight: bool,

    editor: Option<EditorSession>,
    editor_epoch: u64,
}

impl DashboardState {
    pub fn phase(&self) -> DashboardPhase {
        if !self.authenticated {
            return DashboardPhase::Unauthenticated;
        }
        if !self.loaded_once {
            return DashboardPhase::Loading;
        }
        if self.editor.is_some() {
            return DashboardPhase::Ready(ReadyState::Editing);
        }
        if let Some(reason) = self.empty_reason() {
            return DashboardPhase::Ready(ReadyState::Empty(reason));
        }
        if self.is_search_active {
            DashboardPhase::Ready(ReadyState::Searching)
        } else {
            DashboardPhase::Ready(ReadyState::Viewing)
        }
    }

    pub fn view(&self) -> NoteListView {
        let notes = if self.is_search_active {
            self.notes.clone()
        } else {
            pinned_first(&self.notes)
        };
        NoteListView {
            notes,
            is_search_active: self.is_search_active,
        }
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.notes.is_empty() {
            return None;
        }
        Some(if self.load_error.is_some() {
            EmptyReason::LoadFailed
        } else if self.is_search_active {
            EmptyReason::NoSearchResults
        } else {
            EmptyReason::NoNotes
        })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_search_active(&self) -> bool {
        self.is_search_active
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_refreshing(&self) -> bool {
        self.list_in_flight
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn mark_authenticated(&mut self) {
        self.authenticated = true;
    }

    /// Back to a signed-out blank slate. Counters keep growing so anything still in flight
    /// is recognized as stale when it lands.
    pub fn reset(&mut self) {
        *self = Self {
            list_token: self.list_token.wrapping_add(1),
            editor_epoch: self.editor_epoch.wrapping_add(1),
            ..Self::default()
        };
    }

    pub fn begin_list_request(&mut self) -> ListToken {
        self.list_token = self.list_token.wrapping_add(1);
        self.list_in_flight = true;
        ListToken(self.list_token)
    }

    pub fn is_current(&self, token: ListToken) -> bool {
        token.0 == self.list_token
    }

    fn settle(&mut self, token: ListToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.list_in_flight = false;
        self.loaded_once = true;
        true
    }

    pub fn apply_fetch(&mut self, token: ListToken, notes: Vec<Note>) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.notes = notes;
        self.is_search_active = false;
        self.load_error = None;
        true
    }

    /// A failed full fetch empties the list and remembers why.
    pub fn fail_fetch(&mut self, token: ListToken, message: String) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.notes.clear();
        self.is_search_active = false;
        self.load_error = Some(message);
        true
    }

    pub fn apply_search(&mut self, token: ListToken, notes: Vec<Note>) -> bool {
        if !self.settle(token) {
            return false;
        }
        self.notes = notes;
        self.is_search_active = true;
        self.load_error = None;
        true
    }

    /// A failed search leaves the previous list on screen. If it superseded the first load,
    /// there is no list yet, so it settles as a failed load instead.
    pub fn fail_search(&mut self, token: ListToken, message: String) -> bool {
        if !self.is_current(token) {
            return false;
        }
        if !self.loaded_once {
            return self.fail_fetch(token, message);
        }
        self.list_in_flight = false;
        true
    }

    pub fn open_editor(&mut self, draft: EditorDraft) {
        self.editor_epoch = self.editor_epoch.wrapping_add(1);
        self.editor = Some(EditorSession {
            draft,
            error: None,
            submitting: false,
            epoch: self.editor_epoch,
        });
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Stores the submitted draft and validates it. On success returns the epoch the
    /// eventual response must match.
    pub fn begin_submit(&mut self, draft: EditorDraft) -> Result<u64, EditorError> {
        let Some(session) = self.editor.as_mut() else {
            return Err(EditorError::Closed);
        };

        session.draft = draft;
        if let Err(e) = session.draft.validate() {
            session.error = Some(e.to_string());
            session.submitting = false;
            return Err(e.into());
        }

        session.error = None;
        session.submitting = true;
        Ok(session.epoch)
    }

    fn editor_at(&mut self, epoch: u64) -> Option<&mut EditorSession> {
        self.editor.as_mut().filter(|s| s.epoch == epoch)
    }

    pub fn finish_submit(&mut self, epoch: u64) -> bool {
        if self.editor_at(epoch).is_none() {
            return false;
        }
        self.editor = None;
        true
    }

    pub fn fail_submit(&mut self, epoch: u64, message: String) -> bool {
        let Some(session) = self.editor_at(epoch) else {
            return false;
        };
        session.submitting = false;
        session.error = Some(message);
        true
    }
}
