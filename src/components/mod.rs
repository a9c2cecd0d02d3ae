pub mod ui;

mod empty_state;
mod navbar;
mod note_card;
mod note_editor;
mod password_input;
mod search_bar;
mod tag_input;
mod theme_toggle;
mod toaster;

pub(crate) use empty_state::EmptyState;
pub(crate) use navbar::Navbar;
pub(crate) use note_card::NoteCard;
pub(crate) use note_editor::NoteEditor;
pub(crate) use password_input::PasswordInput;
pub(crate) use search_bar::SearchBar;
pub(crate) use tag_input::TagInput;
pub(crate) use theme_toggle::ThemeToggle;
pub(crate) use toaster::Toaster;
