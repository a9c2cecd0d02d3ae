mod editor;

pub(crate) use editor::{add_tag, remove_tag, EditorDraft, EditorMode};
