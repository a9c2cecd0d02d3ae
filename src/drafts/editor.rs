use crate::models::{Note, NoteInput};
use crate::validation::{validate_note_fields, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Add,
    Edit { note_id: String },
}

/// Form state of the note editor overlay. Lives only while the overlay is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EditorDraft {
    pub mode: EditorMode,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl EditorDraft {
    pub fn new_note() -> Self {
        Self {
            mode: EditorMode::Add,
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            mode: EditorMode::Edit {
                note_id: note.id.clone(),
            },
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_note_fields(&self.title, &self.content)
    }

    pub fn to_input(&self) -> NoteInput {
        NoteInput {
            title: self.title.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update Note"
        } else {
            "Add Note"
        }
    }
}

/// Appends a trimmed tag unless it is blank or already present. Returns whether it was added.
pub(crate) fn add_tag(tags: &mut Vec<String>, raw: &str) -> bool {
    let tag = raw.trim();
    if tag.is_empty() || tags.iter().any(|t| t == tag) {
        return false;
    }
    tags.push(tag.to_string());
    true
}

pub(crate) fn remove_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let before = tags.len();
    tags.retain(|t| t != tag);
    tags.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "n1".to_string(),
            title: "Standup".to_string(),
            content: "notes".to_string(),
            tags: vec!["work".to_string()],
            is_pinned: false,
            created_at: None,
        }
    }

    #[test]
    fn test_edit_draft_is_seeded_from_note() {
        let d = EditorDraft::from_note(&note());
        assert_eq!(
            d.mode,
            EditorMode::Edit {
                note_id: "n1".to_string()
            }
        );
        assert_eq!(d.title, "Standup");
        assert_eq!(d.tags, vec!["work"]);
        assert_eq!(d.submit_label(), "Update Note");
    }

    #[test]
    fn test_new_draft_is_empty() {
        let d = EditorDraft::new_note();
        assert!(!d.is_edit());
        assert!(d.title.is_empty() && d.content.is_empty() && d.tags.is_empty());
        assert_eq!(d.submit_label(), "Add Note");
    }

    #[test]
    fn test_add_tag_keeps_order_and_skips_duplicates() {
        let mut tags = Vec::new();
        assert!(add_tag(&mut tags, " x "));
        assert!(add_tag(&mut tags, "y"));
        assert!(!add_tag(&mut tags, "x"));
        assert!(!add_tag(&mut tags, "   "));
        assert_eq!(tags, vec!["x", "y"]);
    }

    #[test]
    fn test_remove_tag() {
        let mut tags = vec!["x".to_string(), "y".to_string()];
        assert!(remove_tag(&mut tags, "x"));
        assert!(!remove_tag(&mut tags, "z"));
        assert_eq!(tags, vec!["y"]);
    }

    #[test]
    fn test_to_input_carries_tags_in_order() {
        let mut d = EditorDraft::new_note();
        d.title = "A".to_string();
        d.content = "B".to_string();
        add_tag(&mut d.tags, "x");
        add_tag(&mut d.tags, "y");
        let input = d.to_input();
        assert_eq!(input.tags, vec!["x", "y"]);
        assert_eq!(d.validate(), Ok(()));
    }
}
