/// Inline edit-in-place widget state for one task field, modeled as a small
/// state machine with pure transitions so it can be tested without a
/// terminal. The draft is local: it reaches the server only on an explicit
/// save, and cancel always reverts to the last committed value.

/// Which task field an editor owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Description,
    Notes,
}

impl FieldKind {
    /// Prompt shown in the empty state.
    pub fn empty_prompt(self) -> &'static str {
        match self {
            FieldKind::Description => "+ add a description",
            FieldKind::Notes => "+ add notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Display,
    Editing { draft: String },
}

#[derive(Debug, Clone)]
pub struct FieldEditor {
    pub kind: FieldKind,
    value: String,
    pub state: EditorState,
}

fn state_for(value: &str) -> EditorState {
    if value.trim().is_empty() {
        EditorState::Empty
    } else {
        EditorState::Display
    }
}

impl FieldEditor {
    pub fn new(kind: FieldKind, initial: Option<&str>) -> Self {
        let value = initial.unwrap_or("").to_string();
        let state = state_for(&value);
        FieldEditor { kind, value, state }
    }

    /// Last committed (server-confirmed) value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditorState::Editing { draft } => Some(draft),
            _ => None,
        }
    }

    /// Enter the edit state, pre-filled with the current value.
    /// A no-op while already editing.
    pub fn begin_edit(&mut self) {
        if self.is_editing() {
            return;
        }
        self.state = EditorState::Editing {
            draft: self.value.clone(),
        };
    }

    pub fn input(&mut self, c: char) {
        if let EditorState::Editing { draft } = &mut self.state {
            draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let EditorState::Editing { draft } = &mut self.state {
            draft.pop();
        }
    }

    pub fn clear_draft(&mut self) {
        if let EditorState::Editing { draft } = &mut self.state {
            draft.clear();
        }
    }

    /// Discard the draft and revert to Display/Empty based on the last
    /// committed value, not the draft.
    pub fn cancel(&mut self) {
        self.state = state_for(&self.value);
    }

    /// Record a successful server commit of `saved` and leave the edit state.
    /// An empty committed value lands in Empty, not Display with blank text.
    pub fn commit(&mut self, saved: &str) {
        self.value = saved.to_string();
        self.state = state_for(&self.value);
    }
}
