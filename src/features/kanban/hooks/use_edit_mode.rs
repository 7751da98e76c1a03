use leptos::prelude::*;

/// Key chord that leaves edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKey {
    /// Plain Enter (single-line column titles).
    Enter,
    /// Shift+Enter, so plain Enter can insert newlines in task content.
    ShiftEnter,
}

impl ExitKey {
    pub fn matches(&self, key: &str, shift: bool) -> bool {
        match self {
            ExitKey::Enter => key == "Enter",
            ExitKey::ShiftEnter => key == "Enter" && shift,
        }
    }
}

/// Inline-edit state shared by column headers and task cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing,
}

impl EditState {
    /// Clicking the display enters edit mode, unless the entity is being
    /// dragged.
    pub fn on_click(self, dragging: bool) -> Self {
        if dragging {
            self
        } else {
            EditState::Editing
        }
    }

    pub fn on_blur(self) -> Self {
        EditState::Idle
    }

    pub fn on_key(self, exit: ExitKey, key: &str, shift: bool) -> Self {
        if self == EditState::Editing && exit.matches(key, shift) {
            EditState::Idle
        } else {
            self
        }
    }

    pub fn is_editing(self) -> bool {
        self == EditState::Editing
    }

    /// Dragging is disabled while editing so text selection works.
    pub fn is_draggable(self) -> bool {
        self == EditState::Idle
    }
}

pub fn use_edit_mode() -> RwSignal<EditState> {
    RwSignal::new(EditState::Idle)
}

/// Task cards also track hover, which gates the delete button. Entering or
/// leaving edit mode drops the hover flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub edit: EditState,
    pub hovered: bool,
}

impl CardState {
    pub fn on_click(self, dragging: bool) -> Self {
        let edit = self.edit.on_click(dragging);
        Self {
            edit,
            hovered: self.hovered && edit == self.edit,
        }
    }

    pub fn on_exit(self) -> Self {
        Self {
            edit: EditState::Idle,
            hovered: false,
        }
    }

    pub fn on_hover(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }

    pub fn shows_delete(self) -> bool {
        self.hovered && !self.edit.is_editing()
    }
}

pub fn use_card_state() -> RwSignal<CardState> {
    RwSignal::new(CardState::default())
}
