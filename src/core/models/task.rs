use serde::{Deserialize, Serialize};
use super::Id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Id,
    pub column_id: Id,
    pub content: String,
}

impl Task {
    pub fn new(id: Id, column_id: Id, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }

    pub fn move_to_column(&mut self, column_id: Id) {
        self.column_id = column_id;
    }
}
