use serde::{Deserialize, Serialize};
use super::Id;

/// Mutation requests emitted by the column and task views.
///
/// Views never touch the board directly; they send one of these up through
/// the dispatch callback and the board hook applies it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BoardIntent {
    CreateColumn,
    DeleteColumn(Id),
    RenameColumn(Id, String),
    CreateTask(Id),
    DeleteTask(Id),
    UpdateTaskContent(Id, String),
}

impl BoardIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardIntent::CreateColumn => "CreateColumn",
            BoardIntent::DeleteColumn(_) => "DeleteColumn",
            BoardIntent::RenameColumn(..) => "RenameColumn",
            BoardIntent::CreateTask(_) => "CreateTask",
            BoardIntent::DeleteTask(_) => "DeleteTask",
            BoardIntent::UpdateTaskContent(..) => "UpdateTaskContent",
        }
    }
}
