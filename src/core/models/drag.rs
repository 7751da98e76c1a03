use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use super::{Column, Id, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    Column,
    Task,
}

impl DragKind {
    /// Value used for the `data-dnd-kind` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            DragKind::Column => "column",
            DragKind::Task => "task",
        }
    }
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DragKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "column" => Ok(DragKind::Column),
            "task" => Ok(DragKind::Task),
            other => Err(format!("Unknown drag kind '{}'", other)),
        }
    }
}

/// Something that can be dragged or dropped onto: a column or a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragItem {
    pub kind: DragKind,
    pub id: Id,
}

impl DragItem {
    pub fn column(id: Id) -> Self {
        Self { kind: DragKind::Column, id }
    }

    pub fn task(id: Id) -> Self {
        Self { kind: DragKind::Task, id }
    }

    pub fn from_attributes(kind: &str, id: &str) -> Result<Self, String> {
        Ok(Self {
            kind: kind.parse()?,
            id: Id::parse(id)?,
        })
    }
}

/// Snapshot of the item being dragged, taken at drag start for the overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ActiveDrag {
    Column(Column),
    Task(Task),
}
