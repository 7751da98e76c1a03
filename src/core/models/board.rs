use crate::core::config::BoardConfig;
use crate::core::services::array_move;
use super::{ActiveDrag, BoardIntent, Column, DragItem, DragKind, Id, Task};

/// Authoritative board state: the ordered columns, the ordered tasks and
/// the item currently being dragged.
///
/// Every task's `column_id` names an existing column, except transiently
/// while a task is being dragged between columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    active: Option<ActiveDrag>,
    column_title_prefix: String,
    task_content_prefix: String,
}

impl Default for Board {
    fn default() -> Self {
        Self::with_config(&BoardConfig::default())
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BoardConfig) -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            active: None,
            column_title_prefix: config.column_title_prefix.clone(),
            task_content_prefix: config.task_content_prefix.clone(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    pub fn column(&self, id: Id) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn column_ids(&self) -> Vec<Id> {
        self.columns.iter().map(|c| c.id).collect()
    }

    /// Tasks of one column, in board order.
    pub fn tasks_in(&self, column_id: Id) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .cloned()
            .collect()
    }

    pub fn task_ids_in(&self, column_id: Id) -> Vec<Id> {
        self.tasks
            .iter()
            .filter(|t| t.column_id == column_id)
            .map(|t| t.id)
            .collect()
    }

    pub fn task_count(&self, column_id: Id) -> usize {
        self.tasks.iter().filter(|t| t.column_id == column_id).count()
    }

    pub fn create_column(&mut self) -> Id {
        let id = self.fresh_id();
        let title = format!("{} {}", self.column_title_prefix, self.columns.len() + 1);
        self.columns.push(Column::new(id, title));
        id
    }

    /// Removes the column and every task in it.
    pub fn delete_column(&mut self, id: Id) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != id);
        if self.columns.len() == before {
            return false;
        }
        self.tasks.retain(|t| t.column_id != id);
        true
    }

    pub fn rename_column(&mut self, id: Id, title: String) -> bool {
        match self.columns.iter_mut().find(|c| c.id == id) {
            Some(column) => {
                column.update_title(title);
                true
            }
            None => false,
        }
    }

    /// Appends a task to the given column. Returns `None` when the column
    /// does not exist so a task can never be born orphaned.
    pub fn create_task(&mut self, column_id: Id) -> Option<Id> {
        self.column(column_id)?;
        let id = self.fresh_id();
        let content = format!("{} {}", self.task_content_prefix, self.tasks.len() + 1);
        self.tasks.push(Task::new(id, column_id, content));
        Some(id)
    }

    pub fn delete_task(&mut self, id: Id) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn update_task_content(&mut self, id: Id, content: String) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.update_content(content);
                true
            }
            None => false,
        }
    }

    pub fn apply(&mut self, intent: BoardIntent) -> bool {
        match intent {
            BoardIntent::CreateColumn => {
                self.create_column();
                true
            }
            BoardIntent::DeleteColumn(id) => self.delete_column(id),
            BoardIntent::RenameColumn(id, title) => self.rename_column(id, title),
            BoardIntent::CreateTask(column_id) => self.create_task(column_id).is_some(),
            BoardIntent::DeleteTask(id) => self.delete_task(id),
            BoardIntent::UpdateTaskContent(id, content) => self.update_task_content(id, content),
        }
    }

    pub fn on_drag_start(&mut self, item: DragItem) -> bool {
        let snapshot = match item.kind {
            DragKind::Column => self.column(item.id).cloned().map(ActiveDrag::Column),
            DragKind::Task => self.task(item.id).cloned().map(ActiveDrag::Task),
        };
        match snapshot {
            Some(active) => {
                self.active = Some(active);
                true
            }
            None => false,
        }
    }

    /// Live feedback while a task is dragged.
    ///
    /// Over another task: the dragged task joins that task's column and is
    /// moved to its index. Over a column: the dragged task joins the column
    /// without reordering. Columns being dragged are only handled on drop.
    pub fn on_drag_over(&mut self, active: DragItem, over: Option<DragItem>) -> bool {
        let Some(over) = over else {
            return false;
        };
        if active.id == over.id || active.kind != DragKind::Task {
            return false;
        }
        let Some(active_index) = self.task_index(active.id) else {
            return false;
        };

        match over.kind {
            DragKind::Task => {
                let Some(over_index) = self.task_index(over.id) else {
                    return false;
                };
                let column_id = self.tasks[over_index].column_id;
                self.tasks[active_index].move_to_column(column_id);
                array_move(&mut self.tasks, active_index, over_index)
            }
            DragKind::Column => {
                if self.column(over.id).is_none() || self.tasks[active_index].column_id == over.id {
                    return false;
                }
                self.tasks[active_index].move_to_column(over.id);
                true
            }
        }
    }

    /// Finishes a gesture. Drag tracking is always cleared; a dragged column
    /// takes the position of the column it was dropped on (or of the column
    /// owning the task it was dropped on). Tasks are already in place.
    pub fn on_drag_end(&mut self, active: DragItem, over: Option<DragItem>) -> bool {
        self.active = None;

        let Some(over) = over else {
            return false;
        };
        if active.id == over.id || active.kind != DragKind::Column {
            return false;
        }
        let target = match over.kind {
            DragKind::Column => over.id,
            DragKind::Task => match self.task(over.id) {
                Some(task) => task.column_id,
                None => return false,
            },
        };
        if target == active.id {
            return false;
        }
        match (self.column_index(active.id), self.column_index(target)) {
            (Some(from), Some(to)) => array_move(&mut self.columns, from, to),
            _ => false,
        }
    }

    pub fn on_drag_cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    fn column_index(&self, id: Id) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id)
    }

    fn task_index(&self, id: Id) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn contains_id(&self, id: Id) -> bool {
        self.columns.iter().any(|c| c.id == id) || self.tasks.iter().any(|t| t.id == id)
    }

    fn fresh_id(&self) -> Id {
        self.fresh_id_from(Id::new_v4)
    }

    fn fresh_id_from(&self, mut draw: impl FnMut() -> Id) -> Id {
        loop {
            let id = draw();
            if !self.contains_id(id) {
                return id;
            }
        }
    }
}
