pub mod board;
pub mod column;
pub mod drag_overlay;
pub mod task_card;

pub use board::KanbanBoard;
pub use column::ColumnContainer;
pub use drag_overlay::DragOverlay;
pub use task_card::TaskCard;
