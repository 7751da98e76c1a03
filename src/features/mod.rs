pub mod dnd;
pub mod kanban;
