pub mod app;
pub mod core;
pub mod features;

pub use crate::app::App;
pub use crate::core::config::BoardConfig;
pub use crate::core::models::{Board, BoardIntent, Column, DragItem, DragKind, Id, Task};
