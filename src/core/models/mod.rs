pub mod board;
pub mod column;
pub mod drag;
pub mod id;
pub mod intent;
pub mod task;

pub use board::Board;
pub use column::Column;
pub use drag::{ActiveDrag, DragItem, DragKind};
pub use id::Id;
pub use intent::BoardIntent;
pub use task::Task;
