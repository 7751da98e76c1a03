pub mod reorder;

pub use reorder::*;
