pub mod use_board;
pub mod use_edit_mode;

pub use use_board::*;
pub use use_edit_mode::*;
