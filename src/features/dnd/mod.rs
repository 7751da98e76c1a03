pub mod context;
pub mod sensor;

pub use context::{provide_dnd_context, use_dnd, DndHandle, ID_ATTR, KIND_ATTR};
pub use sensor::{DragEvent, DragGesture, OverlayFrame, Point, PointerSensor, Rect};
