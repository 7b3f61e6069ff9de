pub mod commands;
pub mod selection;
pub mod tools;

pub use commands::{History, Snapshot};
pub use selection::{duplicate_shapes, shape_at, shapes_in_rect};
pub use tools::{DragGesture, DragOutcome, DragUpdate, MIN_SHAPE_SIZE, clamp_size};
