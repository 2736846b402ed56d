pub mod board_state;
pub mod change;
pub mod column;
pub mod controller;
pub mod drag;
pub mod history;
pub mod interpreter;
pub mod sink;
pub mod sort_key;
pub mod task;

#[cfg(test)]
pub(crate) mod test_support;

pub use board_state::{BoardState, ColumnRef};
pub use change::{ChangePayload, Transition};
pub use column::ColumnSpec;
pub use controller::BoardController;
pub use drag::{DragKind, DragLocation, DragResult, DropOptions, RawDragResult};
pub use history::HistoryManager;
pub use interpreter::interpret;
pub use sink::{ChangeSink, DiscardSink};
pub use sort_key::{compact_positions, sort_key_between, Positioned};
pub use task::{Task, TaskId};
