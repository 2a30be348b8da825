//! Per-view controllers. Each one owns its collapse flags, cursor and
//! scroll position; input handlers call into them and renderers read them.

pub mod log;
pub mod notes;
pub mod tasks;

pub use log::LogViewState;
pub use notes::NoteViewState;
pub use tasks::{TaskRow, TaskViewState};
