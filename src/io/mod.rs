pub mod journal_io;
pub mod lock;
pub mod logging;
pub mod state;
pub mod watcher;
pub mod worker;
