pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod outline;
pub mod parse;
pub mod tui;
pub mod util;
