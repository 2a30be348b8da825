pub mod app;
pub mod input;
pub mod render;
pub mod state;
pub mod theme;

pub use app::run;
