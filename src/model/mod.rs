pub mod config;
pub mod id;
pub mod item;
pub mod journal;
pub mod link;
pub mod note;

pub use config::*;
pub use id::*;
pub use item::*;
pub use journal::*;
pub use link::*;
pub use note::*;
