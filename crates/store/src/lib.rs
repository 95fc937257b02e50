// crates/store/src/lib.rs
pub mod store;
pub mod watcher;

pub use store::*;
pub use watcher::*;
