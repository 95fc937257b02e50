// crates/core/src/lib.rs
pub mod dates;
pub mod error;
pub mod format;
pub mod paths;
pub mod projections;
pub mod snapshot;

pub use error::*;
pub use snapshot::*;
