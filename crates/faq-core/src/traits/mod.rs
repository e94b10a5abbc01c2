//! Capabilities the core depends on but does not implement.

mod confirm;
mod repository;

pub use confirm::{AutoConfirm, Confirm};
pub use repository::Repository;
