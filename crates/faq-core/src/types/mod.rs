//! Identifier and location types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod list_name;
mod list_url;
mod record_id;

pub use list_name::{DEFAULT_LIST_NAME, ListName};
pub use list_url::ListUrl;
pub use record_id::RecordId;
