//! List record types.
//!
//! A [`Record`] is what the repository returns; [`RecordFields`] is the
//! fixed field set sent on create and update, and the draft an
//! [`EditSession`](crate::EditSession) holds.

mod field;
mod types;

pub use field::Field;
pub use types::{Record, RecordFields};
