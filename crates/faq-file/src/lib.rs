//! faq-file - Filesystem-backed list repository.

mod repository;
mod store;

pub use repository::FileRepository;
pub use store::{FileStore, ListDocument};
