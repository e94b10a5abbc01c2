//! faq-rest - REST-backed list repository.
//!
//! Talks to a SharePoint-style list service: items live under
//! `<site>/_api/web/lists/getbytitle('<list>')/items`.

mod client;
mod endpoints;
mod repository;

pub use client::RestClient;
pub use repository::RestRepository;
