//! Repository selection for CLI use.

use anyhow::{Context, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use tracing::debug;

use faq_core::record::{Record, RecordFields};
use faq_core::traits::Repository;
use faq_core::types::{ListName, ListUrl, RecordId};
use faq_file::FileRepository;
use faq_rest::RestRepository;

use crate::cli::ListArgs;

/// Repository wrapper for CLI use.
#[derive(Debug)]
pub enum CliRepository {
    File(FileRepository),
    Rest(RestRepository),
}

impl CliRepository {
    /// Open the list named by the command-line arguments.
    pub fn open(args: &ListArgs) -> Result<Self> {
        let url = match &args.list_url {
            Some(url) => ListUrl::new(url).context("Invalid list URL")?,
            None => default_list_url()?,
        };
        let list = ListName::new(&args.list).context("Invalid list name")?;

        debug!(url = %url, list = %list, "Opening list");

        if url.is_local() {
            let repo = FileRepository::from_url(&url, list).context("Failed to open local list")?;
            Ok(CliRepository::File(repo))
        } else {
            let repo = RestRepository::new(url, list, args.token.clone())
                .context("Failed to open remote list")?;
            Ok(CliRepository::Rest(repo))
        }
    }
}

/// The platform data directory, used when no list URL is given.
fn default_list_url() -> Result<ListUrl> {
    let dirs = ProjectDirs::from("", "", "faq").context("Could not determine data directory")?;
    ListUrl::from_directory(dirs.data_dir()).context("Invalid data directory")
}

#[async_trait]
impl Repository for CliRepository {
    fn list_name(&self) -> &ListName {
        match self {
            CliRepository::File(repo) => repo.list_name(),
            CliRepository::Rest(repo) => repo.list_name(),
        }
    }

    async fn list(&self) -> faq_core::Result<Vec<Record>> {
        match self {
            CliRepository::File(repo) => repo.list().await,
            CliRepository::Rest(repo) => repo.list().await,
        }
    }

    async fn create(&self, values: &RecordFields) -> faq_core::Result<Record> {
        match self {
            CliRepository::File(repo) => repo.create(values).await,
            CliRepository::Rest(repo) => repo.create(values).await,
        }
    }

    async fn update(&self, id: RecordId, values: &RecordFields) -> faq_core::Result<()> {
        match self {
            CliRepository::File(repo) => repo.update(id, values).await,
            CliRepository::Rest(repo) => repo.update(id, values).await,
        }
    }

    async fn remove(&self, id: RecordId) -> faq_core::Result<()> {
        match self {
            CliRepository::File(repo) => repo.remove(id).await,
            CliRepository::Rest(repo) => repo.remove(id).await,
        }
    }
}
