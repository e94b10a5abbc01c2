//! REST-backed repository implementation.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use faq_core::Result;
use faq_core::error::TransportError;
use faq_core::record::{Record, RecordFields};
use faq_core::traits::Repository;
use faq_core::types::{ListName, ListUrl, RecordId};

use crate::client::RestClient;
use crate::endpoints::{
    ItemPayload, ItemResponse, ItemsResponse, SELECT_FIELDS, item_path, items_path,
};

/// A list held by a remote list service.
#[derive(Debug, Clone)]
pub struct RestRepository {
    client: RestClient,
    list: ListName,
}

impl RestRepository {
    /// Connect to `list` on the site at `site`.
    pub fn new(site: ListUrl, list: ListName, token: Option<String>) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(site, token)?,
            list,
        })
    }

    /// Access the underlying HTTP client.
    pub fn client(&self) -> &RestClient {
        &self.client
    }
}

#[async_trait]
impl Repository for RestRepository {
    fn list_name(&self) -> &ListName {
        &self.list
    }

    #[instrument(skip(self), fields(list = %self.list))]
    async fn list(&self) -> Result<Vec<Record>> {
        let first = self.client.api_url(&items_path(&self.list));
        let mut page: ItemsResponse = self
            .client
            .get(&first, &[("$select", SELECT_FIELDS)])
            .await?;

        let mut records = Vec::with_capacity(page.value.len());
        let mut visited = HashSet::from([first]);
        loop {
            for item in page.value {
                records.push(item.into_record()?);
            }
            let Some(next) = page.next_link else {
                break;
            };
            if !self.client.is_same_origin(&next) {
                return Err(TransportError::Decode {
                    message: format!("next page link leaves the list site: {}", next),
                }
                .into());
            }
            if !visited.insert(next.clone()) {
                warn!(next = %next, "Next page link repeats, stopping");
                break;
            }
            debug!(next = %next, "Following next page");
            page = self.client.get(&next, &[] as &[(&str, &str)]).await?;
        }

        debug!(count = records.len(), "Listed items");
        Ok(records)
    }

    #[instrument(skip(self, values), fields(list = %self.list))]
    async fn create(&self, values: &RecordFields) -> Result<Record> {
        let url = self.client.api_url(&items_path(&self.list));
        let created: ItemResponse = self.client.post(&url, &ItemPayload::from(values)).await?;
        let record = created.into_record()?;

        debug!(id = %record.id, "Created item");
        Ok(record)
    }

    #[instrument(skip(self, values), fields(list = %self.list))]
    async fn update(&self, id: RecordId, values: &RecordFields) -> Result<()> {
        let url = self.client.api_url(&item_path(&self.list, id));
        self.client
            .post_tunnelled(&url, "MERGE", Some(&ItemPayload::from(values)))
            .await?;

        debug!("Updated item");
        Ok(())
    }

    #[instrument(skip(self), fields(list = %self.list))]
    async fn remove(&self, id: RecordId) -> Result<()> {
        let url = self.client.api_url(&item_path(&self.list, id));
        self.client
            .post_tunnelled::<ItemPayload<'_>>(&url, "DELETE", None)
            .await?;

        debug!("Deleted item");
        Ok(())
    }
}
