// src/api/fetcher.rs
//! Fetches the menu page: the root record plus one chunk of children.

use super::client::NotionSiteClient;
use super::requests::{LoadPageChunkRequest, SyncRecordValuesRequest};
use super::responses::parse_record_map;
use crate::error::AppError;
use crate::model::{BlockRecord, BlockTable, MenuPage};
use crate::types::BlockId;

/// Reads one menu page through a [`NotionSiteClient`].
pub struct PageFetcher<'a> {
    client: &'a NotionSiteClient,
    page_id: &'a BlockId,
    chunk_limit: u32,
}

impl<'a> PageFetcher<'a> {
    pub fn new(client: &'a NotionSiteClient, page_id: &'a BlockId, chunk_limit: u32) -> Self {
        Self {
            client,
            page_id,
            chunk_limit,
        }
    }

    /// Fetches the page root record: its title, icon, cover, and the
    /// ordered list of child block ids.
    pub fn fetch_root_block(&self) -> Result<BlockRecord, AppError> {
        let body = SyncRecordValuesRequest::for_block(self.page_id);
        let text = self.client.post("syncRecordValues", &body)?;
        let mut map = parse_record_map(&text)?;

        let root = map.block.shift_remove(self.page_id).ok_or_else(|| {
            AppError::MalformedResponse(format!(
                "record map does not contain the page root {}",
                self.page_id
            ))
        })?;

        if let Some(value) = &root.value {
            log::debug!("Fetched page root record {}", value.id);
        }
        Ok(root)
    }

    /// Fetches one chunk of the page's descendant records into a lookup
    /// table.
    ///
    /// Only the first chunk is requested; a page with more descendants
    /// than the chunk limit leaves the rest out of the table, and their
    /// menu lines render empty.
    pub fn fetch_child_blocks(&self) -> Result<BlockTable, AppError> {
        let body = LoadPageChunkRequest::first_chunk(self.page_id, self.chunk_limit);
        let text = self.client.post("loadCachedPageChunk", &body)?;
        let map = parse_record_map(&text)?;

        log::info!("Fetched {} block records", map.block.len());
        Ok(map.block)
    }

    /// Fetches the complete page view for one run.
    pub fn fetch_page(&self) -> Result<MenuPage, AppError> {
        let blocks = self.fetch_child_blocks()?;
        let root = self.fetch_root_block()?;
        Ok(MenuPage { root, blocks })
    }
}
