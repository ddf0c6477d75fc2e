// src/api/requests.rs
//! Typed request bodies for the v3 endpoints.
//!
//! Both bodies are fixed shapes dictated by the hosted-page service;
//! only the target block id varies.

use crate::types::BlockId;
use serde::Serialize;

/// Body of a `syncRecordValues` call: read one block record.
#[derive(Debug, Serialize)]
pub struct SyncRecordValuesRequest {
    requests: Vec<RecordRequest>,
}

#[derive(Debug, Serialize)]
struct RecordRequest {
    pointer: RecordPointer,
    version: i64,
}

#[derive(Debug, Serialize)]
struct RecordPointer {
    table: &'static str,
    id: BlockId,
}

impl SyncRecordValuesRequest {
    /// Request the current version of one block record.
    pub fn for_block(id: &BlockId) -> Self {
        Self {
            requests: vec![RecordRequest {
                pointer: RecordPointer {
                    table: "block",
                    id: id.clone(),
                },
                version: -1,
            }],
        }
    }
}

/// Body of a `loadCachedPageChunk` call: read one chunk of a page's
/// descendant records.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPageChunkRequest {
    page: PageRef,
    limit: u32,
    cursor: ChunkCursor,
    chunk_number: u32,
    vertical_columns: bool,
}

#[derive(Debug, Serialize)]
struct PageRef {
    id: BlockId,
}

#[derive(Debug, Serialize)]
struct ChunkCursor {
    stack: Vec<serde_json::Value>,
}

impl LoadPageChunkRequest {
    /// Request the first chunk of a page, up to `limit` records.
    pub fn first_chunk(page: &BlockId, limit: u32) -> Self {
        Self {
            page: PageRef { id: page.clone() },
            limit,
            cursor: ChunkCursor { stack: Vec::new() },
            chunk_number: 0,
            vertical_columns: false,
        }
    }
}
