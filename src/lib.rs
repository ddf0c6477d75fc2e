// src/lib.rs
//! menu2gist library — mirrors a Notion-hosted daily menu into a gist.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `PipelineConfig`, `CommandLineInput`
//! - **Domain model** — `MenuPage`, `BlockRecord`, `RichTextNode`, etc.
//! - **Domain types** — `BlockId`, `BlockColor`, `GistToken`, `GistId`
//! - **API client** — `NotionSiteClient`, `PageFetcher`, record-map parsing
//! - **Formatting** — `extract_text`, `Category`, `assemble`
//! - **Output** — `layout_snippet`, `GistPublisher`

mod api;
mod config;
mod constants;
mod error;
mod formatting;
mod model;
mod output;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, GistTarget, PipelineConfig};
pub use crate::constants::{
    MENU_END_MARKER_ID, MENU_HOST, MENU_PAGE_ID, REST_DAY_NOTICE, REST_WEEKDAY, WEB_MENU_FOOTER,
};

// --- Domain Model ---
pub use crate::model::{
    BlockRecord, BlockTable, BlockValue, DateRun, MenuPage, RichTextNode, StyleRun,
};

// --- Domain Types ---
pub use crate::types::{BlockColor, BlockId, GistId, GistToken};

// --- API Client ---
pub use crate::api::{
    requests::{LoadPageChunkRequest, SyncRecordValuesRequest},
    responses::{parse_record_map, RecordMap, RecordMapResponse},
    NotionSiteClient, PageFetcher,
};

// --- Formatting ---
pub use crate::formatting::{assemble, extract_text, Category, MenuReport};

// --- Output ---
pub use crate::output::{layout_snippet, print_report, GistPublisher, SnippetDocument};

// --- Pipeline Traits ---
pub use crate::pipeline::{MenuSource, ReportComposer, ReportDelivery};
