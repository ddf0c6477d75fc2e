// src/api/mod.rs
//! Hosted-page API interaction — the ability to read the menu page.
//!
//! The page is served by notion.site's private v3 endpoints, not the
//! public integration API: plain POSTs with a browser-shaped cookie,
//! answered by a `recordMap` of block records. I/O lives in `client`,
//! the wire shapes in `requests`/`responses`, and the merge into a
//! block table in `fetcher`.

pub mod client;
pub mod fetcher;
pub mod requests;
pub mod responses;

pub use client::NotionSiteClient;
pub use fetcher::PageFetcher;
