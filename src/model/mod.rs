// src/model/mod.rs
//! Domain model for the hosted page's record map.
//!
//! Everything here is a read-only view over what one run fetched. Records
//! are never mutated after the fetch stage; absence of a nested attribute
//! is data (an untitled block, an uncolored block), not an error.

mod block;
mod rich_text;

pub use block::{BlockFormat, BlockProperties, BlockRecord, BlockTable, BlockValue};
pub use rich_text::{DateRun, RichTextNode, StyleRun};

/// One fetched menu page: the root record plus the child block table.
///
/// The table is built once by the fetcher and passed by reference from
/// there on — no process-wide lookup state.
#[derive(Debug, Clone)]
pub struct MenuPage {
    pub root: BlockRecord,
    pub blocks: BlockTable,
}
