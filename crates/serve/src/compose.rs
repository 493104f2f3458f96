// crates/serve/src/compose.rs

//! Page-builder composition.
//!
//! Takes the stored block sequence of a document and dispatches each block,
//! in array order, to the renderer for its type. Each block renders
//! independently of the others: one malformed or unknown block is skipped
//! and never aborts composition of the rest.

use domain::block::Block;
use domain::config::StoreConfig;
use serde_json::Value as Json;
use tracing::debug;

use crate::blocks::render_block;
use crate::html::escape;

/// One rendered block, keyed by the block's stable `_key` (never by
/// position, since editors reorder blocks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub key: String,
    pub html: String,
}

/// Render every recognizable block, preserving input order.
#[tracing::instrument(skip_all, fields(blocks = raw_blocks.len()))]
pub fn compose(raw_blocks: &[Json], store: &StoreConfig) -> Vec<RenderedBlock> {
    raw_blocks
        .iter()
        .filter_map(|raw| match Block::from_value(raw) {
            Some(block) => Some(RenderedBlock {
                html: render_block(&block, store),
                key: block.key,
            }),
            None => {
                debug!(
                    kind = raw.get("_type").and_then(Json::as_str).unwrap_or("<missing>"),
                    "skipping unrenderable block"
                );
                None
            }
        })
        .collect()
}

/// Compose a full page body. An empty or entirely-unrenderable sequence
/// falls back to the titled empty state rather than a blank page.
pub fn compose_page(title: Option<&str>, raw_blocks: &[Json], store: &StoreConfig) -> String {
    let rendered = compose(raw_blocks, store);
    if rendered.is_empty() {
        return format!(
            "<div class=\"page-empty\"><h1>{}</h1>\
             <p>This page has no content blocks yet.</p></div>",
            escape(title.unwrap_or("Untitled"))
        );
    }
    rendered
        .into_iter()
        .map(|block| block.html)
        .collect::<Vec<_>>()
        .join("\n")
}
