// crates/domain/src/content.rs

//! Rich-text content model.
//!
//! Content arrives from the store as Portable-Text-shaped JSON: an array of
//! nodes, where each node is discriminated by `_type`. Persisted content can
//! be partially malformed (nodes without a `_type`, mark definitions of a
//! kind this version does not know), so deserialization here is deliberately
//! lenient: anything unrecognized is dropped at the node level rather than
//! failing the whole document.

use serde::Deserialize;
use serde_json::Value as Json;

// ─────────────────────────────────────────────────────────────────────────────
// Rich text input
// ─────────────────────────────────────────────────────────────────────────────

/// A rich-text field as stored.
///
/// Older documents persisted some rich-text fields as a plain string; newer
/// ones carry the node array. Both shapes deserialize, and `nodes()`
/// normalizes the string shape into a single synthetic paragraph before any
/// other processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    Plain(String),
    Nodes(Vec<Json>),
}

impl RichText {
    /// The node sequence to walk, in document order.
    ///
    /// Raw nodes whose `_type` is missing or unrecognized are filtered out
    /// here, before any rendering sees them.
    pub fn nodes(&self) -> Vec<Node> {
        match self {
            RichText::Plain(text) => vec![Node::synthetic_paragraph(text)],
            RichText::Nodes(raw) => raw.iter().filter_map(Node::from_value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RichText::Plain(text) => text.is_empty(),
            RichText::Nodes(raw) => raw.is_empty(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Nodes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum Node {
    Block(TextBlock),
    Image(ImageNode),
    List(ListObject),
    Quote(QuoteObject),
}

impl Node {
    /// Parse one raw node; `None` for anything this catalog does not know.
    pub fn from_value(value: &Json) -> Option<Node> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Wrap a plain string in a single paragraph block with one span.
    pub fn synthetic_paragraph(text: &str) -> Node {
        Node::Block(TextBlock {
            key: "simple".to_owned(),
            children: vec![Span {
                key: "text".to_owned(),
                text: text.to_owned(),
                marks: Vec::new(),
            }],
            ..TextBlock::default()
        })
    }
}

/// A paragraph/heading/quote block of spans.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlock {
    #[serde(rename = "_key")]
    pub key: String,
    pub style: BlockStyle,
    pub list_item: Option<ListKind>,
    pub level: Option<u32>,
    /// Raw mark definitions. Kept untyped so that one unknown definition
    /// does not sink the whole block; lookup happens per key via
    /// [`TextBlock::mark_def`].
    pub mark_defs: Vec<Json>,
    pub children: Vec<Span>,
}

impl TextBlock {
    /// Find the mark definition for `key`.
    ///
    /// `None` when no entry carries the key *or* when the entry's `_type` is
    /// not a known mark kind; both cases render the span unmarked.
    pub fn mark_def(&self, key: &str) -> Option<MarkDef> {
        let raw = self
            .mark_defs
            .iter()
            .find(|d| d.get("_key").and_then(Json::as_str) == Some(key))?;
        serde_json::from_value(raw.clone()).ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Blockquote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// A run of text plus the marks applied to it.
///
/// `marks` entries are either decorator names (`strong`, `em`, ...) or keys
/// into the enclosing block's `markDefs`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Span {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    pub marks: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mark definitions
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum MarkDef {
    /// Plain external link.
    Link { href: Option<String> },
    /// Internal/custom link with an open-in-new-tab flag.
    #[serde(rename_all = "camelCase")]
    CustomLink {
        href: Option<String>,
        #[serde(default)]
        open_in_new_tab: bool,
    },
    /// Weak reference to an employee document.
    EmployeeReference { employee: Option<Reference> },
    /// Weak reference to a news document, optionally carrying the
    /// denormalized slug needed to build a link.
    NewsReference { news: Option<NewsRef> },
}

/// A weak reference to another document. The target may be absent or stale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub id: Option<String>,
    #[serde(rename = "_weak")]
    pub weak: bool,
}

/// News reference payload: the id plus denormalized display fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewsRef {
    #[serde(rename = "_ref")]
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Embedded objects
// ─────────────────────────────────────────────────────────────────────────────

/// An image with its asset reference. Hotspot/crop metadata is accepted on
/// the wire but ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub asset: Option<Reference>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageNode {
    #[serde(rename = "_key")]
    pub key: String,
    pub asset: Option<Reference>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListObject {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub list_type: ListKind,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteObject {
    #[serde(rename = "_key", default)]
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}
