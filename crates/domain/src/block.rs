// crates/domain/src/block.rs

//! Page-builder block catalog.
//!
//! A page document owns an ordered sequence of blocks, each discriminated by
//! `_type` and carrying a stable `_key`. The set of block kinds is closed:
//! the composition engine dispatches by exhaustive match on [`BlockBody`],
//! and anything outside the set parses to `None` so the engine can skip it
//! without touching its neighbors.

use serde::Deserialize;
use serde_json::Value as Json;

use crate::content::{Image, RichText};

/// One parsed page-builder block.
#[derive(Debug, Clone)]
pub struct Block {
    /// Stable per-instance identity within the owning sequence. Never derived
    /// from the block's position, since editors reorder blocks.
    pub key: String,
    pub body: BlockBody,
}

impl Block {
    /// Parse one raw block from the stored sequence.
    ///
    /// `None` when the `_key` or `_type` is missing, the `_type` is not in
    /// the catalog, or the payload does not fit its declared shape. Callers
    /// skip such blocks; one malformed block never breaks the page.
    pub fn from_value(value: &Json) -> Option<Block> {
        let key = value.get("_key")?.as_str()?.to_owned();
        let body = serde_json::from_value(value.clone()).ok()?;
        Some(Block { key, body })
    }

    pub fn type_name(&self) -> &'static str {
        match self.body {
            BlockBody::Hero(_) => "hero",
            BlockBody::Cta(_) => "cta",
            BlockBody::FeatureCardsIcon(_) => "featureCardsIcon",
            BlockBody::ImageLinkCards(_) => "imageLinkCards",
            BlockBody::Faqs(_) => "faqs",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum BlockBody {
    Hero(Hero),
    Cta(Cta),
    FeatureCardsIcon(FeatureCards),
    ImageLinkCards(ImageLinkCards),
    Faqs(FaqAccordion),
}

// ─────────────────────────────────────────────────────────────────────────────
// Variant payloads
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub badge: Option<String>,
    pub title: Option<String>,
    pub rich_text: Option<RichText>,
    pub image: Option<Image>,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cta {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub rich_text: Option<RichText>,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureCards {
    pub eyebrow: Option<String>,
    pub title: Option<String>,
    pub cards: Vec<FeatureCard>,
}

/// One featured-employee card. The employee payload is denormalized by the
/// store query; a card whose reference did not resolve arrives with no
/// employee and renders nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeatureCard {
    #[serde(rename = "_key")]
    pub key: String,
    pub employee: Option<EmployeeCard>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmployeeCard {
    pub name: Option<String>,
    pub department: Option<String>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageLinkCards {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Kept raw: each card is parsed individually by the renderer so one
    /// malformed card drops only itself.
    pub cards: Vec<Json>,
}

/// A single image-link card. The `type` discriminant decides which sibling
/// fields are meaningful, so the two shapes are separate variants rather
/// than one struct of optionals.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageLinkCard {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl ImageLinkCard {
    pub fn from_value(value: &Json) -> Option<ImageLinkCard> {
        serde_json::from_value(value.clone()).ok()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CardKind {
    Custom {
        title: Option<String>,
        description: Option<String>,
        url: Option<String>,
    },
    Employee { employee: Option<EmployeeCard> },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaqAccordion {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Faq {
    #[serde(rename = "_key")]
    pub key: String,
    pub question: Option<String>,
    pub answer: Option<RichText>,
}

/// Call-to-action button shared by hero and cta blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Button {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: Option<String>,
    pub href: Option<String>,
    pub variant: Option<String>,
    pub open_in_new_tab: bool,
}
