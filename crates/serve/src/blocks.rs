// crates/serve/src/blocks.rs

//! Per-variant block renderers.
//!
//! Each renderer produces one `<section>` and owns its own fallback rules:
//! a missing optional field omits its sub-element, a card without its
//! required payload renders nothing. Renderers share no state with each
//! other.

use domain::block::{
    Block, BlockBody, Button, CardKind, Cta, Faq, FaqAccordion, FeatureCard, FeatureCards,
    Hero, ImageLinkCard, ImageLinkCards,
};
use domain::config::StoreConfig;
use tracing::debug;

use crate::html::{escape, escape_attr, img_tag};
use crate::richtext::render_rich_text;

/// Dispatch one parsed block to its renderer. Total over the catalog.
pub fn render_block(block: &Block, store: &StoreConfig) -> String {
    match &block.body {
        BlockBody::Hero(hero) => render_hero(hero, store),
        BlockBody::Cta(cta) => render_cta(cta, store),
        BlockBody::FeatureCardsIcon(cards) => render_feature_cards(cards, store),
        BlockBody::ImageLinkCards(cards) => render_image_link_cards(cards, store),
        BlockBody::Faqs(faqs) => render_faqs(faqs, store),
    }
}

fn render_hero(hero: &Hero, store: &StoreConfig) -> String {
    let mut out = String::from("<section class=\"hero\">");
    if let Some(badge) = hero.badge.as_deref() {
        out.push_str(&format!("<span class=\"badge\">{}</span>", escape(badge)));
    }
    if let Some(title) = hero.title.as_deref() {
        out.push_str(&format!("<h1>{}</h1>", escape(title)));
    }
    if let Some(rich_text) = &hero.rich_text {
        out.push_str(&render_rich_text(rich_text, store));
    }
    if let Some(image) = &hero.image {
        out.push_str(&img_tag(store, image, "hero-image"));
    }
    out.push_str(&render_buttons(&hero.buttons));
    out.push_str("</section>");
    out
}

fn render_cta(cta: &Cta, store: &StoreConfig) -> String {
    let mut out = String::from("<section class=\"cta\">");
    if let Some(eyebrow) = cta.eyebrow.as_deref() {
        out.push_str(&format!("<span class=\"badge\">{}</span>", escape(eyebrow)));
    }
    if let Some(title) = cta.title.as_deref() {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(rich_text) = &cta.rich_text {
        out.push_str(&render_rich_text(rich_text, store));
    }
    out.push_str(&render_buttons(&cta.buttons));
    out.push_str("</section>");
    out
}

fn render_buttons(buttons: &[Button]) -> String {
    if buttons.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"buttons\">");
    for button in buttons {
        let (Some(text), Some(href)) = (button.text.as_deref(), button.href.as_deref()) else {
            continue;
        };
        let target = if button.open_in_new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        let variant = button.variant.as_deref().unwrap_or("default");
        out.push_str(&format!(
            "<a class=\"button button-{}\" href=\"{}\"{target}>{}</a>",
            escape_attr(variant),
            escape_attr(href),
            escape(text)
        ));
    }
    out.push_str("</div>");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature cards
// ─────────────────────────────────────────────────────────────────────────────

fn render_feature_cards(block: &FeatureCards, store: &StoreConfig) -> String {
    let mut out = String::from("<section class=\"feature-cards\">");
    if let Some(eyebrow) = block.eyebrow.as_deref() {
        out.push_str(&format!("<span class=\"eyebrow\">{}</span>", escape(eyebrow)));
    }
    if let Some(title) = block.title.as_deref() {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    out.push_str("<div class=\"grid\">");
    for card in &block.cards {
        out.push_str(&render_feature_card(card, store));
    }
    out.push_str("</div></section>");
    out
}

fn render_feature_card(card: &FeatureCard, store: &StoreConfig) -> String {
    // A card whose employee reference did not resolve renders nothing.
    let Some(employee) = &card.employee else {
        debug!(key = %card.key, "feature card without an employee");
        return String::new();
    };
    let mut out = String::from("<div class=\"feature-card\">");
    if let Some(image) = &employee.image {
        out.push_str(&img_tag(store, image, "avatar"));
    }
    let name = employee.name.as_deref().unwrap_or("Employee");
    out.push_str(&format!("<h3>{}</h3>", escape(name)));
    if let Some(department) = employee.department.as_deref() {
        out.push_str(&format!("<p class=\"department\">{}</p>", escape(department)));
    }
    if let Some(highlight) = card.highlight.as_deref() {
        out.push_str(&format!("<p class=\"highlight\">{}</p>", escape(highlight)));
    }
    out.push_str("</div>");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Image-link cards
// ─────────────────────────────────────────────────────────────────────────────

fn render_image_link_cards(block: &ImageLinkCards, store: &StoreConfig) -> String {
    let mut out = String::from("<section class=\"image-link-cards\">");
    if let Some(title) = block.title.as_deref() {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(description) = block.description.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(description)));
    }
    out.push_str("<div class=\"grid\">");
    for raw in &block.cards {
        match ImageLinkCard::from_value(raw) {
            Some(card) => out.push_str(&render_image_link_card(&card, store)),
            None => debug!("skipping malformed image-link card"),
        }
    }
    out.push_str("</div></section>");
    out
}

fn render_image_link_card(card: &ImageLinkCard, store: &StoreConfig) -> String {
    let (title, description, href) = match &card.kind {
        CardKind::Custom {
            title,
            description,
            url,
        } => {
            // The custom shape requires its own title.
            let Some(title) = title.as_deref() else {
                return String::new();
            };
            (
                title.to_owned(),
                description.clone(),
                url.clone().unwrap_or_else(|| "#".to_owned()),
            )
        }
        CardKind::Employee { employee } => {
            let Some(employee) = employee else {
                return String::new();
            };
            let name = employee.name.clone().unwrap_or_else(|| "Employee".to_owned());
            (name, employee.department.clone(), "#".to_owned())
        }
    };

    let mut out = format!("<a class=\"cta-card\" href=\"{}\">", escape_attr(&href));
    if let Some(image) = &card.image {
        out.push_str(&img_tag(store, image, "card-image"));
    }
    out.push_str(&format!("<h3>{}</h3>", escape(&title)));
    if let Some(description) = description.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(description)));
    }
    out.push_str("</a>");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// FAQ accordion
// ─────────────────────────────────────────────────────────────────────────────

fn render_faqs(block: &FaqAccordion, store: &StoreConfig) -> String {
    let mut out = String::from("<section class=\"faqs\">");
    if let Some(title) = block.title.as_deref() {
        out.push_str(&format!("<h2>{}</h2>", escape(title)));
    }
    if let Some(subtitle) = block.subtitle.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(subtitle)));
    }
    for faq in &block.faqs {
        out.push_str(&render_faq(faq, store));
    }
    out.push_str("</section>");
    out
}

fn render_faq(faq: &Faq, store: &StoreConfig) -> String {
    let Some(question) = faq.question.as_deref() else {
        return String::new();
    };
    let answer = faq
        .answer
        .as_ref()
        .map(|rt| render_rich_text(rt, store))
        .unwrap_or_default();
    format!(
        "<details><summary>{}</summary>{answer}</details>",
        escape(question)
    )
}
