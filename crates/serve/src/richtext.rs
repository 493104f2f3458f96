// crates/serve/src/richtext.rs

//! Rich-text rendering.
//!
//! A pure, state-free tree walk over the node sequence in document order.
//! String inputs were already normalized and untyped nodes filtered by
//! `RichText::nodes()`; this module handles grouping consecutive list
//! blocks, block-style dispatch, embedded objects, and span marks.

use domain::config::StoreConfig;
use domain::content::{
    BlockStyle, Image, ImageNode, ListKind, ListObject, MarkDef, Node, QuoteObject, RichText,
    Span, TextBlock,
};

use crate::html::{escape, escape_attr, img_tag};
use crate::resolver::{link_or_indicator, resolve_employee, resolve_news};

/// Render a rich-text field to HTML.
pub fn render_rich_text(rich_text: &RichText, store: &StoreConfig) -> String {
    render_nodes(&rich_text.nodes(), store)
}

fn render_nodes(nodes: &[Node], store: &StoreConfig) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < nodes.len() {
        // Consecutive list-item blocks group into one list element.
        if as_list_item(&nodes[i]).is_some() {
            let start = i;
            while i < nodes.len() && as_list_item(&nodes[i]).is_some() {
                i += 1;
            }
            let items: Vec<&TextBlock> = nodes[start..i]
                .iter()
                .filter_map(as_list_item)
                .collect();
            out.push_str(&render_list_run(&items, 1));
        } else {
            out.push_str(&render_node(&nodes[i], store));
            i += 1;
        }
    }
    out
}

fn as_list_item(node: &Node) -> Option<&TextBlock> {
    match node {
        Node::Block(b) if b.list_item.is_some() => Some(b),
        _ => None,
    }
}

fn item_level(block: &TextBlock) -> u32 {
    block.level.unwrap_or(1).max(1)
}

/// Render one run of list blocks at `level`. Deeper items recurse into a
/// nested list before siblings continue; a kind change at the same level
/// closes the current list and opens a new one.
fn render_list_run(items: &[&TextBlock], level: u32) -> String {
    let Some(first) = items.first() else {
        return String::new();
    };
    let kind = first.list_item.unwrap_or(ListKind::Bullet);
    let tag = list_tag(kind);

    let mut out = format!("<{tag}>");
    let mut i = 0;
    while i < items.len() {
        let block = items[i];
        if item_level(block) > level {
            let start = i;
            while i < items.len() && item_level(items[i]) > level {
                i += 1;
            }
            out.push_str("<li>");
            out.push_str(&render_list_run(&items[start..i], level + 1));
            out.push_str("</li>");
        } else if block.list_item.unwrap_or(ListKind::Bullet) != kind {
            // Same level, different kind: finish this list and start over.
            out.push_str(&format!("</{tag}>"));
            out.push_str(&render_list_run(&items[i..], level));
            return out;
        } else {
            out.push_str(&format!("<li>{}</li>", render_children(block)));
            i += 1;
        }
    }
    out.push_str(&format!("</{tag}>"));
    out
}

fn list_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => "ul",
        ListKind::Number => "ol",
    }
}

fn render_node(node: &Node, store: &StoreConfig) -> String {
    match node {
        Node::Block(block) => render_block_node(block),
        Node::Image(image) => render_image_node(image, store),
        Node::List(list) => render_list_object(list),
        Node::Quote(quote) => render_quote_object(quote),
    }
}

fn render_block_node(block: &TextBlock) -> String {
    let children = render_children(block);
    let tag = match block.style {
        BlockStyle::Normal => "p",
        BlockStyle::H1 => "h1",
        BlockStyle::H2 => "h2",
        BlockStyle::H3 => "h3",
        BlockStyle::H4 => "h4",
        BlockStyle::H5 => "h5",
        BlockStyle::H6 => "h6",
        BlockStyle::Blockquote => "blockquote",
    };
    format!("<{tag}>{children}</{tag}>")
}

fn render_children(block: &TextBlock) -> String {
    block
        .children
        .iter()
        .map(|span| render_span(span, block))
        .collect()
}

/// Render one span, applying its marks in declaration order.
fn render_span(span: &Span, block: &TextBlock) -> String {
    let mut html = escape(&span.text);
    for mark in &span.marks {
        html = apply_mark(mark, html, block);
    }
    html
}

fn apply_mark(mark: &str, inner: String, block: &TextBlock) -> String {
    match mark {
        "strong" => format!("<strong>{inner}</strong>"),
        "em" => format!("<em>{inner}</em>"),
        "code" => format!("<code>{inner}</code>"),
        "underline" => format!("<u>{inner}</u>"),
        "strike-through" => format!("<del>{inner}</del>"),
        key => match block.mark_def(key) {
            // A key with no matching definition renders the text unmarked.
            // Distinct from a found-but-broken reference, handled below.
            None => inner,
            Some(def) => apply_mark_def(&def, inner),
        },
    }
}

fn apply_mark_def(def: &MarkDef, inner: String) -> String {
    match def {
        MarkDef::Link { href: Some(href) } => {
            format!("<a href=\"{}\">{inner}</a>", escape_attr(href))
        }
        MarkDef::Link { href: None } => inner,
        MarkDef::CustomLink {
            href: Some(href),
            open_in_new_tab,
        } => {
            let target = if *open_in_new_tab {
                " target=\"_blank\" rel=\"noopener noreferrer\""
            } else {
                ""
            };
            format!("<a href=\"{}\"{target}>{inner}</a>", escape_attr(href))
        }
        MarkDef::CustomLink { href: None, .. } => inner,
        MarkDef::EmployeeReference { employee } => {
            link_or_indicator(&resolve_employee(employee.as_ref()), &inner)
        }
        MarkDef::NewsReference { news } => {
            link_or_indicator(&resolve_news(news.as_ref()), &inner)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Embedded objects
// ─────────────────────────────────────────────────────────────────────────────

fn render_image_node(node: &ImageNode, store: &StoreConfig) -> String {
    let image = Image {
        asset: node.asset.clone(),
        alt: node.alt.clone(),
    };
    let img = img_tag(store, &image, "rich-text-image");
    if img.is_empty() {
        return String::new();
    }
    match node.caption.as_deref() {
        Some(caption) => format!(
            "<figure>{img}<figcaption>{}</figcaption></figure>",
            escape(caption)
        ),
        None => format!("<figure>{img}</figure>"),
    }
}

fn render_list_object(list: &ListObject) -> String {
    let tag = list_tag(list.list_type);
    let items: String = list
        .items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!("<{tag}>{items}</{tag}>")
}

fn render_quote_object(quote: &QuoteObject) -> String {
    let mut out = format!("<blockquote><p>{}</p>", escape(&quote.text));
    if let Some(attribution) = quote.attribution.as_deref() {
        out.push_str(&format!("<footer>— {}", escape(attribution)));
        if let Some(context) = quote.context.as_deref() {
            out.push_str(&format!(" <cite>{}</cite>", escape(context)));
        }
        out.push_str("</footer>");
    }
    out.push_str("</blockquote>");
    out
}
