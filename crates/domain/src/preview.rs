// crates/domain/src/preview.rs

//! Editorial preview projections.
//!
//! Each document/block type projects to a `{title, subtitle, media}` summary
//! shown in editorial tooling. These are never used by the render layer.
//! Missing fields fall back to fixed placeholder strings, and each
//! projection works directly on the raw stored JSON, since previews must
//! show something even for documents that would not parse into the typed
//! model.

use serde_json::Value as Json;

/// Max characters shown for a URL in a subtitle.
pub const URL_PREVIEW_LEN: usize = 30;
/// Max characters shown for descriptions and quote text.
pub const TEXT_PREVIEW_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub title: String,
    pub subtitle: Option<String>,
    /// Asset reference of the preview image, when one exists.
    pub media: Option<String>,
}

/// Truncate to `max` characters, appending an ellipsis. A string of exactly
/// `max` characters is returned untouched.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_owned()
    } else {
        let mut out: String = s.chars().take(max).collect();
        out.push('…');
        out
    }
}

fn field<'a>(doc: &'a Json, name: &str) -> Option<&'a str> {
    doc.get(name).and_then(Json::as_str).filter(|s| !s.is_empty())
}

fn media_ref(doc: &Json, name: &str) -> Option<String> {
    doc.get(name)?
        .get("asset")?
        .get("_ref")?
        .as_str()
        .map(str::to_owned)
}

fn count(doc: &Json, name: &str) -> usize {
    doc.get(name).and_then(Json::as_array).map_or(0, Vec::len)
}

// ─────────────────────────────────────────────────────────────────────────────
// Document previews
// ─────────────────────────────────────────────────────────────────────────────

pub fn employee_preview(doc: &Json) -> Preview {
    let severed = doc
        .get("isSevered")
        .and_then(Json::as_bool)
        .unwrap_or(false);
    let severed_info = if severed { "Severed" } else { "Unsevered" };
    let dept_info = field(doc, "department")
        .map(str::to_uppercase)
        .unwrap_or_else(|| "Unassigned".to_owned());
    let status_info = field(doc, "status").unwrap_or("active");

    let mut subtitle = format!("{severed_info} | {dept_info} | {status_info}");
    if let Some(innie) = field(doc, "innieName") {
        subtitle.push_str(&format!(" | Innie: {innie}"));
    }
    if let Some(id) = field(doc, "employeeId") {
        subtitle.push_str(&format!(" | {id}"));
    }

    Preview {
        title: field(doc, "name").unwrap_or("Unnamed Employee").to_owned(),
        subtitle: Some(subtitle),
        media: media_ref(doc, "image"),
    }
}

pub fn event_preview(doc: &Json) -> Preview {
    let type_info = field(doc, "type").unwrap_or("Event");
    let dept_info = field(doc, "department")
        .map(str::to_uppercase)
        .unwrap_or_else(|| "All".to_owned());
    let date_info = field(doc, "date").unwrap_or("TBD");
    let status_info = field(doc, "status").unwrap_or("scheduled");

    Preview {
        title: field(doc, "title").unwrap_or("Untitled Event").to_owned(),
        subtitle: Some(format!(
            "{type_info} | {dept_info} | {date_info} | {status_info}"
        )),
        media: media_ref(doc, "image"),
    }
}

pub fn news_preview(doc: &Json) -> Preview {
    let slug = doc
        .get("slug")
        .and_then(|s| s.as_str().or_else(|| s.get("current").and_then(Json::as_str)))
        .unwrap_or("no-slug");
    let blocks = count(doc, "pageBuilder");

    Preview {
        title: field(doc, "title").unwrap_or("Untitled Page").to_owned(),
        subtitle: Some(format!("{blocks} blocks | {}", truncate(slug, URL_PREVIEW_LEN))),
        media: media_ref(doc, "image"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block and object previews
// ─────────────────────────────────────────────────────────────────────────────

pub fn image_link_cards_preview(block: &Json) -> Preview {
    Preview {
        title: field(block, "title").unwrap_or("Image Link Cards").to_owned(),
        subtitle: Some(format!("{} cards", count(block, "cards"))),
        media: None,
    }
}

pub fn feature_cards_preview(block: &Json) -> Preview {
    let cards = count(block, "cards");
    let plural = if cards == 1 { "" } else { "s" };
    Preview {
        title: field(block, "title").unwrap_or("Featured Employees").to_owned(),
        subtitle: Some(format!("{cards} employee{plural} featured")),
        media: None,
    }
}

pub fn quote_preview(object: &Json) -> Preview {
    let text = field(object, "text").unwrap_or("");
    let attribution = field(object, "attribution").unwrap_or("Unknown");
    Preview {
        title: truncate(text, TEXT_PREVIEW_LEN),
        subtitle: Some(format!("— {attribution}")),
        media: None,
    }
}

pub fn list_preview(object: &Json) -> Preview {
    let marker = match field(object, "listType") {
        Some("number") => "1.",
        _ => "•",
    };
    let first = object
        .get("items")
        .and_then(Json::as_array)
        .and_then(|items| items.first())
        .and_then(Json::as_str)
        .unwrap_or("Empty List");
    Preview {
        title: format!("{marker} {}", truncate(first, TEXT_PREVIEW_LEN)),
        subtitle: Some(format!("{} items", count(object, "items"))),
        media: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncation_thresholds_are_exact() {
        let fifty: String = "x".repeat(50);
        let fifty_one: String = "x".repeat(51);
        assert_eq!(truncate(&fifty, TEXT_PREVIEW_LEN), fifty);
        assert_eq!(
            truncate(&fifty_one, TEXT_PREVIEW_LEN),
            format!("{fifty}…")
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let s: String = "é".repeat(31);
        let truncated = truncate(&s, URL_PREVIEW_LEN);
        assert_eq!(truncated.chars().count(), 31); // 30 kept + ellipsis
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn employee_preview_falls_back_to_placeholders() {
        let p = employee_preview(&json!({}));
        assert_eq!(p.title, "Unnamed Employee");
        assert_eq!(
            p.subtitle.as_deref(),
            Some("Unsevered | Unassigned | active")
        );
        assert!(p.media.is_none());
    }

    #[test]
    fn employee_preview_includes_innie_when_present() {
        let p = employee_preview(&json!({
            "name": "Mark S.",
            "isSevered": true,
            "department": "mdr",
            "innieName": "Mark",
            "employeeId": "0-112",
            "image": {"asset": {"_ref": "image-m-1x1-png"}},
        }));
        assert_eq!(
            p.subtitle.as_deref(),
            Some("Severed | MDR | active | Innie: Mark | 0-112")
        );
        assert_eq!(p.media.as_deref(), Some("image-m-1x1-png"));
    }

    #[test]
    fn feature_cards_preview_pluralizes() {
        let one = feature_cards_preview(&json!({"cards": [{}]}));
        assert_eq!(one.subtitle.as_deref(), Some("1 employee featured"));
        let three = feature_cards_preview(&json!({"cards": [{}, {}, {}]}));
        assert_eq!(three.subtitle.as_deref(), Some("3 employees featured"));
    }

    #[test]
    fn quote_preview_truncates_long_text() {
        let text = "The remembered man does not decay, he is kept whole in memory forever";
        let p = quote_preview(&json!({"text": text, "attribution": "Kier Eagan"}));
        assert_eq!(p.title.chars().count(), 51);
        assert!(p.title.ends_with('…'));
        assert_eq!(p.subtitle.as_deref(), Some("— Kier Eagan"));
    }

    #[test]
    fn list_preview_handles_empty() {
        let p = list_preview(&json!({"listType": "bullet", "items": []}));
        assert_eq!(p.title, "• Empty List");
        assert_eq!(p.subtitle.as_deref(), Some("0 items"));
    }
}
