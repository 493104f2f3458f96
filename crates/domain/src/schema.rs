// crates/domain/src/schema.rs

//! Editorial-time validation.
//!
//! These checks run when an editor saves a document, mirroring the studio's
//! schema rules. They never run against already-stored content: the render
//! layer tolerates whatever is persisted and degrades per node instead.
//! Failures carry the human-readable message shown to the editor.

use serde_json::Value as Json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

fn str_field<'a>(doc: &'a Json, field: &str) -> Option<&'a str> {
    doc.get(field).and_then(Json::as_str).filter(|s| !s.trim().is_empty())
}

fn slug_value<'a>(doc: &'a Json) -> Option<&'a str> {
    match doc.get("slug") {
        Some(Json::String(s)) => Some(s.as_str()),
        Some(obj) => obj.get("current").and_then(Json::as_str),
        None => None,
    }
    .filter(|s| !s.is_empty())
}

fn require_str(doc: &Json, field: &str, message: &str, out: &mut Vec<ValidationError>) {
    if str_field(doc, field).is_none() {
        out.push(ValidationError::new(field, message));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
pub fn validate_employee(doc: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require_str(doc, "name", "Employee name is required", &mut errors);
    if slug_value(doc).is_none() {
        errors.push(ValidationError::new("slug", "Slug is required"));
    }
    require_str(doc, "department", "Department is required", &mut errors);
    require_str(doc, "employeeId", "Employee ID is required", &mut errors);
    errors
}

#[tracing::instrument(skip_all)]
pub fn validate_news(doc: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require_str(doc, "title", "A news title is required", &mut errors);
    match slug_value(doc) {
        None => errors.push(ValidationError::new("slug", "A URL slug is required")),
        Some(slug) if !slug.starts_with("/news/") => errors.push(ValidationError::new(
            "slug",
            "URL slug must start with \"/news/\"",
        )),
        Some(_) => {}
    }
    require_str(doc, "department", "Department is required", &mut errors);
    require_str(doc, "priority", "Priority level is required", &mut errors);
    if doc.get("image").and_then(|i| i.get("asset")).is_none() {
        errors.push(ValidationError::new("image", "An image is required"));
    }
    errors
}

#[tracing::instrument(skip_all)]
pub fn validate_event(doc: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require_str(doc, "title", "Event title is required", &mut errors);
    require_str(doc, "type", "Event type is required", &mut errors);
    require_str(doc, "department", "Department is required", &mut errors);
    require_str(doc, "date", "Event date is required", &mut errors);
    require_str(doc, "location", "Location is required", &mut errors);
    errors
}

#[tracing::instrument(skip_all)]
pub fn validate_knowledge_entry(doc: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    require_str(doc, "title", "Title is required", &mut errors);
    if slug_value(doc).is_none() {
        errors.push(ValidationError::new("slug", "Slug is required"));
    }
    require_str(doc, "category", "Category is required", &mut errors);
    errors
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocks and cards
// ─────────────────────────────────────────────────────────────────────────────

/// Validate one page-builder block by its discriminant. Unknown block types
/// are an editorial error here (the studio should never save one) even
/// though the render layer silently skips them.
#[tracing::instrument(skip_all)]
pub fn validate_block(block: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(kind) = block.get("_type").and_then(Json::as_str) else {
        errors.push(ValidationError::new("_type", "Block type is required"));
        return errors;
    };

    match kind {
        "hero" | "cta" => {
            require_str(block, "title", "A title is required", &mut errors);
        }
        "imageLinkCards" => {
            require_str(block, "title", "A title is required", &mut errors);
            if let Some(cards) = block.get("cards").and_then(Json::as_array) {
                for card in cards {
                    errors.extend(validate_image_link_card(card));
                }
            }
        }
        "featureCardsIcon" => {
            if let Some(cards) = block.get("cards").and_then(Json::as_array) {
                for card in cards {
                    if card.get("employee").is_none() {
                        errors.push(ValidationError::new(
                            "cards.employee",
                            "A Lumon employee is required",
                        ));
                    }
                }
            }
        }
        "faqs" => {
            if let Some(faqs) = block.get("faqs").and_then(Json::as_array) {
                for faq in faqs {
                    require_str(faq, "question", "A question is required", &mut errors);
                }
            }
        }
        other => {
            errors.push(ValidationError::new(
                "_type",
                &format!("Unknown block type \"{other}\""),
            ));
        }
    }
    errors
}

/// The card discriminant decides which sibling fields are required: a
/// custom card needs its own title and URL, an employee card needs the
/// employee reference and nothing else.
#[tracing::instrument(skip_all)]
pub fn validate_image_link_card(card: &Json) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    match card.get("type").and_then(Json::as_str) {
        Some("custom") => {
            require_str(card, "title", "A title is required", &mut errors);
            require_str(card, "url", "Link URL is required", &mut errors);
        }
        Some("employee") => {
            if card.get("employee").is_none() {
                errors.push(ValidationError::new(
                    "employee",
                    "A Lumon employee is required",
                ));
            }
        }
        Some(other) => errors.push(ValidationError::new(
            "type",
            &format!("Unknown card type \"{other}\""),
        )),
        None => errors.push(ValidationError::new("type", "Card type is required")),
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn employee_requires_identity_fields() {
        let errors = validate_employee(&json!({"name": "Dylan G."}));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["slug", "department", "employeeId"]);

        assert!(validate_employee(&json!({
            "name": "Dylan G.",
            "slug": {"current": "dylan-g"},
            "department": "mdr",
            "employeeId": "4A-555",
        }))
        .is_empty());
    }

    #[test]
    fn news_slug_must_carry_the_prefix() {
        let errors = validate_news(&json!({
            "title": "Policy update",
            "slug": "/blog/policy-update",
            "department": "all",
            "priority": "standard",
            "image": {"asset": {"_ref": "image-a-1x1-png"}},
        }));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "URL slug must start with \"/news/\"");
    }

    #[test]
    fn custom_card_requires_title_and_url() {
        let errors = validate_image_link_card(&json!({"type": "custom", "description": "d"}));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["title", "url"]);
    }

    #[test]
    fn employee_card_requires_only_the_reference() {
        assert!(validate_image_link_card(&json!({
            "type": "employee",
            "employee": {"name": "Irving B."},
        }))
        .is_empty());
        assert_eq!(
            validate_image_link_card(&json!({"type": "employee"})).len(),
            1
        );
    }

    #[test]
    fn validation_never_runs_on_render_paths() {
        // A block that would fail validation still parses for rendering;
        // the catalog is lenient on read.
        let raw = json!({"_type": "cta", "_key": "k"});
        assert!(!validate_block(&raw).is_empty());
        assert!(crate::block::Block::from_value(&raw).is_some());
    }
}
