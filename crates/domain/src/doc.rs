// crates/domain/src/doc.rs

//! Document types held by the content store.
//!
//! The render layer fetches these read-only, per request, and never mutates
//! them. Conditional fields gated by a discriminant on the wire (the
//! employee severed flag, the event type) are folded into enums/options at
//! deserialization so downstream code cannot forget to check the gate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use crate::content::{Image, Reference, RichText};

// ─────────────────────────────────────────────────────────────────────────────
// Slug
// ─────────────────────────────────────────────────────────────────────────────

/// A document slug. Stored either as a bare string or as the studio's
/// `{ "current": "..." }` object; both deserialize to the inner string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slug(pub String);

impl Slug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Plain(String),
            Object { current: String },
        }
        Ok(match Wire::deserialize(deserializer)? {
            Wire::Plain(s) => Slug(s),
            Wire::Object { current } => Slug(current),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDoc {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: Option<String>,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw page-builder sequence; parsed block by block at composition time.
    #[serde(rename = "pageBuilder", default)]
    pub blocks: Vec<Json>,
}

// ─────────────────────────────────────────────────────────────────────────────
// News
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDoc {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    /// Full path slug, `/news/...` by editorial validation.
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department: Option<Department>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(rename = "pageBuilder", default)]
    pub blocks: Vec<Json>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Blog
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDoc {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    /// Full path slug, `/blog/...`.
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub image: Option<Image>,
    /// Denormalized author attribution, absent for unsigned posts.
    #[serde(default)]
    pub authors: Option<BlogAuthor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BlogAuthor {
    pub name: Option<String>,
    pub image: Option<Image>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    Important,
    Standard,
    Informational,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::Important => "Important",
            Priority::Standard => "Standard",
            Priority::Informational => "Informational",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Employee
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Mdr,
    Od,
    DataRefinement,
    Corporate,
    Security,
    Wellness,
    All,
}

impl Department {
    pub fn label(&self) -> &'static str {
        match self {
            Department::Mdr => "MDR",
            Department::Od => "O&D",
            Department::DataRefinement => "Data Refinement",
            Department::Corporate => "Corporate",
            Department::Security => "Security",
            Department::Wellness => "Wellness",
            Department::All => "All Departments",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
    Wellness,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On Leave",
            EmployeeStatus::Terminated => "Terminated",
            EmployeeStatus::Wellness => "In Wellness",
        }
    }
}

/// An employee (author) document.
///
/// The wire shape carries `isSevered` plus flat innie fields; they fold into
/// `severance` here. When the flag is false the innie fields are dropped
/// even if present in the stored document; they are meaningless then, and
/// no renderer should ever see them.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub employee_id: Option<String>,
    pub department: Option<Department>,
    pub status: EmployeeStatus,
    pub image: Option<Image>,
    pub bio: Option<RichText>,
    pub notable_achievements: Vec<String>,
    pub severance: Option<Severance>,
}

/// The severed part of an employee record.
#[derive(Debug, Clone, Default)]
pub struct Severance {
    pub innie_name: Option<String>,
    pub severance_date: Option<NaiveDate>,
    pub wellness_visits: Vec<WellnessVisit>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessVisit {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<VisitReason>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitReason {
    Standard,
    Behavioral,
    Protocol,
    Requested,
}

impl VisitReason {
    pub fn label(&self) -> &'static str {
        match self {
            VisitReason::Standard => "Standard Check-up",
            VisitReason::Behavioral => "Behavioral Issue",
            VisitReason::Protocol => "Protocol Violation",
            VisitReason::Requested => "Requested Visit",
        }
    }
}

impl<'de> Deserialize<'de> for Employee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            #[serde(rename = "_id", default)]
            id: String,
            name: String,
            slug: Slug,
            #[serde(default)]
            employee_id: Option<String>,
            #[serde(default)]
            department: Option<Department>,
            #[serde(default)]
            status: EmployeeStatus,
            #[serde(default)]
            image: Option<Image>,
            #[serde(default)]
            bio: Option<RichText>,
            #[serde(default)]
            notable_achievements: Vec<String>,
            #[serde(default)]
            is_severed: bool,
            #[serde(default)]
            innie_name: Option<String>,
            #[serde(default)]
            severance_date: Option<NaiveDate>,
            #[serde(default)]
            wellness_visits: Vec<WellnessVisit>,
        }

        let w = Wire::deserialize(deserializer)?;
        let severance = w.is_severed.then(|| Severance {
            innie_name: w.innie_name,
            severance_date: w.severance_date,
            wellness_visits: w.wellness_visits,
        });
        Ok(Employee {
            id: w.id,
            name: w.name,
            slug: w.slug,
            employee_id: w.employee_id,
            department: w.department,
            status: w.status,
            image: w.image,
            bio: w.bio,
            notable_achievements: w.notable_achievements,
            severance,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Food,
    Milestone,
    Protocol,
    Review,
    Special,
    Wellness,
    TeamBuilding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventLocation {
    BreakRoom,
    ConferenceRoom,
    DepartmentFloor,
    Cafeteria,
    WellnessRoom,
}

impl EventLocation {
    pub fn label(&self) -> &'static str {
        match self {
            EventLocation::BreakRoom => "Break Room",
            EventLocation::ConferenceRoom => "Conference Room",
            EventLocation::DepartmentFloor => "Department Floor",
            EventLocation::Cafeteria => "Lumon Cafeteria",
            EventLocation::WellnessRoom => "Wellness Room",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Attendance {
    Mandatory,
    #[default]
    Optional,
    HeadsOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Kind-specific event detail. Only the object matching the event's `type`
/// discriminant survives deserialization; the detail-free kinds (review,
/// special, wellness, team-building) carry `None`.
#[derive(Debug, Clone)]
pub enum EventDetail {
    Food { food_items: Vec<FoodItem> },
    Milestone(MilestoneDetails),
    Protocol(ProtocolDetails),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FoodItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MilestoneDetails {
    pub achievement: Option<String>,
    pub metrics: Option<String>,
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolDetails {
    pub protocol_name: Option<String>,
    pub completion_level: Option<CompletionLevel>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionLevel {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub title: String,
    pub kind: Option<EventKind>,
    pub department: Option<Department>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<EventLocation>,
    pub description: Option<String>,
    pub image: Option<Image>,
    pub requirements: Vec<String>,
    pub attendance: Attendance,
    pub status: EventStatus,
    pub detail: Option<EventDetail>,
    pub memories: Vec<Reference>,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            title: String,
            #[serde(rename = "type", default)]
            kind: Option<EventKind>,
            #[serde(default)]
            department: Option<Department>,
            #[serde(default)]
            date: Option<DateTime<Utc>>,
            #[serde(default)]
            location: Option<EventLocation>,
            #[serde(default)]
            description: Option<String>,
            #[serde(default)]
            image: Option<Image>,
            #[serde(default)]
            requirements: Vec<String>,
            #[serde(default)]
            attendance: Attendance,
            #[serde(default)]
            status: EventStatus,
            #[serde(default)]
            food_items: Vec<FoodItem>,
            #[serde(default)]
            milestone_details: Option<MilestoneDetails>,
            #[serde(default)]
            protocol_details: Option<ProtocolDetails>,
            #[serde(default)]
            memories: Vec<Reference>,
        }

        let w = Wire::deserialize(deserializer)?;
        let detail = match w.kind {
            Some(EventKind::Food) => Some(EventDetail::Food {
                food_items: w.food_items,
            }),
            Some(EventKind::Milestone) => w.milestone_details.map(EventDetail::Milestone),
            Some(EventKind::Protocol) => w.protocol_details.map(EventDetail::Protocol),
            _ => None,
        };
        Ok(Event {
            title: w.title,
            kind: w.kind,
            department: w.department,
            date: w.date,
            location: w.location,
            description: w.description,
            image: w.image,
            requirements: w.requirements,
            attendance: w.attendance,
            status: w.status,
            detail,
            memories: w.memories,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event memory
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    Photo,
    Video,
    Note,
    Achievement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joyful,
    Proud,
    Reflective,
    Grateful,
    Excited,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolCompliance {
    #[default]
    Compliant,
    NeedsReview,
    Exception,
}

/// A captured memory from an event. `media` is meaningless for notes and
/// `content` for photos; the fold drops whichever the kind excludes.
#[derive(Debug, Clone)]
pub struct EventMemory {
    pub title: String,
    pub event: Option<Reference>,
    pub date: Option<DateTime<Utc>>,
    pub kind: Option<MemoryKind>,
    pub media: Option<Image>,
    pub content: Option<String>,
    pub contributor: Option<Reference>,
    pub tags: Vec<String>,
    pub mood: Option<Mood>,
    pub protocol_compliance: ProtocolCompliance,
}

impl<'de> Deserialize<'de> for EventMemory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            title: String,
            #[serde(default)]
            event: Option<Reference>,
            #[serde(default)]
            date: Option<DateTime<Utc>>,
            #[serde(rename = "type", default)]
            kind: Option<MemoryKind>,
            #[serde(default)]
            media: Option<Image>,
            #[serde(default)]
            content: Option<String>,
            #[serde(default)]
            contributor: Option<Reference>,
            #[serde(default)]
            tags: Vec<String>,
            #[serde(default)]
            mood: Option<Mood>,
            #[serde(default)]
            protocol_compliance: ProtocolCompliance,
        }

        let w = Wire::deserialize(deserializer)?;
        let media = (w.kind != Some(MemoryKind::Note)).then_some(w.media).flatten();
        let content = (w.kind != Some(MemoryKind::Photo)).then_some(w.content).flatten();
        Ok(EventMemory {
            title: w.title,
            event: w.event,
            date: w.date,
            kind: w.kind,
            media,
            content,
            contributor: w.contributor,
            tags: w.tags,
            mood: w.mood,
            protocol_compliance: w.protocol_compliance,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Knowledge entries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnowledgeCategory {
    CoreValues,
    Teachings,
    Principles,
    Historical,
    Protocols,
}

impl KnowledgeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            KnowledgeCategory::CoreValues => "Core Values",
            KnowledgeCategory::Teachings => "Teachings",
            KnowledgeCategory::Principles => "Principles",
            KnowledgeCategory::Historical => "Historical Records",
            KnowledgeCategory::Protocols => "Protocols",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub category: Option<KnowledgeCategory>,
    #[serde(default)]
    pub content: Option<RichText>,
    #[serde(default)]
    pub key_quotes: Vec<KeyQuote>,
    #[serde(default)]
    pub related_values: Vec<RelatedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeyQuote {
    pub quote: Option<String>,
    pub context: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelatedValue {
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unsevered_employee_drops_innie_fields() {
        let emp: Employee = serde_json::from_value(json!({
            "_id": "emp-1",
            "name": "Mark S.",
            "slug": {"current": "mark-s"},
            "department": "mdr",
            "isSevered": false,
            "innieName": "Mark",
            "wellnessVisits": [{"date": "2024-01-01", "reason": "standard"}],
        }))
        .unwrap();
        assert!(emp.severance.is_none());
    }

    #[test]
    fn severed_employee_keeps_the_gated_part() {
        let emp: Employee = serde_json::from_value(json!({
            "name": "Helly R.",
            "slug": "helly-r",
            "isSevered": true,
            "innieName": "Helly",
            "severanceDate": "2022-02-18",
            "wellnessVisits": [
                {"date": "2024-01-01", "reason": "standard", "notes": "routine"},
                {"date": "2024-02-02", "reason": "protocol"},
            ],
        }))
        .unwrap();
        let severance = emp.severance.expect("severed");
        assert_eq!(severance.innie_name.as_deref(), Some("Helly"));
        assert_eq!(severance.wellness_visits.len(), 2);
        assert_eq!(
            severance.wellness_visits[1].reason,
            Some(VisitReason::Protocol)
        );
    }

    #[test]
    fn event_detail_follows_the_kind() {
        let food: Event = serde_json::from_value(json!({
            "title": "Melon Bar Celebration",
            "type": "food",
            "foodItems": [{"name": "Melon", "quantity": 40}],
            "milestoneDetails": {"achievement": "ignored"},
        }))
        .unwrap();
        match food.detail {
            Some(EventDetail::Food { food_items }) => assert_eq!(food_items.len(), 1),
            other => panic!("unexpected {other:?}"),
        }

        let review: Event = serde_json::from_value(json!({
            "title": "Quarterly Review",
            "type": "review",
            "foodItems": [{"name": "left over"}],
        }))
        .unwrap();
        assert!(review.detail.is_none());
    }

    #[test]
    fn note_memory_has_no_media() {
        let memory: EventMemory = serde_json::from_value(json!({
            "title": "Waffle party recap",
            "type": "note",
            "media": {"asset": {"_ref": "image-a-1x1-png"}},
            "content": "It was glorious.",
        }))
        .unwrap();
        assert!(memory.media.is_none());
        assert_eq!(memory.content.as_deref(), Some("It was glorious."));
    }

    #[test]
    fn slug_accepts_both_wire_shapes() {
        let a: Slug = serde_json::from_value(json!("about")).unwrap();
        let b: Slug = serde_json::from_value(json!({"current": "about"})).unwrap();
        assert_eq!(a, b);
    }
}
