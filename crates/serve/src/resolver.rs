// crates/serve/src/resolver.rs

//! Weak-reference resolution.
//!
//! Rich-text marks and cards reference other documents weakly: the target
//! may have been deleted, or the denormalized fields a link needs may be
//! missing. Resolution is an explicit [`Resolution`] so every caller must
//! handle the broken case; a broken reference renders a visible indicator,
//! never blank output and never a panic. Read-only, no caching, no retry.

use domain::content::{NewsRef, Reference};
use tracing::debug;

use crate::html::escape_attr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedLink),
    Broken(BrokenRef),
}

/// Enough denormalized data to build a navigable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub href: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenRef {
    Employee,
    News,
}

impl BrokenRef {
    pub fn indicator(&self) -> &'static str {
        match self {
            BrokenRef::Employee => "Employee Reference Broken",
            BrokenRef::News => "News Reference Broken",
        }
    }

    pub fn to_html(&self) -> String {
        format!("<span class=\"broken-ref\">{}</span>", self.indicator())
    }
}

/// Resolve an employee reference to its profile path.
pub fn resolve_employee(reference: Option<&Reference>) -> Resolution {
    match reference.and_then(|r| r.id.as_deref()) {
        Some(id) => Resolution::Resolved(ResolvedLink {
            href: format!("/team/{id}"),
            label: None,
        }),
        None => {
            debug!("employee reference without a target id");
            Resolution::Broken(BrokenRef::Employee)
        }
    }
}

/// Resolve a news reference to its article path.
///
/// Broken when the target id is absent, and also when the id is present but
/// the denormalized slug is not. A flagged indicator beats a dead link
/// built from an internal id.
pub fn resolve_news(news: Option<&NewsRef>) -> Resolution {
    let Some(news) = news else {
        return Resolution::Broken(BrokenRef::News);
    };
    if news.id.is_none() {
        debug!("news reference without a target id");
        return Resolution::Broken(BrokenRef::News);
    }
    match news.slug.as_deref() {
        Some(slug) => Resolution::Resolved(ResolvedLink {
            href: news_href(slug),
            label: news.title.clone(),
        }),
        None => {
            debug!(id = ?news.id, "news reference missing its denormalized slug");
            Resolution::Broken(BrokenRef::News)
        }
    }
}

/// Normalize a news slug into an article path. Stored slugs carry the
/// `/news/` prefix already; bare slugs get it added.
fn news_href(slug: &str) -> String {
    if slug.starts_with("/news/") {
        slug.to_owned()
    } else {
        format!("/news/{}", slug.trim_start_matches('/'))
    }
}

/// Wrap already-rendered inner HTML in a link for a resolution, or replace
/// it with the broken indicator.
pub fn link_or_indicator(resolution: &Resolution, inner: &str) -> String {
    match resolution {
        Resolution::Resolved(link) => format!(
            "<a href=\"{}\">{}</a>",
            escape_attr(&link.href),
            inner
        ),
        Resolution::Broken(broken) => broken.to_html(),
    }
}
