// crates/edge/src/store.rs

//! Content store access.
//!
//! The render layer only ever sees the [`ContentStore`] trait: a read-only
//! query surface returning typed documents by slug plus the listings the
//! index pages and sitemap need. The shipped implementation reads a
//! directory of exported store documents (one JSON file per document) into
//! memory at startup; tests construct the same store from literal values.
//!
//! A document that exists but does not parse is treated as absent and logged
//! at warn; the request answers not-found rather than surfacing a
//! deserialization error to the visitor.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value as Json;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use domain::doc::{BlogDoc, Employee, NewsDoc, PageDoc};
use serve::sitemap::SitemapSource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn page_by_slug(&self, slug: &str) -> Result<Option<PageDoc>, StoreError>;
    async fn news_by_slug(&self, slug: &str) -> Result<Option<NewsDoc>, StoreError>;
    async fn employee_by_slug(&self, slug: &str) -> Result<Option<Employee>, StoreError>;
    /// All news documents, newest first.
    async fn list_news(&self) -> Result<Vec<NewsDoc>, StoreError>;
    /// All blog posts, newest first.
    async fn list_blogs(&self) -> Result<Vec<BlogDoc>, StoreError>;
    /// Slugs of every page, for static generation.
    async fn page_paths(&self) -> Result<Vec<String>, StoreError>;
    /// Slug + last-modified listing for the sitemap.
    async fn sitemap_sources(&self) -> Result<Vec<SitemapSource>, StoreError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Directory-backed store
// ─────────────────────────────────────────────────────────────────────────────

pub struct DirStore {
    pages: Vec<Json>,
    news: Vec<Json>,
    blogs: Vec<Json>,
    employees: Vec<Json>,
}

impl DirStore {
    /// Read `<dir>/{pages,news,blog,employees}/*.json`. Missing
    /// subdirectories are treated as empty collections; an unreadable file
    /// is skipped with a warning, since one bad export must not take the
    /// site down.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let store = Self {
            pages: read_collection(&dir.join("pages"))?,
            news: read_collection(&dir.join("news"))?,
            blogs: read_collection(&dir.join("blog"))?,
            employees: read_collection(&dir.join("employees"))?,
        };
        debug!(
            pages = store.pages.len(),
            news = store.news.len(),
            blogs = store.blogs.len(),
            employees = store.employees.len(),
            "content store loaded"
        );
        Ok(store)
    }

    /// Construct from literal documents (tests, fixtures).
    pub fn from_documents(
        pages: Vec<Json>,
        news: Vec<Json>,
        blogs: Vec<Json>,
        employees: Vec<Json>,
    ) -> Self {
        Self {
            pages,
            news,
            blogs,
            employees,
        }
    }
}

fn read_collection(dir: &Path) -> Result<Vec<Json>, StoreError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut docs = Vec::new();
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.path());
    for entry in entries {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match fs::read_to_string(&path).map_err(StoreError::from).and_then(
            |text| Ok(serde_json::from_str::<Json>(&text)?),
        ) {
            Ok(doc) => docs.push(doc),
            Err(err) => warn!(path = %path.display(), "skipping unreadable document: {err}"),
        }
    }
    Ok(docs)
}

/// The slug of a raw document, whichever wire shape it uses.
fn doc_slug(doc: &Json) -> Option<&str> {
    match doc.get("slug")? {
        Json::String(s) => Some(s.as_str()),
        obj => obj.get("current")?.as_str(),
    }
}

fn find_by_slug<T: DeserializeOwned>(docs: &[Json], slug: &str) -> Option<T> {
    let raw = docs.iter().find(|d| doc_slug(d) == Some(slug))?;
    match serde_json::from_value(raw.clone()) {
        Ok(doc) => Some(doc),
        Err(err) => {
            warn!(slug, "stored document does not parse: {err}");
            None
        }
    }
}

fn parse_all<T: DeserializeOwned>(docs: &[Json]) -> Vec<T> {
    docs.iter()
        .filter_map(|raw| match serde_json::from_value(raw.clone()) {
            Ok(doc) => Some(doc),
            Err(err) => {
                warn!("skipping unparseable document in listing: {err}");
                None
            }
        })
        .collect()
}

fn last_modified(doc: &Json) -> Option<DateTime<Utc>> {
    doc.get("_updatedAt")?
        .as_str()?
        .parse::<DateTime<Utc>>()
        .ok()
}

#[async_trait]
impl ContentStore for DirStore {
    async fn page_by_slug(&self, slug: &str) -> Result<Option<PageDoc>, StoreError> {
        Ok(find_by_slug(&self.pages, slug))
    }

    async fn news_by_slug(&self, slug: &str) -> Result<Option<NewsDoc>, StoreError> {
        Ok(find_by_slug(&self.news, slug))
    }

    async fn employee_by_slug(&self, slug: &str) -> Result<Option<Employee>, StoreError> {
        Ok(find_by_slug(&self.employees, slug))
    }

    async fn list_news(&self) -> Result<Vec<NewsDoc>, StoreError> {
        let mut articles: Vec<NewsDoc> = parse_all(&self.news);
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(articles)
    }

    async fn list_blogs(&self) -> Result<Vec<BlogDoc>, StoreError> {
        let mut posts: Vec<BlogDoc> = parse_all(&self.blogs);
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(posts)
    }

    async fn page_paths(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .pages
            .iter()
            .filter_map(|doc| doc_slug(doc).map(str::to_owned))
            .collect())
    }

    async fn sitemap_sources(&self) -> Result<Vec<SitemapSource>, StoreError> {
        Ok(self
            .pages
            .iter()
            .chain(self.news.iter())
            .chain(self.blogs.iter())
            .filter_map(|doc| {
                Some(SitemapSource {
                    slug: doc_slug(doc)?.to_owned(),
                    last_modified: last_modified(doc),
                })
            })
            .collect())
    }
}
