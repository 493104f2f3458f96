// crates/edge/src/router.rs

//! Route construction and per-route handlers.
//!
//! Each handler is an independent, request-scoped unit of work: fetch one
//! document, compose its body, wrap it in the shell. A missing document is
//! the only whole-request failure; everything inside a page degrades per
//! block/node/reference in the layers below.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use http::header;
use std::sync::Arc;
use tracing::debug;

use domain::config::Settings;
use domain::doc::{BlogDoc, Employee, NewsDoc};
use serve::compose::compose_page;
use serve::html::{escape, escape_attr, img_tag};
use serve::meta::{page_metadata, PageMeta};
use serve::richtext::render_rich_text;
use serve::sitemap::{build_sitemap, to_xml};
use serve::template::{ShellEngine, ShellModel};

use crate::error::EdgeError;
use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub settings: Arc<Settings>,
    pub shell: Arc<ShellEngine>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/news", get(news_index))
        .route("/news/{slug}", get(news_article))
        .route("/blog", get(blog_index))
        .route("/team/{slug}", get(employee_page))
        .route("/{*slug}", get(slug_page))
        .with_state(state)
}

impl AppState {
    fn render_shell(&self, meta: PageMeta, body: String) -> Result<Html<String>, EdgeError> {
        let model = ShellModel {
            title: meta.title,
            description: meta.description,
            images: meta.images,
            site_title: self.settings.site.title.clone(),
            body,
        };
        Ok(Html(self.shell.render(&model)?))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pages
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
async fn home_page(State(state): State<AppState>) -> Result<Html<String>, EdgeError> {
    render_page(&state, "/").await
}

#[tracing::instrument(skip_all, fields(slug))]
async fn slug_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, EdgeError> {
    render_page(&state, &format!("/{}", slug.trim_start_matches('/'))).await
}

async fn render_page(state: &AppState, slug: &str) -> Result<Html<String>, EdgeError> {
    let page = state
        .store
        .page_by_slug(slug)
        .await?
        .ok_or(EdgeError::NotFound)?;
    debug!(slug, blocks = page.blocks.len(), "rendering page");

    let meta = page_metadata(
        page.title.as_deref(),
        page.description.as_deref(),
        None,
        &state.settings.site,
        &state.settings.store,
    );
    let body = compose_page(page.title.as_deref(), &page.blocks, &state.settings.store);
    state.render_shell(meta, body)
}

// ─────────────────────────────────────────────────────────────────────────────
// News
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
async fn news_index(State(state): State<AppState>) -> Result<Html<String>, EdgeError> {
    let articles = state.store.list_news().await?;

    let mut body = String::from("<h1>News</h1>");
    if articles.is_empty() {
        body.push_str("<p>No news articles found.</p>");
    } else {
        body.push_str("<div class=\"news-grid\">");
        for article in &articles {
            body.push_str(&news_card(article, &state));
        }
        body.push_str("</div>");
    }

    let meta = PageMeta {
        title: "News".to_owned(),
        description: Some("Latest news and updates from Lumon".to_owned()),
        images: Vec::new(),
    };
    state.render_shell(meta, body)
}

fn news_card(article: &NewsDoc, state: &AppState) -> String {
    let mut out = format!(
        "<a class=\"news-card\" href=\"{}\">",
        escape_attr(article.slug.as_str())
    );
    if let Some(image) = &article.image {
        out.push_str(&img_tag(&state.settings.store, image, "news-card-image"));
    }
    out.push_str(&format!("<h2>{}</h2>", escape(&article.title)));
    if let Some(description) = article.description.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(description)));
    }
    if let Some(published) = article.published_at {
        out.push_str(&format!("<time datetime=\"{published}\">{published}</time>"));
    }
    out.push_str("</a>");
    out
}

#[tracing::instrument(skip_all, fields(slug))]
async fn news_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, EdgeError> {
    let article = state
        .store
        .news_by_slug(&format!("/news/{slug}"))
        .await?
        .ok_or(EdgeError::NotFound)?;

    let mut body = String::from("<article>");
    body.push_str("<div class=\"badges\">");
    if let Some(department) = article.department {
        body.push_str(&format!(
            "<span class=\"badge\">{}</span>",
            escape(department.label())
        ));
    }
    if let Some(priority) = article.priority {
        body.push_str(&format!(
            "<span class=\"badge badge-priority\">{}</span>",
            escape(priority.label())
        ));
    }
    body.push_str("</div>");
    body.push_str(&format!("<h1>{}</h1>", escape(&article.title)));
    if let Some(description) = article.description.as_deref() {
        body.push_str(&format!("<p class=\"lede\">{}</p>", escape(description)));
    }
    if let Some(published) = article.published_at {
        body.push_str(&format!(
            "<time datetime=\"{published}\">Published on {published}</time>"
        ));
    }
    if let Some(image) = &article.image {
        body.push_str(&img_tag(&state.settings.store, image, "article-image"));
    }
    body.push_str(&compose_page(
        Some(&article.title),
        &article.blocks,
        &state.settings.store,
    ));
    body.push_str("</article>");

    let meta = page_metadata(
        Some(&article.title),
        article.description.as_deref(),
        article.image.as_ref(),
        &state.settings.site,
        &state.settings.store,
    );
    state.render_shell(meta, body)
}

// ─────────────────────────────────────────────────────────────────────────────
// Blog
// ─────────────────────────────────────────────────────────────────────────────

/// Blog index: the newest post is featured above a grid of the rest. An
/// empty listing answers not-found, matching the page-per-document routes.
#[tracing::instrument(skip_all)]
async fn blog_index(State(state): State<AppState>) -> Result<Html<String>, EdgeError> {
    let posts = state.store.list_blogs().await?;
    let Some((featured, rest)) = posts.split_first() else {
        return Err(EdgeError::NotFound);
    };

    let mut body = String::from("<h1>Blog</h1>");
    body.push_str(&blog_card(featured, &state, "blog-card blog-card-featured"));
    if !rest.is_empty() {
        body.push_str("<div class=\"blog-grid\">");
        for post in rest {
            body.push_str(&blog_card(post, &state, "blog-card"));
        }
        body.push_str("</div>");
    }

    let meta = PageMeta {
        title: "Blog".to_owned(),
        description: Some("Read our latest blog posts".to_owned()),
        images: Vec::new(),
    };
    state.render_shell(meta, body)
}

fn blog_card(post: &BlogDoc, state: &AppState, class: &str) -> String {
    let mut out = format!(
        "<a class=\"{class}\" href=\"{}\">",
        escape_attr(post.slug.as_str())
    );
    if let Some(image) = &post.image {
        out.push_str(&img_tag(&state.settings.store, image, "blog-card-image"));
    }
    out.push_str(&format!("<h2>{}</h2>", escape(&post.title)));
    if let Some(description) = post.description.as_deref() {
        out.push_str(&format!("<p>{}</p>", escape(description)));
    }
    if let Some(author) = post.authors.as_ref().and_then(|a| a.name.as_deref()) {
        out.push_str(&format!("<span class=\"author\">{}</span>", escape(author)));
    }
    if let Some(published) = post.published_at {
        out.push_str(&format!("<time datetime=\"{published}\">{published}</time>"));
    }
    out.push_str("</a>");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Employees
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all, fields(slug))]
async fn employee_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, EdgeError> {
    let employee = state
        .store
        .employee_by_slug(&slug)
        .await?
        .ok_or(EdgeError::NotFound)?;

    let body = employee_body(&employee, &state);
    let meta = page_metadata(
        Some(&employee.name),
        None,
        employee.image.as_ref(),
        &state.settings.site,
        &state.settings.store,
    );
    state.render_shell(meta, body)
}

fn employee_body(employee: &Employee, state: &AppState) -> String {
    let store = &state.settings.store;
    let mut body = String::from("<div class=\"employee\">");

    if let Some(image) = &employee.image {
        body.push_str(&img_tag(store, image, "portrait"));
    }
    body.push_str(&format!("<h1>{}</h1>", escape(&employee.name)));
    if let Some(department) = employee.department {
        body.push_str(&format!(
            "<p class=\"department\">{}</p>",
            escape(department.label())
        ));
    }
    if let Some(bio) = &employee.bio {
        body.push_str(&format!(
            "<section class=\"bio\">{}</section>",
            render_rich_text(bio, store)
        ));
    }

    if !employee.notable_achievements.is_empty() {
        body.push_str("<section><h2>Notable Achievements</h2><ul>");
        for achievement in &employee.notable_achievements {
            body.push_str(&format!("<li>{}</li>", escape(achievement)));
        }
        body.push_str("</ul></section>");
    }

    body.push_str(&format!(
        "<aside><h3>Status</h3><p>{}</p>",
        employee.status.label()
    ));
    // Innie fields and wellness visits exist only behind the severed gate.
    if let Some(severance) = &employee.severance {
        if let Some(innie) = severance.innie_name.as_deref() {
            body.push_str(&format!("<h3>Innie Name</h3><p>{}</p>", escape(innie)));
        }
        if let Some(date) = severance.severance_date {
            body.push_str(&format!("<h3>Severance Date</h3><p>{date}</p>"));
        }
        if !severance.wellness_visits.is_empty() {
            body.push_str("<section class=\"wellness\"><h2>Wellness Visits</h2><ul>");
            for visit in &severance.wellness_visits {
                let date = visit
                    .date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "Undated".to_owned());
                let reason = visit.reason.map(|r| r.label()).unwrap_or("Unspecified");
                body.push_str(&format!("<li>{date} — {}", escape(reason)));
                if let Some(notes) = visit.notes.as_deref() {
                    body.push_str(&format!(" <span class=\"notes\">{}</span>", escape(notes)));
                }
                body.push_str("</li>");
            }
            body.push_str("</ul></section>");
        }
    }
    body.push_str("</aside></div>");
    body
}

// ─────────────────────────────────────────────────────────────────────────────
// Sitemap
// ─────────────────────────────────────────────────────────────────────────────

#[tracing::instrument(skip_all)]
async fn sitemap_xml(State(state): State<AppState>) -> Result<Response, EdgeError> {
    let sources = state.store.sitemap_sources().await?;
    let entries = build_sitemap(&state.settings.site.base_url, Utc::now(), &sources);
    let xml = to_xml(&entries);
    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response())
}
