// crates/edge/tests/routes.rs

//! End-to-end route tests over an in-memory content store.

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::{json, Value as Json};
use std::sync::Arc;
use tower::ServiceExt;

use domain::config::{Settings, SiteConfig, StoreConfig};
use edge::router::{build_router, AppState};
use edge::store::{ContentStore, DirStore};
use serve::template::ShellEngine;

fn settings() -> Settings {
    Settings {
        site: SiteConfig {
            base_url: "https://lumon-industries.com".to_owned(),
            title: "Lumon Industries".to_owned(),
        },
        store: StoreConfig {
            project_id: "lumon".to_owned(),
            dataset: "production".to_owned(),
            api_version: "2024-01-01".to_owned(),
            use_cdn: false,
            content_dir: "/nonexistent".into(),
        },
    }
}

fn app(pages: Vec<Json>, news: Vec<Json>, employees: Vec<Json>) -> Router {
    app_with_blogs(pages, news, vec![], employees)
}

fn app_with_blogs(
    pages: Vec<Json>,
    news: Vec<Json>,
    blogs: Vec<Json>,
    employees: Vec<Json>,
) -> Router {
    let state = AppState {
        store: Arc::new(DirStore::from_documents(pages, news, blogs, employees))
            as Arc<dyn ContentStore>,
        settings: Arc::new(settings()),
        shell: Arc::new(ShellEngine::new().unwrap()),
    };
    build_router(state)
}

async fn get(router: Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap(), content_type)
}

fn hero_block(key: &str, title: &str) -> Json {
    json!({
        "_key": key,
        "_type": "hero",
        "title": title,
        "buttons": [],
    })
}

#[tokio::test]
async fn home_page_renders_its_blocks() {
    let pages = vec![json!({
        "_id": "home",
        "title": "Home",
        "slug": "/",
        "description": "The front page",
        "pageBuilder": [hero_block("h1", "Welcome to Lumon")],
    })];

    let (status, body, _) = get(app(pages, vec![], vec![]), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to Lumon"));
    assert!(body.contains("The front page"));
}

#[tokio::test]
async fn unknown_block_is_skipped_but_page_still_serves() {
    let pages = vec![json!({
        "_id": "about",
        "title": "About",
        "slug": "/about",
        "pageBuilder": [
            json!({"_key": "x", "_type": "carousel", "title": "Nope"}),
            hero_block("h1", "Macrodata Refinement"),
        ],
    })];

    let (status, body, _) = get(app(pages, vec![], vec![]), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Macrodata Refinement"));
    assert!(!body.contains("Nope"));
}

#[tokio::test]
async fn missing_page_answers_not_found() {
    let (status, body, _) = get(app(vec![], vec![], vec![]), "/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("The requested article could not be found."));
}

#[tokio::test]
async fn news_article_renders_badges_and_date() {
    let news = vec![json!({
        "_id": "n1",
        "title": "Quarterly Refinement Goals Met",
        "slug": "/news/quarterly-goals",
        "description": "MDR exceeds its numbers.",
        "department": "mdr",
        "priority": "important",
        "publishedAt": "2024-02-15",
        "pageBuilder": [],
    })];

    let (status, body, _) = get(app(vec![], news, vec![]), "/news/quarterly-goals").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Quarterly Refinement Goals Met"));
    assert!(body.contains("MDR"));
    assert!(body.contains("Important"));
    assert!(body.contains("Published on 2024-02-15"));
}

#[tokio::test]
async fn news_index_lists_newest_first() {
    let news = vec![
        json!({
            "_id": "old",
            "title": "Old Notice",
            "slug": "/news/old",
            "publishedAt": "2023-06-01",
        }),
        json!({
            "_id": "new",
            "title": "New Notice",
            "slug": "/news/new",
            "publishedAt": "2024-06-01",
        }),
    ];

    let (status, body, _) = get(app(vec![], news, vec![]), "/news").await;
    assert_eq!(status, StatusCode::OK);
    let new_at = body.find("New Notice").unwrap();
    let old_at = body.find("Old Notice").unwrap();
    assert!(new_at < old_at);
}

#[tokio::test]
async fn blog_index_features_the_newest_post() {
    let blogs = vec![
        json!({
            "_id": "b1",
            "title": "Earlier Reflections",
            "slug": "/blog/earlier-reflections",
            "publishedAt": "2023-08-01",
        }),
        json!({
            "_id": "b2",
            "title": "A Day in Macrodata",
            "slug": "/blog/a-day-in-macrodata",
            "description": "What the numbers feel like.",
            "publishedAt": "2024-08-01",
            "authors": {"name": "Burt G."},
        }),
    ];

    let (status, body, _) = get(app_with_blogs(vec![], vec![], blogs, vec![]), "/blog").await;
    assert_eq!(status, StatusCode::OK);
    let featured = body.find("blog-card-featured").unwrap();
    let newest = body.find("A Day in Macrodata").unwrap();
    let older = body.find("Earlier Reflections").unwrap();
    assert!(featured < newest && newest < older);
    assert!(body.contains("Burt G."));
}

#[tokio::test]
async fn empty_blog_listing_answers_not_found() {
    let (status, _, _) = get(app(vec![], vec![], vec![]), "/blog").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn severed_employee_shows_wellness_visits() {
    let employees = vec![json!({
        "_id": "e1",
        "name": "Mark Scout",
        "slug": "mark-scout",
        "department": "mdr",
        "status": "active",
        "isSevered": true,
        "innieName": "Mark S.",
        "wellnessVisits": [
            {"date": "2024-01-01", "reason": "standard", "notes": "All is well."}
        ],
    })];

    let (status, body, _) = get(app(vec![], vec![], employees), "/team/mark-scout").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Mark Scout"));
    assert!(body.contains("Mark S."));
    assert!(body.contains("Wellness Visits"));
    assert!(body.contains("2024-01-01 — Standard Check-up"));
    assert!(body.contains("All is well."));
}

#[tokio::test]
async fn unsevered_employee_has_no_wellness_section() {
    let employees = vec![json!({
        "_id": "e2",
        "name": "Harmony Cobel",
        "slug": "harmony-cobel",
        "status": "active",
        "isSevered": false,
        "innieName": "Should Not Appear",
        "wellnessVisits": [
            {"date": "2024-01-01", "reason": "standard"}
        ],
    })];

    let (status, body, _) = get(app(vec![], vec![], employees), "/team/harmony-cobel").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Harmony Cobel"));
    assert!(!body.contains("Wellness Visits"));
    assert!(!body.contains("Should Not Appear"));
}

#[tokio::test]
async fn sitemap_covers_root_pages_and_news() {
    let pages = vec![json!({
        "_id": "about",
        "title": "About",
        "slug": "/about",
        "_updatedAt": "2024-03-01T09:00:00Z",
    })];
    let news = vec![json!({
        "_id": "n1",
        "title": "Notice",
        "slug": "/news/notice",
        "publishedAt": "2024-02-15",
    })];

    let (status, body, content_type) = get(app(pages, news, vec![]), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/xml"));
    assert!(body.contains("<loc>https://lumon-industries.com</loc>"));
    assert!(body.contains("<loc>https://lumon-industries.com/about</loc>"));
    assert!(body.contains("<loc>https://lumon-industries.com/news/notice</loc>"));
    assert!(body.contains("<priority>1.0</priority>"));
    assert!(body.contains("<changefreq>weekly</changefreq>"));
    assert!(body.contains("2024-03-01T09:00:00Z"));
}
