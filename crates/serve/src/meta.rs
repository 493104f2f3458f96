// crates/serve/src/meta.rs

//! Head-metadata projection.
//!
//! Flattens a fetched document into the `{title, description, images}`
//! tuple injected into the page head. Separate from rendering: the routing
//! layer calls this once per request alongside body composition.

use domain::config::{SiteConfig, StoreConfig};
use domain::content::Image;

use crate::html::image_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: Option<String>,
    pub images: Vec<String>,
}

/// Metadata for a fetched document. A missing title falls back to the site
/// title so the head is never empty.
pub fn page_metadata(
    title: Option<&str>,
    description: Option<&str>,
    image: Option<&Image>,
    site: &SiteConfig,
    store: &StoreConfig,
) -> PageMeta {
    let images = image
        .and_then(|img| img.asset.as_ref())
        .and_then(|asset| image_url(store, asset))
        .into_iter()
        .collect();
    PageMeta {
        title: title.unwrap_or(&site.title).to_owned(),
        description: description.map(str::to_owned),
        images,
    }
}

/// Fixed copy for requests whose document does not exist.
pub fn not_found_metadata() -> PageMeta {
    PageMeta {
        title: "Article Not Found".to_owned(),
        description: Some("The requested article could not be found.".to_owned()),
        images: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::content::Reference;
    use std::path::PathBuf;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://severance-site.example".into(),
            title: "Lumon Industries".into(),
        }
    }

    fn store() -> StoreConfig {
        StoreConfig {
            project_id: "lumon".into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            content_dir: PathBuf::new(),
        }
    }

    #[test]
    fn title_falls_back_to_the_site_title() {
        let meta = page_metadata(None, None, None, &site(), &store());
        assert_eq!(meta.title, "Lumon Industries");
        assert!(meta.description.is_none());
        assert!(meta.images.is_empty());
    }

    #[test]
    fn document_image_becomes_an_og_image() {
        let image = Image {
            asset: Some(Reference {
                id: Some("image-abc-800x450-webp".into()),
                weak: false,
            }),
            alt: None,
        };
        let meta = page_metadata(
            Some("Policy update"),
            Some("New break room protocol"),
            Some(&image),
            &site(),
            &store(),
        );
        assert_eq!(meta.title, "Policy update");
        assert_eq!(meta.images.len(), 1);
        assert!(meta.images[0].ends_with("abc-800x450.webp"));
    }

    #[test]
    fn not_found_copy_is_fixed() {
        let meta = not_found_metadata();
        assert_eq!(meta.title, "Article Not Found");
    }
}
