// crates/serve/src/html.rs

//! Escaping and asset-URL helpers shared by the renderers.

use domain::config::StoreConfig;
use domain::content::Reference;

pub fn escape(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

pub fn escape_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

/// Build the CDN URL for an image asset reference.
///
/// References look like `image-<id>-<width>x<height>-<format>` and map to
/// `https://cdn.sanity.io/images/<project>/<dataset>/<id>-<WxH>.<format>`.
/// `None` for anything that does not fit that shape; the renderer then
/// omits the `<img>` rather than emitting a dead URL.
pub fn image_url(store: &StoreConfig, reference: &Reference) -> Option<String> {
    let id = reference.id.as_deref()?;
    let rest = id.strip_prefix("image-")?;
    let (base, format) = rest.rsplit_once('-')?;
    if base.is_empty() || format.is_empty() {
        return None;
    }
    Some(format!(
        "https://cdn.sanity.io/images/{}/{}/{}.{}",
        store.project_id, store.dataset, base, format
    ))
}

/// `<img>` markup for an optional image, empty string when the asset is
/// missing or malformed.
pub fn img_tag(store: &StoreConfig, image: &domain::content::Image, class: &str) -> String {
    let Some(src) = image.asset.as_ref().and_then(|r| image_url(store, r)) else {
        return String::new();
    };
    let alt = image.alt.as_deref().unwrap_or("");
    format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{}\">",
        escape_attr(&src),
        escape_attr(alt),
        escape_attr(class)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn store() -> StoreConfig {
        StoreConfig {
            project_id: "lumon".into(),
            dataset: "production".into(),
            api_version: "2024-01-01".into(),
            use_cdn: false,
            content_dir: PathBuf::new(),
        }
    }

    fn asset(id: &str) -> Reference {
        Reference {
            id: Some(id.to_owned()),
            weak: false,
        }
    }

    #[test]
    fn builds_cdn_url_from_asset_ref() {
        let url = image_url(&store(), &asset("image-abc123-1600x900-webp"));
        assert_eq!(
            url.as_deref(),
            Some("https://cdn.sanity.io/images/lumon/production/abc123-1600x900.webp")
        );
    }

    #[test]
    fn malformed_refs_yield_none() {
        assert!(image_url(&store(), &asset("file-abc123-pdf")).is_none());
        assert!(image_url(&store(), &asset("image-")).is_none());
        assert!(image_url(&store(), &Reference::default()).is_none());
    }

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert!(escape_attr("say \"hi\"").contains("&quot;"));
    }
}
