// crates/serve/src/sitemap.rs

//! Sitemap generation.
//!
//! One root entry plus one entry per listed slug, with fixed
//! change-frequency/priority defaults: the root is daily/1.0, everything
//! else weekly/0.8.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::html::escape;

/// A slug listing row from the content store.
#[derive(Debug, Clone)]
pub struct SitemapSource {
    pub slug: String,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// Build the entry list. `now` stands in for missing last-modified stamps
/// and for the root entry. Sources with an empty slug are skipped.
pub fn build_sitemap(
    base_url: &str,
    now: DateTime<Utc>,
    sources: &[SitemapSource],
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = vec![SitemapEntry {
        url: base.to_owned(),
        last_modified: now,
        change_frequency: ChangeFrequency::Daily,
        priority: 1.0,
    }];

    for source in sources {
        if source.slug.is_empty() {
            continue;
        }
        entries.push(SitemapEntry {
            url: format!("{base}{}", source.slug),
            last_modified: source.last_modified.unwrap_or(now),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        });
    }
    entries
}

/// Render the standard urlset XML document.
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        out.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_frequency.as_str(),
            entry.priority,
        ));
    }
    out.push_str("</urlset>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn one_source_yields_root_plus_entry() {
        let sources = [SitemapSource {
            slug: "/news/a".into(),
            last_modified: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }];
        let entries = build_sitemap("https://severance-site.example", now(), &sources);
        assert_eq!(entries.len(), 2);

        let root = &entries[0];
        assert_eq!(root.url, "https://severance-site.example");
        assert_eq!(root.change_frequency, ChangeFrequency::Daily);
        assert_eq!(root.priority, 1.0);

        let page = &entries[1];
        assert_eq!(page.url, "https://severance-site.example/news/a");
        assert_eq!(page.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(page.priority, 0.8);
        assert_eq!(
            page.last_modified,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn empty_slugs_are_skipped_and_missing_dates_default_to_now() {
        let sources = [
            SitemapSource { slug: String::new(), last_modified: None },
            SitemapSource { slug: "/about".into(), last_modified: None },
        ];
        let entries = build_sitemap("https://severance-site.example/", now(), &sources);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].url, "https://severance-site.example/about");
        assert_eq!(entries[1].last_modified, now());
    }

    #[test]
    fn ampersand_in_a_slug_is_xml_escaped() {
        let sources = [SitemapSource {
            slug: "/optics&design".into(),
            last_modified: None,
        }];
        let xml = to_xml(&build_sitemap("https://severance-site.example", now(), &sources));
        assert!(xml.contains("<loc>https://severance-site.example/optics&amp;design</loc>"));
        assert!(!xml.contains("optics&design"));
    }

    #[test]
    fn xml_contains_fixed_defaults() {
        let entries = build_sitemap("https://severance-site.example", now(), &[]);
        let xml = to_xml(&entries);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<lastmod>2024-06-01T12:00:00Z</lastmod>"));
    }
}
