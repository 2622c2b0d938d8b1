//! Sitemap document model.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://mapia.vercel.app/</loc>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//!   <url>
//!     <loc>https://mapia.vercel.app/#/post/42</loc>
//!     <lastmod>2024-03-01T10:00:00.000Z</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use quick_xml::escape::escape;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// How frequently a page is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Protocol keyword for this frequency.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A single `<url>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute page URL.
    pub loc: String,
    /// Last modification instant, already formatted.
    pub lastmod: Option<String>,
    /// Change frequency hint.
    pub changefreq: Option<ChangeFreq>,
    /// Relative priority in `0.0..=1.0`, rendered with one decimal.
    pub priority: Option<f32>,
}

impl UrlEntry {
    /// Create an entry with only a location.
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    #[must_use]
    pub fn with_changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority);
        self
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push_str("\n  <url>\n    <loc>");
        xml.push_str(&escape(self.loc.as_str()));
        xml.push_str("</loc>");
        if let Some(lastmod) = &self.lastmod {
            xml.push_str("\n    <lastmod>");
            xml.push_str(&escape(lastmod.as_str()));
            xml.push_str("</lastmod>");
        }
        if let Some(changefreq) = self.changefreq {
            xml.push_str("\n    <changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>");
        }
        if let Some(priority) = self.priority {
            xml.push_str("\n    <priority>");
            xml.push_str(&format!("{:.1}", priority.clamp(0.0, 1.0)));
            xml.push_str("</priority>");
        }
        xml.push_str("\n  </url>");
    }
}

/// An ordered list of URL entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Create an empty sitemap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sitemap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry. Entries render in insertion order.
    pub fn push(&mut self, entry: UrlEntry) {
        self.urls.push(entry);
    }

    /// Entries in render order.
    #[must_use]
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Render the document.
    ///
    /// Output depends only on the entries, so rendering the same sitemap
    /// twice yields identical bytes.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">");

        for entry in &self.urls {
            entry.write_xml(&mut xml);
        }

        xml.push_str("\n</urlset>");
        xml
    }
}
