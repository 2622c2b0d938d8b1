//! Post sitemap construction.

use mapia_posts::Post;

use crate::error::SitemapError;
use crate::lastmod::normalize_lastmod;
use crate::sitemap::{ChangeFreq, Sitemap, UrlEntry};

/// Priority of the site root entry.
pub const HOME_PRIORITY: f32 = 1.0;

/// Priority of each post entry.
pub const POST_PRIORITY: f32 = 0.8;

/// Build the sitemap for a site and its posts.
///
/// The first entry is the site root (`weekly`, priority 1.0, no `lastmod`).
/// Each post follows in the given order as `<site_url>/#/post/<id>` with its
/// normalized `created_at` as `lastmod` (`monthly`, priority 0.8).
///
/// Trailing slashes on `site_url` are ignored.
///
/// # Errors
///
/// Returns [`SitemapError`] for the first post whose `created_at` is missing
/// or unparseable. No partial sitemap is produced.
pub fn post_sitemap(site_url: &str, posts: &[Post]) -> Result<Sitemap, SitemapError> {
    let base_url = site_url.trim_end_matches('/');
    let mut sitemap = Sitemap::with_capacity(posts.len() + 1);

    sitemap.push(
        UrlEntry::new(format!("{base_url}/"))
            .with_changefreq(ChangeFreq::Weekly)
            .with_priority(HOME_PRIORITY),
    );

    for post in posts {
        sitemap.push(post_entry(base_url, post)?);
    }

    tracing::debug!(posts = posts.len(), "Built post sitemap");
    Ok(sitemap)
}

fn post_entry(base_url: &str, post: &Post) -> Result<UrlEntry, SitemapError> {
    let raw = post
        .created_at
        .as_deref()
        .ok_or_else(|| SitemapError::MissingTimestamp {
            post_id: post.id.to_string(),
        })?;

    let lastmod = normalize_lastmod(raw).ok_or_else(|| SitemapError::InvalidTimestamp {
        post_id: post.id.to_string(),
        value: raw.to_owned(),
    })?;

    Ok(UrlEntry::new(format!("{base_url}/#/post/{}", post.id))
        .with_lastmod(lastmod)
        .with_changefreq(ChangeFreq::Monthly)
        .with_priority(POST_PRIORITY))
}

#[cfg(test)]
mod tests {
    use mapia_posts::PostId;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sitemap::SITEMAP_NS;

    const SITE_URL: &str = "https://mapia.vercel.app";

    #[test]
    fn test_no_posts_has_only_root() {
        let sitemap = post_sitemap(SITE_URL, &[]).unwrap();
        let xml = sitemap.to_xml();

        assert_eq!(sitemap.len(), 1);
        assert_eq!(xml.matches("<url>").count(), 1);
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("<loc>https://mapia.vercel.app/</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(!xml.contains("<lastmod>"));
        assert!(xml.ends_with("</urlset>"));
    }

    #[test]
    fn test_post_entry_fields() {
        let posts = vec![Post::new("42", "2024-03-01T10:00:00.000Z")];

        let sitemap = post_sitemap(SITE_URL, &posts).unwrap();
        let entry = &sitemap.urls()[1];

        assert_eq!(entry.loc, "https://mapia.vercel.app/#/post/42");
        assert_eq!(entry.lastmod.as_deref(), Some("2024-03-01T10:00:00.000Z"));
        assert_eq!(entry.changefreq, Some(ChangeFreq::Monthly));
        assert_eq!(entry.priority, Some(POST_PRIORITY));
    }

    #[test]
    fn test_root_first_then_posts_in_order() {
        let posts = vec![
            Post::new(3, "2024-03-03T00:00:00Z"),
            Post::new(1, "2024-03-01T00:00:00Z"),
            Post::new(2, "2024-03-02T00:00:00Z"),
        ];

        let sitemap = post_sitemap(SITE_URL, &posts).unwrap();
        let locs: Vec<&str> = sitemap.urls().iter().map(|u| u.loc.as_str()).collect();

        assert_eq!(
            locs,
            vec![
                "https://mapia.vercel.app/",
                "https://mapia.vercel.app/#/post/3",
                "https://mapia.vercel.app/#/post/1",
                "https://mapia.vercel.app/#/post/2",
            ]
        );
        assert_eq!(sitemap.to_xml().matches("<url>").count(), 4);
    }

    #[test]
    fn test_trailing_slash_on_site_url() {
        let posts = vec![Post::new(7, "2024-03-01")];

        let sitemap = post_sitemap("https://mapia.vercel.app/", &posts).unwrap();

        assert_eq!(sitemap.urls()[0].loc, "https://mapia.vercel.app/");
        assert_eq!(sitemap.urls()[1].loc, "https://mapia.vercel.app/#/post/7");
    }

    #[test]
    fn test_lastmod_normalized() {
        let posts = vec![Post::new(1, "2024-03-01T19:00:00.123456+09:00")];

        let sitemap = post_sitemap(SITE_URL, &posts).unwrap();

        assert_eq!(
            sitemap.urls()[1].lastmod.as_deref(),
            Some("2024-03-01T10:00:00.123Z")
        );
    }

    #[test]
    fn test_missing_created_at_is_error() {
        let posts = vec![
            Post::new(1, "2024-03-01"),
            Post {
                id: PostId::Int(2),
                created_at: None,
            },
        ];

        let err = post_sitemap(SITE_URL, &posts).unwrap_err();

        assert!(matches!(err, SitemapError::MissingTimestamp { ref post_id } if post_id == "2"));
    }

    #[test]
    fn test_invalid_created_at_is_error() {
        let posts = vec![Post::new("abc", "not-a-date")];

        let err = post_sitemap(SITE_URL, &posts).unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"post abc has an invalid created_at timestamp: "not-a-date""#
        );
    }

    #[test]
    fn test_identical_input_identical_output() {
        let posts = vec![
            Post::new(1, "2024-03-01T10:00:00Z"),
            Post::new(2, "2024-03-02T10:00:00Z"),
        ];

        let first = post_sitemap(SITE_URL, &posts).unwrap().to_xml();
        let second = post_sitemap(SITE_URL, &posts).unwrap().to_xml();

        assert_eq!(first, second);
    }
}
