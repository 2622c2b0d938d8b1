//! Sitemap model and XML rendering.
//!
//! Turns the post list of the store into a [sitemaps.org] 0.9 document:
//! one static entry for the site root followed by one entry per post, in
//! the order the store returned them.
//!
//! [sitemaps.org]: https://www.sitemaps.org/protocol.html
//!
//! # Example
//!
//! ```ignore
//! use mapia_posts::Post;
//! use mapia_sitemap::post_sitemap;
//!
//! let posts = vec![Post::new("42", "2024-03-01T10:00:00.000Z")];
//! let xml = post_sitemap("https://mapia.vercel.app", &posts)?.to_xml();
//! assert!(xml.contains("<loc>https://mapia.vercel.app/#/post/42</loc>"));
//! ```

mod error;
mod lastmod;
mod posts;
mod sitemap;

pub use error::SitemapError;
pub use lastmod::normalize_lastmod;
pub use posts::{HOME_PRIORITY, POST_PRIORITY, post_sitemap};
pub use sitemap::{ChangeFreq, SITEMAP_NS, Sitemap, UrlEntry};
