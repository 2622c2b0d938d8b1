//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;

use mapia_config::Config;
use mapia_posts_supabase::{StoreSettings, SupabaseStore};

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

/// Build the post store described by the `[store]` section.
fn build_store(config: &Config) -> SupabaseStore {
    SupabaseStore::new(
        StoreSettings::new(&config.store.url, &config.store.key)
            .with_table(&config.store.table)
            .with_timeout(config.store.timeout()),
    )
}
