//! Bounded Cache demo
//!
//! Walks a small asset cache through inserts, reads, an eviction and a
//! removal, logging the contents after each step.

use std::fmt;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::{BoundedCache, Config, ShardedCache};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Song {
    LinkinPark,
    GreenDay,
    ImagineDragons,
    Ozzy,
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Song::LinkinPark => "linkinpark",
            Song::GreenDay => "greenday",
            Song::ImagineDragons => "imaginedragons",
            Song::Ozzy => "ozzy",
        };
        f.write_str(name)
    }
}

/// Renders the cached assets in a stable order for logging.
fn render(cache: &BoundedCache<Song, String>) -> String {
    let mut assets: Vec<&str> = cache.values().map(String::as_str).collect();
    assets.sort_unstable();
    assets.join(", ")
}

fn asset_for(song: Song) -> String {
    format!("{}.mp3", song)
}

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, shards={}",
        config.capacity, config.shards
    );

    let mut cache: BoundedCache<Song, String> =
        BoundedCache::new(config.capacity).context("failed to create demo cache")?;

    cache.set(Song::LinkinPark, asset_for(Song::LinkinPark));
    info!("Added asset: [{}]", render(&cache));

    cache.set(Song::GreenDay, asset_for(Song::GreenDay));
    info!("Added asset: [{}]", render(&cache));

    let asset = cache
        .get(&Song::LinkinPark)
        .cloned()
        .unwrap_or_default();
    info!("Retrieved asset: {}", asset);

    cache.set(Song::ImagineDragons, asset_for(Song::ImagineDragons));
    info!("Added asset: [{}]", render(&cache));

    if let Some((song, _)) = cache.set(Song::Ozzy, asset_for(Song::Ozzy)) {
        info!("Cache at capacity, evicted oldest write: {}", song);
    }
    info!("Added asset: [{}]", render(&cache));

    cache.assign(Song::Ozzy, None);
    info!("Removed asset: [{}]", render(&cache));

    let stats = serde_json::to_string_pretty(&cache.stats())?;
    println!("{}", stats);

    let sharded: ShardedCache<u32, String> =
        ShardedCache::new(config.capacity, config.shards).context("failed to create sharded cache")?;
    for track in 0..32u32 {
        sharded.set(track, format!("track_{:02}.mp3", track));
    }
    info!(
        "Sharded cache holds {} entries across {} shards",
        sharded.len(),
        sharded.shard_count()
    );
    println!("{}", serde_json::to_string_pretty(&sharded.stats())?);

    Ok(())
}
