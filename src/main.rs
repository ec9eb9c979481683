//! LRU TTL Cache demo
//!
//! Walks a small cache through insertion, LRU eviction, TTL expiration and
//! clearing, then shares it between concurrent tasks. All narration happens
//! here; the cache itself performs no logging.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_ttl_cache::{Cache, Config, LruCache};

/// Main entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the single-threaded scenario against the `Cache` contract
/// 4. Run the concurrent phase on a shared cache
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_ttl_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: capacity={}, ttl={:?}, wait={:?}, workers={}",
        config.capacity, config.demo_ttl, config.demo_wait, config.demo_workers
    );

    let cache = LruCache::from_config(&config).context("failed to create cache")?;
    run_scenario(&cache, &config).await?;

    let shared = Arc::new(LruCache::from_config(&config).context("failed to create cache")?);
    run_concurrent(shared, config.demo_workers).await?;

    info!("Demo complete");
    Ok(())
}

/// Narrates the eviction and expiration scenario through the `Cache` contract.
async fn run_scenario<C>(cache: &C, config: &Config) -> Result<()>
where
    C: Cache<&'static str, i32>,
{
    info!("Adding keys a, b, c");
    cache.add("a", 1);
    cache.add("b", 2);
    cache.add("c", 3);
    log_state(cache)?;

    info!("Getting value for key 'a'");
    match cache.get(&"a") {
        Some(value) => info!("Key: a, Value: {}", value),
        None => info!("Key 'a' not found"),
    }

    info!("Adding key 'd', which evicts the least recently used key");
    cache.add("d", 4);
    log_state(cache)?;

    info!("Checking key 'b'");
    match cache.get(&"b") {
        Some(_) => info!("Key 'b' is still cached"),
        None => info!("Key 'b' was evicted"),
    }

    info!("Adding key 'e' with TTL {:?}", config.demo_ttl);
    cache.add_with_ttl("e", 5, config.demo_ttl);
    log_state(cache)?;

    info!("Waiting {:?}...", config.demo_wait);
    tokio::time::sleep(config.demo_wait).await;

    info!("Checking key 'e' after the wait");
    match cache.get(&"e") {
        Some(value) => info!("Key 'e' is still cached with value {}", value),
        None => info!("Key 'e' expired and was removed"),
    }
    log_state(cache)?;

    info!("Clearing cache");
    cache.clear();
    log_state(cache)?;

    Ok(())
}

/// Shares one cache between worker tasks issuing overlapping operations.
async fn run_concurrent(cache: Arc<LruCache<String, u64>>, workers: usize) -> Result<()> {
    info!("Starting {} concurrent workers", workers);

    let handles: Vec<_> = (0..workers)
        .map(|worker| {
            let cache = Arc::clone(&cache);
            tokio::task::spawn_blocking(move || {
                let mut hits = 0u64;
                for i in 0..200u64 {
                    let key = format!("key{}", i % 8);
                    match i % 4 {
                        0 => {
                            cache.remove(key.as_str());
                        }
                        1 => cache.add_with_ttl(key, i, Duration::from_millis(5)),
                        _ => cache.add(key, worker as u64),
                    }
                    if cache.get(format!("key{}", i % 5).as_str()).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let hits = handle.await.context("worker task panicked")?;
        info!("Worker {} finished with {} hits", worker, hits);
    }

    let state = cache.state();
    if state.len > state.capacity {
        warn!("Cache exceeded its capacity: {:?}", state);
    }
    info!("Concurrent phase done: {}", serde_json::to_string(&state)?);
    Ok(())
}

fn log_state<C>(cache: &C) -> Result<()>
where
    C: Cache<&'static str, i32>,
{
    let state = cache.state();
    info!(
        "Cache state: {} ({} free slots)",
        serde_json::to_string(&state)?,
        state.free_slots()
    );
    Ok(())
}
