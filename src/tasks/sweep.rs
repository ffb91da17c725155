//! TTL Sweep Task
//!
//! Background task that periodically removes expired cached results.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResultCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The sweep only reclaims memory; `get` checks expiration at read time,
/// so correctness never depends on the sweep having run. The task takes a
/// short write lock per pass and can be aborted during graceful shutdown.
///
/// # Arguments
/// * `cache` - Shared reference to the result cache
/// * `sweep_interval_secs` - Interval in seconds between sweep runs
pub fn spawn_sweep_task(
    cache: Arc<RwLock<ResultCache>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
