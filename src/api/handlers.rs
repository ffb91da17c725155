//! API Handlers
//!
//! The per-request pipeline: validate, cache lookup, evaluate, respond.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::cache::{CacheKey, ResultCache};
use crate::error::Result;
use crate::models::{CalcParams, CalcRequest, CalcResponse};

/// Application state shared across all handlers.
///
/// Holds the single result cache behind Arc<RwLock<>> for thread-safe
/// access. Constructed explicitly at startup (or per test) and injected
/// into the router; there is no ambient global cache.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe result cache
    pub cache: Arc<RwLock<ResultCache>>,
}

impl AppState {
    /// Creates a new AppState with the given result cache.
    pub fn new(cache: ResultCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(ResultCache::new(config.max_entries, config.cache_ttl))
    }
}

/// Handler for GET /:action
///
/// Validates the action and operands, short-circuits through the cache on
/// a hit, otherwise evaluates and memoizes the answer. Exactly one cache
/// read and at most one cache write per request.
pub async fn calculate_handler(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Query(params): Query<CalcParams>,
) -> Result<Json<CalcResponse>> {
    let req = CalcRequest::validate(&action, &params)?;
    let key = CacheKey::new(req.x, req.y, req.op);

    // Write lock: a read can evict an expired entry
    let hit = {
        let mut cache = state.cache.write().await;
        cache.get(&key)
    };

    if let Some(answer) = hit {
        debug!(action = req.op.name(), x = req.x, y = req.y, "cache hit");
        return Ok(Json(CalcResponse::new(req.op, req.x, req.y, answer, true)));
    }

    let answer = req.op.apply(req.x, req.y)?;

    // Best-effort store: a cache failure never fails the request
    {
        let mut cache = state.cache.write().await;
        if let Err(err) = cache.put(key, answer) {
            warn!("failed to cache result: {err}");
        }
    }

    Ok(Json(CalcResponse::new(req.op, req.x, req.y, answer, false)))
}
