//! Concurrent fan-out of schedule fetches.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::BTreeSet;
use tokio::time::Instant;
use tracing::{info, instrument, warn};

use super::schedule::{ScheduleQuery, fetch_schedule};
use crate::booking::models::{FetchFailure, HourlyRecord, ResourceId, ScheduleMap};
use crate::config::Config;
use crate::error::AppError;

/// Result of fetching every resource: what succeeded and what did not.
#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub schedules: ScheduleMap,
    pub failures: Vec<FetchFailure>,
}

/// Fetches every resource's schedule concurrently.
///
/// Never fails as a whole. At most `max_concurrent_fetches` requests are in
/// flight; each is bounded by the per-fetch timeout and by the invocation
/// deadline. Every task yields its own `(id, result)` and the results are
/// merged only after all tasks have finished, so a resource is either absent
/// from `schedules` or present with its complete record list.
#[instrument(skip_all, fields(resources = resource_ids.len()))]
pub async fn fetch_all(
    client: &Client,
    config: &Config,
    query: &ScheduleQuery,
    resource_ids: &[ResourceId],
) -> AggregateOutcome {
    let unique: BTreeSet<ResourceId> = resource_ids.iter().copied().collect();
    let deadline = Instant::now() + config.invocation_deadline();
    let fetch_timeout = config.fetch_timeout();

    let results: Vec<(ResourceId, Result<Vec<HourlyRecord>, AppError>)> =
        stream::iter(unique)
            .map(|id| async move {
                let fetch_deadline = (Instant::now() + fetch_timeout).min(deadline);
                let result = match tokio::time::timeout_at(
                    fetch_deadline,
                    fetch_schedule(client, config, query, id),
                )
                .await
                {
                    Ok(result) => result,
                    Err(_) => Err(AppError::FetchTimeout { resource_id: id.0 }),
                };
                (id, result)
            })
            .buffer_unordered(config.max_concurrent_fetches.max(1))
            .collect()
            .await;

    let mut outcome = AggregateOutcome::default();
    for (id, result) in results {
        match result {
            Ok(records) => {
                outcome.schedules.insert(id, records);
            }
            Err(e) => {
                warn!("Schedule fetch failed for resource {}: {}", id, e);
                outcome.failures.push(FetchFailure {
                    resource_id: id,
                    reason: e.to_string(),
                });
            }
        }
    }
    outcome.failures.sort_by_key(|failure| failure.resource_id);

    info!(
        "Schedule fetch completed: {} successful, {} failed",
        outcome.schedules.len(),
        outcome.failures.len()
    );

    outcome
}
