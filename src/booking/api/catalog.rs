//! Resource resolution: which courts of a venue belong to a month.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::fetch_utils::post_graphql;
use super::urls::build_graphql_url;
use crate::booking::dates::month_label;
use crate::booking::models::graphql::BIZ_ITEMS_QUERY;
use crate::booking::models::{BizItemsVariables, CatalogData, ResourceCatalog, ResourceId};
use crate::config::Config;
use crate::constants::operations;
use crate::error::AppError;

/// Reads a `bizItemId` value. The API sends a decimal string; a plain JSON
/// integer is accepted as well.
fn parse_resource_id(raw: Option<&Value>) -> Result<ResourceId, AppError> {
    match raw {
        Some(Value::String(s)) => {
            ResourceId::parse(s).ok_or_else(|| AppError::invalid_resource_id(s.as_str()))
        }
        Some(Value::Number(n)) => n
            .as_i64()
            .map(ResourceId)
            .ok_or_else(|| AppError::invalid_resource_id(n.to_string())),
        Some(other) => Err(AppError::invalid_resource_id(other.to_string())),
        None => Err(AppError::invalid_resource_id("<missing>")),
    }
}

/// Keeps the catalog entries whose name starts with the month label.
///
/// Any matching entry with an unusable id fails the whole catalog.
pub fn filter_catalog(data: CatalogData, month: u32) -> Result<ResourceCatalog, AppError> {
    let label = month_label(month);
    let mut catalog = ResourceCatalog::new();

    for item in data.biz_items {
        let Some(name) = item.name else {
            continue;
        };
        if !name.starts_with(&label) {
            continue;
        }
        let id = parse_resource_id(item.biz_item_id.as_ref())?;
        debug!("Resolved resource {} -> {}", id, name);
        catalog.insert(id, name);
    }

    Ok(catalog)
}

/// Queries the venue's resource catalog and resolves the courts for `month`.
///
/// `year` is carried for logging; the catalog itself is not year-scoped.
#[instrument(skip(client, config))]
pub async fn resolve_resources(
    client: &Client,
    config: &Config,
    venue_id: i64,
    year: i32,
    month: u32,
) -> Result<ResourceCatalog, AppError> {
    let url = build_graphql_url(&config.api_domain, operations::BIZ_ITEMS);

    let data: CatalogData = post_graphql(
        client,
        &url,
        operations::BIZ_ITEMS,
        BizItemsVariables::for_business(venue_id),
        BIZ_ITEMS_QUERY,
    )
    .await?;

    let total = data.biz_items.len();
    let catalog = filter_catalog(data, month)?;
    info!(
        "Resolved {} of {} resources for venue {} in {}-{:02}",
        catalog.len(),
        total,
        venue_id,
        year,
        month
    );

    Ok(catalog)
}
