//! Per-resource schedule fetching.

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::post_graphql;
use super::urls::build_graphql_url;
use crate::booking::dates::MonthRange;
use crate::booking::models::graphql::SCHEDULE_QUERY;
use crate::booking::models::{
    HourlyRecord, ResourceId, ScheduleData, ScheduleParams, ScheduleVariables,
};
use crate::config::Config;
use crate::constants::operations;
use crate::error::AppError;

/// Venue and date range shared by every schedule fetch of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub business_type_id: i64,
    pub business_id: i64,
    pub range: MonthRange,
}

impl ScheduleQuery {
    fn variables_for(&self, resource_id: ResourceId) -> ScheduleVariables {
        ScheduleVariables {
            schedule_params: ScheduleParams {
                business_type_id: self.business_type_id,
                business_id: self.business_id.to_string(),
                biz_item_id: resource_id.to_string(),
                start_date_time: self.range.start_date_time(),
                end_date_time: self.range.end_date_time(),
                fixed_time: true,
                includes_holiday_schedules: true,
            },
        }
    }
}

/// Fetches the hourly records of one resource for the query's date range.
///
/// An otherwise valid response without an `hourly` list yields no records.
#[instrument(skip(client, config, query), fields(business_id = query.business_id))]
pub async fn fetch_schedule(
    client: &Client,
    config: &Config,
    query: &ScheduleQuery,
    resource_id: ResourceId,
) -> Result<Vec<HourlyRecord>, AppError> {
    let url = build_graphql_url(&config.api_domain, operations::SCHEDULE);

    let data: ScheduleData = post_graphql(
        client,
        &url,
        operations::SCHEDULE,
        query.variables_for(resource_id),
        SCHEDULE_QUERY,
    )
    .await?;

    let records = data.schedule.biz_item_schedule.into_hourly_records();
    debug!("Resource {} returned {} hourly records", resource_id, records.len());
    Ok(records)
}
