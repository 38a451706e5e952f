//! The `getAvailableTimeSlot` tool: argument validation and orchestration.

use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use crate::booking::api::{ScheduleQuery, fetch_all, resolve_resources};
use crate::booking::dates::MonthRange;
use crate::booking::models::{FetchFailure, ResourceId, Timetable};
use crate::booking::venues::{Venue, find_venue};
use crate::booking::{build_timetable, serialize_timetable};
use crate::config::Config;
use crate::error::AppError;

pub const TOOL_NAME: &str = "getAvailableTimeSlot";

const ARG_COURT_NAME: &str = "courtName";
const ARG_YEAR: &str = "year";
const ARG_MONTH: &str = "month";

/// Tool description in JSON Schema form, as announced to tool hosts.
pub fn tool_definition() -> Value {
    json!({
        "name": TOOL_NAME,
        "description": "List free hourly court slots for a venue and month",
        "inputSchema": {
            "type": "object",
            "properties": {
                ARG_COURT_NAME: {
                    "type": "string",
                    "description": "Court name. Yangjae/Maeheon"
                },
                ARG_YEAR: {
                    "type": "string",
                    "description": "year of the date"
                },
                ARG_MONTH: {
                    "type": "string",
                    "description": "month of the date"
                }
            },
            "required": [ARG_COURT_NAME, ARG_YEAR, ARG_MONTH]
        }
    })
}

/// Validated tool arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolArguments {
    pub court_name: String,
    pub venue: &'static Venue,
    pub year: i32,
    pub month: u32,
    pub range: MonthRange,
}

fn required_string<'a>(
    args: &'a serde_json::Map<String, Value>,
    name: &str,
) -> Result<&'a str, AppError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(AppError::missing_argument(name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(AppError::invalid_argument_type(name, "string")),
    }
}

impl ToolArguments {
    /// Validates raw tool arguments. Nothing here touches the network.
    pub fn from_json(arguments: &Value) -> Result<Self, AppError> {
        let args = arguments
            .as_object()
            .ok_or_else(|| AppError::invalid_argument_type("arguments", "object"))?;

        let court_name = required_string(args, ARG_COURT_NAME)?;
        let year_raw = required_string(args, ARG_YEAR)?;
        let month_raw = required_string(args, ARG_MONTH)?;

        let year = year_raw
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|y| (1..=9999).contains(y))
            .ok_or_else(|| AppError::invalid_argument_value(ARG_YEAR, year_raw))?;

        let month = month_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::invalid_argument_value(ARG_MONTH, month_raw))?;
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth { month });
        }
        let month = month as u32;

        let venue = find_venue(court_name).ok_or_else(|| AppError::unknown_venue(court_name))?;
        let range = MonthRange::new(year, month)
            .ok_or_else(|| AppError::invalid_argument_value(ARG_YEAR, year_raw))?;

        Ok(ToolArguments {
            court_name: court_name.to_string(),
            venue,
            year,
            month,
            range,
        })
    }
}

/// Outcome of one tool call: free slots plus the resources that could not be fetched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AvailabilityReport {
    pub timetable: Timetable,
    pub failures: Vec<FetchFailure>,
}

impl AvailabilityReport {
    /// Canonical JSON of the timetable, the tool's result text.
    pub fn to_canonical_json(&self) -> Result<String, AppError> {
        serialize_timetable(&self.timetable)
    }

    pub fn failed_resources(&self) -> Vec<ResourceId> {
        self.failures.iter().map(|f| f.resource_id).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves the month's courts, fetches their schedules and keeps the free slots.
///
/// Fails only when the catalog cannot be resolved; individual schedule
/// failures are reported in [`AvailabilityReport::failures`].
#[instrument(
    skip(client, config, args),
    fields(court = %args.court_name, year = args.year, month = args.month)
)]
pub async fn get_available_time_slots(
    client: &Client,
    config: &Config,
    args: &ToolArguments,
) -> Result<AvailabilityReport, AppError> {
    let catalog = resolve_resources(
        client,
        config,
        args.venue.business_id,
        args.year,
        args.month,
    )
    .await?;

    if catalog.is_empty() {
        info!("No resources listed for {}-{:02}", args.year, args.month);
        return Ok(AvailabilityReport::default());
    }

    let query = ScheduleQuery {
        business_type_id: args.venue.business_type_id,
        business_id: args.venue.business_id,
        range: args.range,
    };
    let resource_ids: Vec<ResourceId> = catalog.keys().copied().collect();
    let outcome = fetch_all(client, config, &query, &resource_ids).await;

    if !outcome.failures.is_empty() {
        warn!(
            "{} of {} resources could not be fetched",
            outcome.failures.len(),
            resource_ids.len()
        );
    }

    Ok(AvailabilityReport {
        timetable: build_timetable(&catalog, &outcome.schedules),
        failures: outcome.failures,
    })
}

/// Full tool call: validate raw arguments, run the query, render the result text.
pub async fn call_tool(
    client: &Client,
    config: &Config,
    arguments: &Value,
) -> Result<String, AppError> {
    let args = ToolArguments::from_json(arguments)?;
    let report = get_available_time_slots(client, config, &args).await?;
    report.to_canonical_json()
}
