use super::catalog::ResourceId;
use super::lenient::{lenient, lenient_elements, lenient_f64, lenient_number};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashMap};

/// One price option attached to an hourly record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceEntry {
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One hour of a resource's schedule as reported by the booking API.
///
/// Every typed field is optional and read leniently; anything the projection
/// does not use is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "isBusinessDay", default, deserialize_with = "lenient")]
    pub is_business_day: Option<bool>,
    #[serde(rename = "isUnitBusinessDay", default, deserialize_with = "lenient")]
    pub is_unit_business_day: Option<bool>,
    #[serde(rename = "unitBookingCount", default, deserialize_with = "lenient_f64")]
    pub unit_booking_count: Option<f64>,
    #[serde(rename = "unitStartTime", default, deserialize_with = "lenient")]
    pub unit_start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_elements")]
    pub prices: Option<Vec<PriceEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HourlyRecord {
    /// Reads one element of the `hourly` list. Elements that are not objects
    /// become an empty record, which is never available.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Price of the first listed price option, if any.
    pub fn first_price(&self) -> Option<&Number> {
        self.prices
            .as_ref()
            .and_then(|prices| prices.first())
            .and_then(|entry| entry.price.as_ref())
    }
}

/// A free hourly slot, the only shape that leaves the crate.
/// Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSlot {
    #[serde(rename = "unitStartTime")]
    pub unit_start_time: String,
    pub available: bool,
    pub price: Number,
}

/// Raw hourly records per successfully fetched resource.
pub type ScheduleMap = BTreeMap<ResourceId, Vec<HourlyRecord>>;

/// Available slots keyed by resource display name.
pub type Timetable = HashMap<String, Vec<AvailableSlot>>;

/// A schedule fetch that did not produce data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchFailure {
    pub resource_id: ResourceId,
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleData {
    pub schedule: ScheduleNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleNode {
    #[serde(rename = "bizItemSchedule")]
    pub biz_item_schedule: BizItemSchedule,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BizItemSchedule {
    #[serde(default)]
    pub hourly: Option<Value>,
}

impl BizItemSchedule {
    /// Hourly records in API order; a missing or non-list field yields none.
    pub fn into_hourly_records(self) -> Vec<HourlyRecord> {
        match self.hourly {
            Some(Value::Array(items)) => items.into_iter().map(HourlyRecord::from_value).collect(),
            _ => Vec::new(),
        }
    }
}
