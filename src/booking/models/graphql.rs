use serde::{Deserialize, Serialize};

/// Body of a GraphQL POST to the booking API.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V: Serialize> {
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    pub variables: V,
    pub query: &'static str,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BizItemsVariables {
    #[serde(rename = "withTypeValues")]
    pub with_type_values: bool,
    #[serde(rename = "withReviewStat")]
    pub with_review_stat: bool,
    #[serde(rename = "withBookedCount")]
    pub with_booked_count: bool,
    #[serde(rename = "withClosedBizItem")]
    pub with_closed_biz_item: bool,
    pub input: BizItemsInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct BizItemsInput {
    #[serde(rename = "businessId")]
    pub business_id: String,
    pub lang: &'static str,
    pub projections: &'static str,
}

impl BizItemsVariables {
    pub fn for_business(business_id: i64) -> Self {
        BizItemsVariables {
            with_type_values: false,
            with_review_stat: false,
            with_booked_count: false,
            with_closed_biz_item: false,
            input: BizItemsInput {
                business_id: business_id.to_string(),
                lang: "ko",
                projections: "RESOURCE",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleVariables {
    #[serde(rename = "scheduleParams")]
    pub schedule_params: ScheduleParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleParams {
    #[serde(rename = "businessTypeId")]
    pub business_type_id: i64,
    #[serde(rename = "businessId")]
    pub business_id: String,
    #[serde(rename = "bizItemId")]
    pub biz_item_id: String,
    #[serde(rename = "startDateTime")]
    pub start_date_time: String,
    #[serde(rename = "endDateTime")]
    pub end_date_time: String,
    #[serde(rename = "fixedTime")]
    pub fixed_time: bool,
    #[serde(rename = "includesHolidaySchedules")]
    pub includes_holiday_schedules: bool,
}

/// Catalog query; only the fields the resolver reads are selected.
pub const BIZ_ITEMS_QUERY: &str = "query bizItems($input: BizItemsParams, $withTypeValues: Boolean = false, $withReviewStat: Boolean = false, $withBookedCount: Boolean = false) {
  bizItems(input: $input) {
    id
    businessId
    bizItemId
    bizItemType
    name
    startDate
    endDate
    isClosedBooking
    __typename
  }
}";

pub const SCHEDULE_QUERY: &str = "query schedule($scheduleParams: ScheduleParams) {
  schedule(input: $scheduleParams) {
    bizItemSchedule {
      hourly {
        isBusinessDay
        isSaleDay
        isUnitBusinessDay
        isUnitSaleDay
        isHoliday
        unitStock
        unitBookingCount
        bookingCount
        stock
        duration
        minBookingCount
        maxBookingCount
        unitStartTime
        unitStartDateTime
        slotId
        prices {
          isDefault
          priceId
          slotId
          scheduleId
          name
          priceTypeCode
          price
          normalPrice
          order
          bookingCount
          __typename
        }
        __typename
      }
      __typename
    }
    __typename
  }
}";
