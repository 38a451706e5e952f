pub mod catalog;
pub mod graphql;
pub mod lenient;
pub mod schedule;

pub use catalog::{CatalogData, CatalogItem, ResourceCatalog, ResourceId};
pub use graphql::{
    BizItemsVariables, GraphQlError, GraphQlRequest, GraphQlResponse, ScheduleParams,
    ScheduleVariables,
};
pub use schedule::{
    AvailableSlot, BizItemSchedule, FetchFailure, HourlyRecord, PriceEntry, ScheduleData,
    ScheduleMap, Timetable,
};
