pub mod aggregator;
pub mod catalog;
mod fetch_utils;
pub mod http_client;
pub mod schedule;
pub mod urls;

pub use aggregator::{AggregateOutcome, fetch_all};
pub use catalog::{filter_catalog, resolve_resources};
pub use http_client::create_http_client_with_timeout;
pub use schedule::{ScheduleQuery, fetch_schedule};
pub use urls::build_graphql_url;
