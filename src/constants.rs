//! Application-wide constants and configuration defaults

/// Default base URL of the booking API
pub const DEFAULT_API_DOMAIN: &str = "https://booking.naver.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Default timeout for a single resource schedule fetch in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 15;

/// Default upper bound for one whole tool invocation in seconds
pub const DEFAULT_INVOCATION_DEADLINE_SECONDS: u64 = 60;

/// Default number of schedule fetches allowed in flight at once
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 16;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Number of response body characters kept in error messages and logs
pub const ERROR_BODY_PREVIEW_CHARS: usize = 512;

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_DOMAIN: &str = "COURT_SLOTS_API_DOMAIN";
    pub const LOG_FILE: &str = "COURT_SLOTS_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "COURT_SLOTS_HTTP_TIMEOUT";
    pub const FETCH_TIMEOUT: &str = "COURT_SLOTS_FETCH_TIMEOUT";
    pub const MAX_CONCURRENCY: &str = "COURT_SLOTS_MAX_CONCURRENCY";
}

/// GraphQL operation names understood by the booking API
pub mod operations {
    pub const BIZ_ITEMS: &str = "bizItems";
    pub const SCHEDULE: &str = "schedule";
}

/// Localized suffix appended to the month number in resource names ("4월")
pub const MONTH_LABEL_SUFFIX: &str = "월";

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "court_slots";

/// Default log file name
pub const LOG_FILE_NAME: &str = "court_slots.log";
