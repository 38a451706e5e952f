//! Court Slots Library
//!
//! This library resolves the courts a venue lists for a month on the booking
//! GraphQL API, fetches every court's hourly schedule concurrently and keeps
//! the free slots. The result is rendered as JSON with court names in sorted
//! order, the text of the `getAvailableTimeSlot` tool.
//!
//! # Examples
//!
//! ```rust,no_run
//! use court_slots::booking::api::create_http_client_with_timeout;
//! use court_slots::error::AppError;
//! use court_slots::{Config, call_tool};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let arguments = json!({"courtName": "양재", "year": "2025", "month": "4"});
//!     let text = call_tool(&client, &config, &arguments).await?;
//!     println!("{text}");
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod tool;

// Re-export commonly used types for convenience
pub use booking::models::{AvailableSlot, FetchFailure, ResourceId, Timetable};
pub use config::Config;
pub use error::AppError;
pub use tool::{
    AvailabilityReport, TOOL_NAME, ToolArguments, call_tool, get_available_time_slots,
    tool_definition,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
