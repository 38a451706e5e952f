use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only manages configuration or prints
/// metadata and must not query the booking API.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.tool_definition
}

/// Free court slots lookup
///
/// Prints, as JSON, every free hourly slot of every court of a venue for one
/// month. Keys are court names in sorted order.
///
/// Example: court_slots --court-name 양재 --year 2025 --month 4
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Venue name, e.g. "양재" or "maeheon".
    #[arg(long = "court-name", short = 'c', help_heading = "Query")]
    pub court_name: Option<String>,

    /// Four digit year, e.g. 2025.
    #[arg(long = "year", short = 'y', help_heading = "Query")]
    pub year: Option<String>,

    /// Month number 1-12.
    #[arg(long = "month", short = 'm', help_heading = "Query")]
    pub month: Option<String>,

    /// Print courts whose schedule could not be fetched to stderr.
    #[arg(long = "show-failures", help_heading = "Query")]
    pub show_failures: bool,

    /// Print the tool's JSON schema and exit.
    #[arg(long = "tool-definition", help_heading = "Info")]
    pub tool_definition: bool,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr. Stdout stays reserved for the JSON result.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Query arguments in tool form. Absent flags are left out so validation
    /// reports them as missing.
    pub fn tool_arguments(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        if let Some(court_name) = &self.court_name {
            map.insert("courtName".to_string(), court_name.clone().into());
        }
        if let Some(year) = &self.year {
            map.insert("year".to_string(), year.clone().into());
        }
        if let Some(month) = &self.month {
            map.insert("month".to_string(), month.clone().into());
        }
        serde_json::Value::Object(map)
    }
}
