// src/main.rs
use clap::Parser;
use court_slots::booking::api::create_http_client_with_timeout;
use court_slots::cli::{Args, is_config_operation};
use court_slots::logging::setup_logging;
use court_slots::{AppError, Config, ToolArguments, get_available_time_slots, tool_definition};

/// Applies `--config`, `--set-log-file` and `--clear-log-file` to the stored config.
async fn update_config(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_stored().await?;

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if is_config_operation(&args) {
        if args.tool_definition {
            let definition = serde_json::to_string_pretty(&tool_definition())
                .map_err(AppError::OutputSerialize)?;
            println!("{definition}");
            return Ok(());
        }
        if args.list_config {
            Config::display().await?;
            return Ok(());
        }
        return update_config(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Argument errors are reported before any request is made
    let tool_args = ToolArguments::from_json(&args.tool_arguments())?;

    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let report = get_available_time_slots(&client, &config, &tool_args).await?;

    println!("{}", report.to_canonical_json()?);

    if args.show_failures {
        for failure in &report.failures {
            eprintln!("resource {} not fetched: {}", failure.resource_id, failure.reason);
        }
    }

    Ok(())
}
