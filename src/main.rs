//! VAS Analytics - Batch Entry Point
//!
//! Loads a CSV of VAS logs, runs the pipeline and prints the three results
//! as JSON on stdout. The interactive dashboard consumes the same library
//! API; this binary covers batch and scripting use.

use std::process::ExitCode;

use vas_analytics_core::constants::DEFAULT_WINDOW_HOURS;
use vas_analytics_core::{dataset, pipeline, Config};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: vas-analytics-core <csv-path> [service] [window-hours]");
        return ExitCode::FAILURE;
    };
    let service = args.get(2).map(String::as_str).unwrap_or("All");
    let window_hours = match args.get(3).map(|v| v.parse::<u32>()) {
        Some(Ok(hours)) if hours > 0 => hours,
        Some(_) => {
            eprintln!("window-hours must be a positive integer");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_WINDOW_HOURS,
    };

    log::info!(
        "Starting VAS analytics run for {} ({}h window)",
        service,
        window_hours
    );

    let config = Config::from_env();
    let result = dataset::load_csv(path)
        .and_then(|records| pipeline::run(&records, service, window_hours, &config));

    match result {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize results: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
