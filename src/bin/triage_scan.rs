//! Triage Scan - CLI entry point
//!
//! Reads one message (argv or stdin), runs both detectors and prints the
//! triage report as JSON. Model artifacts are loaded from the configured
//! directory when present; otherwise the heuristics carry the verdict.

use std::io::Read;
use std::path::Path;

use triage_core::logic::model::REGISTRY;
use triage_core::{constants, Detector};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let models_dir = constants::models_dir();
    match REGISTRY.load_artifacts(Path::new(&models_dir)) {
        Ok(()) => log::info!("Model artifacts loaded from {}", models_dir),
        Err(e) => log::info!("{} - using heuristics with neutral ML default", e),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = if args.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            log::error!("failed to read stdin: {}", e);
            std::process::exit(1);
        }
        buffer
    } else {
        args.join(" ")
    };

    let detector = Detector::new();
    let report = detector.analyze(text.trim());

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
