//! jts-bridge - test-station adapter for the JTS unit-tracking service
//!
//! One-shot process entry: initialize logging, load the station
//! configuration, dispatch the single received command, and exit cleanly.
//! The exit code is always 0; callers read the mailbox files and logs, not
//! the exit status.

use std::env;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use jts_bridge::config::ConfigLoader;
use jts_bridge::mailbox::default_mailbox_dir;
use jts_bridge::{
    ConsoleNotifier, Dispatcher, Invocation, Outcome, ProcessConfig, SdkTracker,
    SimulatedTracker, Tracking, NAME, VERSION,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Executing {} v{}...", NAME, VERSION);

    let config = match ConfigLoader::new().load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            let mut config = ProcessConfig::default();
            config.apply_env();
            config
        }
    };
    info!(
        "Simulation Mode: {}",
        if config.simulation_on() { "on" } else { "off" }
    );

    let argv: Vec<String> = env::args().skip(1).collect();
    let invocation = match Invocation::parse(&argv) {
        Some(invocation) => invocation,
        None => {
            warn!("no command received");
            info!("Execution ends...");
            return;
        }
    };

    // Simulation mode is just another implementation of the capability.
    let tracker: Box<dyn Tracking> = if config.simulation_on() {
        Box::new(SimulatedTracker::new())
    } else {
        Box::new(SdkTracker::new(config.tracker_command.clone()))
    };
    let notifier = ConsoleNotifier::new();

    let mailbox_dir = default_mailbox_dir();
    let dispatcher = Dispatcher::new(&config, tracker.as_ref(), &notifier, &mailbox_dir);

    match dispatcher.dispatch(&invocation) {
        Outcome::Completed => info!("command completed"),
        Outcome::Ignored => warn!("command ignored"),
        Outcome::Failed(failure) => warn!("command failed: {:?}", failure),
    }

    info!("Execution ends...");
}
