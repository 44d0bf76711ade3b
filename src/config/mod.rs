//! Station configuration for jts-bridge
//!
//! The bridge carries four station settings into every tracking call: the
//! operation id, the line-segment id, the operator/station identifier, and
//! the simulation toggle. They are loaded exactly once at process start and
//! passed by reference into the dispatcher; nothing here is global or
//! mutable afterwards.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use loader::ConfigLoader;

/// Station settings carried into every tracking call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Tracking-system operation identifier for this test step
    pub operation_id: String,

    /// Line-segment identifier of the station
    pub line_segment_id: String,

    /// Operator/station identifier reported as "processed by"
    pub processed_by: String,

    /// Simulation toggle; the literal value "on" (any case) enables it
    pub simulation_mode: String,

    /// External tracking CLI invoked when simulation is off
    pub tracker_command: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            operation_id: String::new(),
            line_segment_id: String::new(),
            processed_by: String::new(),
            simulation_mode: "off".to_string(),
            tracker_command: "jts-tracking".to_string(),
        }
    }
}

impl ProcessConfig {
    /// Whether simulation mode is enabled
    ///
    /// Only the literal value `"on"`, compared case-insensitively, enables
    /// simulation; everything else (including absence) leaves it off.
    pub fn simulation_on(&self) -> bool {
        self.simulation_mode.eq_ignore_ascii_case("on")
    }

    /// Apply overrides from a set of environment-style variables
    ///
    /// Recognized keys: `JTS_OPERATION_ID`, `JTS_LINE_SEGMENT_ID`,
    /// `JTS_PROCESSED_BY`, `JTS_SIMULATION_MODE`, `JTS_TRACKER_COMMAND`.
    /// Unset keys leave the current value in place.
    pub fn apply_overrides(&mut self, vars: &HashMap<String, String>) {
        if let Some(value) = vars.get("JTS_OPERATION_ID") {
            self.operation_id = value.clone();
        }
        if let Some(value) = vars.get("JTS_LINE_SEGMENT_ID") {
            self.line_segment_id = value.clone();
        }
        if let Some(value) = vars.get("JTS_PROCESSED_BY") {
            self.processed_by = value.clone();
        }
        if let Some(value) = vars.get("JTS_SIMULATION_MODE") {
            self.simulation_mode = value.clone();
        }
        if let Some(value) = vars.get("JTS_TRACKER_COMMAND") {
            self.tracker_command = value.clone();
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        let vars: HashMap<String, String> = std::env::vars().collect();
        self.apply_overrides(&vars);
    }
}
