//! Tracking-system capability
//!
//! The bridge never talks to the tracking backend directly; it goes through
//! the [`Tracking`] trait so the dispatcher can be exercised without a live
//! backend. Simulation mode is just another implementation of the
//! capability ([`SimulatedTracker`]); the real binding ([`SdkTracker`])
//! drives the vendor tracking CLI.

pub mod sdk;
pub mod simulated;

use crate::error::Result;

pub use sdk::SdkTracker;
pub use simulated::SimulatedTracker;

/// Reply from registering a unit with the tracking system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReply {
    /// Whether the underlying call itself went through
    pub accepted: bool,
    /// Response text from the tracking system
    pub response: String,
    /// Correlation id assigned to the registered unit
    pub correlation_id: String,
}

/// Reply from reporting a unit's test outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReply {
    /// Whether the underlying call itself went through
    pub accepted: bool,
    /// Response text from the tracking system
    pub response: String,
}

/// Operations the bridge consumes from the tracking system
pub trait Tracking {
    /// Register a unit under test; the reply carries the correlation id the
    /// station must present when reporting the outcome.
    fn initialize_process(
        &self,
        serial: &str,
        operation_id: &str,
        line_segment_id: &str,
        processed_by: &str,
    ) -> Result<InitReply>;

    /// Report the pass/fail outcome for a previously registered unit.
    fn set_operation_output(
        &self,
        correlation_id: &str,
        output_serial: &str,
        result_code: &str,
        processed_by: &str,
    ) -> Result<OutputReply>;
}

/// Whether a tracking response is error-flagged
///
/// The tracking system has no structured status code; the sole failure
/// signal is the substring "error" anywhere in the response text,
/// case-insensitively.
pub fn response_flags_error(response: &str) -> bool {
    response.to_lowercase().contains("error")
}
