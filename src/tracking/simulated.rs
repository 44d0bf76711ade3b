//! Simulated tracking backend
//!
//! Used when the station runs with simulation mode on: no network or
//! external process is ever touched, and fixed success replies keep the
//! downstream mailbox/dispatch logic on the same code path it takes against
//! the real backend.

use super::{InitReply, OutputReply, Tracking};
use crate::error::Result;

/// Correlation id handed out by the simulated backend
pub const SIMULATED_CORRELATION_ID: &str = "mensaje de prueba";

/// Response text of a simulated initialize call
pub const SIMULATED_INIT_RESPONSE: &str = "simulated init response for test";

/// Response text of a simulated set-output call
pub const SIMULATED_OUTPUT_RESPONSE: &str = "simulated out response for test";

/// Tracking implementation that fabricates fixed success replies
#[derive(Debug, Default)]
pub struct SimulatedTracker;

impl SimulatedTracker {
    pub fn new() -> Self {
        Self
    }
}

impl Tracking for SimulatedTracker {
    fn initialize_process(
        &self,
        serial: &str,
        _operation_id: &str,
        _line_segment_id: &str,
        _processed_by: &str,
    ) -> Result<InitReply> {
        info!("simulating connection for serial '{}'...", serial);
        Ok(InitReply {
            accepted: true,
            response: SIMULATED_INIT_RESPONSE.to_string(),
            correlation_id: SIMULATED_CORRELATION_ID.to_string(),
        })
    }

    fn set_operation_output(
        &self,
        correlation_id: &str,
        _output_serial: &str,
        _result_code: &str,
        _processed_by: &str,
    ) -> Result<OutputReply> {
        info!("simulating connection for correlation id '{}'...", correlation_id);
        Ok(OutputReply {
            accepted: true,
            response: SIMULATED_OUTPUT_RESPONSE.to_string(),
        })
    }
}
