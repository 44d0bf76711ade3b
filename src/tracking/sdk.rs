//! Vendor tracking CLI binding
//!
//! The real tracking backend is reached through the vendor's command-line
//! client rather than a linked library. The bridge invokes it once per
//! call, passing the same positional arguments the SDK takes, and reads the
//! reply from stdout: line 1 is the response text, line 2 (initialize only)
//! the correlation id. The process exit status maps to the call's accepted
//! flag.

use super::{InitReply, OutputReply, Tracking};
use crate::error::{Error, Result};
use std::process::Command;

/// Tracking implementation that drives the external tracking CLI
#[derive(Debug, Clone)]
pub struct SdkTracker {
    /// Path or name of the tracking CLI executable
    command: String,
}

impl SdkTracker {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Run the tracking CLI with the given arguments, capturing stdout
    fn run(&self, args: &[&str]) -> Result<(bool, Vec<String>)> {
        info!("calling tracking CLI '{}'", self.command);
        let output = Command::new(&self.command)
            .args(args)
            .output()
            .map_err(|e| Error::TrackerSpawnFailed {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if !output.stderr.is_empty() {
            debug!(
                "tracking CLI stderr: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines = stdout.lines().map(str::to_string).collect();
        Ok((output.status.success(), lines))
    }
}

impl Tracking for SdkTracker {
    fn initialize_process(
        &self,
        serial: &str,
        operation_id: &str,
        line_segment_id: &str,
        processed_by: &str,
    ) -> Result<InitReply> {
        let (accepted, lines) = self.run(&[
            "initialize-process",
            serial,
            operation_id,
            line_segment_id,
            processed_by,
        ])?;

        // initialize replies carry the response text and the correlation id
        // on separate lines; anything shorter is unusable.
        if lines.len() < 2 {
            return Err(Error::TrackerProtocol {
                reason: format!(
                    "expected response and correlation id lines, got {} line(s)",
                    lines.len()
                ),
            });
        }

        Ok(InitReply {
            accepted,
            response: lines[0].clone(),
            correlation_id: lines[1].clone(),
        })
    }

    fn set_operation_output(
        &self,
        correlation_id: &str,
        output_serial: &str,
        result_code: &str,
        processed_by: &str,
    ) -> Result<OutputReply> {
        let (accepted, lines) = self.run(&[
            "set-operation-output",
            correlation_id,
            output_serial,
            result_code,
            processed_by,
        ])?;

        let response = match lines.first() {
            Some(line) => line.clone(),
            None => {
                return Err(Error::TrackerProtocol {
                    reason: "expected a response line, got empty output".to_string(),
                })
            }
        };

        Ok(OutputReply { accepted, response })
    }
}
