//! Command parsing and dispatch
//!
//! Each process invocation carries exactly one command token plus its
//! positional arguments. The dispatcher validates argument counts
//! (advisorily), reads and writes the mailbox files, and drives the
//! tracking capability, returning a tagged [`Outcome`] instead of relying
//! on a blanket catch. No outcome ever aborts the process; the entry point
//! logs it and exits cleanly.

use crate::config::ProcessConfig;
use crate::mailbox::{MailboxFile, RESULT_MAILBOX, STATUS_MAILBOX, UUID_MAILBOX};
use crate::notify::{Notify, Severity, ERROR_POPUP, INFO_POPUP};
use crate::tracking::{response_flags_error, Tracking};
use std::path::Path;

/// The sub-commands the bridge understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Register a unit with the tracking system
    Initialize,
    /// Report a unit's test outcome
    SetOutput,
    /// Show an operator message
    DisplayMsg,
    /// Persist the P/F verdict derived from an error count
    SetResult,
}

impl Command {
    /// Parse a command token, case-insensitively, with an optional `--`
    /// prefix. Unknown tokens map to `None`.
    pub fn parse(token: &str) -> Option<Self> {
        let name = token.strip_prefix("--").unwrap_or(token);
        match name.to_lowercase().as_str() {
            "initialize" => Some(Command::Initialize),
            "set-output" => Some(Command::SetOutput),
            "display-msg" => Some(Command::DisplayMsg),
            "set-result" => Some(Command::SetResult),
            _ => None,
        }
    }

    /// Expected positional argument count, where fixed
    pub fn expected_args(&self) -> Option<usize> {
        match self {
            Command::Initialize => Some(1),
            Command::SetOutput => Some(2),
            Command::DisplayMsg => None,
            Command::SetResult => Some(1),
        }
    }
}

/// One received command: the raw token and its positional arguments
#[derive(Debug, Clone)]
pub struct Invocation {
    pub token: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Split the argv tail into command token and arguments
    ///
    /// Returns `None` for an empty tail (nothing to dispatch).
    pub fn parse(argv: &[String]) -> Option<Self> {
        let (token, args) = argv.split_first()?;
        Some(Self {
            token: token.clone(),
            args: args.to_vec(),
        })
    }

    /// The recognized command, if the token names one
    pub fn command(&self) -> Option<Command> {
        Command::parse(&self.token)
    }
}

/// Result of dispatching one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The handler ran to completion
    Completed,
    /// The token named no known command; nothing was touched
    Ignored,
    /// The handler gave up part-way; mailbox state reflects how far it got
    Failed(Failure),
}

/// Why a command handler gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A required positional argument was not supplied
    MissingArgument { command: &'static str, index: usize },
    /// The set-output result code was neither "F" nor "P"
    InvalidResultCode { received: String },
    /// The set-result error count did not parse as an integer
    InvalidErrorCount { received: String },
    /// set-output found no correlation id in the UUID mailbox
    NoCorrelationId,
    /// The tracking system answered with an error-flagged response
    ErrorResponse,
    /// The tracking call itself could not be made
    TrackerCall(String),
}

/// Routes one invocation over the mailbox files and the tracking capability
pub struct Dispatcher<'a> {
    config: &'a ProcessConfig,
    tracker: &'a dyn Tracking,
    notifier: &'a dyn Notify,
    uuid_box: MailboxFile,
    status_box: MailboxFile,
    result_box: MailboxFile,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher with its three mailboxes rooted in `mailbox_dir`
    pub fn new(
        config: &'a ProcessConfig,
        tracker: &'a dyn Tracking,
        notifier: &'a dyn Notify,
        mailbox_dir: &Path,
    ) -> Self {
        Self {
            config,
            tracker,
            notifier,
            uuid_box: MailboxFile::new(mailbox_dir, UUID_MAILBOX),
            status_box: MailboxFile::new(mailbox_dir, STATUS_MAILBOX),
            result_box: MailboxFile::new(mailbox_dir, RESULT_MAILBOX),
        }
    }

    /// Route the invocation to its handler
    pub fn dispatch(&self, invocation: &Invocation) -> Outcome {
        info!("received command: {}", invocation.token);
        debug!("received args: {}", invocation.args.join(", "));
        match invocation.command() {
            Some(Command::Initialize) => self.initialize(&invocation.args),
            Some(Command::SetOutput) => self.set_output(&invocation.args),
            Some(Command::DisplayMsg) => self.display_msg(&invocation.args),
            Some(Command::SetResult) => self.set_result(&invocation.args),
            None => {
                warn!(
                    "invalid args: {}, {}",
                    invocation.token,
                    invocation.args.join(", ")
                );
                Outcome::Ignored
            }
        }
    }

    /// Register a unit and hand its correlation id to the caller
    fn initialize(&self, args: &[String]) -> Outcome {
        self.validate_arity(Command::Initialize, args.len());
        let serial = match args.first() {
            Some(serial) => serial,
            None => return self.missing_argument("initialize", 0),
        };

        let reply = match self.tracker.initialize_process(
            serial,
            &self.config.operation_id,
            &self.config.line_segment_id,
            &self.config.processed_by,
        ) {
            Ok(reply) => reply,
            Err(e) => {
                error!("initialize-process call failed: {}", e);
                return Outcome::Failed(Failure::TrackerCall(e.to_string()));
            }
        };

        info!(
            "call status result: {}",
            if reply.accepted { "Successful" } else { "Failed" }
        );
        info!("received uuid: '{}'", reply.correlation_id);
        info!("received response: '{}'", reply.response);

        if response_flags_error(&reply.response) {
            warn!("error received");
            debug!(
                "args that raised the error: serial: {}, operation: {}, segment: {}, processed by: {}",
                serial, self.config.operation_id, self.config.line_segment_id, self.config.processed_by
            );
            let message = format!("{}\n{}", reply.response, reply.correlation_id);
            self.notifier.show(
                "error response from tracking initialize-process",
                &message,
                Severity::Error,
                ERROR_POPUP,
            );
            self.uuid_box.clear();
            self.status_box.write("FAIL");
            Outcome::Failed(Failure::ErrorResponse)
        } else {
            self.uuid_box.write(&reply.correlation_id);
            self.status_box.write("PASS");
            Outcome::Completed
        }
    }

    /// Report the unit's outcome under the stored correlation id
    fn set_output(&self, args: &[String]) -> Outcome {
        self.validate_arity(Command::SetOutput, args.len());
        let outcome = self.submit_output(args);
        // The correlation id is consumed exactly once: whatever happened
        // above, the mailbox must not survive this invocation.
        self.uuid_box.delete();
        outcome
    }

    fn submit_output(&self, args: &[String]) -> Outcome {
        let uuid = self.uuid_box.read();
        let output_serial = match args.first() {
            Some(serial) => serial,
            None => return self.missing_argument("set-output", 0),
        };
        let result_code = match args.get(1) {
            Some(code) => code,
            None => return self.missing_argument("set-output", 1),
        };

        if result_code != "F" && result_code != "P" {
            warn!(
                "invalid operation result received, expected: F or P, received: {}",
                result_code
            );
            return Outcome::Failed(Failure::InvalidResultCode {
                received: result_code.clone(),
            });
        }

        let uuid = match uuid {
            Some(uuid) => uuid,
            None => {
                warn!("failed to read the correlation id mailbox or its format is invalid");
                return Outcome::Failed(Failure::NoCorrelationId);
            }
        };

        let reply = match self.tracker.set_operation_output(
            &uuid,
            output_serial,
            result_code,
            &self.config.processed_by,
        ) {
            Ok(reply) => reply,
            Err(e) => {
                error!("set-operation-output call failed: {}", e);
                return Outcome::Failed(Failure::TrackerCall(e.to_string()));
            }
        };

        info!(
            "call status result: {}",
            if reply.accepted { "Successful" } else { "Failed" }
        );
        info!("response from call: {}", reply.response);

        if response_flags_error(&reply.response) {
            warn!("error received");
            debug!(
                "args that raised the error: correlation id: {}, output serial: {}, processed by: {}",
                uuid, output_serial, self.config.processed_by
            );
            self.notifier.show(
                "error response from tracking set-operation-output",
                &reply.response,
                Severity::Error,
                ERROR_POPUP,
            );
            Outcome::Failed(Failure::ErrorResponse)
        } else {
            Outcome::Completed
        }
    }

    /// Forward the joined arguments to the operator as an info popup
    fn display_msg(&self, args: &[String]) -> Outcome {
        let message = args.join(", ");
        info!("Displaying: '{}'...", message);
        self.notifier
            .show("debug msg", &message, Severity::Info, INFO_POPUP);
        Outcome::Completed
    }

    /// Derive the P/F verdict from an error count and persist it
    fn set_result(&self, args: &[String]) -> Outcome {
        self.validate_arity(Command::SetResult, args.len());
        let raw = match args.first() {
            Some(raw) => raw,
            None => return self.missing_argument("set-result", 0),
        };

        let error_count: i64 = match raw.parse() {
            Ok(count) => count,
            Err(e) => {
                error!("invalid error count '{}': {}", raw, e);
                return Outcome::Failed(Failure::InvalidErrorCount {
                    received: raw.clone(),
                });
            }
        };

        let verdict = if error_count > 0 { "F" } else { "P" };
        info!("generating '{}' result...", verdict);
        self.result_box.clear();
        self.result_box.write(verdict);
        Outcome::Completed
    }

    /// Advisory argument-count check: a mismatch is logged, never fatal,
    /// and execution continues with whatever arguments are present.
    fn validate_arity(&self, command: Command, received: usize) {
        if let Some(expected) = command.expected_args() {
            if expected != received {
                warn!("expected: {} argument(s), received: {}", expected, received);
            } else {
                info!("argument count matches");
            }
        }
    }

    fn missing_argument(&self, command: &'static str, index: usize) -> Outcome {
        error!("'{}' argument {} is missing", command, index);
        Outcome::Failed(Failure::MissingArgument { command, index })
    }
}
