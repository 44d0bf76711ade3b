//! Integration tests for the happy-path command flows
//!
//! Each test drives the public dispatch surface the binary uses, with the
//! simulated tracking backend and mailboxes rooted in a temp directory.

use jts_bridge::notify::PopupSize;
use jts_bridge::tracking::{simulated, InitReply, OutputReply};
use jts_bridge::{
    Dispatcher, Failure, Invocation, MailboxFile, Notify, Outcome, ProcessConfig, Severity,
    SimulatedTracker, Tracking,
};
use std::cell::RefCell;
use std::path::Path;
use tempfile::TempDir;

const UUID_MAILBOX: &str = "jts_temp_received_uuid.txt";
const STATUS_MAILBOX: &str = "jts_init_response_status.txt";
const RESULT_MAILBOX: &str = "jts_status_to_send.txt";

/// Notifier that swallows popups; flows under test should not raise any
struct QuietNotifier;

impl Notify for QuietNotifier {
    fn show(&self, _title: &str, _message: &str, _severity: Severity, _size: PopupSize) {}
}

/// Tracking stub that counts calls and answers like the simulator
#[derive(Default)]
struct CountingTracker {
    init_calls: RefCell<usize>,
    output_calls: RefCell<usize>,
}

impl Tracking for CountingTracker {
    fn initialize_process(
        &self,
        _serial: &str,
        _operation_id: &str,
        _line_segment_id: &str,
        _processed_by: &str,
    ) -> jts_bridge::Result<InitReply> {
        *self.init_calls.borrow_mut() += 1;
        Ok(InitReply {
            accepted: true,
            response: "registered".to_string(),
            correlation_id: "uuid-1".to_string(),
        })
    }

    fn set_operation_output(
        &self,
        _correlation_id: &str,
        _output_serial: &str,
        _result_code: &str,
        _processed_by: &str,
    ) -> jts_bridge::Result<OutputReply> {
        *self.output_calls.borrow_mut() += 1;
        Ok(OutputReply {
            accepted: true,
            response: "recorded".to_string(),
        })
    }
}

fn station_config() -> ProcessConfig {
    ProcessConfig {
        operation_id: "OP-100".to_string(),
        line_segment_id: "LS-1".to_string(),
        processed_by: "station-7".to_string(),
        simulation_mode: "on".to_string(),
        ..ProcessConfig::default()
    }
}

fn mailbox(dir: &Path, name: &str) -> MailboxFile {
    MailboxFile::new(dir, name)
}

fn invoke(dispatcher: &Dispatcher, argv: &[&str]) -> Outcome {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    let invocation = Invocation::parse(&argv).expect("non-empty argv");
    dispatcher.dispatch(&invocation)
}

#[test]
fn test_initialize_in_simulation_writes_uuid_and_pass() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let outcome = invoke(&dispatcher, &["--initialize", "SN123"]);

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        mailbox(dir.path(), UUID_MAILBOX).read(),
        Some(simulated::SIMULATED_CORRELATION_ID.to_string())
    );
    assert_eq!(
        mailbox(dir.path(), STATUS_MAILBOX).read(),
        Some("PASS".to_string())
    );
}

#[test]
fn test_set_output_submits_and_consumes_uuid() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = CountingTracker::default();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let uuid_box = mailbox(dir.path(), UUID_MAILBOX);
    uuid_box.write("abc-123");

    let outcome = invoke(&dispatcher, &["--set-output", "SN123", "P"]);

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(*tracker.output_calls.borrow(), 1);
    assert!(!uuid_box.path().exists(), "uuid mailbox must be consumed");
}

#[test]
fn test_set_output_without_uuid_skips_the_call() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = CountingTracker::default();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let outcome = invoke(&dispatcher, &["--set-output", "SN123", "F"]);

    assert_eq!(outcome, Outcome::Failed(Failure::NoCorrelationId));
    assert_eq!(*tracker.output_calls.borrow(), 0);
    assert!(!mailbox(dir.path(), UUID_MAILBOX).path().exists());
}

#[test]
fn test_set_output_fail_code_is_accepted() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    mailbox(dir.path(), UUID_MAILBOX).write("abc-123");
    let outcome = invoke(&dispatcher, &["--set-output", "SN123", "F"]);
    assert_eq!(outcome, Outcome::Completed);
}

#[test]
fn test_set_result_zero_errors_writes_pass() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let outcome = invoke(&dispatcher, &["--set-result", "0"]);

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        mailbox(dir.path(), RESULT_MAILBOX).read(),
        Some("P".to_string())
    );
}

#[test]
fn test_set_result_with_errors_writes_fail() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let outcome = invoke(&dispatcher, &["--set-result", "3"]);

    assert_eq!(outcome, Outcome::Completed);
    assert_eq!(
        mailbox(dir.path(), RESULT_MAILBOX).read(),
        Some("F".to_string())
    );
}

#[test]
fn test_set_result_overwrites_previous_verdict() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    invoke(&dispatcher, &["--set-result", "3"]);
    invoke(&dispatcher, &["--set-result", "0"]);
    assert_eq!(
        mailbox(dir.path(), RESULT_MAILBOX).read(),
        Some("P".to_string())
    );
}

#[test]
fn test_unknown_command_touches_no_mailbox() {
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = CountingTracker::default();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    let outcome = invoke(&dispatcher, &["--calibrate", "now"]);

    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(*tracker.init_calls.borrow(), 0);
    assert_eq!(*tracker.output_calls.borrow(), 0);
    for name in [UUID_MAILBOX, STATUS_MAILBOX, RESULT_MAILBOX] {
        assert!(!mailbox(dir.path(), name).path().exists(), "'{}' was created", name);
    }
}

#[test]
fn test_full_unit_lifecycle() {
    // initialize, then report the outcome, as the station does per unit.
    let dir = TempDir::new().unwrap();
    let config = station_config();
    let tracker = SimulatedTracker::new();
    let notifier = QuietNotifier;
    let dispatcher = Dispatcher::new(&config, &tracker, &notifier, dir.path());

    assert_eq!(invoke(&dispatcher, &["--initialize", "SN123"]), Outcome::Completed);
    assert_eq!(
        invoke(&dispatcher, &["--set-output", "SN123", "P"]),
        Outcome::Completed
    );
    assert_eq!(invoke(&dispatcher, &["--set-result", "0"]), Outcome::Completed);

    assert!(!mailbox(dir.path(), UUID_MAILBOX).path().exists());
    assert_eq!(
        mailbox(dir.path(), STATUS_MAILBOX).read(),
        Some("PASS".to_string())
    );
    assert_eq!(
        mailbox(dir.path(), RESULT_MAILBOX).read(),
        Some("P".to_string())
    );
}
