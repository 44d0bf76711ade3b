//! Operator notification surface
//!
//! The original station tooling raised GUI popups for the operator; popup
//! rendering itself is outside this crate, so the surface is a trait the
//! dispatcher fires into and forgets. The default implementation frames the
//! message on stderr where the station log collector picks it up.

use std::fmt;

/// How prominently a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message (blue popup on the original surface)
    Info,
    /// Error message (red popup on the original surface)
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Requested popup dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSize {
    pub width: u32,
    pub height: u32,
}

impl PopupSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Size used for error popups
pub const ERROR_POPUP: PopupSize = PopupSize::new(800, 600);

/// Size used for informational display-msg popups
pub const INFO_POPUP: PopupSize = PopupSize::new(900, 500);

/// Operator-visible notification sink; fire-and-forget
pub trait Notify {
    fn show(&self, title: &str, message: &str, severity: Severity, size: PopupSize);
}

/// Notifier that frames the message on stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notify for ConsoleNotifier {
    fn show(&self, title: &str, message: &str, severity: Severity, size: PopupSize) {
        info!(
            "notifying operator ({}, {}x{}): {}",
            severity, size.width, size.height, title
        );
        eprintln!("==================================================");
        eprintln!("[{}] {}", severity, title);
        eprintln!("--------------------------------------------------");
        for line in message.lines() {
            eprintln!("  {}", line);
        }
        eprintln!("==================================================");
    }
}
