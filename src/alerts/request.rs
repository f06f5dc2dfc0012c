// SPDX-License-Identifier: MPL-2.0
//! Alert requests accepted by the service.

use crate::config::DEFAULT_TIMEOUT_MS;
use crate::domain::alert::{Direction, Position, Severity};

/// Everything a caller specifies when asking for an alert.
///
/// Built with a fluent API; unset fields take the keyword defaults
/// (5 s timeout, left-to-right, bottom-right).
///
/// ```
/// use iced_alerts::alerts::AlertRequest;
/// use iced_alerts::domain::alert::{Position, Severity};
///
/// let request = AlertRequest::new(Severity::Error, "Upload failed")
///     .title("Sync")
///     .timeout_ms(8000)
///     .position(Position::TopRight);
///
/// assert_eq!(request.title.as_deref(), Some("Sync"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    pub severity: Severity,
    pub message: String,
    pub title: Option<String>,
    pub timeout_ms: u64,
    pub direction: Direction,
    pub position: Position,
    /// `None` lets the entry point pick its own default.
    pub show_countdown: Option<bool>,
}

impl AlertRequest {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            title: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            direction: Direction::default(),
            position: Position::default(),
            show_countdown: None,
        }
    }

    /// Builds a request from loosely typed input.
    ///
    /// Unknown severity, direction or position names fall back to their
    /// defaults; an empty title counts as no title.
    pub fn from_names(
        severity: &str,
        message: impl Into<String>,
        title: &str,
        timeout_ms: u64,
        direction: &str,
        position: &str,
    ) -> Self {
        Self::new(Severity::parse(severity), message)
            .title(title)
            .timeout_ms(timeout_ms)
            .direction(Direction::parse(direction))
            .position(Position::parse(position))
    }

    /// Builds a request the way the automation keywords address alerts:
    /// severity and position by index.
    pub fn from_indices(
        title: &str,
        message: impl Into<String>,
        timeout_ms: u64,
        status_index: usize,
        direction: &str,
        position_index: usize,
    ) -> Self {
        Self::new(Severity::from_index(status_index), message)
            .title(title)
            .timeout_ms(timeout_ms)
            .direction(Direction::parse(direction))
            .position(Position::from_index(position_index))
    }

    /// Sets the title. An empty string clears it.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    /// Sets the auto-dismiss delay. `0` keeps the alert until closed.
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn countdown(mut self, show_countdown: bool) -> Self {
        self.show_countdown = Some(show_countdown);
        self
    }
}
