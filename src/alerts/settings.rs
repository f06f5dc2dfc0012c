// SPDX-License-Identifier: MPL-2.0
//! Resolved settings of an alert service.

use super::request::AlertRequest;
use crate::config::DEFAULT_TIMEOUT_MS;
use crate::domain::alert::{Direction, Position, Severity, StackCapacity};

/// Behavior switches and request defaults of an [`AlertService`](super::AlertService).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSettings {
    /// Maximum alerts per position.
    pub capacity: StackCapacity,
    pub default_timeout_ms: u64,
    pub default_position: Position,
    pub default_direction: Direction,
    /// Install the Escape listener when the first stack is created.
    pub escape_closes_all: bool,
    /// Drop a stack and call `destroy_stack` once its last alert is removed.
    pub release_empty_stacks: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            capacity: StackCapacity::default(),
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_position: Position::default(),
            default_direction: Direction::default(),
            escape_closes_all: true,
            release_empty_stacks: false,
        }
    }
}

impl AlertSettings {
    /// Starts a request carrying the configured defaults.
    #[must_use]
    pub fn request(&self, severity: Severity, message: impl Into<String>) -> AlertRequest {
        AlertRequest::new(severity, message)
            .timeout_ms(self.default_timeout_ms)
            .position(self.default_position)
            .direction(self.default_direction)
    }
}
