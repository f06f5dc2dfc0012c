// SPDX-License-Identifier: MPL-2.0
//! Alert lifecycle events captured for diagnostics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::alerts::{Alert, CloseReason};

/// A lifecycle event with the wall-clock time it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: AlertEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: AlertEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

/// What happened to an alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlertEvent {
    /// A new alert was mounted.
    Shown {
        alert: u64,
        severity: String,
        position: String,
        grouped: bool,
        timeout_ms: u64,
    },
    /// A grouped request was coalesced into an existing alert.
    Merged { alert: u64, match_count: u32 },
    /// The oldest alert was dropped to respect the stack capacity.
    Evicted { alert: u64, position: String },
    /// An alert started closing.
    CloseRequested { alert: u64, reason: CloseReason },
    /// An alert finished its exit transition and left its stack.
    Removed { alert: u64 },
    /// The Escape listener was installed.
    EscapeInstalled,
    /// Escape closed every open alert.
    EscapeBroadcast { closed: usize },
}

impl AlertEvent {
    pub(crate) fn shown(alert: &Alert) -> Self {
        AlertEvent::Shown {
            alert: alert.id().value(),
            severity: alert.severity().as_str().to_string(),
            position: alert.position().as_str().to_string(),
            grouped: alert.is_grouped(),
            timeout_ms: alert.timeout_ms(),
        }
    }

    pub(crate) fn evicted(alert: &Alert) -> Self {
        AlertEvent::Evicted {
            alert: alert.id().value(),
            position: alert.position().as_str().to_string(),
        }
    }
}
