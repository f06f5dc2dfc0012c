// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for alert lifecycle events.
//!
//! Handles push events into a bounded channel without ever blocking; the
//! collector drains the channel into a circular buffer when asked. Events
//! that find the channel full are counted and reported with the export.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{AlertEvent, BufferCapacity, CircularBuffer, DiagnosticEvent};
use crate::error::{Error, Result};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending lifecycle events to the collector.
///
/// Cheap to clone. Events are dropped when the channel is full or the
/// collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
    dropped: Arc<AtomicU64>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle event. Non-blocking.
    pub fn log(&self, event: AlertEvent) {
        let event = DiagnosticEvent::new(event);
        if let Err(TrySendError::Full(_)) = self.event_tx.try_send(event) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    started_at: DateTime<Utc>,
    exported_at: DateTime<Utc>,
    event_count: usize,
    dropped_events: u64,
    events: Vec<&'a DiagnosticEvent>,
}

/// Central collector for lifecycle events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    dropped: Arc<AtomicU64>,
    started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            dropped: Arc::new(AtomicU64::new(0)),
            started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
            dropped: Arc::clone(&self.dropped),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Events lost because the channel was full when they were logged.
    #[must_use]
    pub fn dropped_events(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Serializes the stored events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Diagnostics`] if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        let report = Report {
            started_at: self.started_at,
            exported_at: Utc::now(),
            event_count: events.len(),
            dropped_events: self.dropped_events(),
            events,
        };
        serde_json::to_string_pretty(&report).map_err(|e| Error::Diagnostics(e.to_string()))
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }
}
