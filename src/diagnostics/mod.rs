// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the alert lifecycle.
//!
//! The alert service reports what happens to alerts (shown, merged, evicted,
//! closed, removed) as typed events. Events travel through a non-blocking
//! channel and are kept in a memory-bounded circular buffer that can be
//! exported as JSON.
//!
//! - [`CircularBuffer`]: ring buffer with configurable capacity
//! - [`DiagnosticEvent`] / [`AlertEvent`]: timestamped lifecycle events
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: receiving and sending ends

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AlertEvent, DiagnosticEvent};
