// SPDX-License-Identifier: MPL-2.0
//! Alert stacking, lifecycle and deduplication.
//!
//! Alerts are grouped into one stack per screen [`Position`](crate::domain::alert::Position).
//! Each stack keeps at most [`StackCapacity`](crate::domain::alert::StackCapacity)
//! entries and evicts its oldest alert to make room. An alert moves through
//! `Created -> Visible -> [CountingDown] -> Closing -> Removed`, driven by
//! dismiss timers, the close button, the Escape key or its [`Disposer`].
//!
//! Drawing is delegated to a [`Renderer`]; [`HeadlessRenderer`] records
//! instructions for tests and automation.
//!
//! # Example
//!
//! ```
//! use iced_alerts::alerts::{AlertRequest, AlertService, AlertSettings, HeadlessRenderer};
//! use iced_alerts::domain::alert::Severity;
//! use std::time::Duration;
//!
//! let service = AlertService::new(HeadlessRenderer::new(), AlertSettings::default());
//! let first = service.show_grouped(AlertRequest::new(Severity::Error, "Upload failed"));
//! let again = service.show_grouped(AlertRequest::new(Severity::Error, "Upload failed"));
//!
//! assert_eq!(first.id(), again.id());
//! assert_eq!(service.alert(first.id()).map(|alert| alert.match_count()), Some(2));
//!
//! service.advance(Duration::from_secs(5));
//! assert!(service.open_alerts().is_empty());
//! ```

mod alert;
mod escape;
mod matcher;
mod renderer;
mod request;
mod service;
mod settings;
mod stack;
mod timer;

pub use alert::{countdown_seconds, Alert, AlertId, AlertState, CloseReason, TimerEvent};
pub use escape::EscapeBroadcaster;
pub use matcher::find_match;
pub use renderer::{AlertDescriptor, HeadlessRenderer, RenderCommand, Renderer, VisualHandle};
pub use request::AlertRequest;
pub use service::{AlertService, Disposer};
pub use settings::AlertSettings;
pub use stack::{Insertion, Stack, StackManager};
pub use timer::{Fired, TimerHandle, TimerRegistry};
