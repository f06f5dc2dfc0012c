// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::alert::Severity;
use crate::ui::toasts;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick advancing alert timers and fades.
    Tick(Instant),
    EscapePressed,
    Toast(toasts::Message),
    /// Show a plain alert of the given severity.
    Show(Severity),
    /// Show a grouped alert that coalesces with its duplicates.
    ShowGrouped(Severity),
    CloseAll,
    ExportDiagnostics,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file to use instead of the platform default.
    pub config_path: Option<PathBuf>,
    /// Where "Export diagnostics" writes its JSON report.
    pub diagnostics_path: Option<PathBuf>,
}
