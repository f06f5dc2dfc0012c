// SPDX-License-Identifier: MPL-2.0
//! `iced_alerts` shows transient, positioned and stacked alerts.
//!
//! The [`alerts`] module holds the stacking, lifecycle and deduplication
//! logic behind a [`Renderer`](alerts::Renderer) seam; [`ui::toasts`]
//! draws alerts with iced and [`app`] is a small demo application.

pub mod alerts;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;
