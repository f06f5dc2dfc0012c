// SPDX-License-Identifier: MPL-2.0
//! Toast board: the iced renderer of the alert system.
//!
//! [`ToastBoard`] implements [`Renderer`](crate::alerts::Renderer). It keeps
//! one column per screen position, staggers entries, highlights merged
//! duplicates and fades closing toasts out. Time comes from the host through
//! [`ToastBoard::sync`]; finished fades are collected with
//! [`ToastBoard::take_finished_exits`] and reported back to the service.

mod board;
mod toast;

pub use board::ToastBoard;
pub use toast::{severity_color, Toast};

use crate::alerts::AlertId;

/// Messages emitted by the toast board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The close button of an alert was pressed.
    Close(AlertId),
}
