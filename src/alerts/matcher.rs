// SPDX-License-Identifier: MPL-2.0
//! Duplicate detection for grouped alerts.
//!
//! An incoming request matches an open alert when the titles are equal *or*
//! the messages are equal. Either field is enough, so two alerts sharing only
//! a title are merged even if their messages differ. An absent title never
//! matches another absent title.

use super::alert::Alert;
use super::stack::Stack;

/// Returns the first (oldest) open alert in `stack` matching the request.
#[must_use]
pub fn find_match<'a>(stack: &'a Stack, title: Option<&str>, message: &str) -> Option<&'a Alert> {
    stack
        .iter()
        .find(|alert| alert.state().is_open() && is_duplicate(alert, title, message))
}

fn is_duplicate(alert: &Alert, title: Option<&str>, message: &str) -> bool {
    let same_title = matches!((alert.title(), title), (Some(a), Some(b)) if a == b);
    same_title || alert.message() == message
}
