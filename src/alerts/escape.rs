// SPDX-License-Identifier: MPL-2.0
//! Process-wide "close all" broadcast bound to the Escape key.
//!
//! The listener is installed at most once, no matter how many stacks exist.
//! It tracks the live set of open alerts so a broadcast never has to scan
//! the stacks.

use std::collections::BTreeSet;

use super::alert::AlertId;

/// Init-once broadcaster holding the currently open alerts.
#[derive(Debug, Default)]
pub struct EscapeBroadcaster {
    installed: bool,
    open: BTreeSet<AlertId>,
}

impl EscapeBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the listener. Returns `true` only on the first call.
    pub fn install(&mut self) -> bool {
        !std::mem::replace(&mut self.installed, true)
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Marks an alert as open.
    pub fn track(&mut self, id: AlertId) {
        self.open.insert(id);
    }

    /// Forgets an alert that is closing or gone.
    pub fn forget(&mut self, id: AlertId) {
        self.open.remove(&id);
    }

    /// Copy of the open set, oldest alert first.
    ///
    /// Broadcasts iterate this copy so closing an alert mid-iteration cannot
    /// skip another.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AlertId> {
        self.open.iter().copied().collect()
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}
