// SPDX-License-Identifier: MPL-2.0
//! Per-position alert stacks.
//!
//! Each [`Position`] owns at most one [`Stack`], created on first insert.
//! Alerts are kept in arrival order (oldest first). A stack at capacity
//! evicts its oldest entry before accepting a new one, regardless of what
//! state that entry is in.

use std::collections::VecDeque;

use super::alert::{Alert, AlertId};
use crate::domain::alert::{Position, StackCapacity};

/// Ordered alerts anchored to one position.
#[derive(Debug)]
pub struct Stack {
    alerts: VecDeque<Alert>,
}

impl Stack {
    fn new(capacity: StackCapacity) -> Self {
        Self {
            alerts: VecDeque::with_capacity(capacity.value()),
        }
    }

    /// Alerts oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

/// Result of inserting an alert.
#[derive(Debug)]
pub struct Insertion {
    /// The stack did not exist before this insert.
    pub created_stack: bool,
    /// Oldest alert pushed out to make room.
    pub evicted: Option<Alert>,
}

/// Owns the stacks of all six positions.
#[derive(Debug)]
pub struct StackManager {
    stacks: [Option<Stack>; Position::COUNT],
    capacity: StackCapacity,
}

impl StackManager {
    #[must_use]
    pub fn new(capacity: StackCapacity) -> Self {
        Self {
            stacks: Default::default(),
            capacity,
        }
    }

    /// The stack at `position`, if one was ever created.
    #[must_use]
    pub fn stack(&self, position: Position) -> Option<&Stack> {
        self.stacks[position.index()].as_ref()
    }

    /// Number of alerts at `position`.
    #[must_use]
    pub fn len(&self, position: Position) -> usize {
        self.stack(position).map_or(0, Stack::len)
    }

    /// Appends `alert` to the stack of its position, evicting the oldest
    /// entry first if the stack is full.
    pub fn insert(&mut self, alert: Alert) -> Insertion {
        let capacity = self.capacity;
        let slot = &mut self.stacks[alert.position().index()];
        let created_stack = slot.is_none();
        let stack = slot.get_or_insert_with(|| Stack::new(capacity));

        let evicted = if stack.alerts.len() >= capacity.value() {
            stack.alerts.pop_front()
        } else {
            None
        };
        stack.alerts.push_back(alert);

        Insertion {
            created_stack,
            evicted,
        }
    }

    /// Removes an alert wherever it sits in its stack.
    pub fn remove(&mut self, id: AlertId) -> Option<Alert> {
        self.stacks.iter_mut().flatten().find_map(|stack| {
            let index = stack.alerts.iter().position(|alert| alert.id() == id)?;
            stack.alerts.remove(index)
        })
    }

    /// Drops the stack at `position` if it holds no alert.
    ///
    /// Returns `true` if a stack was released.
    pub fn release_if_empty(&mut self, position: Position) -> bool {
        let slot = &mut self.stacks[position.index()];
        if slot.as_ref().is_some_and(Stack::is_empty) {
            *slot = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn find(&self, id: AlertId) -> Option<&Alert> {
        self.alerts().find(|alert| alert.id() == id)
    }

    pub fn find_mut(&mut self, id: AlertId) -> Option<&mut Alert> {
        self.stacks
            .iter_mut()
            .flatten()
            .flat_map(|stack| stack.alerts.iter_mut())
            .find(|alert| alert.id() == id)
    }

    /// Every alert across all stacks, by position then age.
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.stacks.iter().flatten().flat_map(Stack::iter)
    }

    /// Total number of alerts across all stacks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.stacks.iter().flatten().map(Stack::len).sum()
    }
}

impl Default for StackManager {
    fn default() -> Self {
        Self::new(StackCapacity::default())
    }
}
