// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Stacks**: Capacity per screen position
//! - **Timing**: Auto-dismiss, countdown and transition durations
//! - **Diagnostics**: Lifecycle event buffer

use crate::domain::alert::stack_capacity_bounds;
use crate::domain::diagnostics::buffer_capacity_bounds;

// ==========================================================================
// Stack Defaults
// ==========================================================================

/// Default maximum number of alerts per position.
pub const DEFAULT_MAX_ALERTS: usize = stack_capacity_bounds::DEFAULT;

/// Minimum alerts per position.
pub const MIN_MAX_ALERTS: usize = stack_capacity_bounds::MIN;

/// Maximum alerts per position.
pub const MAX_MAX_ALERTS: usize = stack_capacity_bounds::MAX;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default auto-dismiss delay (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Interval between countdown ticks (in milliseconds).
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Duration of the highlight shown when a duplicate is merged (in milliseconds).
pub const PULSE_DURATION_MS: u64 = 300;

/// Duration of the fade-out played before an alert is removed (in milliseconds).
pub const EXIT_TRANSITION_MS: u64 = 400;

/// Entry stagger per alert already in the stack (in milliseconds).
pub const ENTRY_STAGGER_MS: u64 = 100;

/// Upper bound of the entry stagger (in milliseconds).
pub const MAX_ENTRY_STAGGER_MS: u64 = 300;

/// Interval at which the front-end advances the alert clock (in milliseconds).
pub const FRAME_TICK_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_ALERTS > 0);
    assert!(DEFAULT_MAX_ALERTS >= MIN_MAX_ALERTS);
    assert!(DEFAULT_MAX_ALERTS <= MAX_MAX_ALERTS);

    assert!(COUNTDOWN_TICK_MS > 0);
    assert!(FRAME_TICK_MS > 0);
    assert!(FRAME_TICK_MS <= COUNTDOWN_TICK_MS);
    assert!(MAX_ENTRY_STAGGER_MS >= ENTRY_STAGGER_MS);
    assert!(PULSE_DURATION_MS < DEFAULT_TIMEOUT_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_ALERTS, 5);
        assert!(DEFAULT_MAX_ALERTS >= MIN_MAX_ALERTS);
        assert!(DEFAULT_MAX_ALERTS <= MAX_MAX_ALERTS);
    }

    #[test]
    fn countdown_tick_is_one_second() {
        assert_eq!(COUNTDOWN_TICK_MS, 1000);
    }
}
