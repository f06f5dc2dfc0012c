// SPDX-License-Identifier: MPL-2.0
//! Alert newtypes.
//!
//! Type-safe wrappers for alert values, ensuring they are always within
//! valid ranges.

// =============================================================================
// Stack Capacity Bounds
// =============================================================================

/// Stack capacity bounds (1 to 20 alerts per position).
pub mod stack_capacity_bounds {
    /// Minimum alerts per stack.
    pub const MIN: usize = 1;
    /// Maximum alerts per stack.
    pub const MAX: usize = 20;
    /// Default alerts per stack.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// StackCapacity
// =============================================================================

/// Maximum number of alerts coexisting in one stack.
///
/// Values outside the valid range are clamped, so a stack can never be
/// configured to hold zero alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackCapacity(usize);

impl StackCapacity {
    /// Creates a new stack capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(stack_capacity_bounds::MIN, stack_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for StackCapacity {
    fn default() -> Self {
        Self(stack_capacity_bounds::DEFAULT)
    }
}
