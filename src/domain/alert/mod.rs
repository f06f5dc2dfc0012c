// SPDX-License-Identifier: MPL-2.0
//! Alert domain types.
//!
//! - [`Severity`], [`Position`], [`Direction`]: enumerated alert attributes
//!   with lenient parsing
//! - [`StackCapacity`]: bound on the number of alerts per stack

mod kinds;
mod newtypes;

pub use kinds::{Direction, Position, Severity};
pub use newtypes::{stack_capacity_bounds, StackCapacity};
