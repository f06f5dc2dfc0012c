// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`alert`]: Alert attributes ([`Severity`](alert::Severity),
//!   [`Position`](alert::Position), [`Direction`](alert::Direction),
//!   [`StackCapacity`](alert::StackCapacity))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod alert;
pub mod diagnostics;
