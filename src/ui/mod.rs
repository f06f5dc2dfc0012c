// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toasts`] - Iced renderer drawing the alert stacks
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod styles;
pub mod toasts;
