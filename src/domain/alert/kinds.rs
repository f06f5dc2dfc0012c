// SPDX-License-Identifier: MPL-2.0
//! Enumerated alert attributes.
//!
//! Every constructor here is total: unknown textual or index input falls back
//! to a default variant instead of failing, so callers never have to handle
//! a parse error when requesting an alert.

use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// Severity scheme of an alert (drives color and icon in the renderer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
    Waiting,
    Critical,
    Debug,
    /// Fallback scheme for unrecognized input.
    #[default]
    Default,
}

impl Severity {
    /// Severities addressable by index, in keyword order.
    pub const INDEXED: [Severity; 7] = [
        Severity::Success,
        Severity::Error,
        Severity::Info,
        Severity::Warning,
        Severity::Waiting,
        Severity::Critical,
        Severity::Debug,
    ];

    /// Parses a severity name, falling back to [`Severity::Default`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "waiting" => Severity::Waiting,
            "critical" => Severity::Critical,
            "debug" => Severity::Debug,
            _ => Severity::Default,
        }
    }

    /// Looks up a severity by keyword index (0 = success ... 6 = debug).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::INDEXED.get(index).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Waiting => "waiting",
            Severity::Critical => "critical",
            Severity::Debug => "debug",
            Severity::Default => "default",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

// =============================================================================
// Position
// =============================================================================

/// Screen anchor of a stack. Each position owns exactly one stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Position {
    TopLeft,
    TopMiddle,
    TopRight,
    BottomLeft,
    BottomMiddle,
    /// Fallback anchor for unrecognized input.
    #[default]
    BottomRight,
}

impl Position {
    /// Number of anchors.
    pub const COUNT: usize = 6;

    /// All anchors in index order.
    pub const ALL: [Position; Position::COUNT] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ];

    /// Parses an anchor name, falling back to [`Position::BottomRight`].
    ///
    /// Accepts both `top-middle` and `top-center` spellings.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "top-left" => Position::TopLeft,
            "top-middle" | "top-center" => Position::TopMiddle,
            "top-right" => Position::TopRight,
            "bottom-left" => Position::BottomLeft,
            "bottom-middle" | "bottom-center" => Position::BottomMiddle,
            _ => Position::BottomRight,
        }
    }

    /// Looks up an anchor by keyword index (0 = top-left ... 5 = bottom-right).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Slot of this anchor in [`Position::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopMiddle | Position::TopRight
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopMiddle => "top-middle",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomMiddle => "bottom-middle",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

// =============================================================================
// Direction
// =============================================================================

/// Text direction. Only affects layout mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// Parses `ltr` / `rtl`, falling back to left-to-right.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rtl" | "right-to-left" => Direction::RightToLeft,
            _ => Direction::LeftToRight,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
        }
    }
}

impl From<&str> for Direction {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_severity_falls_back_to_default() {
        assert_eq!(Severity::parse("catastrophe"), Severity::Default);
        assert_eq!(Severity::parse(""), Severity::Default);
    }

    #[test]
    fn severity_parse_is_case_insensitive() {
        assert_eq!(Severity::parse("Warning"), Severity::Warning);
        assert_eq!(Severity::parse(" CRITICAL "), Severity::Critical);
    }

    #[test]
    fn severity_index_follows_keyword_order() {
        assert_eq!(Severity::from_index(0), Severity::Success);
        assert_eq!(Severity::from_index(4), Severity::Waiting);
        assert_eq!(Severity::from_index(6), Severity::Debug);
        assert_eq!(Severity::from_index(7), Severity::Default);
    }

    #[test]
    fn unknown_position_falls_back_to_bottom_right() {
        assert_eq!(Position::parse("middle-earth"), Position::BottomRight);
        assert_eq!(Position::from_index(42), Position::BottomRight);
    }

    #[test]
    fn position_names_round_trip() {
        for position in Position::ALL {
            assert_eq!(Position::parse(position.as_str()), position);
        }
    }

    #[test]
    fn position_index_matches_slot() {
        for (slot, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.index(), slot);
            assert_eq!(Position::from_index(slot), *position);
        }
    }

    #[test]
    fn position_accepts_center_alias() {
        assert_eq!(Position::parse("top_center"), Position::TopMiddle);
        assert_eq!(Position::parse("bottom-center"), Position::BottomMiddle);
    }

    #[test]
    fn direction_defaults_to_ltr() {
        assert_eq!(Direction::parse("rtl"), Direction::RightToLeft);
        assert_eq!(Direction::parse("sideways"), Direction::LeftToRight);
    }
}
