// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette::WHITE, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button tinted with an accent color, e.g. a severity color.
pub fn accent(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Disabled => opacity::OVERLAY_MEDIUM,
            button::Status::Active | button::Status::Pressed => opacity::OPAQUE,
        };
        let shadow = match status {
            button::Status::Hovered => shadow::MD,
            button::Status::Disabled => shadow::NONE,
            button::Status::Active | button::Status::Pressed => shadow::SM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..color })),
            text_color: WHITE,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow,
            snap: true,
        }
    }
}
