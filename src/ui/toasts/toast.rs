// SPDX-License-Identifier: MPL-2.0
//! State and widget of a single toast.

use super::Message;
use crate::alerts::AlertDescriptor;
use crate::config::{
    ENTRY_STAGGER_MS, EXIT_TRANSITION_MS, MAX_ENTRY_STAGGER_MS, PULSE_DURATION_MS,
};
use crate::domain::alert::{Direction, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Accent color of a severity.
#[must_use]
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS,
        Severity::Error => palette::ERROR,
        Severity::Info => palette::INFO,
        Severity::Warning => palette::WARNING,
        Severity::Waiting => palette::WAITING,
        Severity::Critical => palette::CRITICAL,
        Severity::Debug => palette::DEBUG,
        Severity::Default => palette::NEUTRAL,
    }
}

/// A mounted alert as drawn on the board.
#[derive(Debug, Clone)]
pub struct Toast {
    descriptor: AlertDescriptor,
    announcement: String,
    countdown: Option<u64>,
    appears_at: Instant,
    pulse_until: Option<Instant>,
    exit_started: Option<Instant>,
    exit_reported: bool,
}

impl Toast {
    pub(super) fn new(descriptor: AlertDescriptor, now: Instant) -> Self {
        let depth = u64::try_from(descriptor.stack_depth).unwrap_or(u64::MAX);
        let stagger = depth
            .saturating_mul(ENTRY_STAGGER_MS)
            .min(MAX_ENTRY_STAGGER_MS);
        Self {
            announcement: descriptor.announcement(),
            descriptor,
            countdown: None,
            appears_at: now + Duration::from_millis(stagger),
            pulse_until: None,
            exit_started: None,
            exit_reported: false,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &AlertDescriptor {
        &self.descriptor
    }

    /// Text read out by assistive technology when the toast appears.
    #[must_use]
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// Last countdown value pushed, in seconds.
    #[must_use]
    pub fn countdown(&self) -> Option<u64> {
        self.countdown
    }

    #[must_use]
    pub fn counter(&self) -> Option<u32> {
        self.descriptor.counter
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.exit_started.is_some()
    }

    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    /// Opacity at `now`: hidden until the staggered entry, fading while closing.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        if now < self.appears_at {
            return opacity::TRANSPARENT;
        }
        match self.exit_started {
            Some(start) => {
                let elapsed = now.saturating_duration_since(start).as_millis() as f32;
                (1.0 - elapsed / EXIT_TRANSITION_MS as f32).clamp(0.0, 1.0)
            }
            None => opacity::OPAQUE,
        }
    }

    pub(super) fn set_countdown(&mut self, seconds: u64) {
        self.countdown = Some(seconds);
    }

    pub(super) fn set_counter(&mut self, count: u32) {
        self.descriptor.counter = Some(count);
    }

    pub(super) fn pulse(&mut self, now: Instant) {
        self.pulse_until = Some(now + Duration::from_millis(PULSE_DURATION_MS));
    }

    pub(super) fn start_exit(&mut self, now: Instant) {
        if self.exit_started.is_none() {
            self.exit_started = Some(now);
        }
    }

    /// Returns `true` once, when the fade-out has fully played.
    pub(super) fn take_exit_finished(&mut self, now: Instant) -> bool {
        let Some(start) = self.exit_started else {
            return false;
        };
        let done =
            now.saturating_duration_since(start) >= Duration::from_millis(EXIT_TRANSITION_MS);
        if done && !self.exit_reported {
            self.exit_reported = true;
            return true;
        }
        false
    }

    /// Renders the toast. Every string is copied so the element outlives `self`.
    pub fn view<'a>(&self, now: Instant) -> Element<'a, Message> {
        let descriptor = &self.descriptor;
        let accent = severity_color(descriptor.severity);
        let alpha = self.opacity(now);
        let pulsing = self.is_pulsing(now);
        let text_align = match descriptor.direction {
            Direction::LeftToRight => alignment::Horizontal::Left,
            Direction::RightToLeft => alignment::Horizontal::Right,
        };

        let mut body = Column::new().spacing(spacing::XXS).align_x(text_align);
        if let Some(title) = &descriptor.title {
            body = body.push(Text::new(title.clone()).size(typography::BODY_LG));
        }
        body = body.push(Text::new(descriptor.message.clone()).size(typography::BODY));

        let mut meta = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center);
        if let Some(count) = self.counter().filter(|count| *count > 1) {
            meta = meta.push(
                Container::new(Text::new(format!("×{count}")).size(typography::CAPTION))
                    .padding([0.0, spacing::XS])
                    .style(move |_theme: &Theme| counter_badge_style(accent, alpha)),
            );
        }
        if let Some(seconds) = self.countdown.filter(|seconds| *seconds > 0) {
            meta = meta.push(Text::new(format!("{seconds}s")).size(typography::CAPTION));
        }

        let close_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Close(descriptor.id))
            .padding(spacing::XXS)
            .style(close_button_style);

        let mut parts: Vec<Element<'a, Message>> = vec![
            Container::new(body).width(Length::Fill).into(),
            meta.into(),
            close_button.into(),
        ];
        if descriptor.direction == Direction::RightToLeft {
            parts.reverse();
        }

        let content = Row::with_children(parts)
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha, pulsing))
            .into()
    }
}

fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(
    theme: &Theme,
    accent: Color,
    alpha: f32,
    pulsing: bool,
) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let background = if pulsing {
        Color {
            a: opacity::PULSE,
            ..accent
        }
    } else {
        base
    };

    container::Style {
        background: Some(iced::Background::Color(fade(background, alpha))),
        border: iced::Border {
            color: fade(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow::MD.color, opacity::OVERLAY_SUBTLE * alpha),
            ..shadow::MD
        },
        text_color: Some(fade(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn counter_badge_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(accent, alpha))),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(fade(palette::WHITE, alpha)),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |a: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
    }
}
