// SPDX-License-Identifier: MPL-2.0
//! Board holding every mounted toast, one column per position.

use super::toast::Toast;
use super::Message;
use crate::alerts::{AlertDescriptor, Renderer, VisualHandle};
use crate::domain::alert::Position;
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};
use std::collections::BTreeMap;
use std::time::Instant;

/// Iced renderer for alerts.
#[derive(Debug)]
pub struct ToastBoard {
    now: Instant,
    next_visual: u64,
    stacks: [Option<Vec<VisualHandle>>; Position::COUNT],
    toasts: BTreeMap<VisualHandle, Toast>,
}

impl Default for ToastBoard {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl ToastBoard {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_visual: 0,
            stacks: Default::default(),
            toasts: BTreeMap::new(),
        }
    }

    /// Moves the board clock used for staggering, pulses and fades.
    pub fn sync(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    /// Whether a column exists at `position`.
    #[must_use]
    pub fn has_stack(&self, position: Position) -> bool {
        self.stacks[position.index()].is_some()
    }

    #[must_use]
    pub fn toast(&self, visual: VisualHandle) -> Option<&Toast> {
        self.toasts.get(&visual)
    }

    /// Announcement of the newest mounted toast, for the polite live region.
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.toasts.values().next_back().map(Toast::announcement)
    }

    /// Toasts at `position`, oldest first.
    pub fn toasts_at(&self, position: Position) -> impl Iterator<Item = &Toast> {
        self.stacks[position.index()]
            .iter()
            .flatten()
            .filter_map(|visual| self.toasts.get(visual))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Visuals whose fade-out completed since the last call.
    pub fn take_finished_exits(&mut self) -> Vec<VisualHandle> {
        let now = self.now;
        self.toasts
            .iter_mut()
            .filter_map(|(visual, toast)| toast.take_exit_finished(now).then_some(*visual))
            .collect()
    }

    /// Renders the six columns layered over the whole window.
    pub fn view<'a>(&self) -> Element<'a, Message> {
        let layers: Vec<Element<'a, Message>> = Position::ALL
            .iter()
            .filter_map(|&position| self.column(position))
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn column<'a>(&self, position: Position) -> Option<Element<'a, Message>> {
        let toasts: Vec<Element<'a, Message>> = self
            .toasts_at(position)
            .filter(|toast| toast.opacity(self.now) > 0.0)
            .map(|toast| toast.view(self.now))
            .collect();
        if toasts.is_empty() {
            return None;
        }

        let (horizontal, vertical) = anchor(position);
        let column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Some(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal)
                .align_y(vertical)
                .padding(spacing::MD)
                .into(),
        )
    }
}

fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopMiddle | Position::BottomMiddle => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

impl Renderer for ToastBoard {
    fn create_stack(&mut self, position: Position) {
        self.stacks[position.index()].get_or_insert_with(Vec::new);
    }

    fn destroy_stack(&mut self, position: Position) {
        if let Some(visuals) = self.stacks[position.index()].take() {
            for visual in visuals {
                self.toasts.remove(&visual);
            }
        }
    }

    fn mount_alert(&mut self, descriptor: &AlertDescriptor) -> VisualHandle {
        self.next_visual += 1;
        let visual = VisualHandle::new(self.next_visual);
        self.stacks[descriptor.position.index()]
            .get_or_insert_with(Vec::new)
            .push(visual);
        self.toasts
            .insert(visual, Toast::new(descriptor.clone(), self.now));
        visual
    }

    fn update_countdown(&mut self, visual: VisualHandle, seconds_remaining: u64) {
        if let Some(toast) = self.toasts.get_mut(&visual) {
            toast.set_countdown(seconds_remaining);
        }
    }

    fn update_match_count(&mut self, visual: VisualHandle, count: u32) {
        if let Some(toast) = self.toasts.get_mut(&visual) {
            toast.set_counter(count);
        }
    }

    fn pulse(&mut self, visual: VisualHandle) {
        let now = self.now;
        if let Some(toast) = self.toasts.get_mut(&visual) {
            toast.pulse(now);
        }
    }

    fn play_exit(&mut self, visual: VisualHandle) {
        let now = self.now;
        if let Some(toast) = self.toasts.get_mut(&visual) {
            toast.start_exit(now);
        }
    }

    fn unmount(&mut self, visual: VisualHandle) {
        if let Some(toast) = self.toasts.remove(&visual) {
            let index = toast.descriptor().position.index();
            if let Some(visuals) = self.stacks[index].as_mut() {
                visuals.retain(|mounted| *mounted != visual);
            }
        }
    }
}
