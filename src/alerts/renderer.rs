// SPDX-License-Identifier: MPL-2.0
//! Boundary between the alert core and whatever draws alerts.
//!
//! The core only issues instructions through [`Renderer`]; it never inspects
//! visuals. Completion of an exit transition travels the other way, through
//! [`AlertService::exit_finished`](super::AlertService::exit_finished).

use std::collections::BTreeMap;

use super::alert::AlertId;
use crate::domain::alert::{Direction, Position, Severity};

/// Renderer-issued reference to a mounted alert visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(u64);

impl VisualHandle {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Display attributes of an alert to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDescriptor {
    pub id: AlertId,
    pub position: Position,
    pub severity: Severity,
    pub title: Option<String>,
    pub message: String,
    pub direction: Direction,
    pub timeout_ms: u64,
    pub show_countdown: bool,
    /// Counter metadata, present for grouped alerts.
    pub counter: Option<u32>,
    /// Alerts already in the stack when this one was inserted.
    pub stack_depth: usize,
}

impl AlertDescriptor {
    /// Text to announce to assistive technology.
    #[must_use]
    pub fn announcement(&self) -> String {
        match &self.title {
            Some(title) => format!("{}: {title}. {}", self.severity, self.message),
            None => format!("{}: {}", self.severity, self.message),
        }
    }
}

/// Instructions the core issues to the drawing layer.
pub trait Renderer {
    /// First alert at `position`: create the container.
    fn create_stack(&mut self, position: Position);

    /// The stack at `position` was released after emptying.
    fn destroy_stack(&mut self, position: Position);

    /// Mounts a visual and starts its entry transition.
    fn mount_alert(&mut self, descriptor: &AlertDescriptor) -> VisualHandle;

    fn update_countdown(&mut self, visual: VisualHandle, seconds_remaining: u64);

    fn update_match_count(&mut self, visual: VisualHandle, count: u32);

    /// Brief highlight after a duplicate was merged.
    fn pulse(&mut self, visual: VisualHandle);

    /// Starts the exit transition. The renderer reports completion through
    /// `AlertService::exit_finished`.
    fn play_exit(&mut self, visual: VisualHandle);

    /// Drops the visual immediately.
    fn unmount(&mut self, visual: VisualHandle);
}

/// Instruction recorded by [`HeadlessRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    CreateStack(Position),
    DestroyStack(Position),
    Mount {
        visual: VisualHandle,
        descriptor: AlertDescriptor,
    },
    Countdown {
        visual: VisualHandle,
        seconds: u64,
    },
    MatchCount {
        visual: VisualHandle,
        count: u32,
    },
    Pulse(VisualHandle),
    PlayExit(VisualHandle),
    Unmount(VisualHandle),
}

/// Renderer without a surface that records every instruction.
///
/// Exit transitions never finish on their own: the host collects them with
/// [`HeadlessRenderer::take_pending_exits`] and reports them back.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    next_visual: u64,
    commands: Vec<RenderCommand>,
    mounted: BTreeMap<VisualHandle, AlertDescriptor>,
    pending_exits: Vec<VisualHandle>,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every instruction received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    #[must_use]
    pub fn is_mounted(&self, visual: VisualHandle) -> bool {
        self.mounted.contains_key(&visual)
    }

    #[must_use]
    pub fn descriptor(&self, visual: VisualHandle) -> Option<&AlertDescriptor> {
        self.mounted.get(&visual)
    }

    /// Countdown values pushed for `visual`, oldest first.
    #[must_use]
    pub fn countdown_values(&self, visual: VisualHandle) -> Vec<u64> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Countdown { visual: v, seconds } if *v == visual => Some(*seconds),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn pulse_count(&self, visual: VisualHandle) -> usize {
        self.commands
            .iter()
            .filter(|command| **command == RenderCommand::Pulse(visual))
            .count()
    }

    /// Exit transitions started and not yet collected.
    pub fn take_pending_exits(&mut self) -> Vec<VisualHandle> {
        std::mem::take(&mut self.pending_exits)
    }
}

impl Renderer for HeadlessRenderer {
    fn create_stack(&mut self, position: Position) {
        self.commands.push(RenderCommand::CreateStack(position));
    }

    fn destroy_stack(&mut self, position: Position) {
        self.commands.push(RenderCommand::DestroyStack(position));
    }

    fn mount_alert(&mut self, descriptor: &AlertDescriptor) -> VisualHandle {
        self.next_visual += 1;
        let visual = VisualHandle::new(self.next_visual);
        self.mounted.insert(visual, descriptor.clone());
        self.commands.push(RenderCommand::Mount {
            visual,
            descriptor: descriptor.clone(),
        });
        visual
    }

    fn update_countdown(&mut self, visual: VisualHandle, seconds_remaining: u64) {
        self.commands.push(RenderCommand::Countdown {
            visual,
            seconds: seconds_remaining,
        });
    }

    fn update_match_count(&mut self, visual: VisualHandle, count: u32) {
        if let Some(descriptor) = self.mounted.get_mut(&visual) {
            descriptor.counter = Some(count);
        }
        self.commands
            .push(RenderCommand::MatchCount { visual, count });
    }

    fn pulse(&mut self, visual: VisualHandle) {
        self.commands.push(RenderCommand::Pulse(visual));
    }

    fn play_exit(&mut self, visual: VisualHandle) {
        self.pending_exits.push(visual);
        self.commands.push(RenderCommand::PlayExit(visual));
    }

    fn unmount(&mut self, visual: VisualHandle) {
        self.mounted.remove(&visual);
        self.pending_exits.retain(|pending| *pending != visual);
        self.commands.push(RenderCommand::Unmount(visual));
    }
}
