// SPDX-License-Identifier: MPL-2.0
//! Alert entity and its lifecycle state machine.
//!
//! ```text
//! Created -> Visible -> [CountingDown] -> Closing -> Removed
//! ```
//!
//! `CountingDown` is a sub-state of `Visible`: the alert is on screen and a
//! one-second tick timer drives its countdown display. The alert exclusively
//! owns its dismiss and tick timer handles; every transition that replaces or
//! drops a handle cancels the superseded timer first.

use super::renderer::VisualHandle;
use super::request::AlertRequest;
use super::timer::{TimerHandle, TimerRegistry};
use crate::config::COUNTDOWN_TICK_MS;
use crate::domain::alert::{Direction, Position, Severity};
use serde::{Deserialize, Serialize};

/// Unique identifier for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    /// Creates a new unique alert ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle state of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    /// Mounted, waiting for the reveal microtask.
    Created,
    /// On screen.
    Visible,
    /// On screen with a running countdown display.
    CountingDown,
    /// Exit transition in progress.
    Closing,
    /// Gone from its stack. Terminal.
    Removed,
}

impl AlertState {
    /// Visible or counting down.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, AlertState::Visible | AlertState::CountingDown)
    }
}

/// What asked an alert to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The dismiss timer fired.
    Timeout,
    /// The user activated the close button.
    CloseButton,
    /// The Escape key closed every open alert.
    Escape,
    /// A disposer returned by `show` was invoked.
    Disposer,
}

/// Payload carried by alert timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Auto-dismiss deadline reached.
    Dismiss(AlertId),
    /// One countdown second elapsed.
    CountdownTick(AlertId),
}

/// Seconds shown by the countdown after `elapsed_ms` of a `timeout_ms` run.
#[must_use]
pub fn countdown_seconds(timeout_ms: u64, elapsed_ms: u64) -> u64 {
    timeout_ms.saturating_sub(elapsed_ms).div_ceil(1000)
}

/// One visible notification.
///
/// Clones are read-only snapshots; only the owning service drives transitions.
#[derive(Debug, Clone)]
pub struct Alert {
    id: AlertId,
    position: Position,
    severity: Severity,
    title: Option<String>,
    message: String,
    timeout_ms: u64,
    direction: Direction,
    show_countdown: bool,
    grouped: bool,
    match_count: u32,
    state: AlertState,
    visual: Option<VisualHandle>,
    dismiss_timer: Option<TimerHandle>,
    countdown_timer: Option<TimerHandle>,
    /// Timeout the running countdown started from.
    countdown_from_ms: u64,
}

impl Alert {
    /// Creates an alert in the `Created` state from a resolved request.
    pub(crate) fn new(request: AlertRequest, show_countdown: bool, grouped: bool) -> Self {
        Self {
            id: AlertId::new(),
            position: request.position,
            severity: request.severity,
            title: request.title,
            message: request.message,
            timeout_ms: request.timeout_ms,
            direction: request.direction,
            show_countdown,
            grouped,
            match_count: 1,
            state: AlertState::Created,
            visual: None,
            dismiss_timer: None,
            countdown_timer: None,
            countdown_from_ms: request.timeout_ms,
        }
    }

    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn show_countdown(&self) -> bool {
        self.show_countdown
    }

    /// Whether the alert was created in grouped mode and carries a counter.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    /// Number of requests coalesced into this alert.
    #[must_use]
    pub fn match_count(&self) -> u32 {
        self.match_count
    }

    #[must_use]
    pub fn state(&self) -> AlertState {
        self.state
    }

    #[must_use]
    pub fn visual(&self) -> Option<VisualHandle> {
        self.visual
    }

    #[must_use]
    pub fn dismiss_timer(&self) -> Option<TimerHandle> {
        self.dismiss_timer
    }

    #[must_use]
    pub fn countdown_timer(&self) -> Option<TimerHandle> {
        self.countdown_timer
    }

    pub(crate) fn attach_visual(&mut self, visual: VisualHandle) {
        self.visual = Some(visual);
    }

    /// `Created -> Visible`, entering `CountingDown` when enabled.
    ///
    /// Returns the initial countdown value if a countdown started, and
    /// `None` otherwise (including when the alert was no longer `Created`).
    pub(crate) fn reveal(&mut self, timers: &mut TimerRegistry<TimerEvent>) -> Option<u64> {
        if self.state != AlertState::Created {
            return None;
        }
        self.state = AlertState::Visible;

        if self.timeout_ms > 0 {
            self.arm_dismiss(self.timeout_ms, timers);
        }
        if self.show_countdown && self.timeout_ms > 0 {
            return Some(self.restart_countdown(self.timeout_ms, timers));
        }
        None
    }

    /// Handles a countdown tick and returns the seconds to display.
    ///
    /// At zero the tick timer cancels itself and the alert drops back to
    /// plain `Visible`; closing stays with the dismiss timer.
    pub(crate) fn countdown_tick(
        &mut self,
        ticks: u32,
        timers: &mut TimerRegistry<TimerEvent>,
    ) -> Option<u64> {
        if self.state != AlertState::CountingDown {
            return None;
        }
        let elapsed_ms = u64::from(ticks) * COUNTDOWN_TICK_MS;
        let remaining = countdown_seconds(self.countdown_from_ms, elapsed_ms);
        if remaining == 0 {
            if let Some(handle) = self.countdown_timer.take() {
                timers.cancel(handle);
            }
            self.state = AlertState::Visible;
        }
        Some(remaining)
    }

    /// The dismiss timer fired; its handle is already spent.
    pub(crate) fn dismiss_elapsed(&mut self) {
        self.dismiss_timer = None;
    }

    /// Coalesces a duplicate request into this alert.
    ///
    /// Bumps the counter and, for a non-zero timeout, restarts the dismiss
    /// timer. The countdown restarts too when both sides display one.
    /// Returns the restarted countdown value, if any.
    pub(crate) fn absorb(
        &mut self,
        timeout_ms: u64,
        show_countdown: bool,
        timers: &mut TimerRegistry<TimerEvent>,
    ) -> Option<u64> {
        self.match_count = self.match_count.saturating_add(1);
        if timeout_ms == 0 {
            return None;
        }

        self.timeout_ms = timeout_ms;
        self.arm_dismiss(timeout_ms, timers);
        if self.show_countdown && show_countdown {
            return Some(self.restart_countdown(timeout_ms, timers));
        }
        None
    }

    /// Enters `Closing`. Returns `false` if already closing or removed.
    pub(crate) fn begin_close(&mut self, timers: &mut TimerRegistry<TimerEvent>) -> bool {
        if matches!(self.state, AlertState::Closing | AlertState::Removed) {
            return false;
        }
        self.release_timers(timers);
        self.state = AlertState::Closing;
        true
    }

    /// `Closing -> Removed`. Returns `false` if the alert was not closing.
    pub(crate) fn finish_close(&mut self, timers: &mut TimerRegistry<TimerEvent>) -> bool {
        if self.state != AlertState::Closing {
            return false;
        }
        self.release_timers(timers);
        self.state = AlertState::Removed;
        true
    }

    /// Forced removal under capacity pressure, skipping `Closing`.
    pub(crate) fn evict(&mut self, timers: &mut TimerRegistry<TimerEvent>) {
        self.release_timers(timers);
        self.state = AlertState::Removed;
    }

    fn arm_dismiss(&mut self, timeout_ms: u64, timers: &mut TimerRegistry<TimerEvent>) {
        let handle = timers.reschedule(
            self.dismiss_timer.take(),
            timeout_ms,
            TimerEvent::Dismiss(self.id),
        );
        self.dismiss_timer = Some(handle);
    }

    fn restart_countdown(&mut self, from_ms: u64, timers: &mut TimerRegistry<TimerEvent>) -> u64 {
        let handle = timers.reschedule_tick(
            self.countdown_timer.take(),
            COUNTDOWN_TICK_MS,
            TimerEvent::CountdownTick(self.id),
        );
        self.countdown_timer = Some(handle);
        self.countdown_from_ms = from_ms;
        self.state = AlertState::CountingDown;
        countdown_seconds(from_ms, 0)
    }

    fn release_timers(&mut self, timers: &mut TimerRegistry<TimerEvent>) {
        if let Some(handle) = self.dismiss_timer.take() {
            timers.cancel(handle);
        }
        if let Some(handle) = self.countdown_timer.take() {
            timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(timeout_ms: u64, show_countdown: bool) -> Alert {
        let request = AlertRequest::new(Severity::Info, "disk almost full").timeout_ms(timeout_ms);
        Alert::new(request, show_countdown, false)
    }

    #[test]
    fn countdown_seconds_rounds_up_and_clamps() {
        assert_eq!(countdown_seconds(5000, 0), 5);
        assert_eq!(countdown_seconds(4500, 0), 5);
        assert_eq!(countdown_seconds(4500, 4000), 1);
        assert_eq!(countdown_seconds(5000, 5000), 0);
        assert_eq!(countdown_seconds(5000, 9000), 0);
    }

    #[test]
    fn reveal_arms_dismiss_timer_only_with_timeout() {
        let mut timers = TimerRegistry::new();

        let mut timed = alert(3000, false);
        assert_eq!(timed.reveal(&mut timers), None);
        assert_eq!(timed.state(), AlertState::Visible);
        assert!(timed.dismiss_timer().is_some());

        let mut sticky = alert(0, true);
        assert_eq!(sticky.reveal(&mut timers), None);
        assert_eq!(sticky.state(), AlertState::Visible);
        assert!(sticky.dismiss_timer().is_none());
        assert!(sticky.countdown_timer().is_none());
    }

    #[test]
    fn reveal_enters_counting_down() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, true);

        assert_eq!(alert.reveal(&mut timers), Some(5));
        assert_eq!(alert.state(), AlertState::CountingDown);
        assert_eq!(timers.active_count(), 2);
    }

    #[test]
    fn reveal_only_applies_to_created_alerts() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, true);
        alert.reveal(&mut timers);

        assert_eq!(alert.reveal(&mut timers), None);
        assert_eq!(timers.active_count(), 2);
    }

    #[test]
    fn countdown_tick_self_cancels_at_zero() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(2000, true);
        alert.reveal(&mut timers);

        assert_eq!(alert.countdown_tick(1, &mut timers), Some(1));
        assert_eq!(alert.countdown_tick(2, &mut timers), Some(0));
        assert_eq!(alert.state(), AlertState::Visible);
        assert!(alert.countdown_timer().is_none());
        assert!(alert.dismiss_timer().is_some());
    }

    #[test]
    fn begin_close_cancels_timers_and_is_idempotent() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, true);
        alert.reveal(&mut timers);

        assert!(alert.begin_close(&mut timers));
        assert_eq!(alert.state(), AlertState::Closing);
        assert_eq!(timers.active_count(), 0);
        assert!(!alert.begin_close(&mut timers));
    }

    #[test]
    fn finish_close_requires_closing_state() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, false);
        alert.reveal(&mut timers);

        assert!(!alert.finish_close(&mut timers));
        alert.begin_close(&mut timers);
        assert!(alert.finish_close(&mut timers));
        assert_eq!(alert.state(), AlertState::Removed);
        assert!(!alert.finish_close(&mut timers));
        assert!(!alert.begin_close(&mut timers));
    }

    #[test]
    fn absorb_replaces_dismiss_timer() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, false);
        alert.reveal(&mut timers);
        let before = alert.dismiss_timer().expect("dismiss timer armed");

        assert_eq!(alert.absorb(8000, false, &mut timers), None);
        let after = alert.dismiss_timer().expect("dismiss timer re-armed");

        assert_ne!(before, after);
        assert!(!timers.is_active(before));
        assert_eq!(timers.active_count(), 1);
        assert_eq!(alert.match_count(), 2);
        assert_eq!(alert.timeout_ms(), 8000);
    }

    #[test]
    fn absorb_with_zero_timeout_keeps_timers() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, false);
        alert.reveal(&mut timers);
        let before = alert.dismiss_timer();

        alert.absorb(0, false, &mut timers);
        assert_eq!(alert.dismiss_timer(), before);
        assert_eq!(alert.timeout_ms(), 5000);
        assert_eq!(alert.match_count(), 2);
    }

    #[test]
    fn absorb_restarts_countdown_from_new_timeout() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, true);
        alert.reveal(&mut timers);
        alert.countdown_tick(3, &mut timers);

        assert_eq!(alert.absorb(3000, true, &mut timers), Some(3));
        assert_eq!(alert.countdown_tick(1, &mut timers), Some(2));
        assert_eq!(timers.active_count(), 2);
    }

    #[test]
    fn evict_skips_closing() {
        let mut timers = TimerRegistry::new();
        let mut alert = alert(5000, true);
        alert.reveal(&mut timers);

        alert.evict(&mut timers);
        assert_eq!(alert.state(), AlertState::Removed);
        assert_eq!(timers.active_count(), 0);
    }
}
