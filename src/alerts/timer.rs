// SPDX-License-Identifier: MPL-2.0
//! Timer registry driving auto-dismiss and countdown ticks.
//!
//! The registry runs on a virtual millisecond clock owned by the caller.
//! Nothing fires on its own: the host advances time and pulls due timers one
//! at a time with [`TimerRegistry::pop_due`], handling each before the next is
//! released. That keeps every callback strictly serialized, so cancelling one
//! timer from another timer's handler can never race.
//!
//! Callbacks are typed payloads rather than closures; the owner of the
//! registry dispatches them.

use std::collections::BTreeMap;

/// Opaque reference to a scheduled timer.
///
/// Handles are never reused, so a stale handle can at worst cancel nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    Once,
    Repeating { interval_ms: u64 },
}

#[derive(Debug)]
struct Timer<T> {
    deadline: u64,
    kind: TimerKind,
    ticks: u32,
    payload: T,
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub payload: T,
    /// Number of times this timer has fired, starting at 1.
    pub ticks: u32,
    /// Clock value at which the timer fired.
    pub at_ms: u64,
}

/// Registry of one-shot and repeating timers.
#[derive(Debug)]
pub struct TimerRegistry<T> {
    now_ms: u64,
    next_handle: u64,
    timers: BTreeMap<TimerHandle, Timer<T>>,
}

impl<T> Default for TimerRegistry<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_handle: 1,
            timers: BTreeMap::new(),
        }
    }
}

impl<T: Clone> TimerRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedules a one-shot timer `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerHandle {
        self.insert(delay_ms, TimerKind::Once, payload)
    }

    /// Schedules a repeating timer firing every `interval_ms` (at least 1 ms).
    pub fn schedule_tick(&mut self, interval_ms: u64, payload: T) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        self.insert(interval_ms, TimerKind::Repeating { interval_ms }, payload)
    }

    /// Cancels `prior` (if any) and schedules a fresh one-shot timer.
    pub fn reschedule(
        &mut self,
        prior: Option<TimerHandle>,
        delay_ms: u64,
        payload: T,
    ) -> TimerHandle {
        if let Some(handle) = prior {
            self.cancel(handle);
        }
        self.schedule(delay_ms, payload)
    }

    /// Cancels `prior` (if any) and schedules a fresh repeating timer.
    pub fn reschedule_tick(
        &mut self,
        prior: Option<TimerHandle>,
        interval_ms: u64,
        payload: T,
    ) -> TimerHandle {
        if let Some(handle) = prior {
            self.cancel(handle);
        }
        self.schedule_tick(interval_ms, payload)
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(&handle).is_some()
    }

    /// Returns whether the timer is still pending.
    #[must_use]
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|timer| timer.deadline).min()
    }

    /// Releases the earliest timer due at or before `until_ms`.
    ///
    /// The clock moves to the timer's deadline. Ties fire in scheduling order.
    /// Repeating timers are re-armed under the same handle; one-shot timers
    /// are forgotten.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        let (handle, deadline) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until_ms)
            .min_by_key(|(handle, timer)| (timer.deadline, **handle))
            .map(|(handle, timer)| (*handle, timer.deadline))?;

        self.now_ms = self.now_ms.max(deadline);

        let timer = self.timers.get_mut(&handle)?;
        timer.ticks += 1;
        let fired = Fired {
            handle,
            payload: timer.payload.clone(),
            ticks: timer.ticks,
            at_ms: deadline,
        };

        match timer.kind {
            TimerKind::Once => {
                self.timers.remove(&handle);
            }
            TimerKind::Repeating { interval_ms } => {
                if let Some(timer) = self.timers.get_mut(&handle) {
                    timer.deadline += interval_ms;
                }
            }
        }

        Some(fired)
    }

    /// Moves the clock forward to `until_ms` once every due timer was handled.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    fn insert(&mut self, delay_ms: u64, kind: TimerKind, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.timers.insert(
            handle,
            Timer {
                deadline: self.now_ms.saturating_add(delay_ms),
                kind,
                ticks: 0,
                payload,
            },
        );
        handle
    }
}
