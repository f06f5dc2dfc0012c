// SPDX-License-Identifier: MPL-2.0
//! Alert service facade.
//!
//! [`AlertService`] owns the stacks, the timer registry and the Escape
//! broadcaster, and drives a [`Renderer`]. Every public entry point first
//! flushes pending reveals (the microtask that moves freshly mounted alerts
//! from `Created` to `Visible`), then performs its work, then applies any
//! close requested by a [`Disposer`] while the work was running.
//!
//! The service is single-threaded (`!Send`). Time only moves through
//! [`AlertService::advance`].

use std::cell::{Ref, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::alert::{Alert, AlertId, AlertState, CloseReason, TimerEvent};
use super::escape::EscapeBroadcaster;
use super::matcher::find_match;
use super::renderer::{AlertDescriptor, Renderer, VisualHandle};
use super::request::AlertRequest;
use super::settings::AlertSettings;
use super::stack::StackManager;
use super::timer::{Fired, TimerRegistry};
use crate::diagnostics::{AlertEvent, DiagnosticsHandle};
use crate::domain::alert::Position;

/// Entry point of the alert system.
pub struct AlertService<R: Renderer + 'static> {
    shared: Rc<Shared<R>>,
}

struct Shared<R> {
    core: RefCell<Core<R>>,
    /// Disposer closes that arrived while the core was borrowed.
    deferred: RefCell<Vec<AlertId>>,
}

struct Core<R> {
    renderer: R,
    stacks: StackManager,
    timers: TimerRegistry<TimerEvent>,
    escape: EscapeBroadcaster,
    pending_reveals: VecDeque<AlertId>,
    settings: AlertSettings,
    diagnostics: Option<DiagnosticsHandle>,
}

/// Closes alerts on behalf of a [`Disposer`].
trait CloseSink {
    fn request_close(&self, id: AlertId);
}

/// Closes the alert it was returned for.
///
/// Disposing twice, disposing an alert that already closed, or disposing
/// after the service was dropped does nothing.
#[derive(Clone)]
pub struct Disposer {
    id: AlertId,
    sink: Weak<dyn CloseSink>,
}

impl Disposer {
    /// The alert this disposer closes. For a merged grouped request this is
    /// the alert the request was coalesced into.
    #[must_use]
    pub fn id(&self) -> AlertId {
        self.id
    }

    pub fn dispose(&self) {
        if let Some(sink) = self.sink.upgrade() {
            sink.request_close(self.id);
        }
    }
}

impl fmt::Debug for Disposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposer")
            .field("id", &self.id)
            .field("live", &(self.sink.strong_count() > 0))
            .finish()
    }
}

impl<R: Renderer> CloseSink for Shared<R> {
    fn request_close(&self, id: AlertId) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.flush_reveals();
            core.close(id, CloseReason::Disposer);
        } else {
            self.deferred.borrow_mut().push(id);
            return;
        }
        self.drain_deferred();
    }
}

impl<R: Renderer> Shared<R> {
    fn drain_deferred(&self) {
        loop {
            let ids = std::mem::take(&mut *self.deferred.borrow_mut());
            if ids.is_empty() {
                return;
            }
            let mut core = self.core.borrow_mut();
            for id in ids {
                core.close(id, CloseReason::Disposer);
            }
        }
    }
}

impl<R: Renderer + 'static> AlertService<R> {
    pub fn new(renderer: R, settings: AlertSettings) -> Self {
        let core = Core {
            renderer,
            stacks: StackManager::new(settings.capacity),
            timers: TimerRegistry::new(),
            escape: EscapeBroadcaster::new(),
            pending_reveals: VecDeque::new(),
            settings,
            diagnostics: None,
        };
        Self {
            shared: Rc::new(Shared {
                core: RefCell::new(core),
                deferred: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Sends lifecycle events to a diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(self, handle: DiagnosticsHandle) -> Self {
        self.shared.core.borrow_mut().diagnostics = Some(handle);
        self
    }

    #[must_use]
    pub fn settings(&self) -> AlertSettings {
        self.core().settings
    }

    /// Shows a new alert. The countdown is off unless the request asks for it.
    pub fn show(&self, request: AlertRequest) -> Disposer {
        let show_countdown = request.show_countdown.unwrap_or(false);
        let id = self.run(|core| core.show(request, show_countdown, false));
        self.disposer(id)
    }

    /// Shows an alert, or coalesces it into an open duplicate at the same
    /// position. The countdown is on unless the request turns it off.
    pub fn show_grouped(&self, request: AlertRequest) -> Disposer {
        let show_countdown = request.show_countdown.unwrap_or(true);
        let id = self.run(|core| core.show_grouped(request, show_countdown));
        self.disposer(id)
    }

    /// Close-button activation. Returns `false` if the alert was already
    /// closing, removed, or unknown.
    pub fn close(&self, id: AlertId) -> bool {
        self.run(|core| core.close(id, CloseReason::CloseButton))
    }

    /// Escape key handler. Closes every open alert when the broadcaster is
    /// installed and returns how many started closing.
    pub fn escape_pressed(&self) -> usize {
        self.run(|core| {
            if !core.escape.is_installed() {
                return 0;
            }
            let closed = core.close_open(CloseReason::Escape);
            core.log(AlertEvent::EscapeBroadcast { closed });
            closed
        })
    }

    /// Closes every open alert regardless of the Escape setting.
    pub fn close_all(&self) -> usize {
        self.run(|core| core.close_open(CloseReason::CloseButton))
    }

    /// Reports the end of an exit transition started by `play_exit`.
    pub fn exit_finished(&self, visual: VisualHandle) -> bool {
        self.run(|core| core.exit_finished(visual))
    }

    /// Moves the clock forward, firing due timers in deadline order.
    pub fn advance(&self, elapsed: Duration) {
        let step = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.run(|core| core.advance(step));
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.core().timers.now_ms()
    }

    /// Milliseconds until the next timer fires, if any.
    #[must_use]
    pub fn next_deadline_in(&self) -> Option<u64> {
        let core = self.core();
        core.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(core.timers.now_ms()))
    }

    /// Snapshot of an alert still held by a stack.
    ///
    /// Pending reveals are not flushed, so a just-shown alert reads `Created`.
    #[must_use]
    pub fn alert(&self, id: AlertId) -> Option<Alert> {
        self.core().stacks.find(id).cloned()
    }

    #[must_use]
    pub fn state(&self, id: AlertId) -> Option<AlertState> {
        self.core().stacks.find(id).map(Alert::state)
    }

    /// Number of alerts at `position`, closing ones included.
    #[must_use]
    pub fn stack_len(&self, position: Position) -> usize {
        self.core().stacks.len(position)
    }

    /// Alerts at `position`, oldest first.
    #[must_use]
    pub fn stack_ids(&self, position: Position) -> Vec<AlertId> {
        self.core()
            .stacks
            .stack(position)
            .map(|stack| stack.iter().map(Alert::id).collect())
            .unwrap_or_default()
    }

    /// Alerts currently tracked as visible or counting down.
    #[must_use]
    pub fn open_alerts(&self) -> Vec<AlertId> {
        self.core().escape.snapshot()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.core().stacks.total()
    }

    /// Pending timers across all alerts.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.core().timers.active_count()
    }

    #[must_use]
    pub fn escape_installed(&self) -> bool {
        self.core().escape.is_installed()
    }

    /// Gives read access to the renderer.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls an entry point of this service. Disposers are
    /// fine: they are applied once `f` returns.
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        let result = f(&self.core().renderer);
        self.shared.drain_deferred();
        result
    }

    /// Gives write access to the renderer, e.g. to collect finished exits.
    /// Disposers invoked from `f` are applied once it returns.
    pub fn with_renderer_mut<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.run(|core| f(&mut core.renderer))
    }

    fn core(&self) -> Ref<'_, Core<R>> {
        self.shared.core.borrow()
    }

    fn run<T>(&self, op: impl FnOnce(&mut Core<R>) -> T) -> T {
        let result = {
            let mut core = self.shared.core.borrow_mut();
            core.flush_reveals();
            op(&mut core)
        };
        self.shared.drain_deferred();
        result
    }

    fn disposer(&self, id: AlertId) -> Disposer {
        let shared = Rc::downgrade(&self.shared);
        let sink: Weak<dyn CloseSink> = shared;
        Disposer { id, sink }
    }
}

impl<R: Renderer + fmt::Debug + 'static> fmt::Debug for AlertService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.core();
        f.debug_struct("AlertService")
            .field("renderer", &core.renderer)
            .field("alerts", &core.stacks.total())
            .field("now_ms", &core.timers.now_ms())
            .finish()
    }
}

impl<R: Renderer> Core<R> {
    fn log(&self, event: AlertEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event);
        }
    }

    /// Runs the reveal microtask for every alert mounted since the last flush.
    fn flush_reveals(&mut self) {
        while let Some(id) = self.pending_reveals.pop_front() {
            let Some(alert) = self.stacks.find_mut(id) else {
                continue;
            };
            let countdown = alert.reveal(&mut self.timers);
            let open = alert.state().is_open();
            let visual = alert.visual();

            if open {
                self.escape.track(id);
            }
            if let (Some(seconds), Some(visual)) = (countdown, visual) {
                self.renderer.update_countdown(visual, seconds);
            }
        }
    }

    fn show(&mut self, request: AlertRequest, show_countdown: bool, grouped: bool) -> AlertId {
        let position = request.position;
        let alert = Alert::new(request, show_countdown, grouped);
        let id = alert.id();

        let insertion = self.stacks.insert(alert);
        if insertion.created_stack {
            self.renderer.create_stack(position);
            if self.settings.escape_closes_all && self.escape.install() {
                self.log(AlertEvent::EscapeInstalled);
            }
        }
        if let Some(evicted) = insertion.evicted {
            self.discard(evicted);
        }

        let stack_depth = self.stacks.len(position).saturating_sub(1);
        if let Some(alert) = self.stacks.find_mut(id) {
            let descriptor = describe(alert, stack_depth);
            let visual = self.renderer.mount_alert(&descriptor);
            alert.attach_visual(visual);
        }
        if let Some(alert) = self.stacks.find(id) {
            self.log(AlertEvent::shown(alert));
        }

        self.pending_reveals.push_back(id);
        id
    }

    fn show_grouped(&mut self, request: AlertRequest, show_countdown: bool) -> AlertId {
        let matched = self
            .stacks
            .stack(request.position)
            .and_then(|stack| find_match(stack, request.title.as_deref(), &request.message))
            .map(|alert| (alert.id(), alert.is_grouped()));

        match matched {
            Some((id, true)) => self.merge(id, request.timeout_ms, show_countdown),
            _ => self.show(request, show_countdown, true),
        }
    }

    fn merge(&mut self, id: AlertId, timeout_ms: u64, show_countdown: bool) -> AlertId {
        let Some(alert) = self.stacks.find_mut(id) else {
            return id;
        };
        let countdown = alert.absorb(timeout_ms, show_countdown, &mut self.timers);
        let match_count = alert.match_count();

        if let Some(visual) = alert.visual() {
            if let Some(seconds) = countdown {
                self.renderer.update_countdown(visual, seconds);
            }
            self.renderer.update_match_count(visual, match_count);
            self.renderer.pulse(visual);
        }
        self.log(AlertEvent::Merged {
            alert: id.value(),
            match_count,
        });
        id
    }

    /// Starts the exit transition of one alert.
    fn close(&mut self, id: AlertId, reason: CloseReason) -> bool {
        let Some(alert) = self.stacks.find_mut(id) else {
            return false;
        };
        if !alert.begin_close(&mut self.timers) {
            return false;
        }
        let visual = alert.visual();

        self.escape.forget(id);
        self.log(AlertEvent::CloseRequested {
            alert: id.value(),
            reason,
        });
        match visual {
            Some(visual) => self.renderer.play_exit(visual),
            None => {
                self.finish(id);
            }
        }
        true
    }

    /// Closes every tracked open alert, iterating a snapshot.
    fn close_open(&mut self, reason: CloseReason) -> usize {
        self.escape
            .snapshot()
            .into_iter()
            .filter(|&id| self.close(id, reason))
            .count()
    }

    fn exit_finished(&mut self, visual: VisualHandle) -> bool {
        let id = self
            .stacks
            .alerts()
            .find(|alert| alert.visual() == Some(visual))
            .map(Alert::id);
        id.is_some_and(|id| self.finish(id))
    }

    /// `Closing -> Removed`: leaves the stack and the surface.
    fn finish(&mut self, id: AlertId) -> bool {
        let Some(alert) = self.stacks.find_mut(id) else {
            return false;
        };
        if !alert.finish_close(&mut self.timers) {
            return false;
        }
        let position = alert.position();
        let visual = alert.visual();

        self.stacks.remove(id);
        if let Some(visual) = visual {
            self.renderer.unmount(visual);
        }
        self.log(AlertEvent::Removed { alert: id.value() });

        if self.settings.release_empty_stacks && self.stacks.release_if_empty(position) {
            self.renderer.destroy_stack(position);
        }
        true
    }

    /// Drops an alert evicted for capacity, without an exit transition.
    fn discard(&mut self, mut alert: Alert) {
        alert.evict(&mut self.timers);
        self.escape.forget(alert.id());
        if let Some(visual) = alert.visual() {
            self.renderer.unmount(visual);
        }
        self.log(AlertEvent::evicted(&alert));
    }

    fn advance(&mut self, step_ms: u64) {
        let until = self.timers.now_ms().saturating_add(step_ms);
        while let Some(fired) = self.timers.pop_due(until) {
            self.dispatch(fired);
        }
        self.timers.settle(until);
    }

    fn dispatch(&mut self, fired: Fired<TimerEvent>) {
        match fired.payload {
            TimerEvent::Dismiss(id) => {
                if let Some(alert) = self.stacks.find_mut(id) {
                    alert.dismiss_elapsed();
                }
                self.close(id, CloseReason::Timeout);
            }
            TimerEvent::CountdownTick(id) => {
                let Some(alert) = self.stacks.find_mut(id) else {
                    return;
                };
                let seconds = alert.countdown_tick(fired.ticks, &mut self.timers);
                if let (Some(seconds), Some(visual)) = (seconds, alert.visual()) {
                    self.renderer.update_countdown(visual, seconds);
                }
            }
        }
    }
}

fn describe(alert: &Alert, stack_depth: usize) -> AlertDescriptor {
    AlertDescriptor {
        id: alert.id(),
        position: alert.position(),
        severity: alert.severity(),
        title: alert.title().map(str::to_string),
        message: alert.message().to_string(),
        direction: alert.direction(),
        timeout_ms: alert.timeout_ms(),
        show_countdown: alert.show_countdown(),
        counter: alert.is_grouped().then_some(alert.match_count()),
        stack_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{HeadlessRenderer, RenderCommand};
    use crate::diagnostics::DiagnosticsCollector;
    use crate::domain::alert::{Severity, StackCapacity};

    fn service() -> AlertService<HeadlessRenderer> {
        AlertService::new(HeadlessRenderer::new(), AlertSettings::default())
    }

    fn info(message: &str) -> AlertRequest {
        AlertRequest::new(Severity::Info, message)
    }

    fn visual_of(service: &AlertService<HeadlessRenderer>, id: AlertId) -> VisualHandle {
        service
            .alert(id)
            .and_then(|alert| alert.visual())
            .expect("alert is mounted")
    }

    fn finish_exits(service: &AlertService<HeadlessRenderer>) {
        let exits = service.with_renderer_mut(HeadlessRenderer::take_pending_exits);
        for visual in exits {
            service.exit_finished(visual);
        }
    }

    #[test]
    fn show_mounts_then_reveals_on_next_entry_point() {
        let service = service();
        let id = service.show(info("saved")).id();

        assert_eq!(service.state(id), Some(AlertState::Created));
        service.advance(Duration::ZERO);
        assert_eq!(service.state(id), Some(AlertState::Visible));
        assert_eq!(service.open_alerts(), vec![id]);
    }

    #[test]
    fn first_stack_creation_installs_escape_once() {
        let service = service();
        service.show(info("a").position(Position::TopLeft));
        service.show(info("b").position(Position::TopRight));

        assert!(service.escape_installed());
        let created = service.with_renderer(|renderer| {
            renderer
                .commands()
                .iter()
                .filter(|command| matches!(command, RenderCommand::CreateStack(_)))
                .count()
        });
        assert_eq!(created, 2);
    }

    #[test]
    fn escape_is_not_installed_when_disabled() {
        let settings = AlertSettings {
            escape_closes_all: false,
            ..AlertSettings::default()
        };
        let service = AlertService::new(HeadlessRenderer::new(), settings);
        let id = service.show(info("stay")).id();

        assert_eq!(service.escape_pressed(), 0);
        assert_eq!(service.state(id), Some(AlertState::Visible));
    }

    #[test]
    fn capacity_evicts_oldest_without_exit_transition() {
        let settings = AlertSettings {
            capacity: StackCapacity::new(2),
            ..AlertSettings::default()
        };
        let service = AlertService::new(HeadlessRenderer::new(), settings);
        let first = service.show(info("1")).id();
        let first_visual = visual_of(&service, first);
        let second = service.show(info("2")).id();
        let third = service.show(info("3")).id();

        assert_eq!(
            service.stack_ids(Position::BottomRight),
            vec![second, third]
        );
        assert!(service.alert(first).is_none());
        service.advance(Duration::ZERO);
        service.with_renderer(|renderer| {
            assert!(!renderer.is_mounted(first_visual));
            assert!(!renderer
                .commands()
                .contains(&RenderCommand::PlayExit(first_visual)));
        });
        assert_eq!(service.active_timers(), 2);
    }

    #[test]
    fn descriptor_reports_stack_depth_and_counter() {
        let service = service();
        service.show(info("1"));
        let grouped = service.show_grouped(info("2")).id();

        let visual = visual_of(&service, grouped);
        let descriptor = service
            .with_renderer(|renderer| renderer.descriptor(visual).cloned())
            .expect("descriptor recorded");
        assert_eq!(descriptor.stack_depth, 1);
        assert_eq!(descriptor.counter, Some(1));
        assert!(descriptor.show_countdown);
    }

    #[test]
    fn close_twice_plays_one_exit() {
        let service = service();
        let id = service.show(info("bye")).id();

        assert!(service.close(id));
        assert!(!service.close(id));
        assert_eq!(service.state(id), Some(AlertState::Closing));

        finish_exits(&service);
        assert_eq!(service.state(id), None);
        assert_eq!(service.total(), 0);
        assert_eq!(service.active_timers(), 0);
    }

    #[test]
    fn dismiss_timer_closes_after_timeout() {
        let service = service();
        let id = service.show(info("short").timeout_ms(1500)).id();

        service.advance(Duration::from_millis(1499));
        assert_eq!(service.state(id), Some(AlertState::Visible));
        service.advance(Duration::from_millis(1));
        assert_eq!(service.state(id), Some(AlertState::Closing));
    }

    #[test]
    fn zero_timeout_never_dismisses() {
        let service = service();
        let id = service.show(info("sticky").timeout_ms(0)).id();

        service.advance(Duration::from_secs(3600));
        assert_eq!(service.state(id), Some(AlertState::Visible));
        assert_eq!(service.active_timers(), 0);
    }

    #[test]
    fn countdown_pushes_every_second_then_dismisses() {
        let service = service();
        let id = service.show(info("ticking").countdown(true)).id();
        service.advance(Duration::ZERO);
        let visual = visual_of(&service, id);

        service.advance(Duration::from_millis(5000));

        let values = service.with_renderer(|renderer| renderer.countdown_values(visual));
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
        assert_eq!(service.state(id), Some(AlertState::Closing));
    }

    #[test]
    fn grouped_title_match_merges() {
        let service = service();
        let first = service.show_grouped(info("one").title("Upload")).id();
        let second = service.show_grouped(info("two").title("Upload")).id();

        assert_eq!(first, second);
        assert_eq!(service.stack_len(Position::BottomRight), 1);
        let alert = service.alert(first).expect("alert exists");
        assert_eq!(alert.match_count(), 2);

        let visual = visual_of(&service, first);
        service.with_renderer(|renderer| {
            assert_eq!(renderer.pulse_count(visual), 1);
            assert!(renderer
                .commands()
                .contains(&RenderCommand::MatchCount { visual, count: 2 }));
        });
    }

    #[test]
    fn grouped_merge_keeps_single_dismiss_timer() {
        let service = service();
        let id = service.show_grouped(info("retry").countdown(false)).id();
        service.advance(Duration::from_millis(4000));
        service.show_grouped(info("retry").countdown(false).timeout_ms(5000));

        assert_eq!(service.active_timers(), 1);
        service.advance(Duration::from_millis(4999));
        assert_eq!(service.state(id), Some(AlertState::Visible));
        service.advance(Duration::from_millis(1));
        assert_eq!(service.state(id), Some(AlertState::Closing));
    }

    #[test]
    fn grouped_match_on_plain_alert_falls_back_to_show() {
        let service = service();
        let plain = service.show(info("same")).id();
        let grouped = service.show_grouped(info("same")).id();

        assert_ne!(plain, grouped);
        assert_eq!(service.stack_len(Position::BottomRight), 2);
        assert_eq!(
            service.alert(plain).map(|alert| alert.match_count()),
            Some(1)
        );
    }

    #[test]
    fn grouped_ignores_other_positions_and_closing_alerts() {
        let service = service();
        let first = service.show_grouped(info("dup")).id();
        let elsewhere = service
            .show_grouped(info("dup").position(Position::TopLeft))
            .id();
        assert_ne!(first, elsewhere);

        service.close(first);
        let fresh = service.show_grouped(info("dup")).id();
        assert_ne!(fresh, first);
    }

    #[test]
    fn disposer_closes_and_is_reusable_noop() {
        let service = service();
        let disposer = service.show(info("task"));
        let id = disposer.id();

        disposer.dispose();
        disposer.dispose();
        assert_eq!(service.state(id), Some(AlertState::Closing));
        let exits = service.with_renderer(|renderer| {
            renderer
                .commands()
                .iter()
                .filter(|command| matches!(command, RenderCommand::PlayExit(_)))
                .count()
        });
        assert_eq!(exits, 1);
    }

    #[test]
    fn disposer_then_dismiss_deadline_closes_once() {
        let service = service();
        let disposer = service.show(info("racing").timeout_ms(1000));
        let id = disposer.id();

        disposer.dispose();
        service.advance(Duration::from_millis(2000));

        assert_eq!(service.active_timers(), 0);
        let exits = service.with_renderer_mut(HeadlessRenderer::take_pending_exits);
        assert_eq!(exits.len(), 1);
        for visual in exits {
            assert!(service.exit_finished(visual));
        }
        assert_eq!(service.state(id), None);
        assert_eq!(service.total(), 0);
    }

    #[test]
    fn disposer_inside_renderer_access_is_deferred() {
        let service = service();
        let disposer = service.show(info("nested"));
        let id = disposer.id();

        service.with_renderer_mut(|_| disposer.dispose());
        assert_eq!(service.state(id), Some(AlertState::Closing));
    }

    #[test]
    fn disposer_outliving_service_is_noop() {
        let service = service();
        let disposer = service.show(info("orphan"));
        drop(service);
        disposer.dispose();
    }

    #[test]
    fn escape_closes_every_open_alert() {
        let service = service();
        service.show(info("a").position(Position::TopLeft));
        service.show(info("b").position(Position::BottomMiddle));
        service.show(info("c").timeout_ms(0));

        assert_eq!(service.escape_pressed(), 3);
        assert!(service.open_alerts().is_empty());
        finish_exits(&service);
        assert_eq!(service.total(), 0);
    }

    #[test]
    fn release_empty_stacks_destroys_stack() {
        let settings = AlertSettings {
            release_empty_stacks: true,
            ..AlertSettings::default()
        };
        let service = AlertService::new(HeadlessRenderer::new(), settings);
        let id = service
            .show(info("only").position(Position::TopMiddle))
            .id();
        service.close(id);
        finish_exits(&service);

        service.with_renderer(|renderer| {
            assert!(renderer
                .commands()
                .contains(&RenderCommand::DestroyStack(Position::TopMiddle)));
        });
    }

    #[test]
    fn lifecycle_events_reach_diagnostics() {
        let mut collector = DiagnosticsCollector::new(Default::default());
        let service = service().with_diagnostics(collector.handle());
        let id = service.show(info("logged")).id();
        service.close(id);
        finish_exits(&service);

        collector.process_pending();
        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(kinds.first(), Some(&AlertEvent::EscapeInstalled));
        assert!(kinds.contains(&AlertEvent::CloseRequested {
            alert: id.value(),
            reason: CloseReason::CloseButton,
        }));
        assert_eq!(
            kinds.last(),
            Some(&AlertEvent::Removed { alert: id.value() })
        );
    }
}
