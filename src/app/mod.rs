// SPDX-License-Identifier: MPL-2.0
//! Demo application driving the alert service with iced.
//!
//! The `App` owns an [`AlertService`] rendering into a [`ToastBoard`]. A
//! 100 ms tick advances the alert clock and reports finished fades back to
//! the service; the Escape key is routed to the alert broadcast.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::alerts::{AlertRequest, AlertService};
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::error::Error;
use crate::domain::alert::Severity;
use crate::ui::toasts::{self, ToastBoard};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;
const MIN_WINDOW_WIDTH: f32 = 720.0;
const MIN_WINDOW_HEIGHT: f32 = 480.0;

const DIAGNOSTICS_FILE: &str = "diagnostics.json";

/// Root iced application state.
pub struct App {
    service: AlertService<ToastBoard>,
    diagnostics: DiagnosticsCollector,
    diagnostics_path: Option<PathBuf>,
    /// Instant of the last tick; `None` while no alert is on screen.
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("alerts", &self.service.total())
            .field("last_tick", &self.last_tick)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let (config, load_error) = match loaded {
            Ok(config) => (config, None),
            Err(error) => (Config::default(), Some(error)),
        };

        let diagnostics = DiagnosticsCollector::new(config.diagnostics_capacity());
        let service = AlertService::new(ToastBoard::default(), config.alert_settings())
            .with_diagnostics(diagnostics.handle());

        let mut app = Self {
            service,
            diagnostics,
            diagnostics_path: flags.diagnostics_path,
            last_tick: None,
        };
        if let Some(error) = load_error {
            let detail = error.to_string();
            app.notify(Severity::Warning, "Default settings in use", detail);
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.service.total() {
            0 => "Iced Alerts".to_string(),
            count => format!("Iced Alerts ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.service.total() > 0),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::EscapePressed => {
                self.service.escape_pressed();
            }
            Message::Toast(toasts::Message::Close(id)) => {
                self.service.close(id);
            }
            Message::Show(severity) => {
                self.start_clock();
                let request = self.demo_request(severity);
                self.service.show(request);
            }
            Message::ShowGrouped(severity) => {
                self.start_clock();
                let request = self.demo_request(severity);
                self.service.show_grouped(request);
            }
            Message::CloseAll => {
                self.service.close_all();
            }
            Message::ExportDiagnostics => self.export_diagnostics(),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let (board, announcement) = self.service.with_renderer(|board| {
            let announcement = board.announcement().map(str::to_string);
            (board.view(), announcement)
        });
        view::view(board, self.service.total(), announcement)
    }

    /// Advances alert timers by the wall-clock time since the last tick.
    fn tick(&mut self, now: Instant) {
        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);

        self.service.with_renderer_mut(|board| board.sync(now));
        self.service.advance(elapsed);

        let finished = self
            .service
            .with_renderer_mut(ToastBoard::take_finished_exits);
        for visual in finished {
            self.service.exit_finished(visual);
        }
        self.diagnostics.process_pending();

        if self.service.total() == 0 {
            self.last_tick = None;
        }
    }

    /// Anchors the alert clock before the first alert of a burst.
    fn start_clock(&mut self) {
        if self.last_tick.is_none() {
            let now = Instant::now();
            self.last_tick = Some(now);
            self.service.with_renderer_mut(|board| board.sync(now));
        }
    }

    fn notify(&mut self, severity: Severity, title: &str, message: String) {
        self.start_clock();
        let request = self
            .service
            .settings()
            .request(severity, message)
            .title(title);
        self.service.show(request);
    }

    fn demo_request(&self, severity: Severity) -> AlertRequest {
        let (title, message) = match severity {
            Severity::Success => ("Saved", "Your changes were saved."),
            Severity::Error => ("Upload failed", "The server did not respond."),
            Severity::Info => ("", "A new version is available."),
            Severity::Warning => ("Battery", "Battery below 15%."),
            Severity::Waiting => ("Syncing", "Waiting for the remote."),
            Severity::Critical => ("Disk", "No space left on device."),
            Severity::Debug | Severity::Default => ("", "Cache hit ratio 0.93"),
        };
        let request = self
            .service
            .settings()
            .request(severity, message)
            .title(title);
        match severity {
            Severity::Waiting => request.timeout_ms(0),
            Severity::Warning => request.countdown(true),
            _ => request,
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        let path = self
            .diagnostics_path
            .clone()
            .or_else(|| config::config_dir().map(|dir| dir.join(DIAGNOSTICS_FILE)));

        let outcome = match &path {
            Some(path) => self
                .diagnostics
                .export_to_path(path)
                .map(|()| path.display().to_string()),
            None => Err(Error::Diagnostics("no location for the report".into())),
        };
        match outcome {
            Ok(location) => self.notify(Severity::Success, "Diagnostics exported", location),
            Err(error) => self.notify(Severity::Error, "Export failed", error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXIT_TRANSITION_MS;
    use std::time::Duration;
    use tempfile::tempdir;

    fn app_with(dir: &std::path::Path) -> App {
        let settings = dir.join("settings.toml");
        config::save_to_path(&Config::default(), &settings).expect("write settings");
        let flags = Flags {
            config_path: Some(settings),
            diagnostics_path: Some(dir.join("report.json")),
        };
        App::new(flags).0
    }

    fn drain_exits(app: &mut App) {
        let start = app.last_tick.unwrap_or_else(Instant::now);
        let _ = app.update(Message::Tick(start));
        let end = start + Duration::from_millis(EXIT_TRANSITION_MS);
        let _ = app.update(Message::Tick(end));
    }

    #[test]
    fn missing_config_falls_back_with_warning() {
        let dir = tempdir().expect("temp dir");
        let flags = Flags {
            config_path: Some(dir.path().join("absent.toml")),
            diagnostics_path: None,
        };
        let (app, _) = App::new(flags);

        assert_eq!(app.service.total(), 1);
    }

    #[test]
    fn show_and_close_button() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with(dir.path());
        let _ = app.update(Message::Show(Severity::Info));
        assert_eq!(app.service.total(), 1);
        assert_eq!(app.title(), "Iced Alerts (1)");

        let position = app.service.settings().default_position;
        let id = app.service.stack_ids(position)[0];
        let _ = app.update(Message::Toast(toasts::Message::Close(id)));
        drain_exits(&mut app);

        assert_eq!(app.service.total(), 0);
        assert!(app.last_tick.is_none());
    }

    #[test]
    fn grouped_requests_merge() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with(dir.path());
        let _ = app.update(Message::ShowGrouped(Severity::Error));
        let _ = app.update(Message::ShowGrouped(Severity::Error));

        assert_eq!(app.service.total(), 1);
    }

    #[test]
    fn escape_clears_the_board() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with(dir.path());
        let _ = app.update(Message::Show(Severity::Success));
        let _ = app.update(Message::Show(Severity::Waiting));
        let _ = app.update(Message::EscapePressed);
        drain_exits(&mut app);

        assert_eq!(app.service.total(), 0);
    }

    #[test]
    fn export_writes_report() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with(dir.path());
        let _ = app.update(Message::Show(Severity::Debug));
        let _ = app.update(Message::ExportDiagnostics);

        let report = std::fs::read_to_string(dir.path().join("report.json")).expect("report");
        assert!(report.contains("\"shown\""));
        assert_eq!(app.service.total(), 2);
    }
}
