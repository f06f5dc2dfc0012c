// SPDX-License-Identifier: MPL-2.0
use iced_alerts::alerts::{
    AlertId, AlertRequest, AlertService, AlertSettings, AlertState, HeadlessRenderer,
    RenderCommand,
};
use iced_alerts::config::{self, Config};
use iced_alerts::diagnostics::{AlertEvent, DiagnosticsCollector};
use iced_alerts::domain::alert::{Position, Severity};
use std::time::Duration;
use tempfile::tempdir;

fn service() -> AlertService<HeadlessRenderer> {
    AlertService::new(HeadlessRenderer::new(), AlertSettings::default())
}

fn finish_exits(service: &AlertService<HeadlessRenderer>) {
    let exits = service.with_renderer_mut(HeadlessRenderer::take_pending_exits);
    for visual in exits {
        service.exit_finished(visual);
    }
}

fn count_commands(
    service: &AlertService<HeadlessRenderer>,
    wanted: fn(&RenderCommand) -> bool,
) -> usize {
    service.with_renderer(|renderer| {
        renderer
            .commands()
            .iter()
            .filter(|command| wanted(command))
            .count()
    })
}

fn is_unmount(command: &RenderCommand) -> bool {
    matches!(command, RenderCommand::Unmount(_))
}

fn is_play_exit(command: &RenderCommand) -> bool {
    matches!(command, RenderCommand::PlayExit(_))
}

fn match_count(service: &AlertService<HeadlessRenderer>, id: AlertId) -> Option<u32> {
    service.alert(id).map(|alert| alert.match_count())
}

#[test]
fn six_shows_keep_the_five_newest() {
    let service = service();
    let ids: Vec<_> = (0..6)
        .map(|n| {
            let request = AlertRequest::new(Severity::Info, format!("message {n}"))
                .position(Position::TopRight);
            service.show(request).id()
        })
        .collect();

    assert_eq!(service.stack_len(Position::TopRight), 5);
    assert_eq!(service.stack_ids(Position::TopRight), ids[1..].to_vec());
    assert!(service.alert(ids[0]).is_none());
}

#[test]
fn double_close_removes_once() {
    let service = service();
    let boom = AlertRequest::new(Severity::Error, "boom");
    let id = service.show(boom).id();

    service.close(id);
    service.close(id);
    finish_exits(&service);

    assert_eq!(count_commands(&service, is_unmount), 1);
    assert_eq!(service.total(), 0);
}

#[test]
fn disposer_then_timeout_removes_once() {
    let service = service();
    let request = AlertRequest::new(Severity::Info, "uploading").timeout_ms(1000);
    let disposer = service.show(request);

    disposer.dispose();
    service.advance(Duration::from_millis(2000));

    assert_eq!(count_commands(&service, is_play_exit), 1);
    assert_eq!(service.active_timers(), 0);

    finish_exits(&service);
    assert_eq!(service.total(), 0);
    assert_eq!(service.state(disposer.id()), None);
}

#[test]
fn grouped_title_duplicates_merge() {
    let service = service();
    let first = AlertRequest::new(Severity::Warning, "first").title("Sync");
    let second = AlertRequest::new(Severity::Warning, "second").title("Sync");
    let first = service.show_grouped(first);
    let second = service.show_grouped(second);

    assert_eq!(first.id(), second.id());
    assert_eq!(service.stack_len(Position::BottomRight), 1);
    assert_eq!(match_count(&service, first.id()), Some(2));
}

#[test]
fn grouped_message_duplicates_merge_without_titles() {
    let service = service();
    let first = service.show_grouped(AlertRequest::new(Severity::Info, "same text"));
    service.show_grouped(AlertRequest::new(Severity::Info, "same text"));
    service.show_grouped(AlertRequest::new(Severity::Info, "same text"));

    assert_eq!(service.total(), 1);
    assert_eq!(match_count(&service, first.id()), Some(3));
}

#[test]
fn missing_titles_do_not_match_each_other() {
    let service = service();
    service.show_grouped(AlertRequest::new(Severity::Info, "one"));
    service.show_grouped(AlertRequest::new(Severity::Info, "two"));

    assert_eq!(service.total(), 2);
}

#[test]
fn escape_empties_every_stack() {
    let service = service();
    for position in Position::ALL {
        service.show(AlertRequest::new(Severity::Debug, "x").position(position));
    }

    assert_eq!(service.escape_pressed(), Position::COUNT);
    finish_exits(&service);

    for position in Position::ALL {
        assert_eq!(service.stack_len(position), 0);
    }
}

#[test]
fn countdown_counts_down_then_dismiss_closes() {
    let service = service();
    let disposer = service.show(
        AlertRequest::new(Severity::Waiting, "deploying")
            .timeout_ms(5000)
            .countdown(true),
    );
    service.advance(Duration::ZERO);
    let visual = service
        .alert(disposer.id())
        .and_then(|alert| alert.visual())
        .expect("mounted");

    for _ in 0..50 {
        service.advance(Duration::from_millis(100));
    }

    let values = service.with_renderer(|renderer| renderer.countdown_values(visual));
    assert_eq!(values, vec![5, 4, 3, 2, 1]);
    assert_eq!(service.state(disposer.id()), Some(AlertState::Closing));
    assert_eq!(service.now_ms(), 5000);
}

#[test]
fn merging_never_leaves_two_dismiss_timers() {
    let service = service();
    let retry = || AlertRequest::new(Severity::Error, "retry").countdown(false);
    let first = service.show_grouped(retry());
    for _ in 0..4 {
        service.advance(Duration::from_millis(700));
        service.show_grouped(retry());
    }

    assert_eq!(service.total(), 1);
    assert_eq!(service.active_timers(), 1);
    assert_eq!(service.next_deadline_in(), Some(5000));
    assert_eq!(match_count(&service, first.id()), Some(5));
}

#[test]
fn disposer_after_close_is_noop() {
    let service = service();
    let disposer = service.show(AlertRequest::new(Severity::Success, "done"));
    service.close(disposer.id());
    finish_exits(&service);

    disposer.dispose();
    assert_eq!(service.total(), 0);
}

#[test]
fn keyword_style_requests_normalize_inputs() {
    let service = service();
    let request = AlertRequest::from_indices("Title", "body", 0, 42, "sideways", 99);
    let id = service.show(request).id();

    let alert = service.alert(id).expect("alert exists");
    assert_eq!(alert.severity(), Severity::Default);
    assert_eq!(alert.position(), Position::BottomRight);
    assert_eq!(alert.timeout_ms(), 0);
}

#[test]
fn settings_from_config_file_drive_the_service() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let mut config = Config::default();
    config.alerts.max_per_stack = Some(2);
    config.alerts.escape_closes_all = false;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let service = AlertService::new(HeadlessRenderer::new(), loaded.alert_settings());
    for n in 0..3 {
        service.show(AlertRequest::new(Severity::Info, format!("{n}")));
    }

    assert_eq!(service.stack_len(Position::BottomRight), 2);
    assert_eq!(service.escape_pressed(), 0);
    assert!(!service.escape_installed());
}

#[test]
fn diagnostics_report_lists_lifecycle() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut collector = DiagnosticsCollector::new(Config::default().diagnostics_capacity());
    let service = service().with_diagnostics(collector.handle());

    service.show_grouped(AlertRequest::new(Severity::Info, "dup"));
    service.show_grouped(AlertRequest::new(Severity::Info, "dup"));
    service.escape_pressed();
    finish_exits(&service);

    collector.process_pending();
    assert!(collector
        .iter()
        .any(|event| matches!(event.kind, AlertEvent::Merged { match_count: 2, .. })));
    assert!(collector
        .iter()
        .any(|event| event.kind == AlertEvent::EscapeBroadcast { closed: 1 }));

    let path = dir.path().join("report.json");
    collector.export_to_path(&path).expect("export");
    let json = std::fs::read_to_string(&path).expect("read report");
    assert!(json.contains("escape_broadcast"));
}
