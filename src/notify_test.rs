use super::*;
use crate::testing::{FakeToastHost, ManualScheduler};

fn notifier() -> (Notifier<FakeToastHost, ManualScheduler>, FakeToastHost, ManualScheduler) {
    let host = FakeToastHost::default();
    let scheduler = ManualScheduler::default();
    let notifier = Notifier::new(host.clone(), scheduler.clone(), &Timings::default());
    (notifier, host, scheduler)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================
// Severity / ToastSpec
// =============================================================

#[test]
fn severity_default_is_info() {
    assert_eq!(Severity::default(), Severity::Info);
}

#[test]
fn severity_colors() {
    assert_eq!(Severity::Info.background(), "#007bff");
    assert_eq!(Severity::Success.background(), "#28a745");
    assert_eq!(Severity::Error.background(), "#dc3545");
    assert_eq!(Severity::Warning.background(), "#ffc107");
    assert_eq!(Severity::Warning.foreground(), "#212529");
    assert_eq!(Severity::Error.foreground(), "white");
}

#[test]
fn toast_spec_carries_classes_and_colors() {
    let spec = ToastSpec::new("saved", Severity::Success);
    assert_eq!(spec.text, "saved");
    assert_eq!(spec.class_name, "message-toast message-success");
    assert!(spec.style.contains("background-color: #28a745;"));
    assert!(spec.style.contains("color: white;"));
    assert!(spec.style.contains("position: fixed;"));
    assert!(spec.style.contains("animation: slideIn 0.3s ease;"));
}

#[test]
fn exit_animation_uses_exit_duration() {
    assert_eq!(exit_animation(ms(300)), "slideOut 300ms ease");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn show_mounts_one_toast() {
    let (notifier, host, _) = notifier();
    notifier.show("hello", Severity::Info);

    let visible = host.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].spec.text, "hello");
    assert_eq!(notifier.current(), Some(visible[0].id));
}

#[test]
fn toast_starts_exit_after_display_window_then_is_removed() {
    let (notifier, host, scheduler) = notifier();
    notifier.show("hello", Severity::Info);

    scheduler.advance(ms(2999));
    assert_eq!(host.visible().len(), 1);
    assert_eq!(host.all()[0].animation, None);

    scheduler.advance(ms(1));
    assert_eq!(host.all()[0].animation.as_deref(), Some("slideOut 300ms ease"));
    assert_eq!(host.visible().len(), 1);

    scheduler.advance(ms(299));
    assert_eq!(host.visible().len(), 1);

    scheduler.advance(ms(1));
    assert!(host.visible().is_empty());
    assert_eq!(notifier.current(), None);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn new_toast_supersedes_previous_one() {
    let (notifier, host, _) = notifier();
    notifier.show("A", Severity::Info);
    notifier.show("B", Severity::Error);

    let visible = host.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].spec.text, "B");
    assert_eq!(visible[0].spec.class_name, "message-toast message-error");
}

#[test]
fn superseded_timer_does_not_remove_successor() {
    let (notifier, host, scheduler) = notifier();
    notifier.show("A", Severity::Info);
    scheduler.advance(ms(1000));
    notifier.show("B", Severity::Info);

    // A's full 3300ms lifetime elapses; B is still inside its display window.
    scheduler.advance(ms(2300));
    let visible = host.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].spec.text, "B");
    assert_eq!(visible[0].animation, None);
    assert_eq!(notifier.current(), Some(visible[0].id));

    scheduler.advance(ms(1000));
    assert!(host.visible().is_empty());
}

#[test]
fn missing_host_drops_notice_without_panicking() {
    let host = FakeToastHost::unavailable();
    let scheduler = ManualScheduler::default();
    let notifier = Notifier::new(host.clone(), scheduler.clone(), &Timings::default());

    notifier.show("lost", Severity::Warning);
    assert!(host.all().is_empty());
    assert_eq!(notifier.current(), None);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn custom_timings_are_honored() {
    let host = FakeToastHost::default();
    let scheduler = ManualScheduler::default();
    let timings = Timings { toast_display_ms: 100, toast_exit_ms: 50, search_debounce_ms: 300 };
    let notifier = Notifier::new(host.clone(), scheduler.clone(), &timings);

    notifier.show("quick", Severity::Success);
    scheduler.advance(ms(149));
    assert_eq!(host.visible().len(), 1);
    scheduler.advance(ms(1));
    assert!(host.visible().is_empty());
}
