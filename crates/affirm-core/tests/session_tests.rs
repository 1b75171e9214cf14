mod common;

use affirm_core::*;
use common::*;

fn desktop() -> Dimensions {
    Dimensions::new(1000.0, 600.0, 2.0)
}

#[test]
fn activation_attaches_listener_and_sizes_backing() {
    let mut session = fake_session(1);
    assert!(session.activate(Some(desktop())));

    assert!(session.is_listening());
    assert_eq!(session.viewport().attach_count, 1);
    assert_eq!(session.viewport().backing, vec![desktop()]);
    assert_eq!(session.frames().outstanding.len(), 1);
    assert!(session.controller().is_active());
    assert_eq!(session.controller().dimensions(), Some(desktop()));
}

#[test]
fn burst_of_resizes_commits_once_after_the_delay() {
    let mut session = fake_session(2);
    session.activate(Some(desktop()));

    session.on_resize(Dimensions::new(700.0, 600.0, 2.0));
    advance_session(&mut session, 50);
    session.on_resize(Dimensions::new(720.0, 500.0, 2.0));
    assert_eq!(session.timers().armed.len(), 1);

    advance_session(&mut session, 299);
    assert_eq!(session.viewport().backing.len(), 1);
    advance_session(&mut session, 300);

    let committed = Dimensions::new(720.0, 500.0, 2.0);
    assert_eq!(session.viewport().backing, vec![desktop(), committed]);
    assert_eq!(session.controller().dimensions(), Some(committed));
    assert!(!session.resize_pending());
}

#[test]
fn deactivation_detaches_listener_and_drops_pending_commit() {
    let mut session = fake_session(3);
    session.activate(Some(desktop()));
    session.on_resize(Dimensions::new(700.0, 600.0, 2.0));
    assert!(session.resize_pending());

    session.deactivate();
    assert!(!session.is_listening());
    assert_eq!(session.viewport().detach_count, 1);
    assert!(session.timers().armed.is_empty());
    assert!(session.frames().outstanding.is_empty());

    advance_session(&mut session, 1_000);
    assert_eq!(session.viewport().backing.len(), 1);
    assert_eq!(session.controller().dimensions(), Some(desktop()));
}

#[test]
fn resize_while_inactive_is_ignored() {
    let mut session = fake_session(4);
    session.on_resize(Dimensions::new(700.0, 600.0, 1.0));
    assert!(!session.resize_pending());
    assert!(session.timers().armed.is_empty());
}

#[test]
fn repeated_activation_keeps_one_listener_and_one_frame() {
    let mut session = fake_session(5);
    session.activate(Some(desktop()));
    session.activate(Some(desktop()));
    assert_eq!(session.viewport().attach_count, 1);
    assert_eq!(session.frames().outstanding.len(), 1);

    session.deactivate();
    session.activate(Some(desktop()));
    assert_eq!(session.viewport().attach_count, 2);
    assert_eq!(session.viewport().detach_count, 1);
    assert_eq!(session.frames().outstanding.len(), 1);
}

#[test]
fn unmeasurable_surface_still_runs_without_dimensions() {
    let mut session = fake_session(6);
    assert!(session.activate(None));
    assert!(session.viewport().backing.is_empty());
    assert!(session.controller().particles().is_empty());

    session.on_resize(Dimensions::new(800.0, 600.0, 1.0));
    advance_session(&mut session, 250);
    assert_eq!(session.controller().particles().len(), 40);
}

#[test]
fn missing_resize_tracking_does_not_block_activation() {
    let mut session = fake_session(7);
    session.viewport_mut().unavailable = true;
    assert!(session.activate(Some(desktop())));
    assert!(!session.is_listening());

    session.deactivate();
    assert_eq!(session.viewport().detach_count, 0);
}

#[test]
fn refused_first_frame_leaves_session_detached() {
    let controller = Controller::with_seed(Tuning::default(), 8);
    let mut session = Session::with_controller(
        controller,
        RefusingFrames {
            refuse: true,
            ..Default::default()
        },
        FakeTimers::default(),
        FakeViewport::default(),
    );
    assert!(!session.activate(Some(desktop())));
    assert!(!session.controller().is_active());
    assert!(!session.is_listening());
    assert_eq!(session.viewport().detach_count, 1);

    session.frames_mut().refuse = false;
    assert!(session.activate(Some(desktop())));
    assert!(session.controller().is_running());
    assert!(session.is_listening());
    assert_eq!(session.frames().inner.outstanding.len(), 1);
}

#[test]
fn frames_render_through_the_session() {
    let mut session = fake_session(9);
    session.set_text("Breathe");
    session.activate(Some(desktop()));
    let mut surface = RecordingSurface::new();
    session.frames_mut().take_due();
    match session.on_frame(&mut surface, 0.0) {
        FrameOutcome::Rendered(report) => assert_eq!(report.text_lines.len(), 1),
        other => panic!("expected a rendered frame, got {other:?}"),
    }
    assert_eq!(session.frames().outstanding.len(), 1);
}
