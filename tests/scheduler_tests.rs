//! Render Scheduler Tests
//!
//! Tests for:
//! - Dirty-flag gating of draw calls
//! - Reason accumulation and reset
//! - Frame statistics and FPS measurement

use std::time::Duration;

use house_viewer::{FpsCounter, FrameOutcome, RedrawReasons, RenderScheduler};

const FRAME: Duration = Duration::from_millis(16);

// ============================================================================
// Draw Gating
// ============================================================================

#[test]
fn first_frame_always_draws() {
    let mut scheduler = RenderScheduler::new();
    let mut draws = 0;

    let outcome = scheduler.frame(FRAME, || draws += 1);

    assert_eq!(outcome, FrameOutcome::Drawn(RedrawReasons::FORCED));
    assert_eq!(draws, 1);
}

#[test]
fn clean_frames_skip_the_draw() {
    let mut scheduler = RenderScheduler::new();
    let mut draws = 0;
    scheduler.frame(FRAME, || draws += 1);

    for _ in 0..10 {
        let outcome = scheduler.frame(FRAME, || draws += 1);
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert!(!outcome.drew());
    }

    assert_eq!(draws, 1);
    assert_eq!(scheduler.drawn_frames(), 1);
    assert_eq!(scheduler.skipped_frames(), 10);
}

#[test]
fn marking_dirty_triggers_exactly_one_draw() {
    let mut scheduler = RenderScheduler::new();
    scheduler.frame(FRAME, || {});

    scheduler.mark_dirty(RedrawReasons::COLOR);
    assert!(scheduler.is_dirty());

    let mut draws = 0;
    assert!(scheduler.frame(FRAME, || draws += 1).drew());
    assert!(!scheduler.frame(FRAME, || draws += 1).drew());
    assert_eq!(draws, 1);
    assert!(!scheduler.is_dirty());
}

#[test]
fn reasons_accumulate_until_drawn() {
    let mut scheduler = RenderScheduler::new();
    scheduler.frame(FRAME, || {});

    scheduler.mark_dirty(RedrawReasons::CAMERA);
    scheduler.mark_dirty(RedrawReasons::RESIZE);
    scheduler.mark_dirty(RedrawReasons::CAMERA);
    assert_eq!(scheduler.pending(), RedrawReasons::CAMERA | RedrawReasons::RESIZE);

    let outcome = scheduler.frame(FRAME, || {});
    assert_eq!(outcome, FrameOutcome::Drawn(RedrawReasons::CAMERA | RedrawReasons::RESIZE));
    assert!(scheduler.pending().is_empty());
}

#[test]
fn dirtying_during_draw_is_kept_for_next_frame() {
    let mut scheduler = RenderScheduler::new();
    scheduler.frame(FRAME, || {});

    scheduler.mark_dirty(RedrawReasons::MODEL_LOAD);
    let outcome = scheduler.frame(FRAME, || {});
    scheduler.mark_dirty(RedrawReasons::COLOR);

    assert_eq!(outcome, FrameOutcome::Drawn(RedrawReasons::MODEL_LOAD));
    assert_eq!(scheduler.frame(FRAME, || {}), FrameOutcome::Drawn(RedrawReasons::COLOR));
}

// ============================================================================
// FPS
// ============================================================================

#[test]
fn fps_counts_skipped_frames_too() {
    let mut scheduler = RenderScheduler::new();
    assert!(scheduler.fps().abs() < f32::EPSILON);

    for _ in 0..60 {
        scheduler.frame(Duration::from_micros(16_667), || {});
    }
    // 60 x 16.667ms = 1.00002s, so the window has closed.
    assert!((scheduler.fps() - 60.0).abs() < 0.1, "fps = {}", scheduler.fps());
    assert_eq!(scheduler.drawn_frames() + scheduler.skipped_frames(), 60);
}

#[test]
fn fps_counter_reports_once_per_window() {
    let mut counter = FpsCounter::new();

    let reports: Vec<f32> = (0..45)
        .filter_map(|_| counter.tick(Duration::from_millis(50)))
        .collect();

    // 20 frames per second-long window, two full windows.
    assert_eq!(reports.len(), 2);
    for fps in reports {
        assert!((fps - 20.0).abs() < 1e-3);
    }
}
