//! Redraw elision.
//!
//! The host drives [`RenderScheduler::frame`] once per display refresh. The
//! loop itself always runs; only the draw call is gated on whether anything
//! changed since the last draw.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use web_time::Duration;

use bitflags::bitflags;

use crate::utils::FpsCounter;

bitflags! {
    /// Why the next frame needs a draw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct RedrawReasons: u32 {
        const CAMERA     = 1 << 0;
        const RESIZE     = 1 << 1;
        const COLOR      = 1 << 2;
        const MODEL_LOAD = 1 << 3;
        const FORCED     = 1 << 4;
    }
}

/// Result of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// A draw was issued for the accumulated reasons.
    Drawn(RedrawReasons),
    /// Nothing changed; the draw was elided.
    Skipped,
}

impl FrameOutcome {
    #[inline]
    #[must_use]
    pub fn drew(self) -> bool {
        matches!(self, FrameOutcome::Drawn(_))
    }
}

/// Dirty-flag draw gate with frame statistics.
///
/// Clean when `pending` is empty, dirty otherwise.
#[derive(Debug)]
pub struct RenderScheduler {
    pending: RedrawReasons,
    fps: FpsCounter,
    drawn_frames: u64,
    skipped_frames: u64,
}

impl RenderScheduler {
    /// Starts dirty so the first frame always draws.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: RedrawReasons::FORCED,
            fps: FpsCounter::new(),
            drawn_frames: 0,
            skipped_frames: 0,
        }
    }

    #[inline]
    pub fn mark_dirty(&mut self, reason: RedrawReasons) {
        self.pending |= reason;
    }

    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn pending(&self) -> RedrawReasons {
        self.pending
    }

    /// Runs one loop iteration, calling `draw` only when dirty.
    pub fn frame(&mut self, dt: Duration, draw: impl FnOnce()) -> FrameOutcome {
        if let Some(fps) = self.fps.tick(dt) {
            log::debug!(
                "{fps:.1} fps (drawn {} / skipped {})",
                self.drawn_frames,
                self.skipped_frames
            );
        }

        if self.pending.is_empty() {
            self.skipped_frames += 1;
            return FrameOutcome::Skipped;
        }

        let reasons = std::mem::take(&mut self.pending);
        draw();
        self.drawn_frames += 1;
        FrameOutcome::Drawn(reasons)
    }

    /// Loop iterations per second over the last completed one-second window.
    #[inline]
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps.current_fps
    }

    #[inline]
    #[must_use]
    pub fn drawn_frames(&self) -> u64 {
        self.drawn_frames
    }

    #[inline]
    #[must_use]
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}
