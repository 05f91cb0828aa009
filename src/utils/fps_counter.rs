#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use web_time::Duration;

/// Counts loop iterations and reports a rate once per second of frame time.
#[derive(Debug)]
pub struct FpsCounter {
    frame_count: u32,
    accumulated_time: Duration,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    /// Counts one frame of length `delta`. Returns the new rate when a
    /// one-second window completes.
    pub fn tick(&mut self, delta: Duration) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += delta;

        if self.accumulated_time.as_secs_f32() >= 1.0 {
            self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();

            self.accumulated_time = Duration::ZERO;
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}
