//! Rendering seam
//!
//! The GPU renderer is provided by the host through [`FrameRenderer`];
//! [`RenderScheduler`] decides when it is worth calling.

pub mod scheduler;

pub use scheduler::{FrameOutcome, RedrawReasons, RenderScheduler};

use crate::scene::{Camera, SceneGraph};

/// Host renderer that draws the current scene.
pub trait FrameRenderer {
    /// Draws one frame. Only called when something changed since the last draw.
    fn draw(&mut self, scene: &SceneGraph, camera: &Camera);
}

impl<F> FrameRenderer for F
where
    F: FnMut(&SceneGraph, &Camera),
{
    fn draw(&mut self, scene: &SceneGraph, camera: &Camera) {
        self(scene, camera);
    }
}
