//! Model loading
//!
//! Loaders only report success or failure. Recovering from a failed load
//! (substituting [`fallback_scene`](crate::scene::fallback_scene)) is the
//! caller's decision, so classification never sees I/O errors.

pub mod loaders;

pub use loaders::JsonSceneLoader;

use std::path::Path;

use crate::errors::AssetError;
use crate::scene::SceneGraph;

/// Produces a scene graph from a model file.
pub trait ModelLoader {
    fn load(&self, path: &Path) -> Result<SceneGraph, AssetError>;
}

/// File name of `path`, for log output.
#[must_use]
pub fn source_filename(path: &Path) -> &str {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<model>")
}
