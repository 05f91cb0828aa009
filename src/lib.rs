#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! House Viewer core.
//!
//! Loads a house model as a [`SceneGraph`], partitions its renderable nodes
//! into semantic [`Category`] groups and repaints each group on demand.
//!
//! - [`parts`]: part classification and per-category color application
//! - [`render`]: dirty-flag redraw scheduling
//! - [`viewer`]: the [`Viewer`] aggregate tying load, classify, color and draw together
//!
//! ```rust,ignore
//! use house_viewer::{JsonSceneLoader, Viewer, ViewerSettings, Category};
//!
//! let mut viewer = Viewer::new(ViewerSettings::default())?;
//! viewer.load_model(&JsonSceneLoader, "models/cottage.json");
//! viewer.set_category_color(Category::Roof, "#8B4513")?;
//! viewer.frame(dt, &mut renderer);
//! ```

pub mod assets;
pub mod errors;
pub mod parts;
pub mod render;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod ui;
pub mod utils;
pub mod viewer;

pub use assets::{JsonSceneLoader, ModelLoader};
pub use errors::{AssetError, ColorParseError, ConfigError, Error, Result};
pub use parts::{
    ApplyReport, Category, Classification, ClassifierConfig, ManifestEntry, MatchRule,
    PartClassifier, PartIndex, PartSummary,
};
pub use render::{FrameOutcome, FrameRenderer, RedrawReasons, RenderScheduler};
pub use resources::{Input, Material, MaterialBinding};
pub use scene::{Camera, NodeHandle, SceneGraph, SceneNode};
pub use settings::ViewerSettings;
pub use utils::{FpsCounter, OrbitControls};
pub use viewer::{ModelOrigin, Viewer};
