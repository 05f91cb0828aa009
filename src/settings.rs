//! Viewer configuration.
//!
//! Everything is optional in the JSON form; missing fields fall back to the
//! defaults below.
//!
//! ```json
//! {
//!   "classifier": { "composite": { "keywords": ["cottage"], "min_slots": 4 } },
//!   "palette": { "walls": "#d1b58c", "roof": "#8b4513" },
//!   "orbit": { "damping_factor": 0.08 }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};
use crate::parts::{Category, ClassifierConfig};
use crate::resources::color;

/// Binds a UI color control to the category it recolors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBinding {
    pub id: String,
    pub category: Category,
}

impl ControlBinding {
    #[must_use]
    pub fn new(id: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
        }
    }
}

/// Orbit camera tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub target: [f32; 3],
    pub initial_radius: f32,
    pub initial_azimuth: f32,
    pub initial_polar: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            target: [0.0, 1.0, 0.0],
            initial_radius: 15.0,
            initial_azimuth: 0.6,
            initial_polar: 1.2,
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 2.0,
            max_distance: 100.0,
        }
    }
}

impl OrbitSettings {
    #[inline]
    #[must_use]
    pub fn target(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub classifier: ClassifierConfig,
    /// Startup color per category, as `#rrggbb`.
    pub palette: BTreeMap<Category, String>,
    /// Re-apply the current category colors to every newly loaded model.
    pub apply_palette_on_load: bool,
    pub controls: Vec<ControlBinding>,
    pub orbit: OrbitSettings,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        let palette = [
            (Category::Walls, "#d1b58c"),
            (Category::Roof, "#8c4512"),
            (Category::Doors, "#664221"),
            (Category::Windows, "#87cfeb"),
        ]
        .into_iter()
        .map(|(c, hex)| (c, hex.to_string()))
        .collect();

        Self {
            classifier: ClassifierConfig::default(),
            palette,
            apply_palette_on_load: true,
            controls: vec![
                ControlBinding::new("wall-color", Category::Walls),
                ControlBinding::new("roof-color", Category::Roof),
                ControlBinding::new("door-color", Category::Doors),
                ControlBinding::new("window-color", Category::Windows),
            ],
            orbit: OrbitSettings::default(),
        }
    }
}

impl ViewerSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading viewer settings from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let mut classifier = self.classifier.clone();
        classifier.normalize();
        classifier.validate()?;
        self.palette_colors().map(|_| ())
    }

    /// The palette parsed to RGB, in category order.
    pub fn palette_colors(&self) -> std::result::Result<Vec<(Category, Vec3)>, ConfigError> {
        self.palette
            .iter()
            .map(|(&category, hex)| {
                color::parse_hex(hex)
                    .map(|c| (category, c))
                    .map_err(|source| ConfigError::PaletteColor { category, source })
            })
            .collect()
    }
}
