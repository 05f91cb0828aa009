//! House part classification and recoloring
//!
//! - [`PartClassifier`]: builds a [`PartIndex`] (plus manifest and summary) from a scene
//! - [`applicator`]: repaints the material slots resolved for a category
//! - [`ClassifierConfig`]: the keyword / slot rule table both of them read

pub mod applicator;
pub mod category;
pub mod classifier;
pub mod config;
pub mod index;
pub mod manifest;

pub use applicator::{ApplyReport, apply_all_colors, apply_color};
pub use category::Category;
pub use classifier::{Classification, PartClassifier, classify};
pub use config::{CategoryRule, ClassifierConfig, CompositePolicy};
pub use index::PartIndex;
pub use manifest::{ManifestEntry, MatchRule, PartSummary};
