//! Viewer Core
//!
//! [`Viewer`] owns everything the house viewer needs between host callbacks:
//! the loaded scene, its part classification, the current category colors,
//! the camera rig and the redraw gate. Hosts drive it from their event loop:
//!
//! ```rust,ignore
//! let mut viewer = Viewer::new(ViewerSettings::default())?;
//! viewer.load_model(&JsonSceneLoader, "models/cottage.json");
//!
//! // color picker changed
//! viewer.handle_color_input("roof-color", "#8b4513");
//!
//! // per display refresh
//! viewer.update(dt);
//! viewer.frame(dt, &mut renderer);
//! ```
//!
//! All calls are synchronous and run to completion. Model I/O happens inside
//! the [`ModelLoader`]; by the time classification runs the scene is fully
//! loaded or has been replaced by the fallback.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use web_time::Duration;

use std::path::{Path, PathBuf};

use glam::Vec3;

use crate::assets::{ModelLoader, source_filename};
use crate::errors::Result;
use crate::parts::{
    ApplyReport, Category, Classification, ManifestEntry, PartClassifier, PartIndex, PartSummary,
    applicator,
};
use crate::render::{FrameOutcome, FrameRenderer, RedrawReasons, RenderScheduler};
use crate::resources::{Input, color};
use crate::scene::{Camera, SceneGraph, fallback_scene};
use crate::settings::ViewerSettings;
use crate::ui::ColorControls;
use crate::utils::OrbitControls;

/// Where the current scene came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOrigin {
    /// No model loaded yet; the scene is empty.
    Empty,
    /// Installed directly by the host.
    Provided,
    Loaded(PathBuf),
    /// The loader failed and the procedural fallback was substituted.
    Fallback { reason: String },
}

pub struct Viewer {
    settings: ViewerSettings,
    classifier: PartClassifier,

    scene: SceneGraph,
    classification: Classification,
    origin: ModelOrigin,

    /// Last color applied per category; `None` until one is set.
    colors: [Option<Vec3>; Category::COUNT],
    controls: ColorControls,

    camera: Camera,
    orbit: OrbitControls,
    input: Input,
    scheduler: RenderScheduler,
}

impl Viewer {
    /// Creates a viewer with an empty scene.
    ///
    /// Fails only on invalid settings (rule table or palette).
    pub fn new(settings: ViewerSettings) -> Result<Self> {
        settings.validate()?;
        let classifier = PartClassifier::new(settings.classifier.clone())?;

        let mut colors = [None; Category::COUNT];
        for (category, c) in settings.palette_colors()? {
            colors[category.index()] = Some(c);
        }

        let mut camera = Camera::default();
        let orbit = OrbitControls::from_settings(settings.orbit.target(), &settings.orbit);
        orbit.apply(&mut camera);

        let scene = SceneGraph::empty();
        let classification = classifier.classify(&scene);

        Ok(Self {
            controls: ColorControls::new(&settings.controls),
            settings,
            classifier,
            scene,
            classification,
            origin: ModelOrigin::Empty,
            colors,
            camera,
            orbit,
            input: Input::new(),
            scheduler: RenderScheduler::new(),
        })
    }

    // ========================================================================
    // Model lifecycle
    // ========================================================================

    /// Loads a model, substituting the fallback scene if the loader fails.
    ///
    /// Never fails: the viewer always ends up with a classified scene.
    pub fn load_model(&mut self, loader: &impl ModelLoader, path: impl AsRef<Path>) -> &ModelOrigin {
        let path = path.as_ref();
        match loader.load(path) {
            Ok(scene) => {
                log::info!("Loaded model '{}'", source_filename(path));
                self.replace_scene(scene, ModelOrigin::Loaded(path.to_path_buf()));
            }
            Err(e) => {
                log::warn!("Failed to load '{}': {e}. Using fallback scene.", path.display());
                self.replace_scene(
                    fallback_scene(),
                    ModelOrigin::Fallback {
                        reason: e.to_string(),
                    },
                );
            }
        }
        &self.origin
    }

    /// Installs an already constructed scene.
    pub fn install_scene(&mut self, scene: SceneGraph) {
        self.replace_scene(scene, ModelOrigin::Provided);
    }

    fn replace_scene(&mut self, scene: SceneGraph, origin: ModelOrigin) {
        // The old index is dropped with the old scene; nothing holds onto either.
        self.scene = scene;
        self.classification = self.classifier.classify(&self.scene);
        self.origin = origin;

        if self.settings.apply_palette_on_load {
            let current: Vec<(Category, Vec3)> = self.current_colors().collect();
            let report = applicator::apply_all_colors(
                &mut self.scene,
                &self.classification.index,
                self.classifier.config(),
                current,
            );
            log::debug!("Applied current colors to new model: {report:?}");
        }

        self.scheduler.mark_dirty(RedrawReasons::MODEL_LOAD);
    }

    // ========================================================================
    // Colors
    // ========================================================================

    /// Repaints `category`. Empty categories are a no-op.
    pub fn apply_color(&mut self, category: Category, color: Vec3) -> ApplyReport {
        self.colors[category.index()] = Some(color);
        let report = applicator::apply_color(
            &mut self.scene,
            &self.classification.index,
            self.classifier.config(),
            category,
            color,
        );
        if report.changed_anything() {
            self.scheduler.mark_dirty(RedrawReasons::COLOR);
        }
        report
    }

    pub fn apply_all_colors<I>(&mut self, colors: I) -> ApplyReport
    where
        I: IntoIterator<Item = (Category, Vec3)>,
    {
        let mut report = ApplyReport::default();
        for (category, c) in colors {
            report += self.apply_color(category, c);
        }
        report
    }

    /// Parses a `#rrggbb` string and repaints `category`.
    pub fn set_category_color(&mut self, category: Category, hex: &str) -> Result<ApplyReport> {
        let c = color::parse_hex(hex)?;
        Ok(self.apply_color(category, c))
    }

    /// Restores the palette colors from the settings.
    pub fn reset_colors(&mut self) -> Result<ApplyReport> {
        let palette = self.settings.palette_colors()?;
        Ok(self.apply_all_colors(palette))
    }

    /// Handles a color control event. Unknown controls and bad values are
    /// ignored and return `None`.
    pub fn handle_color_input(&mut self, control_id: &str, value: &str) -> Option<ApplyReport> {
        let (category, c) = self.controls.resolve(control_id, value)?;
        Some(self.apply_color(category, c))
    }

    #[must_use]
    pub fn category_color(&self, category: Category) -> Option<Vec3> {
        self.colors[category.index()]
    }

    fn current_colors(&self) -> impl Iterator<Item = (Category, Vec3)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.colors[c.index()].map(|rgb| (c, rgb)))
    }

    // ========================================================================
    // Frame loop
    // ========================================================================

    /// Handles viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.input.inject_resize(width, height);
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
        self.scheduler.mark_dirty(RedrawReasons::RESIZE);
    }

    /// Pointer state the host feeds events into.
    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    /// Per-frame logic: camera controls, then the animation hook.
    pub fn update(&mut self, dt: f32) {
        if self.orbit.update(&mut self.camera, &self.input, dt) {
            self.scheduler.mark_dirty(RedrawReasons::CAMERA);
        }
        self.animate(dt);
        self.input.start_frame();
    }

    /// The model has no animation timeline.
    #[allow(clippy::unused_self)]
    fn animate(&mut self, _dt: f32) {}

    /// Draws through `renderer` if anything changed since the last draw.
    pub fn frame(&mut self, dt: Duration, renderer: &mut impl FrameRenderer) -> FrameOutcome {
        let Self {
            scheduler,
            scene,
            camera,
            ..
        } = self;
        scheduler.frame(dt, || renderer.draw(scene, camera))
    }

    /// Forces the next frame to draw.
    pub fn request_redraw(&mut self) {
        self.scheduler.mark_dirty(RedrawReasons::FORCED);
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[must_use]
    pub fn origin(&self) -> &ModelOrigin {
        &self.origin
    }

    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    #[must_use]
    pub fn part_index(&self) -> &PartIndex {
        &self.classification.index
    }

    #[must_use]
    pub fn manifest(&self) -> &[ManifestEntry] {
        &self.classification.manifest
    }

    #[must_use]
    pub fn summary(&self) -> &PartSummary {
        &self.classification.summary
    }

    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[must_use]
    pub fn orbit(&self) -> &OrbitControls {
        &self.orbit
    }

    #[must_use]
    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    #[must_use]
    pub fn fps(&self) -> f32 {
        self.scheduler.fps()
    }
}
