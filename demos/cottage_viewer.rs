//! Headless walk through the viewer lifecycle.
//!
//! Run with `RUST_LOG=debug cargo run --example cottage_viewer` to see the
//! classifier and scheduler logs.

use std::time::Duration;

use house_viewer::resources::{ButtonState, MouseButton};
use house_viewer::{Camera, Category, JsonSceneLoader, SceneGraph, Viewer, ViewerSettings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut viewer = Viewer::new(ViewerSettings::default())?;
    viewer.resize(1280, 720);

    let mut draws = 0usize;
    let mut renderer = |scene: &SceneGraph, camera: &Camera| {
        draws += 1;
        log::info!(
            "draw #{draws}: {} meshes from {:?}",
            scene.renderables().len(),
            camera.position
        );
    };

    // A missing file lands on the fallback scene.
    let origin = viewer.load_model(&JsonSceneLoader, "demos/assets/missing.json");
    println!("origin: {origin:?}");
    print_manifest(&viewer);

    let asset = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/assets/cottage.json");
    let origin = viewer.load_model(&JsonSceneLoader, asset);
    println!("origin: {origin:?}");
    print_manifest(&viewer);

    let step = Duration::from_millis(16);
    viewer.frame(step, &mut renderer);

    // Clean frames are elided.
    for _ in 0..3 {
        viewer.update(step.as_secs_f32());
        viewer.frame(step, &mut renderer);
    }

    let report = viewer.set_category_color(Category::Roof, "#8B4513")?;
    println!("roof repaint: {report:?}");
    viewer.handle_color_input("window-color", "#a0d8ef");
    viewer.frame(step, &mut renderer);

    // A short drag, then let damping settle.
    let input = viewer.input_mut();
    input.inject_mouse_position(640.0, 360.0);
    input.inject_mouse_button(MouseButton::Left, ButtonState::Pressed);
    input.inject_mouse_position(700.0, 350.0);
    viewer.update(1.0 / 60.0);
    viewer.input_mut().inject_mouse_button(MouseButton::Left, ButtonState::Released);

    for _ in 0..240 {
        viewer.update(1.0 / 60.0);
        viewer.frame(step, &mut renderer);
    }

    let scheduler = viewer.scheduler();
    println!(
        "drawn {} / skipped {} frames",
        scheduler.drawn_frames(),
        scheduler.skipped_frames()
    );
    Ok(())
}

fn print_manifest(viewer: &Viewer) {
    for entry in viewer.manifest() {
        println!("  {entry}");
    }
    let summary = viewer.summary();
    println!(
        "  {} meshes, {} materials",
        summary.renderable_count, summary.material_count
    );
}
