use glam::{Vec2, Vec3};

use crate::resources::{Input, MouseButton};
use crate::scene::Camera;
use crate::settings::OrbitSettings;

/// Residual rotation (radians) below which damping is considered settled.
const SETTLE_EPSILON: f32 = 1e-4;
/// Squared camera displacement treated as "did not move".
const MOVE_EPSILON_SQ: f32 = 1e-10;

/// Orbits a camera around a target point.
///
/// Left drag rotates, right drag pans, the wheel zooms. With damping enabled
/// a drag keeps the camera coasting for a few frames after release, so
/// [`update`](Self::update) keeps reporting movement until it settles.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    /// Azimuth around +Y.
    pub theta: f32,
    /// Polar angle from +Y.
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self::from_settings(center, &OrbitSettings {
            initial_radius: radius,
            ..OrbitSettings::default()
        })
    }

    #[must_use]
    pub fn from_settings(center: Vec3, settings: &OrbitSettings) -> Self {
        Self {
            rotate_speed: settings.rotate_speed,
            zoom_speed: settings.zoom_speed,
            pan_speed: settings.pan_speed,
            damping_factor: settings.damping_factor.clamp(0.0, 1.0),
            enable_damping: settings.enable_damping,
            min_distance: settings.min_distance,
            max_distance: settings.max_distance.max(settings.min_distance),

            center,
            radius: settings
                .initial_radius
                .clamp(settings.min_distance, settings.max_distance.max(settings.min_distance)),
            theta: settings.initial_azimuth,
            phi: settings.initial_polar,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Whether damping still has rotation left to apply.
    #[inline]
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.rotate_delta != Vec2::ZERO
    }

    /// Places `camera` at the current orbit position without consuming input.
    pub fn apply(&self, camera: &mut Camera) {
        camera.look_at(self.center + self.offset(), self.center);
    }

    /// Advances the controls by one frame. Returns `true` if the camera moved.
    pub fn update(&mut self, camera: &mut Camera, input: &Input, dt: f32) -> bool {
        let screen_height = input.screen_size().y.max(1.0);
        let cursor_delta = input.mouse_delta();

        if input.get_mouse_button(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * std::f32::consts::PI / screen_height;
            self.rotate_delta.x -= cursor_delta.x * rotate_per_pixel * self.rotate_speed;
            self.rotate_delta.y -= cursor_delta.y * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            // Normalized to 60 fps so the coast length does not depend on frame rate.
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);

            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
            if self.rotate_delta.length() < SETTLE_EPSILON {
                self.rotate_delta = Vec2::ZERO;
            }
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        const EPS: f32 = 0.0001;
        self.phi = self.phi.clamp(EPS, std::f32::consts::PI - EPS);

        let scroll = input.scroll_delta();
        if scroll.y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll.y.abs());
            if scroll.y > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if input.get_mouse_button(MouseButton::Right) && cursor_delta != Vec2::ZERO {
            let half_fov = camera.fov.to_radians() / 2.0;
            let target_world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world_ratio = target_world_height / screen_height;

            let forward = -self.offset().normalize();
            let right = forward.cross(Vec3::Y).normalize();
            let up = right.cross(forward).normalize();

            self.center += (right * -cursor_delta.x + up * cursor_delta.y)
                * pixels_to_world_ratio
                * self.pan_speed;
        }

        let position = self.center + self.offset();
        let moved = position.distance_squared(camera.position) > MOVE_EPSILON_SQ
            || self.center.distance_squared(camera.target) > MOVE_EPSILON_SQ;
        if moved {
            camera.look_at(position, self.center);
        }
        moved
    }

    fn offset(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        )
    }
}
