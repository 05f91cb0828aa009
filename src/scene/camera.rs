use glam::{Mat4, Vec3};

/// Perspective viewing camera.
///
/// Position and target are driven by [`OrbitControls`](crate::utils::OrbitControls);
/// the renderer reads the cached matrices.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,

    /// Vertical field of view in degrees.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub(crate) view_matrix: Mat4,
    pub(crate) projection_matrix: Mat4,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov,
            aspect,
            near,
            far,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam.update_view_matrix();
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix =
            Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn update_view_matrix(&mut self) {
        self.view_matrix = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Moves the camera and aims it at `target`.
    pub fn look_at(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.target = target;
        self.update_view_matrix();
    }

    /// Ignores degenerate aspects (zero-height viewports during minimize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
            self.update_projection_matrix();
        }
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(45.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}
