use glam::{Mat4, Vec3};

/// World-space up vector the camera basis is derived against.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Perspective projection parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Perspective {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Perspective {
    /// Right-handed projection with wgpu's `[0, 1]` clip depth.
    pub fn matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_degrees.to_radians(), aspect_ratio, self.near, self.far)
    }
}

/// Camera basis vectors.
///
/// `direction` points from the target back to the camera and is not
/// normalized; `up` inherits its length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Basis {
    pub direction: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Derives the basis for a camera at `position` looking at `target`.
///
/// If the view direction is parallel to [`WORLD_UP`] the basis is degenerate
/// (`right` and `up` are zero) instead of NaN.
pub fn basis(position: Vec3, target: Vec3) -> Basis {
    let direction = position - target;
    let right = WORLD_UP.cross(direction).normalize_or_zero();
    let up = direction.cross(right);
    Basis { direction, right, up }
}

/// Model rotation angle in degrees: a tenth of the elapsed milliseconds.
pub fn rotation_degrees(ticks_ms: u64) -> f32 {
    (ticks_ms as f64 / 10.0) as f32
}

/// Rotation about +X by [`rotation_degrees`].
///
/// The angle is wrapped to one turn in `f64` first so precision does not
/// degrade over long runs.
pub fn model_matrix(ticks_ms: u64) -> Mat4 {
    let degrees = (ticks_ms as f64 / 10.0).rem_euclid(360.0);
    Mat4::from_rotation_x(degrees.to_radians() as f32)
}
