use std::time::Duration;

use glam::{Mat4, Vec3};

use crate::coords::Viewport;
use crate::render::{MatrixSlot, RenderCtx, RenderTarget, ScalarSlot, Scene};

use super::math::{basis, model_matrix, Perspective};

/// Camera that owns the scene it renders.
///
/// `update` recomputes the basis, the view matrix and the model rotation from
/// elapsed time. The projection is fixed at construction from the initial
/// viewport and is not revisited afterwards.
pub struct Camera {
    position: Vec3,
    target: Vec3,

    right: Vec3,
    up: Vec3,

    model: Mat4,
    view: Mat4,
    projection: Mat4,
    time: f32,

    scene: Scene,
}

impl Camera {
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
    pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;

    pub fn new(viewport: Viewport) -> Self {
        Self::with_perspective(viewport, Perspective::default())
    }

    pub fn with_perspective(viewport: Viewport, perspective: Perspective) -> Self {
        let projection = perspective.matrix(viewport.aspect_ratio());
        log::debug!(
            "camera projection: fov {}deg, aspect {:.4}, near {}, far {}",
            perspective.fov_y_degrees,
            viewport.aspect_ratio(),
            perspective.near,
            perspective.far
        );

        let mut camera = Self {
            position: Self::DEFAULT_POSITION,
            target: Self::DEFAULT_TARGET,
            right: Vec3::X,
            up: Vec3::Y,
            model: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection,
            time: 0.0,
            scene: Scene::new(),
        };
        camera.update_view();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn model(&self) -> Mat4 {
        self.model
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Recomputes view and model for a frame `elapsed` after startup.
    pub fn update(&mut self, elapsed: Duration) {
        self.update_view();
        self.model = model_matrix(elapsed.as_millis() as u64);
        self.time = elapsed.as_secs_f32();
    }

    fn update_view(&mut self) {
        let b = basis(self.position, self.target);
        self.right = b.right;
        self.up = b.up;
        self.view = Mat4::look_at_rh(self.position, self.target, self.up);
    }

    /// Hands model/view/projection (and time) to every drawable, in scene order.
    pub fn push_uniforms(&mut self) {
        let (model, view, projection, time) = (self.model, self.view, self.projection, self.time);
        for item in self.scene.iter_mut() {
            item.set_matrix(MatrixSlot::Model, model);
            item.set_matrix(MatrixSlot::View, view);
            item.set_matrix(MatrixSlot::Projection, projection);
            item.set_scalar(ScalarSlot::Time, time);
        }
    }

    /// Pushes uniforms, then renders the scene in insertion order.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.push_uniforms();
        self.scene.render(ctx, target);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::testing::Probe;

    const EPS: f32 = 1e-5;

    fn camera() -> Camera {
        Camera::new(Viewport::new(1280.0, 720.0))
    }

    #[test]
    fn view_moves_eye_to_origin_looking_down_neg_z() {
        let mut cam = camera();
        cam.set_position(Vec3::new(2.0, 1.5, 4.0));
        cam.set_target(Vec3::new(0.0, 0.5, 0.0));
        cam.update(Duration::ZERO);

        let view = cam.view();
        assert!(view.transform_point3(cam.position()).abs_diff_eq(Vec3::ZERO, 1e-4));

        let dist = (cam.position() - cam.target()).length();
        let t = view.transform_point3(cam.target());
        assert!(t.abs_diff_eq(Vec3::new(0.0, 0.0, -dist), 1e-4));
    }

    #[test]
    fn view_is_invertible() {
        let mut cam = camera();
        cam.set_position(Vec3::new(-1.0, 3.0, 5.0));
        cam.update(Duration::from_millis(250));

        let view = cam.view();
        assert!(view.determinant().abs() > EPS);
        assert!((view * view.inverse()).abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn basis_follows_position_after_update() {
        let mut cam = camera();
        cam.set_position(Vec3::new(3.0, 0.0, 0.0));
        cam.update(Duration::ZERO);

        assert!((cam.right().length() - 1.0).abs() < EPS);
        assert!(cam.right().dot(cam.up()).abs() < EPS);
        assert!(cam.right().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
    }

    #[test]
    fn projection_is_fixed_at_construction() {
        let mut cam = camera();
        let before = cam.projection();
        cam.update(Duration::from_secs(10));
        assert_eq!(cam.projection(), before);
        assert_eq!(before, Perspective::default().matrix(1280.0 / 720.0));
    }

    #[test]
    fn model_tracks_elapsed_time() {
        let mut cam = camera();
        cam.update(Duration::from_millis(900));
        assert!(cam.model().abs_diff_eq(Mat4::from_rotation_x(90f32.to_radians()), EPS));
    }

    #[test]
    fn push_uniforms_visits_scene_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cam = camera();
        cam.scene_mut().push(Probe::new("first", &log));
        cam.scene_mut().push(Probe::new("second", &log));

        cam.update(Duration::from_millis(450));
        cam.push_uniforms();

        let expected = [
            ("first", MatrixSlot::Model),
            ("first", MatrixSlot::View),
            ("first", MatrixSlot::Projection),
            ("second", MatrixSlot::Model),
            ("second", MatrixSlot::View),
            ("second", MatrixSlot::Projection),
        ];
        assert_eq!(log.borrow().as_slice(), &expected);
    }
}
