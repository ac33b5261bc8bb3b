//! Camera and perspective projection
use nalgebra::{Point2, Point3, Vector3};

use crate::geometry::{Triangle2, Triangle3};
use crate::transform::rotate_plane;

/// Free-flying camera.
///
/// Orientation is applied as yaw (X/Z plane), then pitch (Y/Z plane), then
/// roll (Y/X plane). The viewport size is in the camera's own units and is
/// scaled to the framebuffer after projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3<f64>,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub fov: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Camera {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            position: Point3::new(-10.0, 0.0, 0.0),
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            fov: 1000.0,
            viewport_width,
            viewport_height,
        }
    }

    /// Translate `vertex` into camera space. The returned `z` is depth.
    pub fn to_camera_space(&self, vertex: &Point3<f64>) -> Vector3<f64> {
        let offset = vertex - self.position;
        let (x, z) = rotate_plane(offset.x, offset.z, self.yaw);
        let (y, z) = rotate_plane(offset.y, z, self.pitch);
        let (y, x) = rotate_plane(y, x, self.roll);
        Vector3::new(x, y, z)
    }

    /// True when at least one vertex lies in front of the camera.
    ///
    /// Triangles straddling the camera plane pass and are projected as-is.
    pub fn in_view(&self, triangle: &Triangle3) -> bool {
        [triangle.a, triangle.b, triangle.c]
            .iter()
            .any(|v| self.to_camera_space(v).z > 0.0)
    }

    /// Perspective-project `vertex` onto a `width` x `height` viewport.
    ///
    /// There is no guard against zero depth; the result is then infinite
    /// or NaN.
    pub fn project(&self, vertex: &Point3<f64>, width: f64, height: f64) -> Point2<f64> {
        let v = self.to_camera_space(vertex);
        Point2::new(
            width / 2.0 + self.fov * v.x / v.z,
            height / 2.0 - self.fov * v.y / v.z,
        )
    }

    /// Map a point from viewport units to framebuffer cells
    pub fn scale(&self, point: &Point2<f64>, width: usize, height: usize) -> Point2<f64> {
        Point2::new(
            point.x * width as f64 / self.viewport_width,
            point.y * height as f64 / self.viewport_height,
        )
    }

    /// Project each vertex onto the viewport and scale it to a framebuffer
    pub fn project_triangle(&self, triangle: &Triangle3, width: usize, height: usize) -> Triangle2 {
        let to_screen = |v: &Point3<f64>| {
            let projected = self.project(v, self.viewport_width, self.viewport_height);
            self.scale(&projected, width, height)
        };
        Triangle2::new(
            to_screen(&triangle.a),
            to_screen(&triangle.b),
            to_screen(&triangle.c),
        )
    }

    /// Euclidean distance from the camera position, ignoring orientation
    pub fn distance(&self, point: &Vector3<f64>) -> f64 {
        (point - self.position.coords).norm()
    }

    /// Move along the facing direction on the X/Z plane
    pub fn advance(&mut self, amount: f64) {
        self.position.x += self.yaw.sin() * amount;
        self.position.z += self.yaw.cos() * amount;
    }

    /// Move sideways on the X/Z plane; positive is to the right
    pub fn strafe(&mut self, amount: f64) {
        self.position.x += self.yaw.cos() * amount;
        self.position.z -= self.yaw.sin() * amount;
    }

    pub fn ascend(&mut self, amount: f64) {
        self.position.y += amount;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn at_origin() -> Camera {
        Camera {
            position: Point3::origin(),
            ..Camera::default()
        }
    }

    fn triangle(a: (f64, f64, f64), b: (f64, f64, f64), c: (f64, f64, f64)) -> Triangle3 {
        Triangle3::new(
            Point3::new(a.0, a.1, a.2),
            Point3::new(b.0, b.1, b.2),
            Point3::new(c.0, c.1, c.2),
        )
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.position, Point3::new(-10.0, 0.0, 0.0));
        assert_eq!(camera.fov, 1000.0);
        assert_eq!(camera.viewport_width, 100.0);
        assert_eq!(camera.viewport_height, 100.0);
    }

    #[test]
    fn test_point_straight_ahead_projects_to_center() {
        let camera = at_origin();
        for depth in [0.5, 3.0, 250.0] {
            let p = camera.project(&Point3::new(0.0, 0.0, depth), 80.0, 24.0);
            assert!((p.x - 40.0).abs() < 1e-9);
            assert!((p.y - 12.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_projection_flips_y() {
        let camera = Camera {
            fov: 10.0,
            ..at_origin()
        };
        let p = camera.project(&Point3::new(1.0, 1.0, 10.0), 100.0, 100.0);
        assert!((p.x - 51.0).abs() < 1e-9);
        assert!((p.y - 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_depth_is_not_finite() {
        let camera = at_origin();
        let p = camera.project(&Point3::new(1.0, 0.0, 0.0), 100.0, 100.0);
        assert!(!p.x.is_finite());
    }

    #[test]
    fn test_yaw_turns_x_into_depth() {
        // Camera at +X looking back towards the origin
        let camera = Camera {
            position: Point3::new(1000.0, 0.0, 0.0),
            yaw: -FRAC_PI_2,
            ..Camera::default()
        };
        let v = camera.to_camera_space(&Point3::origin());
        assert!((v.z - 1000.0).abs() < 1e-9);
        assert!(v.x.abs() < 1e-9);
    }

    #[test]
    fn test_rotation_order_is_yaw_pitch_roll() {
        let camera = Camera {
            yaw: 0.3,
            pitch: -0.2,
            roll: 0.9,
            ..at_origin()
        };
        let p = Point3::new(1.0, 2.0, 3.0);

        let (x, z) = rotate_plane(p.x, p.z, 0.3);
        let (y, z) = rotate_plane(p.y, z, -0.2);
        let (y, x) = rotate_plane(y, x, 0.9);

        let v = camera.to_camera_space(&p);
        assert!((v - Vector3::new(x, y, z)).norm() < 1e-12);
        // Pure rotations keep the length
        assert!((v.norm() - p.coords.norm()).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_in_front_is_visible() {
        let camera = Camera {
            yaw: 0.4,
            pitch: 0.1,
            ..at_origin()
        };
        let t = triangle((0.0, 0.0, 5.0), (1.0, 0.0, 5.0), (0.0, 1.0, 6.0));
        assert!(camera.in_view(&t));
    }

    #[test]
    fn test_triangle_behind_is_hidden() {
        let camera = at_origin();
        let behind = triangle((0.0, 0.0, -5.0), (1.0, 0.0, -5.0), (0.0, 1.0, -6.0));
        assert!(!camera.in_view(&behind));
        let on_plane = triangle((0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0));
        assert!(!camera.in_view(&on_plane));
    }

    #[test]
    fn test_straddling_triangle_is_visible() {
        let camera = at_origin();
        let t = triangle((0.0, 0.0, -5.0), (1.0, 0.0, -5.0), (0.0, 1.0, 0.1));
        assert!(camera.in_view(&t));
    }

    #[test]
    fn test_scale_to_framebuffer() {
        let camera = Camera::new(16.0, 5.5);
        let p = camera.scale(&Point2::new(8.0, 2.75), 160, 22);
        assert!((p.x - 80.0).abs() < 1e-9);
        assert!((p.y - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_triangle_uses_viewport_then_scales() {
        // 160x22 framebuffer, viewport 16x5.5 as the viewer sets it up
        let camera = Camera {
            position: Point3::origin(),
            fov: 100.0,
            ..Camera::new(16.0, 5.5)
        };
        let t = triangle((0.0, 0.0, 10.0), (1.0, 0.5, 10.0), (-2.0, 1.0, 20.0));
        let screen = camera.project_triangle(&t, 160, 22);

        assert!((screen.a.x - 80.0).abs() < 1e-9);
        assert!((screen.a.y - 11.0).abs() < 1e-9);

        // (16/2 + 100*1/10) * 160/16 and (5.5/2 - 100*0.5/10) * 22/5.5
        assert!((screen.b.x - 180.0).abs() < 1e-9);
        assert!((screen.b.y + 9.0).abs() < 1e-9);

        // (8 - 10) * 10 and (2.75 - 5) * 4
        assert!((screen.c.x + 20.0).abs() < 1e-9);
        assert!((screen.c.y + 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_ignores_orientation() {
        let mut camera = Camera {
            position: Point3::new(1.0, 2.0, 3.0),
            ..Camera::default()
        };
        let target = Vector3::new(4.0, 6.0, 3.0);
        assert!((camera.distance(&target) - 5.0).abs() < 1e-12);
        camera.yaw = 1.0;
        camera.roll = 2.0;
        assert!((camera.distance(&target) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_movement_follows_yaw() {
        let mut camera = at_origin();
        camera.advance(2.0);
        assert!((camera.position - Point3::new(0.0, 0.0, 2.0)).norm() < 1e-12);

        camera.yaw = FRAC_PI_2;
        camera.advance(2.0);
        assert!((camera.position - Point3::new(2.0, 0.0, 2.0)).norm() < 1e-12);

        camera.strafe(2.0);
        assert!((camera.position - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-12);

        camera.ascend(-2.0);
        assert!((camera.position.y + 2.0).abs() < 1e-12);
    }
}
