//! Plane rotations and the turntable rotation step
use nalgebra::{Rotation2, Vector2};

use crate::geometry::{Pivot, Polygon};

/// Rotate the pair `(u, v)` by `angle` radians as a point on the U/V plane
pub fn rotate_plane(u: f64, v: f64, angle: f64) -> (f64, f64) {
    let rotated = Rotation2::new(angle) * Vector2::new(u, v);
    (rotated.x, rotated.y)
}

/// Spins the whole mesh about a vertical axis through `pivot`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turntable {
    pub pivot: Pivot,
    /// Angle applied per call to [`Turntable::rotate`], in radians
    pub step: f64,
}

impl Turntable {
    /// One degree per frame
    pub const DEFAULT_STEP: f64 = std::f64::consts::PI / 180.0;

    pub fn new(pivot: Pivot) -> Self {
        Self {
            pivot,
            step: Self::DEFAULT_STEP,
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Advance the mesh by one step. Vertices are rewritten in place, so
    /// rounding error accumulates over long runs.
    pub fn rotate(&self, polygons: &mut [Polygon]) {
        rotate_about_y(polygons, self.step, self.pivot);
    }
}

/// Rotate every vertex by `angle` radians about the vertical axis through `pivot`
pub fn rotate_about_y(polygons: &mut [Polygon], angle: f64, pivot: Pivot) {
    for polygon in polygons {
        for vertex in polygon.triangle.vertices_mut() {
            let (x, z) = rotate_plane(vertex.x - pivot.x, vertex.z - pivot.z, angle);
            vertex.x = x + pivot.x;
            vertex.z = z + pivot.z;
        }
    }
}
