//! Back-to-front ordering for the painter's algorithm
use crate::geometry::Polygon;
use crate::projection::Camera;

/// Sort key: the camera distance to the polygon midpoint, truncated
/// toward zero. Polygons within the same whole unit compare equal.
pub fn depth_key(polygon: &Polygon, camera: &Camera) -> i64 {
    camera.distance(&polygon.triangle.midpoint()) as i64
}

/// Order polygons farthest first so nearer ones are drawn over them.
///
/// The sort is unstable. Polygons sharing a truncated distance can swap
/// places between frames.
pub fn sort_back_to_front(polygons: &mut [Polygon], camera: &Camera) {
    polygons.sort_unstable_by(|a, b| depth_key(b, camera).cmp(&depth_key(a, camera)));
}
