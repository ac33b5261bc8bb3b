//! stlview core library - geometry, camera and per-frame mesh passes
//!
//! Everything here is terminal-agnostic: STL reading, the yaw/pitch/roll
//! camera with its perspective projection, gradient shading, painter's
//! ordering and the turntable rotation step.

pub mod geometry;
pub mod painter;
pub mod projection;
pub mod shading;
pub mod stl;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Mesh, Pivot, Polygon, ShadeColor, Triangle2, Triangle3};
pub use projection::Camera;
pub use stl::StlError;
pub use transform::Turntable;
