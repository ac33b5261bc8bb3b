//! Viewer settings assembled from the command line
use nalgebra::Point3;
use stlview_core::{Camera, ShadeColor, Turntable};

/// Starting camera, movement steps and rendering options
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Spin the mesh about its pivot every frame
    pub rotate: bool,
    /// Turntable angle per frame, in radians
    pub rotation_step: f64,
    pub shade_color: ShadeColor,
    /// Starting camera X; the camera starts on the X axis
    pub camera_x: f64,
    pub fov: f64,
    /// Starting yaw, in radians
    pub yaw: f64,
    /// Distance moved per key press
    pub move_step: f64,
    /// Angle turned per key press, in radians
    pub turn_step: f64,
    pub fov_step: f64,
    /// Pitch limit applied by the keyboard handler, in radians
    pub max_pitch: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            rotate: false,
            rotation_step: Turntable::DEFAULT_STEP,
            shade_color: ShadeColor::Green,
            camera_x: 1000.0,
            fov: 100.0,
            yaw: (-90.0_f64).to_radians(),
            move_step: 2.0,
            turn_step: 2.0_f64.to_radians(),
            fov_step: 10.0,
            max_pitch: 80.0_f64.to_radians(),
        }
    }
}

impl ViewerConfig {
    /// Camera for a framebuffer of the given size.
    ///
    /// The viewport is fixed from this size at startup and does not follow
    /// later terminal resizes.
    pub fn initial_camera(&self, width: usize, height: usize) -> Camera {
        Camera {
            position: Point3::new(self.camera_x, 0.0, 0.0),
            yaw: self.yaw,
            fov: self.fov,
            ..Camera::new(width as f64 * 2.0 / 20.0, height as f64 * 2.0 / 8.0)
        }
    }
}
