//! Scanline rasterizer and the per-frame render pass
use nalgebra::Point2;
use stlview_core::{painter, shading, Camera, Mesh, Polygon, ShadeColor, Triangle2};

use crate::framebuffer::Framebuffer;

/// Shade, depth-sort, clear and draw the mesh into `framebuffer`.
///
/// Returns the number of polygons that passed the visibility test.
pub fn render_frame(
    framebuffer: &mut Framebuffer,
    mesh: &mut Mesh,
    camera: &Camera,
    color: ShadeColor,
) -> usize {
    shading::shade(&mut mesh.polygons, color);
    painter::sort_back_to_front(&mut mesh.polygons, camera);
    framebuffer.clear();
    draw_polygons(framebuffer, &mesh.polygons, camera)
}

/// Project and fill every visible polygon in slice order.
///
/// Later polygons overwrite earlier ones; there is no depth buffer.
pub fn draw_polygons(framebuffer: &mut Framebuffer, polygons: &[Polygon], camera: &Camera) -> usize {
    let (width, height) = (framebuffer.width(), framebuffer.height());
    let mut drawn = 0;
    for polygon in polygons {
        if !camera.in_view(&polygon.triangle) {
            continue;
        }
        let projected = camera.project_triangle(&polygon.triangle, width, height);
        rasterize_triangle(framebuffer, &projected, polygon.shade, polygon.color);
        drawn += 1;
    }
    drawn
}

/// Fill the cells whose centers lie strictly inside `triangle`.
///
/// Either winding is accepted. Cells whose center sits exactly on an edge
/// are left untouched.
pub fn rasterize_triangle(
    framebuffer: &mut Framebuffer,
    triangle: &Triangle2,
    character: char,
    color: ShadeColor,
) {
    let Triangle2 { a, b, c } = *triangle;

    // Bounding box, clipped to the screen
    let left = a.x.min(b.x).min(c.x).max(0.0) as usize;
    let right = a.x.max(b.x).max(c.x).min(framebuffer.width() as f64) as usize;
    let top = a.y.min(b.y).min(c.y).max(0.0) as usize;
    let bottom = a.y.max(b.y).max(c.y).min(framebuffer.height() as f64) as usize;

    for y in top..bottom {
        for x in left..right {
            let px = x as f64 + 0.5;
            let py = y as f64 + 0.5;

            let ab = edge(&a, &b, px, py);
            let bc = edge(&b, &c, px, py);
            let ca = edge(&c, &a, px, py);

            if (ab < 0.0 && bc < 0.0 && ca < 0.0) || (ab > 0.0 && bc > 0.0 && ca > 0.0) {
                framebuffer.put(x, y, character, color);
            }
        }
    }
}

/// Signed area of the parallelogram spanned by `p1 - p2` and `(px, py) - p2`
fn edge(p1: &Point2<f64>, p2: &Point2<f64>, px: f64, py: f64) -> f64 {
    (p1.x - p2.x) * (py - p2.y) - (p1.y - p2.y) * (px - p2.x)
}
