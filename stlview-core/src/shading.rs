//! Left-to-right gradient shading
use crate::geometry::{Polygon, ShadeColor};

/// Fill glyphs from lightest to densest
pub const SHADE_RAMP: [char; 4] = ['░', '▒', '▓', '█'];

/// Assign every polygon a glyph by which quarter of the X range its
/// midpoint falls in, and give all of them `color`.
///
/// The range bounds start at zero rather than at the first midpoint, so a
/// mesh lying entirely on one side of X = 0 still has 0 as one bound.
pub fn shade(polygons: &mut [Polygon], color: ShadeColor) {
    let (mut min_x, mut max_x) = (0.0_f64, 0.0_f64);
    for polygon in polygons.iter() {
        let x = polygon.triangle.midpoint().x;
        if x > max_x {
            max_x = x;
        }
        if x < min_x {
            min_x = x;
        }
    }
    let range = max_x - min_x;

    for polygon in polygons.iter_mut() {
        polygon.shade = glyph_for(polygon.triangle.midpoint().x, min_x, range);
        polygon.color = color;
    }
}

fn glyph_for(x: f64, min_x: f64, range: f64) -> char {
    if x < min_x + range / 4.0 {
        SHADE_RAMP[0]
    } else if x < min_x + range * 2.0 / 4.0 {
        SHADE_RAMP[1]
    } else if x < min_x + range * 3.0 / 4.0 {
        SHADE_RAMP[2]
    } else {
        SHADE_RAMP[3]
    }
}
