//! Geometry primitives for the mesh and its projection
use nalgebra::{Point2, Point3, Vector3};

/// A mesh facet in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
    pub c: Point3<f64>,
}

impl Triangle3 {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Component-wise sum of the three vertices.
    ///
    /// This is not divided by three. It is only used as a relative
    /// position proxy for shading and depth ordering.
    pub fn midpoint(&self) -> Vector3<f64> {
        self.a.coords + self.b.coords + self.c.coords
    }

    pub fn vertices_mut(&mut self) -> [&mut Point3<f64>; 3] {
        [&mut self.a, &mut self.b, &mut self.c]
    }
}

/// A projected triangle in continuous screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    pub a: Point2<f64>,
    pub b: Point2<f64>,
    pub c: Point2<f64>,
}

impl Triangle2 {
    pub fn new(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Self {
        Self { a, b, c }
    }
}

/// The eight basic terminal foreground colors plus the terminal default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[default]
    Default,
}

/// One renderable facet with its current fill glyph and color
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub triangle: Triangle3,
    pub shade: char,
    pub color: ShadeColor,
}

impl Polygon {
    pub fn new(triangle: Triangle3) -> Self {
        Self {
            triangle,
            shade: ' ',
            color: ShadeColor::Default,
        }
    }
}

/// Point the turntable rotation spins around, on the X/Z plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pivot {
    pub x: f64,
    pub z: f64,
}

/// The polygon list rendered every frame
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub polygons: Vec<Polygon>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    pub fn from_triangles(triangles: Vec<Triangle3>) -> Self {
        Self {
            polygons: triangles.into_iter().map(Polygon::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Average X/Z of every polygon's first vertex.
    ///
    /// Vertices B and C are ignored. An empty mesh pivots around the origin.
    pub fn pivot(&self) -> Pivot {
        let count = self.polygons.len() as f64;
        let mut pivot = Pivot::default();
        for polygon in &self.polygons {
            pivot.x += polygon.triangle.a.x / count;
            pivot.z += polygon.triangle.a.z / count;
        }
        pivot
    }

    /// Create a cube mesh centered on the origin
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let p = |x: f64, y: f64, z: f64| Point3::new(x * half, y * half, z * half);
        let faces = [
            // Front
            [p(-1.0, -1.0, 1.0), p(1.0, -1.0, 1.0), p(1.0, 1.0, 1.0)],
            [p(-1.0, -1.0, 1.0), p(1.0, 1.0, 1.0), p(-1.0, 1.0, 1.0)],
            // Back
            [p(-1.0, -1.0, -1.0), p(-1.0, 1.0, -1.0), p(1.0, 1.0, -1.0)],
            [p(-1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, -1.0, -1.0)],
            // Top
            [p(-1.0, 1.0, -1.0), p(-1.0, 1.0, 1.0), p(1.0, 1.0, 1.0)],
            [p(-1.0, 1.0, -1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, -1.0)],
            // Bottom
            [p(-1.0, -1.0, -1.0), p(1.0, -1.0, -1.0), p(1.0, -1.0, 1.0)],
            [p(-1.0, -1.0, -1.0), p(1.0, -1.0, 1.0), p(-1.0, -1.0, 1.0)],
            // Right
            [p(1.0, -1.0, -1.0), p(1.0, 1.0, -1.0), p(1.0, 1.0, 1.0)],
            [p(1.0, -1.0, -1.0), p(1.0, 1.0, 1.0), p(1.0, -1.0, 1.0)],
            // Left
            [p(-1.0, -1.0, -1.0), p(-1.0, -1.0, 1.0), p(-1.0, 1.0, 1.0)],
            [p(-1.0, -1.0, -1.0), p(-1.0, 1.0, 1.0), p(-1.0, 1.0, -1.0)],
        ];

        Self::from_triangles(
            faces
                .into_iter()
                .map(|[a, b, c]| Triangle3::new(a, b, c))
                .collect(),
        )
    }
}
