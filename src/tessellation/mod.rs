mod tessellate_tube;
mod tube_style;

pub use tessellate_tube::TessellateTube;
pub use tube_style::TubeStyle;

use crate::math::{Point2, Point3, Vector3};

/// An ordered polyline, e.g. a catenary sample handed to a line renderer.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}
