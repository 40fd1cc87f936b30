use std::f64::consts::TAU;

use crate::error::{Result, TessellationError};
use crate::math::{perpendicular_dir, Point2, Point3, Vector3};

use super::tube_style::TubeStyle;
use super::TriangleMesh;

/// Generates a closed-ring tube mesh around a polyline.
///
/// Each polyline vertex gets one ring of `radial_segments` vertices at
/// distance `width / 2`. Rings are oriented with rotation-minimizing frames
/// so the tube does not twist along a sagging cable. The ends are left open.
#[derive(Debug)]
pub struct TessellateTube {
    points: Vec<Point3>,
    style: TubeStyle,
}

/// Orthonormal frame at a polyline vertex.
struct RingFrame {
    normal: Vector3,
    binormal: Vector3,
}

impl TessellateTube {
    /// Creates a new tube tessellation operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, style: TubeStyle) -> Self {
        Self { points, style }
    }

    /// Executes the tessellation, producing a tube mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided, if consecutive
    /// points are coincident (zero-length segment), or if the mesh would
    /// need more vertices than a `u32` index can address.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let n = self.points.len();
        if n < 2 {
            return Err(TessellationError::InvalidParameters(
                "at least 2 points are required for tube tessellation".to_owned(),
            )
            .into());
        }

        let radial = self.style.radial_segments();
        let vertex_count = n
            .checked_mul(radial)
            .and_then(|c| u32::try_from(c).ok())
            .ok_or_else(|| {
                TessellationError::InvalidParameters("tube has too many vertices".to_owned())
            })?;
        let radius = self.style.radius();
        let frames = self.compute_frames()?;
        let arc_lengths = self.cumulative_arc_lengths();
        let total_length = arc_lengths[n - 1];
        let inv_total = if total_length > f64::EPSILON {
            1.0 / total_length
        } else {
            0.0
        };

        let mut vertices = Vec::with_capacity(vertex_count as usize);
        let mut normals = Vec::with_capacity(vertex_count as usize);
        let mut uvs = Vec::with_capacity(vertex_count as usize);

        #[allow(clippy::cast_precision_loss)]
        let radial_f = radial as f64;
        for (i, (p, frame)) in self.points.iter().zip(&frames).enumerate() {
            let v = arc_lengths[i] * inv_total;
            for j in 0..radial {
                #[allow(clippy::cast_precision_loss)]
                let u = j as f64 / radial_f;
                let angle = TAU * u;
                let dir = frame.normal * angle.cos() + frame.binormal * angle.sin();
                vertices.push(*p + dir * radius);
                normals.push(dir);
                uvs.push(Point2::new(u, v));
            }
        }

        // Every index is below `vertex_count`, which fits in u32.
        #[allow(clippy::cast_possible_truncation)]
        let idx = |ring: usize, j: usize| (ring * radial + j % radial) as u32;

        let mut indices = Vec::with_capacity((n - 1) * radial * 2);
        for i in 0..n - 1 {
            for j in 0..radial {
                let a = idx(i, j);
                let b = idx(i, j + 1);
                let c = idx(i + 1, j);
                let d = idx(i + 1, j + 1);
                indices.push([a, b, c]);
                indices.push([b, d, c]);
            }
        }

        Ok(TriangleMesh {
            vertices,
            normals,
            uvs,
            indices,
        })
    }

    /// Builds a rotation-minimizing frame at every vertex by transporting
    /// the previous normal onto each new tangent.
    fn compute_frames(&self) -> Result<Vec<RingFrame>> {
        let n = self.points.len();
        let mut frames: Vec<RingFrame> = Vec::with_capacity(n);

        for i in 0..n {
            let tangent = if i == 0 {
                self.segment_direction(0, 1)?
            } else if i == n - 1 {
                self.segment_direction(n - 2, n - 1)?
            } else {
                average_direction(
                    self.segment_direction(i - 1, i)?,
                    self.segment_direction(i, i + 1)?,
                )
            };

            let normal = match frames.last() {
                Some(prev) => {
                    let projected = prev.normal - tangent * prev.normal.dot(&tangent);
                    let len = projected.norm();
                    if len < f64::EPSILON {
                        perpendicular_dir(&tangent)
                    } else {
                        projected / len
                    }
                }
                None => perpendicular_dir(&tangent),
            };
            let binormal = tangent.cross(&normal);
            frames.push(RingFrame { normal, binormal });
        }

        Ok(frames)
    }

    /// Computes the normalized direction from point `a` to point `b`.
    fn segment_direction(&self, a: usize, b: usize) -> Result<Vector3> {
        let d = self.points[b] - self.points[a];
        let len = d.norm();
        if len < f64::EPSILON {
            return Err(TessellationError::InvalidParameters(format!(
                "zero-length segment between points {a} and {b}"
            ))
            .into());
        }
        Ok(d / len)
    }

    /// Returns cumulative arc lengths at each vertex.
    fn cumulative_arc_lengths(&self) -> Vec<f64> {
        let n = self.points.len();
        let mut lengths = Vec::with_capacity(n);
        lengths.push(0.0);
        for i in 1..n {
            let seg_len = (self.points[i] - self.points[i - 1]).norm();
            lengths.push(lengths[i - 1] + seg_len);
        }
        lengths
    }
}

/// Returns the normalized average of two direction vectors.
fn average_direction(a: Vector3, b: Vector3) -> Vector3 {
    let avg = a + b;
    let len = avg.norm();
    if len < f64::EPSILON {
        // Opposite directions: fall back to the first direction.
        a
    } else {
        avg / len
    }
}
