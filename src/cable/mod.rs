//! A hanging cable between two anchors and its engine-facing consumers.
//!
//! [`Cable`] owns the anchors and shape parameters. It never renders
//! anything itself: final geometry goes to a [`LineSink`] or through
//! [`TessellateTube`], and editor gizmos are described as [`DrawCommand`]s.

mod line;
mod preview;

pub use line::{LineBuffer, LineSink};
pub use preview::{DrawCommand, PreviewCanvas, PreviewColor, PreviewDetail, PreviewSettings};

use crate::error::{GeometryError, Result};
use crate::geometry::{CatenarySample, CurveParameters};
use crate::math::Point3;
use crate::operations::creation::MakeCatenary;
use crate::tessellation::{TessellateTube, TriangleMesh, TubeStyle};

/// Default cable width in world units.
pub const DEFAULT_CABLE_WIDTH: f64 = 0.05;

/// Render style of a cable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableStyle {
    width: f64,
}

impl Default for CableStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_CABLE_WIDTH,
        }
    }
}

impl CableStyle {
    /// Creates a new cable style.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidWidth`] if `width` is not positive and finite.
    pub fn new(width: f64) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(GeometryError::InvalidWidth(width).into());
        }
        Ok(Self { width })
    }

    /// Returns the cable width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the radius of anchor and sample markers.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.width * 0.5
    }
}

/// A static cable hanging from `start` to an optional `end` anchor.
///
/// A cable without an end anchor is still a valid value (e.g. while it is
/// being placed in an editor); it previews its start marker only and
/// reports [`GeometryError::MissingAnchor`] when geometry is requested.
#[derive(Debug, Clone)]
pub struct Cable {
    start: Point3,
    end: Option<Point3>,
    params: CurveParameters,
    style: CableStyle,
    preview: PreviewSettings,
}

impl Cable {
    /// Creates a cable with default parameters, style and preview settings.
    #[must_use]
    pub fn new(start: Point3, end: Option<Point3>) -> Self {
        Self {
            start,
            end,
            params: CurveParameters::default(),
            style: CableStyle::default(),
            preview: PreviewSettings::default(),
        }
    }

    /// Replaces the curve parameters.
    #[must_use]
    pub fn with_params(mut self, params: CurveParameters) -> Self {
        self.params = params;
        self
    }

    /// Replaces the render style.
    #[must_use]
    pub fn with_style(mut self, style: CableStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the preview settings.
    #[must_use]
    pub fn with_preview(mut self, preview: PreviewSettings) -> Self {
        self.preview = preview;
        self
    }

    /// Moves the start anchor.
    pub fn set_start(&mut self, start: Point3) {
        self.start = start;
    }

    /// Attaches, moves or detaches the end anchor.
    pub fn set_end(&mut self, end: Option<Point3>) {
        self.end = end;
    }

    /// Replaces the curve parameters in place.
    pub fn set_params(&mut self, params: CurveParameters) {
        self.params = params;
    }

    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<&Point3> {
        self.end.as_ref()
    }

    #[must_use]
    pub fn params(&self) -> &CurveParameters {
        &self.params
    }

    #[must_use]
    pub fn style(&self) -> &CableStyle {
        &self.style
    }

    #[must_use]
    pub fn preview_settings(&self) -> &PreviewSettings {
        &self.preview
    }

    /// Generates the cable curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MissingAnchor`] if no end anchor is attached,
    /// or the generator's configuration error.
    pub fn catenary(&self) -> Result<CatenarySample> {
        let end = self.end.ok_or(GeometryError::MissingAnchor)?;
        MakeCatenary::new(self.start, end, self.params).execute()
    }

    /// Regenerates the curve and pushes it to `sink`, replacing whatever
    /// geometry the sink held before.
    ///
    /// # Errors
    ///
    /// Returns the [`Cable::catenary`] error; the sink is left untouched.
    pub fn redraw(&self, sink: &mut impl LineSink) -> Result<()> {
        let sample = self.catenary()?;
        sink.set_width(self.style.width());
        sink.set_positions(sample.points());
        Ok(())
    }

    /// Builds a tube mesh around the cable curve with the cable's width.
    ///
    /// # Errors
    ///
    /// Returns the [`Cable::catenary`] error, or a tessellation error if
    /// `radial_segments` is below 3 or two consecutive samples coincide (e.g.
    /// coincident anchors with `height_scale = 0`).
    pub fn tube(&self, radial_segments: usize) -> Result<TriangleMesh> {
        let sample = self.catenary()?;
        let style = TubeStyle::new(self.style.width(), radial_segments)?;
        TessellateTube::new(sample.into_points(), style).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CatenaryError;

    fn cable() -> Cable {
        Cable::new(Point3::new(0.0, 10.0, 0.0), Some(Point3::new(20.0, 8.0, 0.0)))
    }

    #[test]
    fn default_style_width() {
        assert!((CableStyle::default().width() - 0.05).abs() < f64::EPSILON);
        assert!((CableStyle::default().marker_radius() - 0.025).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_width_is_rejected() {
        assert!(matches!(
            CableStyle::new(0.0),
            Err(CatenaryError::Geometry(GeometryError::InvalidWidth(_)))
        ));
        assert!(CableStyle::new(f64::NAN).is_err());
    }

    #[test]
    fn catenary_uses_default_parameters() {
        let s = cable().catenary().unwrap();
        assert_eq!(s.len(), 9);
        assert!((*s.first() - Point3::new(20.0, 8.0, 0.0)).norm() < 1e-9);
        assert!((*s.last() - Point3::new(0.0, 10.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn detached_cable_has_no_geometry() {
        let c = Cable::new(Point3::origin(), None);
        assert!(matches!(
            c.catenary(),
            Err(CatenaryError::Geometry(GeometryError::MissingAnchor))
        ));
    }

    #[test]
    fn parameters_change_regenerates() {
        let mut c = cable();
        c.set_params(CurveParameters::new(10, 6.0, 1.0));
        assert_eq!(c.catenary().unwrap().len(), 21);
    }

    #[test]
    fn tube_mesh_counts() {
        let mesh = cable().tube(6).unwrap();
        assert_eq!(mesh.vertices.len(), 9 * 6);
        assert_eq!(mesh.indices.len(), 8 * 6 * 2);
    }

    #[test]
    fn tube_rejects_too_few_radial_segments() {
        assert!(matches!(
            cable().tube(2),
            Err(CatenaryError::Tessellation(_))
        ));
    }
}
