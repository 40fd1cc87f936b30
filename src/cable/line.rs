use crate::math::Point3;

/// Consumer of final cable geometry, typically an engine line renderer.
///
/// Each call to [`LineSink::set_positions`] replaces the previous
/// geometry in place.
pub trait LineSink {
    /// Sets the rendered line width.
    fn set_width(&mut self, width: f64);

    /// Replaces the line's vertex positions.
    fn set_positions(&mut self, positions: &[Point3]);
}

/// In-memory [`LineSink`] holding the most recently drawn line.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    width: f64,
    positions: Vec<Point3>,
    redraws: usize,
}

impl LineBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Number of times positions have been set.
    #[must_use]
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl LineSink for LineBuffer {
    fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    fn set_positions(&mut self, positions: &[Point3]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
        self.redraws += 1;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cable::{Cable, CableStyle};
    use crate::geometry::CurveParameters;

    #[test]
    fn redraw_fills_buffer() {
        let cable = Cable::new(Point3::origin(), Some(Point3::new(10.0, 0.0, 0.0)))
            .with_style(CableStyle::new(0.2).unwrap());
        let mut buffer = LineBuffer::new();
        cable.redraw(&mut buffer).unwrap();
        assert_eq!(buffer.positions().len(), 9);
        assert!((buffer.width() - 0.2).abs() < f64::EPSILON);
        assert_eq!(buffer.positions()[0], Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn redraw_replaces_previous_geometry() {
        let mut cable = Cable::new(Point3::origin(), Some(Point3::new(10.0, 0.0, 0.0)));
        let mut buffer = LineBuffer::new();
        cable.redraw(&mut buffer).unwrap();
        cable.set_params(CurveParameters::new(1, 6.0, 1.0));
        cable.redraw(&mut buffer).unwrap();
        assert_eq!(buffer.positions().len(), 3);
        assert_eq!(buffer.redraws(), 2);
    }

    #[test]
    fn failed_redraw_keeps_previous_geometry() {
        let mut cable = Cable::new(Point3::origin(), Some(Point3::new(10.0, 0.0, 0.0)));
        let mut buffer = LineBuffer::new();
        cable.redraw(&mut buffer).unwrap();
        cable.set_params(CurveParameters::new(4, 0.0, 1.0));
        assert!(cable.redraw(&mut buffer).is_err());
        assert_eq!(buffer.positions().len(), 9);
        assert_eq!(buffer.redraws(), 1);
        assert!(buffer.positions().iter().all(|p| p.y.is_finite()));
    }
}
