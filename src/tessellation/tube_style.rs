use crate::error::{Result, TessellationError};

/// Default tube width, matching the default cable line width.
pub const DEFAULT_TUBE_WIDTH: f64 = 0.05;

/// Default number of vertices around each tube ring.
pub const DEFAULT_RADIAL_SEGMENTS: usize = 8;

/// Style parameters for tube tessellation around a polyline.
#[derive(Debug, Clone, Copy)]
pub struct TubeStyle {
    width: f64,
    radial_segments: usize,
}

impl Default for TubeStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_TUBE_WIDTH,
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
        }
    }
}

impl TubeStyle {
    /// Creates a new tube style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite, or if
    /// `radial_segments` is less than 3.
    pub fn new(width: f64, radial_segments: usize) -> Result<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(TessellationError::InvalidParameters(
                "tube width must be positive".to_owned(),
            )
            .into());
        }
        if radial_segments < 3 {
            return Err(TessellationError::InvalidParameters(format!(
                "tube needs at least 3 radial segments, got {radial_segments}"
            ))
            .into());
        }
        Ok(Self {
            width,
            radial_segments,
        })
    }

    /// Returns the tube width (diameter).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the tube radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the number of vertices around each ring.
    #[must_use]
    pub fn radial_segments(&self) -> usize {
        self.radial_segments
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = TubeStyle::new(2.0, 6).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert!((style.radius() - 1.0).abs() < f64::EPSILON);
        assert_eq!(style.radial_segments(), 6);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(TubeStyle::new(0.0, 8).is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(TubeStyle::new(f64::NAN, 8).is_err());
    }

    #[test]
    fn too_few_radial_segments_fails() {
        assert!(TubeStyle::new(1.0, 2).is_err());
    }
}
