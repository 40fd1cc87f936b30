use crate::error::{GeometryError, Result};

/// Default number of cable segments.
pub const DEFAULT_SEGMENT_COUNT: usize = 4;

/// Default relax (catenary scale) factor.
pub const DEFAULT_RELAX: f64 = 6.0;

/// Default sag amplitude multiplier.
pub const DEFAULT_HEIGHT_SCALE: f64 = 1.0;

/// Shape parameters of a sampled catenary.
///
/// The segment count is clamped to at least 1 on construction, so a
/// `CurveParameters` value always describes `2 * segment_count + 1` samples.
/// `relax` and `height_scale` are validated when the curve is generated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    segment_count: usize,
    relax: f64,
    height_scale: f64,
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            relax: DEFAULT_RELAX,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }
}

impl CurveParameters {
    /// Creates a new parameter set.
    ///
    /// # Arguments
    ///
    /// * `segment_count` - Number of segments; values below 1 are clamped to 1
    /// * `relax` - Catenary scale; larger values give a flatter cable
    /// * `height_scale` - Sag amplitude multiplier; keep at 1 for a true catenary
    #[must_use]
    pub fn new(segment_count: i64, relax: f64, height_scale: f64) -> Self {
        Self {
            segment_count: clamp_segment_count(segment_count),
            relax,
            height_scale,
        }
    }

    /// Returns a copy with a different segment count (clamped to at least 1).
    #[must_use]
    pub fn with_segment_count(self, segment_count: i64) -> Self {
        Self {
            segment_count: clamp_segment_count(segment_count),
            ..self
        }
    }

    /// Returns a copy with a different relax factor.
    #[must_use]
    pub fn with_relax(self, relax: f64) -> Self {
        Self { relax, ..self }
    }

    /// Returns a copy with a different height scale.
    #[must_use]
    pub fn with_height_scale(self, height_scale: f64) -> Self {
        Self {
            height_scale,
            ..self
        }
    }

    /// Returns the clamped segment count (always at least 1).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Returns the relax factor.
    #[must_use]
    pub fn relax(&self) -> f64 {
        self.relax
    }

    /// Returns the height scale.
    #[must_use]
    pub fn height_scale(&self) -> f64 {
        self.height_scale
    }

    /// Returns the number of samples, `2 * segment_count + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count does not fit in `usize`.
    pub fn sample_count(&self) -> Result<usize> {
        self.segment_count
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| GeometryError::invalid("segment_count", "is too large").into())
    }

    /// Checks that the parameters describe a computable curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfiguration`] if `relax` is zero or
    /// non-finite, `height_scale` is non-finite, or the sample count overflows.
    pub fn validate(&self) -> Result<()> {
        if !self.relax.is_finite() {
            return Err(GeometryError::invalid(
                "relax",
                format!("must be finite, got {}", self.relax),
            )
            .into());
        }
        if self.relax == 0.0 {
            return Err(GeometryError::invalid("relax", "must be non-zero").into());
        }
        if !self.height_scale.is_finite() {
            return Err(GeometryError::invalid(
                "height_scale",
                format!("must be finite, got {}", self.height_scale),
            )
            .into());
        }
        self.sample_count().map(|_| ())
    }
}

/// Clamps a caller-supplied segment count to at least 1.
fn clamp_segment_count(segment_count: i64) -> usize {
    usize::try_from(segment_count.max(1)).unwrap_or(usize::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CatenaryError;

    #[test]
    fn defaults_match_cable_maker() {
        let p = CurveParameters::default();
        assert_eq!(p.segment_count(), 4);
        assert!((p.relax() - 6.0).abs() < f64::EPSILON);
        assert!((p.height_scale() - 1.0).abs() < f64::EPSILON);
        assert_eq!(p.sample_count().unwrap(), 9);
    }

    #[test]
    fn segment_count_is_clamped() {
        assert_eq!(CurveParameters::new(0, 6.0, 1.0).segment_count(), 1);
        assert_eq!(CurveParameters::new(-12, 6.0, 1.0).segment_count(), 1);
        assert_eq!(
            CurveParameters::default().with_segment_count(i64::MIN).segment_count(),
            1
        );
    }

    #[test]
    fn zero_relax_is_invalid() {
        let err = CurveParameters::new(2, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            CatenaryError::Geometry(GeometryError::InvalidConfiguration {
                parameter: "relax",
                ..
            })
        ));
    }

    #[test]
    fn nan_parameters_are_invalid() {
        assert!(CurveParameters::new(2, f64::NAN, 1.0).validate().is_err());
        assert!(CurveParameters::new(2, 6.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn negative_relax_is_accepted() {
        assert!(CurveParameters::new(2, -6.0, 1.0).validate().is_ok());
    }

    #[test]
    fn huge_segment_count_overflows() {
        let p = CurveParameters {
            segment_count: usize::MAX,
            ..CurveParameters::default()
        };
        assert!(p.sample_count().is_err());
        assert!(p.validate().is_err());
    }
}
