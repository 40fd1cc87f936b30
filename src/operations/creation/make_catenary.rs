use tracing::{debug, trace};

use crate::error::{GeometryError, Result};
use crate::geometry::{CatenarySample, CurveParameters};
use crate::math::{is_finite_point, Point3, TOLERANCE};

/// Samples the catenary hanging between two anchors.
///
/// Points are spaced evenly along the straight chord from `end` back to
/// `start`, then lifted onto the profile
/// `y = -relax + height_scale * relax * cosh((i - N/2) / relax)`,
/// shifted so sample 0 sits on `end`, and skewed by a linear ramp so the
/// last sample sits on `start`.
///
/// The result holds `2 * segment_count + 1` points ordered end → start.
#[derive(Debug, Clone)]
pub struct MakeCatenary {
    start: Point3,
    end: Point3,
    params: CurveParameters,
}

impl MakeCatenary {
    /// Creates a new `MakeCatenary` operation.
    #[must_use]
    pub fn new(start: Point3, end: Point3, params: CurveParameters) -> Self {
        Self { start, end, params }
    }

    /// Executes the operation, returning the sampled curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfiguration`] if `relax` is zero or
    /// non-finite, an anchor has a non-finite coordinate, or any sample
    /// would come out non-finite.
    pub fn execute(&self) -> Result<CatenarySample> {
        self.params.validate()?;
        if !is_finite_point(&self.start) {
            return Err(GeometryError::invalid("start", "has a non-finite coordinate").into());
        }
        if !is_finite_point(&self.end) {
            return Err(GeometryError::invalid("end", "has a non-finite coordinate").into());
        }

        let relax = self.params.relax();
        let height_scale = self.params.height_scale();
        let sample_count = self.params.sample_count()?;
        let last = sample_count - 1;
        let center = sample_count / 2;

        let delta_height = self.start.y - self.end.y;
        let line_vector = self.end - self.start;
        if line_vector.norm() < TOLERANCE {
            trace!("catenary anchors coincide; samples collapse onto one column");
        }

        #[allow(clippy::cast_precision_loss)]
        let step = line_vector / last as f64;
        #[allow(clippy::cast_precision_loss)]
        let height_step = delta_height / last as f64;

        // |i - center| peaks at i = 0, so the first profile height bounds them all.
        #[allow(clippy::cast_precision_loss)]
        let edge_profile = -relax + height_scale * (relax * (-(center as f64) / relax).cosh());
        if !edge_profile.is_finite() {
            return Err(GeometryError::invalid(
                "relax",
                format!(
                    "overflows the catenary profile over {sample_count} samples (relax = {relax})"
                ),
            )
            .into());
        }

        let mut points = Vec::new();
        points.try_reserve_exact(sample_count).map_err(|err| {
            GeometryError::invalid(
                "segment_count",
                format!("cannot allocate {sample_count} samples: {err}"),
            )
        })?;

        let mut first_pos_diff = 0.0;

        for i in 0..sample_count {
            #[allow(clippy::cast_precision_loss)]
            let fi = i as f64;
            #[allow(clippy::cast_precision_loss)]
            let offset = fi - center as f64;

            let mut pos = self.end - step * fi;
            pos.y = -relax + height_scale * (relax * (offset / relax).cosh());

            if i == 0 {
                let starting_line_y = pos.y;
                first_pos_diff = self.end.y - starting_line_y;
            }
            pos.y += first_pos_diff;
            pos.y += fi * height_step;

            if !is_finite_point(&pos) {
                return Err(GeometryError::invalid(
                    "relax",
                    format!("produces a non-finite sample at index {i} (relax = {relax})"),
                )
                .into());
            }
            points.push(pos);
        }

        debug!(
            samples = sample_count,
            chord = line_vector.norm(),
            relax,
            height_scale,
            "generated catenary"
        );
        Ok(CatenarySample::from_points(points))
    }
}

/// Samples the catenary between `start` and `end`.
///
/// Shorthand for [`MakeCatenary`] with [`CurveParameters::new`]; a
/// `segment_count` below 1 is treated as 1.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidConfiguration`] on a zero or non-finite
/// `relax`, or any other input that would produce a non-finite sample.
pub fn generate(
    start: Point3,
    end: Point3,
    segment_count: i64,
    relax: f64,
    height_scale: f64,
) -> Result<CatenarySample> {
    MakeCatenary::new(
        start,
        end,
        CurveParameters::new(segment_count, relax, height_scale),
    )
    .execute()
}
