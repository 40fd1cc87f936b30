use crate::geometry::CatenarySample;
use crate::math::Point3;

/// Finds the sample with the smallest height (the sag minimum).
pub struct LowestPoint<'a> {
    sample: &'a CatenarySample,
}

impl<'a> LowestPoint<'a> {
    /// Creates a new `LowestPoint` query.
    #[must_use]
    pub fn new(sample: &'a CatenarySample) -> Self {
        Self { sample }
    }

    /// Executes the query, returning the index and position of the lowest
    /// sample. Ties resolve to the smallest index.
    #[must_use]
    pub fn execute(&self) -> (usize, Point3) {
        let points = self.sample.points();
        let mut best = 0;
        for (i, p) in points.iter().enumerate().skip(1) {
            if p.y < points[best].y {
                best = i;
            }
        }
        (best, points[best])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::generate;

    #[test]
    fn level_cable_bottoms_out_at_center() {
        let s = generate(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 3, 6.0, 1.0).unwrap();
        let (idx, p) = LowestPoint::new(&s).execute();
        assert_eq!(idx, 3);
        assert!(p.y < 0.0);
    }

    #[test]
    fn steep_cable_bottoms_out_at_lower_anchor() {
        // The height ramp dominates the sag, so the end anchor (index 0) is lowest.
        let s = generate(
            Point3::new(0.0, 50.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            2,
            6.0,
            1.0,
        )
        .unwrap();
        let (idx, _) = LowestPoint::new(&s).execute();
        assert_eq!(idx, 0);
    }
}
