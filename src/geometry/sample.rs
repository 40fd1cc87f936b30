use crate::math::Point3;
use crate::tessellation::Polyline;

/// An ordered catenary sample, from the end anchor to the start anchor.
///
/// Always holds an odd number of points, at least 3. Index 0 is the end
/// anchor and the last index is the start anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CatenarySample {
    points: Vec<Point3>,
}

impl CatenarySample {
    /// Wraps generated points. Callers guarantee at least 3 points.
    pub(crate) fn from_points(points: Vec<Point3>) -> Self {
        debug_assert!(points.len() >= 3 && points.len() % 2 == 1);
        Self { points }
    }

    /// Returns the sampled points in end → start order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a sample contains at least both anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first sample, which is the end anchor.
    #[must_use]
    pub fn first(&self) -> &Point3 {
        &self.points[0]
    }

    /// Returns the last sample, which is the start anchor.
    #[must_use]
    pub fn last(&self) -> &Point3 {
        &self.points[self.points.len() - 1]
    }

    /// Returns the samples strictly between the two anchors.
    #[must_use]
    pub fn interior(&self) -> &[Point3] {
        &self.points[1..self.points.len() - 1]
    }

    /// Iterates over consecutive point pairs (`len() - 1` segments).
    pub fn segments(&self) -> impl Iterator<Item = (&Point3, &Point3)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Consumes the sample, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl AsRef<[Point3]> for CatenarySample {
    fn as_ref(&self) -> &[Point3] {
        &self.points
    }
}

impl From<CatenarySample> for Polyline {
    fn from(sample: CatenarySample) -> Self {
        Polyline {
            points: sample.points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatenarySample {
        CatenarySample::from_points(vec![
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(1.0, -0.5, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn anchors_are_first_and_last() {
        let s = sample();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(*s.first(), Point3::new(2.0, 0.0, 0.0));
        assert_eq!(*s.last(), Point3::origin());
    }

    #[test]
    fn interior_excludes_anchors() {
        let s = sample();
        assert_eq!(s.interior(), &[Point3::new(1.0, -0.5, 0.0)]);
    }

    #[test]
    fn segments_connect_consecutive_points() {
        let s = sample();
        let segs: Vec<_> = s.segments().collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(*segs[0].1, *segs[1].0);
    }

    #[test]
    fn converts_into_polyline() {
        let polyline: Polyline = sample().into();
        assert_eq!(polyline.points.len(), 3);
    }
}
