use crate::geometry::CatenarySample;

/// Computes the polyline length of a catenary sample.
pub struct Length<'a> {
    sample: &'a CatenarySample,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(sample: &'a CatenarySample) -> Self {
        Self { sample }
    }

    /// Executes the query, returning the sum of all segment lengths.
    ///
    /// This is never shorter than the straight chord between the anchors.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.sample.segments().map(|(a, b)| (b - a).norm()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::generate;

    #[test]
    fn straight_chord_length() {
        let s = generate(Point3::origin(), Point3::new(3.0, 4.0, 0.0), 4, 6.0, 0.0).unwrap();
        assert!((Length::new(&s).execute() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn sagging_cable_is_longer_than_chord() {
        let s = generate(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 4, 6.0, 1.0).unwrap();
        assert!(Length::new(&s).execute() > 10.0);
    }

    #[test]
    fn more_relax_means_shorter_cable() {
        let tight = generate(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 4, 20.0, 1.0).unwrap();
        let loose = generate(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 4, 3.0, 1.0).unwrap();
        assert!(Length::new(&tight).execute() < Length::new(&loose).execute());
    }
}
