// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D closed profiles and extrusion checks

use crate::error::{Error, Result};
use nalgebra::{Point2, Vector2};

/// Vertices closer than this are treated as the same vertex (feet)
pub const VERTEX_EPSILON: f64 = 1e-9;

/// Smallest enclosed area a profile may have (square feet)
pub const AREA_EPSILON: f64 = 1e-12;

/// 2D closed profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile2D {
    /// Outer boundary, without the closing vertex
    pub outer: Vec<Point2<f64>>,
}

impl Profile2D {
    /// Create a new profile
    pub fn new(outer: Vec<Point2<f64>>) -> Self {
        Self { outer }
    }

    /// Axis-aligned rectangle centered at `center`
    ///
    /// Corners run front-left, front-right, rear-right, rear-left.
    pub fn rectangle(center: Point2<f64>, width: f64, depth: f64) -> Self {
        let half_w = width / 2.0;
        let half_d = depth / 2.0;
        Self::new(vec![
            Point2::new(center.x - half_w, center.y - half_d),
            Point2::new(center.x + half_w, center.y - half_d),
            Point2::new(center.x + half_w, center.y + half_d),
            Point2::new(center.x - half_w, center.y + half_d),
        ])
    }

    /// Shoelace area, positive for counter-clockwise outlines
    pub fn signed_area(&self) -> f64 {
        let n = self.outer.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.outer[i];
                let b = self.outer[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Number of vertices that differ from every earlier vertex
    pub fn distinct_vertex_count(&self) -> usize {
        let mut distinct: Vec<Point2<f64>> = Vec::with_capacity(self.outer.len());
        for p in &self.outer {
            if !distinct
                .iter()
                .any(|q| (p - q).norm() <= VERTEX_EPSILON)
            {
                distinct.push(*p);
            }
        }
        distinct.len()
    }

    /// Copy of the profile moved by `offset`
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self::new(self.outer.iter().map(|p| p + offset).collect())
    }

    /// Check the profile can be written as a closed polyline that encloses area
    pub fn validate(&self) -> Result<()> {
        if self
            .outer
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(Error::InvalidGeometry(
                "Profile has a non-finite coordinate".to_string(),
            ));
        }

        let distinct = self.distinct_vertex_count();
        if distinct < 3 {
            return Err(Error::InvalidGeometry(format!(
                "Profile must have at least 3 distinct vertices, found {}",
                distinct
            )));
        }

        if self.area() <= AREA_EPSILON {
            return Err(Error::InvalidGeometry(
                "Profile encloses zero area".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check an extrusion depth
pub fn validate_extrusion(height: f64) -> Result<()> {
    if !height.is_finite() {
        return Err(Error::InvalidExtrusion(format!(
            "Extrusion height must be finite, got {}",
            height
        )));
    }
    if height <= 0.0 {
        return Err(Error::InvalidExtrusion(format!(
            "Extrusion height must be positive, got {}",
            height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle_area() {
        let profile = Profile2D::rectangle(Point2::new(0.0, 50.0), 50.0, 100.0);
        assert_relative_eq!(profile.signed_area(), 5000.0);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_clockwise_area_is_negative() {
        let profile = Profile2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]);
        assert_relative_eq!(profile.signed_area(), -1.0);
        assert_relative_eq!(profile.area(), 1.0);
    }

    #[test]
    fn test_too_few_distinct_vertices() {
        let profile = Profile2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
        ]);
        assert_eq!(profile.distinct_vertex_count(), 2);
        assert!(matches!(profile.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_collinear_has_zero_area() {
        let profile = Profile2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert!(matches!(profile.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let profile = Profile2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_translated() {
        let profile = Profile2D::rectangle(Point2::origin(), 2.0, 2.0)
            .translated(Vector2::new(10.0, 5.0));
        assert_eq!(profile.outer[0], Point2::new(9.0, 4.0));
    }

    #[test]
    fn test_validate_extrusion() {
        assert!(validate_extrusion(0.1).is_ok());
        assert!(matches!(validate_extrusion(0.0), Err(Error::InvalidExtrusion(_))));
        assert!(matches!(validate_extrusion(-3.0), Err(Error::InvalidExtrusion(_))));
        assert!(validate_extrusion(f64::INFINITY).is_err());
    }
}
