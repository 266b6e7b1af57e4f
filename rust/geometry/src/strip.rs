// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thin rectangles standing in for drawn lines

use crate::profile::{Profile2D, VERTEX_EPSILON};
use nalgebra::{Point2, Vector2};

/// Rectangle of `width` centered on the segment `start -> end`
///
/// Returns `None` for a zero-length segment; callers skip it.
pub fn line_strip(start: Point2<f64>, end: Point2<f64>, width: f64) -> Option<Profile2D> {
    let dir = end - start;
    let length = dir.norm();
    if length < VERTEX_EPSILON {
        return None;
    }

    // Left-hand perpendicular, scaled to half the width
    let perp = Vector2::new(-dir.y, dir.x) / length * (width / 2.0);

    Some(Profile2D::new(vec![
        start - perp,
        end - perp,
        end + perp,
        start + perp,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_horizontal_strip() {
        let profile = line_strip(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), 0.5).unwrap();
        assert_eq!(
            profile.outer,
            vec![
                Point2::new(0.0, -0.25),
                Point2::new(10.0, -0.25),
                Point2::new(10.0, 0.25),
                Point2::new(0.0, 0.25),
            ]
        );
        assert_relative_eq!(profile.signed_area(), 5.0);
    }

    #[test]
    fn test_diagonal_strip_area() {
        let profile = line_strip(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0), 2.0).unwrap();
        assert_relative_eq!(profile.area(), 10.0, epsilon = 1e-12);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_zero_length_is_skipped() {
        let p = Point2::new(3.0, 7.0);
        assert!(line_strip(p, p, 0.5).is_none());
    }
}
