// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building mass input and the unified building geometry

use serde::{Deserialize, Serialize};

/// First-floor height used when a building gives a story count only (feet)
pub const DEFAULT_FIRST_FLOOR_HEIGHT: f64 = 12.0;

/// Height of every floor above the first when not given (feet)
pub const DEFAULT_UPPER_FLOOR_HEIGHT: f64 = 10.0;

/// A building as described on a district lot
///
/// `x` and `y` are measured from the lot center.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingSpec {
    pub width: f64,
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub stories: Option<u32>,
    pub first_floor_height: Option<f64>,
    pub upper_floor_height: Option<f64>,
    /// Explicit total height, wins over the story-based height
    pub height: Option<f64>,
}

impl BuildingSpec {
    /// Total extrusion height in feet
    ///
    /// Zero stories resolve to zero height.
    pub fn resolved_height(&self) -> f64 {
        if let Some(height) = self.height {
            return height;
        }

        let stories = self.stories.unwrap_or(1);
        if stories == 0 {
            return 0.0;
        }

        let first = self.first_floor_height.unwrap_or(DEFAULT_FIRST_FLOOR_HEIGHT);
        let upper = self.upper_floor_height.unwrap_or(DEFAULT_UPPER_FLOOR_HEIGHT);
        first + upper * f64::from(stories - 1)
    }

    pub fn geometry(&self) -> BuildingGeometry {
        BuildingGeometry {
            width: self.width,
            depth: self.depth,
            x: self.x,
            y: self.y,
            height: self.resolved_height(),
            stories: self.stories.or(Some(1)).filter(|_| self.height.is_none()),
        }
    }
}

/// Building mass in the one shape every generator consumes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuildingGeometry {
    pub width: f64,
    pub depth: f64,
    /// Center offset from the lot center
    pub x: f64,
    pub y: f64,
    pub height: f64,
    /// Story count, when the height was derived from one
    pub stories: Option<u32>,
}

impl BuildingGeometry {
    /// Whether the mass has a non-empty footprint
    pub fn has_footprint(&self) -> bool {
        self.width > 0.0 && self.depth > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_height_wins() {
        let spec = BuildingSpec {
            width: 30.0,
            depth: 40.0,
            stories: Some(5),
            height: Some(18.5),
            ..Default::default()
        };
        let geometry = spec.geometry();
        assert_eq!(geometry.height, 18.5);
        assert_eq!(geometry.stories, None);
    }

    #[test]
    fn test_height_from_stories() {
        let spec = BuildingSpec {
            stories: Some(3),
            first_floor_height: Some(14.0),
            ..Default::default()
        };
        assert_eq!(spec.resolved_height(), 14.0 + 2.0 * DEFAULT_UPPER_FLOOR_HEIGHT);
        assert_eq!(spec.geometry().stories, Some(3));
    }

    #[test]
    fn test_default_single_story() {
        let spec = BuildingSpec::default();
        assert_eq!(spec.resolved_height(), DEFAULT_FIRST_FLOOR_HEIGHT);
        assert_eq!(spec.geometry().stories, Some(1));
    }

    #[test]
    fn test_zero_stories_is_zero_height() {
        let spec = BuildingSpec {
            stories: Some(0),
            ..Default::default()
        };
        assert_eq!(spec.resolved_height(), 0.0);
    }

    #[test]
    fn test_has_footprint() {
        let mut geometry = BuildingGeometry {
            width: 10.0,
            depth: 10.0,
            ..Default::default()
        };
        assert!(geometry.has_footprint());
        geometry.depth = 0.0;
        assert!(!geometry.has_footprint());
    }
}
