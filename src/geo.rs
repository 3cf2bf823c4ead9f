//! Map pin placement.
//!
//! Store pins are drawn on a static country map image, so a location only
//! needs a percentage offset inside the map container. [`MapBounds::project`]
//! maps the bounding box linearly onto the container: latitude runs top to
//! bottom, longitude left to right. This is an affine approximation that is
//! good enough at the scale of a single small country; it does no curvature
//! correction and is not a general map projection.
//!
//! Both axes are clamped to `[PIN_MARGIN, 100 - PIN_MARGIN]` so pins outside
//! the box (or with NaN coordinates) still land visibly inside the container.

use serde::{Deserialize, Serialize};

/// Minimum distance of a pin from any container edge, in percent.
pub const PIN_MARGIN: f64 = 5.0;

/// Geographic box covered by the map image, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for MapBounds {
    /// Mainland South Korea.
    fn default() -> Self {
        Self {
            min_lat: 34.0,
            max_lat: 38.0,
            min_lng: 126.0,
            max_lng: 129.5,
        }
    }
}

/// Pin offset inside the map container, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub top: f64,
    pub left: f64,
}

impl MapPosition {
    /// Inline CSS placing an absolutely positioned pin.
    pub fn to_css(&self) -> String {
        format!("top: {}%; left: {}%;", self.top, self.left)
    }
}

fn clamp_percent(value: f64) -> f64 {
    // max/min rather than clamp: NaN falls to the lower margin instead of propagating
    value.max(PIN_MARGIN).min(100.0 - PIN_MARGIN)
}

impl MapBounds {
    pub fn project(&self, lat: f64, lng: f64) -> MapPosition {
        let top = (self.max_lat - lat) / (self.max_lat - self.min_lat) * 100.0;
        let left = (lng - self.min_lng) / (self.max_lng - self.min_lng) * 100.0;
        MapPosition {
            top: clamp_percent(top),
            left: clamp_percent(left),
        }
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }

    /// Center of the box as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Project with the default bounds.
pub fn project(lat: f64, lng: f64) -> MapPosition {
    MapBounds::default().project(lat, lng)
}
