use crate::coord::{Coordinate, LatLng, TWO_PI, clamp_lat, normalize_lng};
use crate::geom::geo_loop::GeoLoop;
use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A latitude/longitude rectangle on the sphere, in radians.
///
/// A box with `east < west` crosses the antimeridian and covers the longitudes
/// `[west, π] ∪ [-π, east]`; otherwise it covers `[west, east]`. Edges are
/// inclusive.
///
/// # Example
///
/// ```
/// use hexbbox_rs::{BBox, GeoLoop, LatLng};
/// use std::f64::consts::PI;
///
/// let geoloop = GeoLoop::new(vec![
///     LatLng::new(0.4, PI - 0.1),
///     LatLng::new(0.4, -PI + 0.1),
///     LatLng::new(-0.4, -PI + 0.1),
///     LatLng::new(-0.4, PI - 0.1),
/// ]);
/// let bbox = BBox::from_geo_loop(&geoloop);
///
/// assert!(bbox.is_transmeridian());
/// assert!(bbox.contains(&LatLng::new(0.0, PI)));
/// assert!(!bbox.contains(&LatLng::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    /// Northern latitude
    pub north: f64,
    /// Southern latitude
    pub south: f64,
    /// Eastern longitude
    pub east: f64,
    /// Western longitude
    pub west: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LngNormalization {
    None,
    East,
    West,
}

impl LngNormalization {
    fn apply(self, lng: f64) -> f64 {
        match self {
            LngNormalization::None => lng,
            LngNormalization::East if lng < 0.0 => lng + TWO_PI,
            LngNormalization::West if lng > 0.0 => lng - TWO_PI,
            _ => lng,
        }
    }

    /// Picks how to unwrap the longitudes of `a` and `b` so they can be
    /// compared on a single line.
    fn for_pair(a: &BBox, b: &BBox) -> (Self, Self) {
        let a_tm = a.is_transmeridian();
        let b_tm = b.is_transmeridian();
        let a_trends_east = a.west - b.east < b.west - a.east;

        let a_norm = if !a_tm {
            Self::None
        } else if b_tm || a_trends_east {
            Self::East
        } else {
            Self::West
        };
        let b_norm = if !b_tm {
            Self::None
        } else if a_tm || !a_trends_east {
            Self::East
        } else {
            Self::West
        };

        (a_norm, b_norm)
    }
}

impl BBox {
    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Computes the tightest bbox enclosing every vertex and edge of `geoloop`.
    ///
    /// An edge whose endpoints differ in longitude by more than π is taken to
    /// cross the antimeridian, which makes the whole box transmeridian. An
    /// empty loop yields the zero box.
    pub fn from_geo_loop(geoloop: &GeoLoop) -> Self {
        if geoloop.is_empty() {
            return Self::default();
        }

        let mut bbox = Self {
            north: f64::NEG_INFINITY,
            south: f64::INFINITY,
            east: f64::NEG_INFINITY,
            west: f64::INFINITY,
        };
        let mut min_pos_lng = f64::INFINITY;
        let mut max_neg_lng = f64::NEG_INFINITY;
        let mut is_transmeridian = false;

        for (coord, next) in geoloop.edges() {
            bbox.north = bbox.north.max(coord.lat);
            bbox.south = bbox.south.min(coord.lat);
            bbox.east = bbox.east.max(coord.lng);
            bbox.west = bbox.west.min(coord.lng);

            if coord.lng >= 0.0 {
                min_pos_lng = min_pos_lng.min(coord.lng);
            } else {
                max_neg_lng = max_neg_lng.max(coord.lng);
            }

            if (coord.lng - next.lng).abs() > PI {
                is_transmeridian = true;
            }
        }

        if is_transmeridian {
            debug!(
                "loop of {} vertices crosses the antimeridian (west {}, east {})",
                geoloop.len(),
                min_pos_lng,
                max_neg_lng
            );
            bbox.east = max_neg_lng;
            bbox.west = min_pos_lng;
        }

        bbox
    }

    /// Exact field-wise equality, no epsilon.
    pub fn equals(&self, other: &BBox) -> bool {
        self == other
    }

    /// True when the box crosses the antimeridian (`east < west`).
    pub fn is_transmeridian(&self) -> bool {
        self.east < self.west
    }

    /// Whether the closed box contains `point`.
    ///
    /// Accepts a [`LatLng`], a `(lat, lng)` tuple or a `geo_types::Point`.
    pub fn contains(&self, point: &impl Coordinate) -> bool {
        let (lat, lng) = (point.lat(), point.lng());

        if lat > self.north || lat < self.south {
            return false;
        }

        if self.is_transmeridian() {
            lng >= self.west || lng <= self.east
        } else {
            lng >= self.west && lng <= self.east
        }
    }

    /// Geographic midpoint of the box.
    ///
    /// For a transmeridian box the midpoint is taken across the antimeridian
    /// and normalized into `(-π, π]`, so a box symmetric about the
    /// antimeridian has its center at longitude `+π`.
    pub fn center(&self) -> LatLng {
        let lat = (self.north + self.south) / 2.0;
        let mid = (self.east + self.west) / 2.0;
        let lng = if self.is_transmeridian() {
            normalize_lng(mid + PI)
        } else {
            mid
        };
        LatLng::new(lat, lng)
    }

    /// Longitudinal span in radians, accounting for antimeridian wrap.
    pub fn width_rads(&self) -> f64 {
        if self.is_transmeridian() {
            self.east - self.west + TWO_PI
        } else {
            self.east - self.west
        }
    }

    /// Latitudinal span in radians.
    pub fn height_rads(&self) -> f64 {
        self.north - self.south
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    /// Whether this box and `other` share at least one point.
    pub fn overlaps(&self, other: &BBox) -> bool {
        if self.north < other.south || self.south > other.north {
            return false;
        }

        let (a_norm, b_norm) = LngNormalization::for_pair(self, other);

        !(a_norm.apply(self.east) < b_norm.apply(other.west)
            || a_norm.apply(self.west) > b_norm.apply(other.east))
    }

    /// Whether `other` lies entirely inside this box.
    pub fn contains_bbox(&self, other: &BBox) -> bool {
        if self.north < other.north || self.south > other.south {
            return false;
        }

        let (a_norm, b_norm) = LngNormalization::for_pair(self, other);

        a_norm.apply(self.west) <= b_norm.apply(other.west)
            && a_norm.apply(self.east) >= b_norm.apply(other.east)
    }

    /// Returns a copy grown (or shrunk) about its center by `factor` in both
    /// dimensions. Latitudes stop at the poles; longitudes wrap.
    pub fn scale(&self, factor: f64) -> BBox {
        let width = self.width_rads();
        let height = self.height_rads();
        let width_buffer = (width * factor - width) / 2.0;
        let height_buffer = (height * factor - height) / 2.0;

        BBox {
            north: clamp_lat(self.north + height_buffer),
            south: clamp_lat(self.south - height_buffer),
            east: normalize_lng(self.east + width_buffer),
            west: normalize_lng(self.west - width_buffer),
        }
    }
}

/// Computes the tightest bbox enclosing `geoloop`. See [`BBox::from_geo_loop`].
pub fn bbox_from_geo_loop(geoloop: &GeoLoop) -> BBox {
    BBox::from_geo_loop(geoloop)
}

pub fn bbox_equals(a: &BBox, b: &BBox) -> bool {
    a.equals(b)
}

pub fn bbox_contains(bbox: &BBox, point: &impl Coordinate) -> bool {
    bbox.contains(point)
}

pub fn bbox_is_transmeridian(bbox: &BBox) -> bool {
    bbox.is_transmeridian()
}

pub fn bbox_center(bbox: &BBox) -> LatLng {
    bbox.center()
}
