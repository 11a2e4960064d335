//! Geodetic points and angle helpers. Every angle is in radians unless a
//! function name says otherwise.

use geo::{Distance, Haversine};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// 2π
pub const TWO_PI: f64 = 2.0 * PI;

/// Epsilon for angle comparisons: 1e-9 degrees, expressed in radians.
pub const EPSILON_RAD: f64 = 1e-9 * PI / 180.0;

/// A geodetic point in radians.
///
/// `lat` is in `[-π/2, π/2]` and `lng` in `(-π, π]`. Neither is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in radians
    pub lat: f64,
    /// Longitude in radians
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point from degrees, normalizing the longitude into `(-π, π]`.
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: degs_to_rads(lat),
            lng: normalize_lng(degs_to_rads(lng)),
        }
    }

    /// Returns `(lat, lng)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (rads_to_degs(self.lat), rads_to_degs(self.lng))
    }

    /// True when both coordinates agree to within [`EPSILON_RAD`].
    pub fn almost_equal(&self, other: &LatLng) -> bool {
        geo_almost_equal(self, other)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        great_circle_distance_km(self, other)
    }
}

/// Trait for types that can provide a latitude/longitude pair in radians.
///
/// Implemented for [`LatLng`], `(lat, lng)` tuples and `geo_types::Point<f64>`
/// (where `x` is longitude and `y` is latitude). This allows bbox predicates
/// to accept any of them.
pub trait Coordinate {
    /// Returns the latitude in radians.
    fn lat(&self) -> f64;
    /// Returns the longitude in radians.
    fn lng(&self) -> f64;

    fn to_lat_lng(&self) -> LatLng {
        LatLng::new(self.lat(), self.lng())
    }
}

impl Coordinate for LatLng {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lng(&self) -> f64 {
        self.lng
    }
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lng(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lng(&self) -> f64 {
        self.x()
    }
}

impl From<LatLng> for Point<f64> {
    fn from(p: LatLng) -> Self {
        Point::new(p.lng, p.lat)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(p: Point<f64>) -> Self {
        LatLng::new(p.y(), p.x())
    }
}

/// Reduces an angle into `(-π, π]`. In-range values are returned unchanged.
pub fn normalize_lng(lng: f64) -> f64 {
    if lng > -PI && lng <= PI {
        return lng;
    }
    let mut wrapped = (lng + PI).rem_euclid(TWO_PI) - PI;
    if wrapped <= -PI {
        wrapped += TWO_PI;
    }
    wrapped
}

/// Clamps a latitude into `[-π/2, π/2]`.
pub fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-FRAC_PI_2, FRAC_PI_2)
}

pub fn degs_to_rads(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn rads_to_degs(radians: f64) -> f64 {
    radians.to_degrees()
}

/// True when both coordinates of `a` and `b` agree to within [`EPSILON_RAD`].
pub fn geo_almost_equal(a: &LatLng, b: &LatLng) -> bool {
    (a.lat - b.lat).abs() < EPSILON_RAD && (a.lng - b.lng).abs() < EPSILON_RAD
}

/// Haversine great-circle distance between two points, in kilometers.
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
    let (a_lat, a_lng) = a.to_degrees();
    let (b_lat, b_lng) = b.to_degrees();
    Haversine.distance(Point::new(a_lng, a_lat), Point::new(b_lng, b_lat)) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lng_in_range_untouched() {
        for lng in [0.0, 0.7, -0.7, PI, -PI + 0.1, PI - 0.1] {
            assert_eq!(normalize_lng(lng), lng);
        }
    }

    #[test]
    fn test_normalize_lng_wraps() {
        assert!((normalize_lng(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
        assert!((normalize_lng(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
        assert!((normalize_lng(5.0 * TWO_PI + 0.3) - 0.3).abs() < 1e-12);
        assert_eq!(normalize_lng(-PI), PI);
        assert!(normalize_lng(2.0 * TWO_PI).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_lat() {
        assert_eq!(clamp_lat(2.0), FRAC_PI_2);
        assert_eq!(clamp_lat(-2.0), -FRAC_PI_2);
        assert_eq!(clamp_lat(0.5), 0.5);
    }

    #[test]
    fn test_almost_equal() {
        let a = LatLng::new(0.9, 0.9);
        assert!(a.almost_equal(&LatLng::new(0.9 + 1e-13, 0.9 - 1e-13)));
        assert!(!a.almost_equal(&LatLng::new(0.9, 0.9 + 1e-6)));
        assert!(!a.almost_equal(&LatLng::new(0.9 + 1e-6, 0.9)));
    }

    #[test]
    fn test_from_degrees() {
        let p = LatLng::from_degrees(90.0, 270.0);
        assert!((p.lat - FRAC_PI_2).abs() < 1e-12);
        assert!((p.lng - (-FRAC_PI_2)).abs() < 1e-12);

        let (lat, lng) = LatLng::from_degrees(45.0, -120.0).to_degrees();
        assert!((lat - 45.0).abs() < 1e-9);
        assert!((lng + 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (0.1, 0.2);
        assert_eq!(tuple.lat(), 0.1);
        assert_eq!(tuple.lng(), 0.2);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(0.2, 0.1);
        assert_eq!(point.lat(), 0.1);
        assert_eq!(point.lng(), 0.2);
        assert_eq!(point.to_lat_lng(), LatLng::new(0.1, 0.2));
        assert_eq!(Point::from(LatLng::new(0.1, 0.2)), point);
    }

    #[test]
    fn test_great_circle_distance() {
        let origin = LatLng::new(0.0, 0.0);
        assert_eq!(great_circle_distance_km(&origin, &origin), 0.0);

        // A quarter of a meridian is roughly 10 000 km.
        let pole = LatLng::new(FRAC_PI_2, 0.0);
        let d = origin.distance_km(&pole);
        assert!(d > 9900.0 && d < 10100.0, "got {}", d);

        // Distance across the antimeridian takes the short way round.
        let west = LatLng::new(0.0, PI - 0.01);
        let east = LatLng::new(0.0, -PI + 0.01);
        assert!(west.distance_km(&east) < 200.0);
    }
}
