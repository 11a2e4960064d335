//! # hexbbox-rs
//!
//! Latitude/longitude bounding boxes on the sphere, for use with a hierarchical
//! hexagonal spatial index. All angles are radians.
//!
//! There are currently three main entry points.
//!
//! ### 1. `BBox` - Bounding Boxes
//!
//! ```
//! use hexbbox_rs::{BBox, LatLng};
//! use std::f64::consts::PI;
//!
//! // east < west: this box crosses the antimeridian
//! let bbox = BBox::new(1.0, 0.8, -PI + 0.3, PI - 0.1);
//! assert!(bbox.is_transmeridian());
//! assert!(bbox.contains(&LatLng::new(0.9, PI)));
//!
//! let center = bbox.center();
//! assert!(center.almost_equal(&LatLng::new(0.9, -PI + 0.1)));
//! ```
//!
//! ### 2. `GeoLoop` / `GeoPolygon` - Loops of Vertices
//!
//! ```
//! use hexbbox_rs::{BBox, GeoLoop, LatLng};
//!
//! let geoloop = GeoLoop::new(vec![
//!     LatLng::new(0.8, 0.3),
//!     LatLng::new(0.7, 0.6),
//!     LatLng::new(1.1, 0.7),
//!     LatLng::new(1.0, 0.2),
//! ]);
//! assert_eq!(geoloop.bbox(), BBox::new(1.1, 0.7, 0.7, 0.2));
//! ```
//!
//! ### 3. `HexEstimator` - Cell Count Estimates
//!
//! ```
//! use hexbbox_rs::{BBox, HexBBoxError, LatLng, bbox_hex_estimate, line_hex_estimate};
//!
//! # fn main() -> Result<(), HexBBoxError> {
//! let bbox = BBox::new(0.1, 0.0, 0.1, 0.0);
//! let cells = bbox_hex_estimate(&bbox, 7)?;
//! assert!(cells > 0);
//!
//! let line = line_hex_estimate(&LatLng::new(0.0, 0.0), &LatLng::new(0.1, 0.1), 7)?;
//! assert!(line > 0);
//!
//! assert_eq!(bbox_hex_estimate(&bbox, -1), Err(HexBBoxError::ResolutionDomain(-1)));
//! # Ok(())
//! # }
//! ```
//!

pub mod coord;
pub mod error;
pub mod geom;
pub mod index;

pub use coord::{
    Coordinate, EPSILON_RAD, LatLng, TWO_PI, clamp_lat, degs_to_rads, geo_almost_equal,
    great_circle_distance_km, normalize_lng, rads_to_degs,
};
pub use error::HexBBoxError;
pub use geom::{
    BBox, GeoLoop, GeoPolygon, bbox_center, bbox_contains, bbox_equals, bbox_from_geo_loop,
    bbox_is_transmeridian,
};
pub use index::{
    AVG_EDGE_LENGTH_KM, AverageCellMetrics, CellMetrics, EstimateConfig, HexEstimator,
    MAX_RESOLUTION, NUM_RESOLUTIONS, bbox_hex_estimate, check_resolution, line_hex_estimate,
};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{line_string, point};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_end_to_end_workflow() -> Result<(), HexBBoxError> {
        let line = line_string![
            (x: 170.0, y: 20.0),
            (x: -170.0, y: 20.0),
            (x: -170.0, y: -20.0),
            (x: 170.0, y: -20.0),
        ];
        let geoloop = GeoLoop::from_degrees(&line);
        let bbox = bbox_from_geo_loop(&geoloop);

        assert!(bbox_is_transmeridian(&bbox));
        assert!((bbox.north - 20.0_f64.to_radians()).abs() < 1e-12);
        assert!((bbox.west - 170.0_f64.to_radians()).abs() < 1e-12);
        assert!((bbox.east + 170.0_f64.to_radians()).abs() < 1e-12);

        let center = bbox_center(&bbox);
        assert!(bbox_contains(&bbox, &center));
        assert!((center.lng.abs() - PI).abs() < 1e-9);

        let estimate = bbox_hex_estimate(&bbox, 3)?;
        assert!(estimate > 1);

        let line_estimate = line_hex_estimate(&bbox.north_east(), &bbox.south_west(), 3)?;
        assert!(line_estimate > 1);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_points() {
        let bbox = BBox::new(0.1, -0.1, 0.2, -0.2);

        let inside = point! { x: 0.1, y: 0.05 };
        let outside = point! { x: 0.3, y: 0.05 };
        assert!(bbox.contains(&inside));
        assert!(!bbox.contains(&outside));

        let ll: LatLng = inside.into();
        assert_eq!(ll, LatLng::new(0.05, 0.1));
    }

    #[test]
    fn test_loop_bbox_contains_every_vertex() {
        let loops = vec![
            vec![(0.8, 0.3), (0.7, 0.6), (1.1, 0.7), (1.0, 0.2)],
            vec![(0.4, PI - 0.1), (0.4, -PI + 0.1), (-0.4, -PI + 0.1), (-0.4, PI - 0.1)],
            vec![(FRAC_PI_2, 0.1), (FRAC_PI_2 - 0.1, 0.8), (FRAC_PI_2 - 0.2, -0.3)],
            vec![(0.0, 3.0), (0.1, -3.0), (-0.2, -2.5), (0.05, 2.0)],
            vec![(-1.0, -3.1), (-1.2, 3.1)],
        ];

        for verts in loops {
            let geoloop: GeoLoop = verts.iter().map(|&(lat, lng)| LatLng::new(lat, lng)).collect();
            let bbox = geoloop.bbox();

            assert_eq!(bbox.is_transmeridian(), bbox.east < bbox.west);
            for v in geoloop.iter() {
                assert!(bbox.contains(v), "{:?} should contain {:?}", bbox, v);
            }
            let center = bbox.center();
            assert!(bbox.contains(&center), "{:?} should contain center {:?}", bbox, center);
        }
    }

    #[test]
    fn test_estimator_resolution_bounds() {
        let bbox = BBox::new(1.0, 0.0, 1.0, 0.0);
        let origin = LatLng::new(0.0, 0.0);
        let destination = LatLng::new(1.0, 1.0);

        for res in 0..=MAX_RESOLUTION {
            assert!(bbox_hex_estimate(&bbox, res).is_ok());
            assert!(line_hex_estimate(&origin, &destination, res).is_ok());
        }
        for res in [-1, MAX_RESOLUTION + 1] {
            assert_eq!(bbox_hex_estimate(&bbox, res), Err(HexBBoxError::ResolutionDomain(res)));
            assert_eq!(
                line_hex_estimate(&origin, &destination, res),
                Err(HexBBoxError::ResolutionDomain(res))
            );
        }
    }

    #[test]
    fn test_polygon_bboxes() {
        let outer: GeoLoop = [(0.5, -0.5), (0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5)]
            .iter()
            .map(|&(lat, lng)| LatLng::new(lat, lng))
            .collect();
        let hole: GeoLoop = [(0.1, -0.1), (0.1, 0.1), (-0.1, 0.1)]
            .iter()
            .map(|&(lat, lng)| LatLng::new(lat, lng))
            .collect();

        let bboxes = GeoPolygon::new(outer).with_holes(vec![hole]).bboxes();
        assert_eq!(bboxes.len(), 2);
        assert!(bboxes[0].contains_bbox(&bboxes[1]));
        assert!(bboxes[1].overlaps(&bboxes[0]));
    }
}
