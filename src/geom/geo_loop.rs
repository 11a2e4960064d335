use crate::coord::LatLng;
use crate::geom::bbox::BBox;
use geo_types::{LineString, Polygon};

/// An ordered, closed loop of geodetic vertices in radians.
///
/// The closing edge from the last vertex back to the first is implicit, so
/// the first vertex is not repeated at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoLoop {
    pub verts: Vec<LatLng>,
}

impl GeoLoop {
    pub fn new(verts: Vec<LatLng>) -> Self {
        Self { verts }
    }

    /// Builds a loop from a line string in degrees (`x` = longitude, `y` = latitude).
    ///
    /// Longitudes are normalized into `(-π, π]`. A trailing vertex that repeats
    /// the first one is dropped.
    ///
    /// # Example
    /// ```
    /// use hexbbox_rs::GeoLoop;
    /// use geo_types::line_string;
    ///
    /// let line = line_string![
    ///     (x: 179.0, y: 10.0),
    ///     (x: -179.0, y: 10.0),
    ///     (x: -179.0, y: -10.0),
    ///     (x: 179.0, y: -10.0),
    ///     (x: 179.0, y: 10.0),
    /// ];
    /// let geoloop = GeoLoop::from_degrees(&line);
    /// assert_eq!(geoloop.len(), 4);
    /// assert!(geoloop.bbox().is_transmeridian());
    /// ```
    pub fn from_degrees(line: &LineString<f64>) -> Self {
        let mut coords = line.0.as_slice();
        if coords.len() > 1 && line.is_closed() {
            coords = &coords[..coords.len() - 1];
        }

        coords
            .iter()
            .map(|c| LatLng::from_degrees(c.y, c.x))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.verts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LatLng> {
        self.verts.iter()
    }

    /// Iterates over every edge as `(from, to)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&LatLng, &LatLng)> {
        self.verts.iter().zip(self.verts.iter().cycle().skip(1))
    }

    /// Returns the tightest bounding box of this loop.
    pub fn bbox(&self) -> BBox {
        BBox::from_geo_loop(self)
    }
}

impl From<Vec<LatLng>> for GeoLoop {
    fn from(verts: Vec<LatLng>) -> Self {
        Self::new(verts)
    }
}

impl FromIterator<LatLng> for GeoLoop {
    fn from_iter<I: IntoIterator<Item = LatLng>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A polygon made of an outer loop and zero or more holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoPolygon {
    pub geoloop: GeoLoop,
    pub holes: Vec<GeoLoop>,
}

impl GeoPolygon {
    pub fn new(geoloop: GeoLoop) -> Self {
        Self {
            geoloop,
            holes: Vec::new(),
        }
    }

    pub fn with_holes(mut self, holes: Vec<GeoLoop>) -> Self {
        self.holes = holes;
        self
    }

    /// Builds a polygon from a `geo_types::Polygon` in degrees.
    pub fn from_degrees(polygon: &Polygon<f64>) -> Self {
        Self {
            geoloop: GeoLoop::from_degrees(polygon.exterior()),
            holes: polygon
                .interiors()
                .iter()
                .map(GeoLoop::from_degrees)
                .collect(),
        }
    }

    /// Returns one bbox per loop: the outer loop first, then each hole in order.
    pub fn bboxes(&self) -> Vec<BBox> {
        std::iter::once(&self.geoloop)
            .chain(self.holes.iter())
            .map(BBox::from_geo_loop)
            .collect()
    }
}
