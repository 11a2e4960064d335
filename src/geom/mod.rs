mod bbox;
mod geo_loop;

pub use bbox::{
    BBox, bbox_center, bbox_contains, bbox_equals, bbox_from_geo_loop, bbox_is_transmeridian,
};
pub use geo_loop::{GeoLoop, GeoPolygon};
