use hexbbox_rs::{GeoLoop, HexBBoxError, LatLng, bbox_hex_estimate, line_hex_estimate};
use log::info;

fn main() -> Result<(), HexBBoxError> {
    env_logger::init();

    // A loop straddling the antimeridian around Fiji.
    let geoloop = GeoLoop::new(vec![
        LatLng::from_degrees(-15.0, 176.0),
        LatLng::from_degrees(-15.0, -178.0),
        LatLng::from_degrees(-20.0, -178.0),
        LatLng::from_degrees(-20.0, 176.0),
    ]);

    let bbox = geoloop.bbox();
    info!("computed bbox for {} vertices", geoloop.len());

    println!("BBox: {:?}", bbox);
    println!("Transmeridian: {}", bbox.is_transmeridian());

    let (lat, lng) = bbox.center().to_degrees();
    println!("Center: ({}, {})", lat, lng);

    let res = 7;
    println!("Cells at res {}: ~{}", res, bbox_hex_estimate(&bbox, res)?);
    println!(
        "Cells along the diagonal at res {}: ~{}",
        res,
        line_hex_estimate(&bbox.north_east(), &bbox.south_west(), res)?
    );

    Ok(())
}
