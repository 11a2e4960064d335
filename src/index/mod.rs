pub mod constants;
mod estimate;

pub use constants::{AVG_EDGE_LENGTH_KM, MAX_RESOLUTION, NUM_RESOLUTIONS};
pub use estimate::{
    AverageCellMetrics, CellMetrics, EstimateConfig, HexEstimator, bbox_hex_estimate,
    check_resolution, line_hex_estimate,
};
