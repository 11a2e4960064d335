use crate::coord::{LatLng, great_circle_distance_km};
use crate::error::HexBBoxError;
use crate::geom::BBox;
use crate::index::constants::{
    AVG_EDGE_LENGTH_KM, DEFAULT_AREA_FUDGE, HEXAGON_AREA_PER_RADIUS_SQ, MAX_RESOLUTION,
};
use log::{debug, trace};

/// Checks that `res` is a valid resolution and returns it as a table index.
pub fn check_resolution(res: i32) -> Result<usize, HexBBoxError> {
    if !(0..=MAX_RESOLUTION).contains(&res) {
        debug!("rejecting resolution {} (valid range 0-{})", res, MAX_RESOLUTION);
        return Err(HexBBoxError::ResolutionDomain(res));
    }
    Ok(res as usize)
}

/// Source of cell dimensions for the estimators.
///
/// Implementations return the circumradius, in kilometers, of the most
/// distorted cell at a resolution. `res` has already been validated.
pub trait CellMetrics {
    fn cell_radius_km(&self, res: usize) -> f64;
}

/// Cell metrics derived from the published average hexagon edge lengths.
///
/// A regular hexagon's circumradius equals its edge length. `distortion`
/// scales that radius down to approximate the smaller cells around the
/// pentagons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageCellMetrics {
    distortion: f64,
}

impl AverageCellMetrics {
    pub fn new(distortion: f64) -> Self {
        Self { distortion }
    }

    pub fn distortion(&self) -> f64 {
        self.distortion
    }
}

impl Default for AverageCellMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl CellMetrics for AverageCellMetrics {
    fn cell_radius_km(&self, res: usize) -> f64 {
        AVG_EDGE_LENGTH_KM[res] * self.distortion
    }
}

/// Tuning knobs for [`HexEstimator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateConfig {
    /// Factor applied to the cell area before dividing the bbox area by it.
    pub area_fudge: f64,
    /// Smallest estimate ever returned.
    pub min_estimate: i64,
}

impl EstimateConfig {
    /// Create a config with the default fudge factor (0.8) and a minimum of 1.
    ///
    /// # Example
    /// ```
    /// use hexbbox_rs::EstimateConfig;
    ///
    /// let config = EstimateConfig::new().area_fudge(0.9).min_estimate(4);
    /// assert_eq!(config.min_estimate, 4);
    /// ```
    pub fn new() -> Self {
        Self {
            area_fudge: DEFAULT_AREA_FUDGE,
            min_estimate: 1,
        }
    }

    pub fn area_fudge(mut self, area_fudge: f64) -> Self {
        self.area_fudge = area_fudge;
        self
    }

    pub fn min_estimate(mut self, min_estimate: i64) -> Self {
        self.min_estimate = min_estimate;
        self
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimates how many cells are needed to cover a bbox or trace a line.
///
/// # Example
///
/// ```
/// use hexbbox_rs::{BBox, HexBBoxError, HexEstimator};
///
/// # fn main() -> Result<(), HexBBoxError> {
/// let estimator = HexEstimator::default();
/// let bbox = BBox::new(0.01, 0.0, 0.01, 0.0);
///
/// let coarse = estimator.bbox_estimate(&bbox, 5)?;
/// let fine = estimator.bbox_estimate(&bbox, 9)?;
/// assert!(fine > coarse);
///
/// assert_eq!(
///     estimator.bbox_estimate(&bbox, 16),
///     Err(HexBBoxError::ResolutionDomain(16))
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HexEstimator<M = AverageCellMetrics> {
    metrics: M,
    config: EstimateConfig,
}

impl Default for HexEstimator {
    fn default() -> Self {
        Self::new(AverageCellMetrics::default())
    }
}

impl<M: CellMetrics> HexEstimator<M> {
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            config: EstimateConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EstimateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EstimateConfig {
        &self.config
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Estimates the number of cells at `res` needed to cover `bbox`.
    pub fn bbox_estimate(&self, bbox: &BBox, res: i32) -> Result<i64, HexBBoxError> {
        let res = check_resolution(res)?;

        let radius_km = self.metrics.cell_radius_km(res);
        let cell_area_km2 =
            self.config.area_fudge * HEXAGON_AREA_PER_RADIUS_SQ * radius_km * radius_km;

        let diagonal_km = great_circle_distance_km(&bbox.north_east(), &bbox.south_west());
        let mut d1 = bbox.width_rads().abs();
        let mut d2 = bbox.height_rads().abs();
        if d1 < d2 {
            std::mem::swap(&mut d1, &mut d2);
        }
        // aspect ratio capped at 3
        let area_km2 = diagonal_km * diagonal_km / 3.0_f64.min(d1 / d2);

        let estimate = self.finish((area_km2 / cell_area_km2).ceil(), "bbox")?;
        trace!("bbox estimate at res {}: {} cells ({} km2)", res, estimate, area_km2);
        Ok(estimate)
    }

    /// Estimates the number of cells at `res` needed to trace the great-circle
    /// line from `origin` to `destination`.
    pub fn line_estimate(
        &self,
        origin: &LatLng,
        destination: &LatLng,
        res: i32,
    ) -> Result<i64, HexBBoxError> {
        let res = check_resolution(res)?;

        let radius_km = self.metrics.cell_radius_km(res);
        let distance_km = great_circle_distance_km(origin, destination);

        let estimate = self.finish((distance_km / (2.0 * radius_km)).ceil(), "line")?;
        trace!("line estimate at res {}: {} cells ({} km)", res, estimate, distance_km);
        Ok(estimate)
    }

    fn finish(&self, estimate: f64, kind: &str) -> Result<i64, HexBBoxError> {
        if !estimate.is_finite() {
            return Err(HexBBoxError::EstimateFailed(format!(
                "{} estimate is not finite: {}",
                kind, estimate
            )));
        }
        Ok((estimate as i64).max(self.config.min_estimate))
    }
}

/// Estimates the number of cells at `res` needed to cover `bbox`, using the
/// default [`HexEstimator`].
///
/// # Example
/// ```
/// use hexbbox_rs::{BBox, HexBBoxError, bbox_hex_estimate};
///
/// let bbox = BBox::new(1.0, 0.0, 1.0, 0.0);
/// assert!(bbox_hex_estimate(&bbox, 3).is_ok());
/// assert_eq!(bbox_hex_estimate(&bbox, -1), Err(HexBBoxError::ResolutionDomain(-1)));
/// ```
pub fn bbox_hex_estimate(bbox: &BBox, res: i32) -> Result<i64, HexBBoxError> {
    HexEstimator::default().bbox_estimate(bbox, res)
}

/// Estimates the number of cells at `res` needed to trace the line from
/// `origin` to `destination`, using the default [`HexEstimator`].
pub fn line_hex_estimate(
    origin: &LatLng,
    destination: &LatLng,
    res: i32,
) -> Result<i64, HexBBoxError> {
    HexEstimator::default().line_estimate(origin, destination, res)
}
