/// Maximum resolution of the hexagonal index; resolutions run 0 through 15.
pub const MAX_RESOLUTION: i32 = 15;

/// Number of resolutions.
pub const NUM_RESOLUTIONS: usize = MAX_RESOLUTION as usize + 1;

/// Average hexagon edge length in kilometers for each resolution (0-15)
pub const AVG_EDGE_LENGTH_KM: [f64; NUM_RESOLUTIONS] = [
    1281.256011,
    483.0568391,
    182.5129565,
    68.97922179,
    26.07175968,
    9.854090990,
    3.724532667,
    1.406475763,
    0.531414010,
    0.200786148,
    0.075863783,
    0.028663897,
    0.010830188,
    0.004092010,
    0.001546100,
    0.000584169,
];

/// Area of a regular hexagon per squared circumradius (3√3 / 2).
pub(crate) const HEXAGON_AREA_PER_RADIUS_SQ: f64 = 2.598_076_211_353_316;

/// Default shrink applied to the cell area by the bbox estimator.
pub(crate) const DEFAULT_AREA_FUDGE: f64 = 0.8;
