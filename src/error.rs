/// Error type for hexbbox-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum HexBBoxError {
    /// The resolution is outside the valid range (0-15).
    ResolutionDomain(i32),
    /// The estimator produced a non-finite intermediate value.
    EstimateFailed(String),
}

impl std::fmt::Display for HexBBoxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexBBoxError::ResolutionDomain(res) => write!(f, "Resolution out of domain: {}", res),
            HexBBoxError::EstimateFailed(msg) => write!(f, "Estimate failed: {}", msg),
        }
    }
}

impl std::error::Error for HexBBoxError {}
