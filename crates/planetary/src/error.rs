use thiserror::Error;

/// Errors raised when planetary input is rejected at a boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanetaryError {
    #[error("unknown planet type '{0}'")]
    UnknownPlanetType(String),

    #[error("unknown atmosphere sub-type '{0}'")]
    UnknownAtmosphere(String),

    #[error("orbit radius must be finite and non-negative, got {0}")]
    InvalidOrbitRadius(f64),
}
