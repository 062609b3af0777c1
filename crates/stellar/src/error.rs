use thiserror::Error;

/// Errors raised when stellar input is rejected at a boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StellarError {
    #[error("unknown spectral type '{0}' (expected one of M, K, G, F, A, B, O)")]
    UnknownSpectralType(String),

    #[error("luminosity must be finite and positive, got {0}")]
    InvalidLuminosity(f64),
}
