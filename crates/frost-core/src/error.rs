use thiserror::Error;

/// Errors surfaced by the core. Absence of a face or hand is a normal state
/// and never appears here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrostError {
    #[error("{source_kind} landmark set is missing index {index}")]
    MissingLandmark {
        source_kind: &'static str,
        index: usize,
    },
    #[error("malformed tracker payload: {0}")]
    MalformedPayload(String),
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, FrostError>;
