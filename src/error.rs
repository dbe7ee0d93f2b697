//! Error taxonomy for every fallible boundary in the crate.

use thiserror::Error;

/// Failure parsing the recognised fields of a camera record out of a scene
/// document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scene document has no `cameras` entry named {0:?}")]
    MissingCamera(String),

    #[error("camera record is missing required field {0:?}")]
    MissingField(&'static str),

    #[error("camera record has unrecognised `type` {0:?} (expected \"persp\")")]
    UnknownCameraType(String),

    #[error("failed to deserialise camera record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure constructing a [`crate::camera::Camera`] from otherwise
/// well-formed parameters.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("field of view must be finite and in (0, pi); got {0}")]
    InvalidFov(f32),

    #[error("image dimensions must be non-zero; got {0}x{1}")]
    InvalidDimensions(u32, u32),

    #[error("camera-to-world transform is degenerate (rotation axis has zero length)")]
    DegenerateTransform,

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Failure constructing the fixed-size render thread pool.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to build thread pool with {requested} threads: {source}")]
    Build {
        requested: usize,
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}
