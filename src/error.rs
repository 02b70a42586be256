//! Crate-wide error type.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
  #[error("failed to load target image {path:?}: {source}")]
  ImageLoad {
    path: PathBuf,
    source: image::ImageError
  },

  #[error("target image has invalid dimensions {width}x{height}")]
  InvalidDimensions { width: u32, height: u32 },

  /// The grid sampler guarantees at least one point for any non-empty image,
  /// so this indicates a logic fault rather than bad input.
  #[error("refill produced no candidates for a {width}x{height} canvas")]
  QueueExhaustion { width: u32, height: u32 },

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("failed to save canvas to {path:?}: {source}")]
  ImageSave {
    path: PathBuf,
    source: image::ImageError
  },
}

pub type Result<T> = std::result::Result<T, Error>;
