//! Loading the target and exporting the accumulator.

use {
  crate::error::{Error, Result},
  image::RgbImage,
  log::info,
  std::path::Path
};

/// Decode `path` into 8-bit RGB. Any alpha channel is dropped.
pub fn load_target(path: impl AsRef<Path>) -> Result<RgbImage> {
  let path = path.as_ref();
  let image = image::open(path)
    .map_err(|source| Error::ImageLoad { path: path.to_owned(), source })?
    .into_rgb8();
  let (width, height) = image.dimensions();
  if width == 0 || height == 0 {
    return Err(Error::InvalidDimensions { width, height });
  }
  info!("loaded target {:?}, {}x{}", path, width, height);
  Ok(image)
}

/// Format is chosen by the extension of `path`.
pub fn save_canvas(path: impl AsRef<Path>, canvas: &RgbImage) -> Result<()> {
  let path = path.as_ref();
  canvas.save(path)
    .map_err(|source| Error::ImageSave { path: path.to_owned(), source })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn missing_target() {
    let err = load_target("does/not/exist.png").unwrap_err();
    assert!(matches!(err, Error::ImageLoad { .. }), "{err}");
  }

  #[test] fn round_trip() -> Result<()> {
    let path = std::env::temp_dir().join(format!("shape-anneal-io-{}.png", std::process::id()));
    let canvas = RgbImage::from_fn(5, 3, |x, y| image::Rgb([x as u8 * 40, y as u8 * 80, 7]));
    save_canvas(&path, &canvas)?;
    let loaded = load_target(&path);
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded?, canvas);
    Ok(())
  }
}
