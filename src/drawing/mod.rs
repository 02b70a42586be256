//! Compositing shapes onto pixel buffers.
//!
//! A shape paints only the pixels of its own [`pixel_bounds`], clipped to the extent of
//! the buffer. The acceptance decision relies on this: it compares nothing outside the
//! bounds, so a shape leaking paint past them would go unscored.

use {
  crate::geometry::{CanvasSpace, PixelSpace, PixelBox, pixel_bounds, clamp_to_canvas},
  euclid::{Box2D, Point2D, Size2D},
  image::{Rgb, RgbImage, imageops}
};

mod impl_draw_canvas;
#[cfg(test)] mod tests;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Read access to pixels, addressed in canvas coordinates.
pub trait PixelSource {
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8>;
}

/// A writable pixel buffer covering `extent()` of the canvas.
pub trait Canvas: PixelSource {
  fn extent(&self) -> Box2D<u32, PixelSpace>;
  fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Rgb<u8>;
}

impl PixelSource for RgbImage {
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8> { *self.get_pixel(x, y) } }

impl Canvas for RgbImage {
  fn extent(&self) -> Box2D<u32, PixelSpace> {
    Box2D::from_size(Size2D::from(self.dimensions()))
  }
  fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Rgb<u8> { self.get_pixel_mut(x, y) }
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

/// Scratch copy of a rectangular region of a canvas.
///
/// Shapes drawn onto a patch are isolated from the canvas it was captured from, until
/// [`commit`](Patch::commit) writes the region back.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
  origin: Point2D<u32, PixelSpace>,
  pixels: RgbImage
}

impl Patch {
  /// Copy `region` out of `source`. The region must lie within `source`.
  pub fn capture(source: &RgbImage, region: Box2D<u32, PixelSpace>) -> Self {
    let size = region.size();
    Patch {
      origin: region.min,
      pixels: imageops::crop_imm(source, region.min.x, region.min.y, size.width, size.height)
        .to_image()
    }
  }

  /// Capture the part of `bounds` that lies on `source`.
  pub fn capture_clamped(source: &RgbImage, bounds: PixelBox) -> Option<Self> {
    clamp_to_canvas(bounds, source.dimensions().into())
      .map(|region| Self::capture(source, region))
  }

  pub fn region(&self) -> Box2D<u32, PixelSpace> {
    Box2D::from_origin_and_size(self.origin, Size2D::from(self.pixels.dimensions()))
  }

  /// Write the patch back into the canvas it was captured from.
  pub fn commit(&self, canvas: &mut RgbImage) {
    self.pixels.enumerate_pixels()
      .for_each(|(x, y, pixel)| canvas.put_pixel(self.origin.x + x, self.origin.y + y, *pixel));
  }
}

impl PixelSource for Patch {
  fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
    *self.pixels.get_pixel(x - self.origin.x, y - self.origin.y)
  }
}

impl Canvas for Patch {
  fn extent(&self) -> Box2D<u32, PixelSpace> { self.region() }
  fn pixel_mut(&mut self, x: u32, y: u32) -> &mut Rgb<u8> {
    self.pixels.get_pixel_mut(x - self.origin.x, y - self.origin.y)
  }
}

/// Pixels a shape bounded by `bounds` may paint on `canvas`.
fn paint_region<C: Canvas>(bounds: Box2D<f32, CanvasSpace>, canvas: &C) -> Option<Box2D<u32, PixelSpace>> {
  let extent = canvas.extent().cast::<i32>();
  pixel_bounds(bounds)
    .intersection(&extent)
    .map(|b| b.cast::<u32>())
}
