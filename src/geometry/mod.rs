//! .
//!
//! The origin of coordinate system is in top-left corner. Shapes are defined in
//! [`CanvasSpace`], which is continuous and measured in pixels: the center of pixel
//! `(x, y)` is at `(x + 0.5, y + 0.5)`. Primitives are centered in the origin and placed
//! on the canvas through the [`Shape`] combinators.

use {
  euclid::{Point2D, Box2D, Vector2D as V2, Size2D, Rotation2D, Angle},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;
#[cfg(test)] mod tests;

/// Integer pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;
/// Continuous canvas coordinate basis, in pixel units
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpace;

pub type P2 = Point2D<f32, CanvasSpace>;
/// Axis-aligned pixel rectangle, `min` inclusive, `max` exclusive.
/// May extend past the canvas; see [`clamp_to_canvas`].
pub type PixelBox = Box2D<i32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f32> + BoundingBox<f32, CanvasSpace> {
  fn translate<T>(self, offset: V2<T, CanvasSpace>) -> Translation<Self, T> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Rotate around the center of shape's bounding box
  fn rotate<T>(self, angle: Angle<T>) -> Rotation<Self, T> where Self: Sized {
    Rotation { shape: self, angle }
  }
  /// Scale around the center of shape's bounding box
  fn scale<T>(self, scale: V2<T, CanvasSpace>) -> Scale<Self, T> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Thicken a zero-width outline into a band of `width`, centered on the outline.
  fn stroke<T>(self, width: T) -> Stroke<Self, T> where Self: Sized {
    Stroke { shape: self, width }
  }
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, CanvasSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S, T> {
  pub shape: S,
  pub offset: V2<T, CanvasSpace>
}
impl <S> BoundingBox<f32, CanvasSpace> for Translation<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

/// Rotate around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Rotation<S, T> {
  pub shape: S,
  pub angle: Angle<T>
}
impl <S> BoundingBox<f32, CanvasSpace> for Rotation<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let bounding = self.shape.bounding_box();
    let pivot = bounding.center();
    let rot = |point: P2| Rotation2D::new(self.angle)
      .transform_point((point - pivot).to_point())
      + pivot.to_vector();
    update_bounding_box(bounding, rot)
  }
}

/// Scale around the center of shape's bounding box
#[derive(Debug, Copy, Clone)]
pub struct Scale<S, T> {
  pub shape: S,
  pub scale: V2<T, CanvasSpace>
}
impl <S> BoundingBox<f32, CanvasSpace> for Scale<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Stroke<S, T> {
  pub shape: S,
  pub width: T
}
impl <S> BoundingBox<f32, CanvasSpace> for Stroke<S, f32>
  where S: BoundingBox<f32, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    self.shape.bounding_box()
      .inflate(self.width / 2.0, self.width / 2.0)
  }
}

/// Center of pixel `(x, y)`.
pub fn pixel_center(x: u32, y: u32) -> P2 {
  Point2D::new(x as f32 + 0.5, y as f32 + 0.5)
}

/// Every pixel whose center may receive coverage from a shape bounded by `bounds`,
/// including the half-pixel antialiasing fringe. Rounded outward.
/// Coordinates saturate at ±1e9, so the cast to `i32` cannot fail.
pub fn pixel_bounds(bounds: Box2D<f32, CanvasSpace>) -> PixelBox {
  const LIMIT: f32 = 1.0e9;
  // `f32::max` discards NaN
  let saturate = |p: P2| P2::new(
    p.x.max(-LIMIT).min(LIMIT),
    p.y.max(-LIMIT).min(LIMIT)
  );
  let bounds = bounds
    .inflate(0.5, 0.5)
    .round_out();
  Box2D::new(saturate(bounds.min), saturate(bounds.max))
    .cast::<i32>()
    .cast_unit()
}

/// Intersect `bounds` with the canvas `[0, width-1] x [0, height-1]`.
/// `None` if nothing of the box is on the canvas.
pub fn clamp_to_canvas(bounds: PixelBox, size: Size2D<u32, PixelSpace>) -> Option<Box2D<u32, PixelSpace>> {
  let canvas = Box2D::from_size(size.cast::<i32>());
  bounds.intersection(&canvas)
    .map(|b| b.cast::<u32>())
}

fn update_bounding_box(
  bounding: Box2D<f32, CanvasSpace>,
  morphism: impl Fn(P2) -> P2
) -> Box2D<f32, CanvasSpace> {
  let pts = [
    [bounding.min.x, bounding.min.y],
    [bounding.max.x, bounding.min.y],
    [bounding.max.x, bounding.max.y],
    [bounding.min.x, bounding.max.y],
  ];
  let pts = pts.iter().cloned()
    .map(|p| morphism(p.into()));
  Box2D::from_points(pts)
}
