use {
  euclid::{Point2D, Rotation2D},
  crate::geometry::{CanvasSpace, Shape, Rotation, Scale, Translation, Stroke}
};

/// Signed distance function. Negative inside, zero on the edge.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

impl <S> SDF<f32> for Translation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f32> for Rotation<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    // sample with the inverse rotation, so the field agrees with `bounding_box`
    let pivot = self.shape.bounding_box().center();
    let pixel = Rotation2D::new(-self.angle)
      .transform_point((pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.sdf(pixel)
  }
}

/// Exact for uniform scale. A non-uniform scale underestimates the distance along the
/// stretched axis, see [`Ellipse`](crate::geometry::Ellipse) for a closer field.
impl <S> SDF<f32> for Scale<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.min(self.scale.y)
  }
}

impl <S> SDF<f32> for Stroke<S, f32>
  where S: Shape {
  fn sdf(&self, pixel: Point2D<f32, CanvasSpace>) -> f32 {
    self.shape.sdf(pixel) - self.width / 2.0
  }
}
