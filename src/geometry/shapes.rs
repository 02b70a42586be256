use {
  super::{BoundingBox, CanvasSpace, P2},
  crate::sdf::SDF,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Subdivisions used to flatten a [`QuadCurve`] for distance queries.
const CURVE_SEGMENTS: usize = 16;

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

/// Axis-aligned ellipse centered in the origin, with semi-axes `radii`.
#[derive(Debug, Copy, Clone)]
pub struct Ellipse {
  pub radii: V2<f32, CanvasSpace>
}

/// Zero-width straight outline. Its SDF is the unsigned distance, pair with
/// [`Shape::stroke`](super::Shape::stroke) to give it a body.
#[derive(Debug, Copy, Clone)]
pub struct Segment {
  pub from: P2,
  pub to: P2
}

/// Zero-width quadratic Bézier outline.
#[derive(Debug, Copy, Clone)]
pub struct QuadCurve {
  pub from: P2,
  pub ctrl: P2,
  pub to: P2
}

impl<S> BoundingBox<f32, S> for Circle {
  fn bounding_box(&self) -> Box2D<f32, S> {
    Box2D::new(
      Point2D::splat(-1.0),
      Point2D::splat(1.0)
    )}}

impl BoundingBox<f32, CanvasSpace> for Ellipse {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::new((-self.radii).to_point(), self.radii.to_point())
  }}

impl BoundingBox<f32, CanvasSpace> for Segment {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::from_points([self.from, self.to])
  }}

// a quadratic Bézier never leaves the hull of its control points
impl BoundingBox<f32, CanvasSpace> for QuadCurve {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    Box2D::from_points([self.from, self.ctrl, self.to])
  }}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: P2) -> f32 {
    pixel.to_vector().length() - 1.0
  }
}

// first order approximation: exact on the axes, close to exact near the outline
impl SDF<f32> for Ellipse {
  fn sdf(&self, pixel: P2) -> f32 {
    let p = pixel.to_vector();
    let k0 = p.component_div(self.radii).length();
    let k1 = p.component_div(self.radii.component_mul(self.radii)).length();
    if k1 == 0.0 {
      return -self.radii.x.min(self.radii.y);
    }
    k0 * (k0 - 1.0) / k1
  }
}

impl SDF<f32> for Segment {
  fn sdf(&self, pixel: P2) -> f32 {
    segment_distance(pixel, self.from, self.to)
  }
}

impl QuadCurve {
  pub fn point_at(&self, t: f32) -> P2 {
    let u = 1.0 - t;
    (self.from.to_vector() * (u * u)
      + self.ctrl.to_vector() * (2.0 * u * t)
      + self.to.to_vector() * (t * t))
      .to_point()
  }
}

impl SDF<f32> for QuadCurve {
  fn sdf(&self, pixel: P2) -> f32 {
    (1..=CURVE_SEGMENTS)
      .map(|i| (
        self.point_at((i - 1) as f32 / CURVE_SEGMENTS as f32),
        self.point_at(i as f32 / CURVE_SEGMENTS as f32)
      ))
      .map(|(a, b)| segment_distance(pixel, a, b))
      .fold(f32::MAX, f32::min)
  }
}

fn segment_distance(p: P2, a: P2, b: P2) -> f32 {
  let (pa, ba) = (p - a, b - a);
  let len_sq = ba.square_length();
  if len_sq == 0.0 {
    return pa.length();
  }
  let h = (pa.dot(ba) / len_sq).clamp(0.0, 1.0);
  (pa - ba * h).length()
}
