use {
  super::CandidatePoint,
  crate::{
    config::ShapeConfig,
    drawing::{Canvas, Draw},
    error::{Error, Result},
    geometry::{
      BoundingBox, CanvasSpace, Ellipse, P2, PixelBox, QuadCurve, Segment, Shape,
      Translation, Rotation, Stroke, pixel_center, pixel_bounds
    },
    sdf::SDF
  },
  euclid::{Angle, Box2D, Size2D},
  image::Rgb,
  rand::{seq::SliceRandom, Rng},
  std::str::FromStr
};

/// The closed set of primitives the engine draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
  /// Filled, axis-aligned.
  Ellipse,
  /// Straight stroke across the diagonal of the shape's box, rotated.
  Line,
  /// Quadratic stroke spanning the shape's box, rotated.
  Curve,
}

impl ShapeKind {
  pub fn is_stroke(self) -> bool {
    !matches!(self, ShapeKind::Ellipse)
  }
}

impl FromStr for ShapeKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "ellipse" => Ok(ShapeKind::Ellipse),
      "line" => Ok(ShapeKind::Line),
      "curve" => Ok(ShapeKind::Curve),
      _ => Err(Error::InvalidConfig(format!("unknown shape kind `{s}`")))
    }
  }
}

/// A concrete shape, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
  pub kind: ShapeKind,
  pub center: P2,
  /// Full extents of the unrotated shape.
  pub size: Size2D<f32, CanvasSpace>,
  pub rotation: Angle<f32>,
  /// Horizontal offset of a curve's control point from the center.
  pub control: f32,
  pub color: Rgb<u8>,
  pub stroke_width: f32,
  /// Every pixel drawing this shape may touch.
  pub bounds: PixelBox
}

impl ShapeSpec {
  pub fn new(
    kind: ShapeKind,
    center: P2,
    size: Size2D<f32, CanvasSpace>,
    rotation: Angle<f32>,
    control: f32,
    color: Rgb<u8>,
    stroke_width: f32
  ) -> Self {
    let mut shape = ShapeSpec {
      kind, center, size, rotation, control, color, stroke_width,
      bounds: Box2D::zero()
    };
    shape.bounds = pixel_bounds(shape.bounding_box());
    shape
  }

  fn ellipse(&self) -> Translation<Ellipse, f32> {
    Ellipse { radii: self.size.to_vector() / 2.0 }
      .translate(self.center.to_vector())
  }

  fn line(&self) -> Translation<Rotation<Stroke<Segment, f32>, f32>, f32> {
    let half = self.size.to_vector() / 2.0;
    Segment {
      from: (-half).to_point(),
      to: half.to_point()
    } .stroke(self.stroke_width)
      .rotate(self.rotation)
      .translate(self.center.to_vector())
  }

  fn curve(&self) -> Translation<Rotation<Stroke<QuadCurve, f32>, f32>, f32> {
    let half = self.size.to_vector() / 2.0;
    QuadCurve {
      from: P2::new(-half.x, half.y),
      ctrl: P2::new(self.control, -half.y),
      to: half.to_point()
    } .stroke(self.stroke_width)
      .rotate(self.rotation)
      .translate(self.center.to_vector())
  }
}

impl SDF<f32> for ShapeSpec {
  fn sdf(&self, pixel: P2) -> f32 {
    match self.kind {
      ShapeKind::Ellipse => self.ellipse().sdf(pixel),
      ShapeKind::Line => self.line().sdf(pixel),
      ShapeKind::Curve => self.curve().sdf(pixel),
    }}}

impl BoundingBox<f32, CanvasSpace> for ShapeSpec {
  fn bounding_box(&self) -> Box2D<f32, CanvasSpace> {
    match self.kind {
      ShapeKind::Ellipse => self.ellipse().bounding_box(),
      ShapeKind::Line => self.line().bounding_box(),
      ShapeKind::Curve => self.curve().bounding_box(),
    }}}

/// Filled for ellipses, stroked with no fill otherwise. Clipped to `bounds`.
impl <C: Canvas> Draw<C> for ShapeSpec {
  fn draw(&self, image: &mut C) {
    (*self).texture(self.color).draw(image)
  }
}

/// Turns queued locations into randomized shapes.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
  config: ShapeConfig
}

impl ShapeGenerator {
  pub fn new(config: ShapeConfig) -> Self {
    Self { config }
  }

  /// A shape centered on `candidate`, in its color, with both extents drawn from
  /// `[1, max_draw)`.
  pub fn generate(&self, candidate: &CandidatePoint, max_draw: f32, rng: &mut impl Rng) -> ShapeSpec {
    let kind = self.config.kinds.choose(rng)
      .copied()
      .unwrap_or(ShapeKind::Ellipse);
    let size = Size2D::new(extent(max_draw, rng), extent(max_draw, rng));

    let rotation = if kind.is_stroke() {
      Angle::degrees(rng.gen_range(0.0..360.0))
    } else {
      Angle::zero()
    };
    let control = match kind {
      ShapeKind::Curve => rng.gen_range(-size.width / 2.0..=size.width / 2.0),
      _ => 0.0
    };
    // proportional, but never so thin that the stroke vanishes
    let stroke_width = if kind.is_stroke() {
      ((size.width + size.height) * self.config.stroke_ratio).max(self.config.min_stroke)
    } else {
      0.0
    };

    ShapeSpec::new(
      kind,
      pixel_center(candidate.point.x, candidate.point.y),
      size,
      rotation,
      control,
      candidate.color,
      stroke_width
    )
  }
}

fn extent(max_draw: f32, rng: &mut impl Rng) -> f32 {
  if max_draw > 1.0 {
    rng.gen_range(1.0..max_draw)
  } else {
    1.0
  }
}
