use {
  crate::{
    color::{abs_error, channel_max},
    drawing::PixelSource,
    geometry::{PixelBox, clamp_to_canvas}
  },
  image::{Rgb, RgbImage}
};

/// Error of the current accumulator and of an attempt against the target, summed over a
/// bounding box. Raw channel units; divide by the channel maximum for color distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
  pub current: u64,
  pub attempt: u64
}

impl Score {
  /// Strict improvement only. A tie keeps the current accumulator.
  pub fn accepts(&self) -> bool {
    self.attempt < self.current
  }

  pub fn current_distance(&self) -> f64 {
    self.current as f64 / channel_max::<Rgb<u8>>() as f64
  }

  pub fn attempt_distance(&self) -> f64 {
    self.attempt as f64 / channel_max::<Rgb<u8>>() as f64
  }
}

/// Score `attempt` against `current` inside `bounds`, clamped to the target's extent.
///
/// `attempt` only needs to cover the clamped box, so a [`Patch`](crate::drawing::Patch)
/// of just that region scores the same as a full copy of the canvas.
pub fn evaluate(
  target: &RgbImage,
  current: &impl PixelSource,
  attempt: &impl PixelSource,
  bounds: PixelBox
) -> Score {
  let region = match clamp_to_canvas(bounds, target.dimensions().into()) {
    Some(x) => x,
    None => return Score::default()
  };

  itertools::iproduct!(region.y_range(), region.x_range())
    .fold(Score::default(), |score, (y, x)| {
      let expected = target.get_pixel(x, y);
      Score {
        current: score.current + abs_error(expected, &current.pixel(x, y)),
        attempt: score.attempt + abs_error(expected, &attempt.pixel(x, y))
      }
    })
}
