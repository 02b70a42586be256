//! Color distance metric.
//!
//! Both the coordinate queue and the acceptance evaluator rank colors with the same
//! metric: the sum over the three color channels of `|a - b| / channel_max`, which lies
//! in `[0, 3]`. There is no cross-channel weighting.
//!
//! Box sums are accumulated over [`abs_error`], the integer numerator of the metric, so
//! comparisons between two sums are exact.

use {
  image::{Pixel, Primitive},
  num_traits::ToPrimitive
};

mod palette;
pub use palette::Palette;

/// Sum of absolute per-channel differences of the color channels, in subpixel units.
/// Alpha, if present, is ignored.
pub fn abs_error<P: Pixel>(a: &P, b: &P) -> u64 {
  a.channels().iter()
    .zip(b.channels())
    .take(color_channels::<P>())
    .map(|(a, b)| a.to_u64().unwrap_or(0)
      .abs_diff(b.to_u64().unwrap_or(0)))
    .sum()
}

/// Channels of `P` carrying color. Alpha always comes last in `image`'s pixel layouts.
fn color_channels<P: Pixel>() -> usize {
  match P::CHANNEL_COUNT {
    2 | 4 => P::CHANNEL_COUNT as usize - 1,
    n => n as usize
  }
}

/// Largest value a channel of `P` may take, e.g. 255 for `Rgb<u8>`.
pub fn channel_max<P: Pixel>() -> f32 {
  <P::Subpixel as Primitive>::DEFAULT_MAX_VALUE
    .to_f32()
    .unwrap_or(1.0)
}

/// Normalized color distance, in `[0, 3]` for RGB pixels.
pub fn distance<P: Pixel>(a: &P, b: &P) -> f32 {
  abs_error(a, b) as f32 / channel_max::<P>()
}
