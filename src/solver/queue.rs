use {
  super::CandidatePoint,
  crate::{
    color::{distance, Palette},
    config::{ColorStrategy, QueueConfig},
    error::{Error, Result}
  },
  euclid::Point2D,
  image::RgbImage,
  itertools::Itertools,
  log::{debug, info},
  rand::Rng,
  rayon::prelude::*,
  std::collections::VecDeque
};

/// Prioritized worklist of locations, and the size-decay schedule.
#[derive(Debug, Clone)]
pub struct CoordinateQueue {
  entries: VecDeque<CandidatePoint>,
  max_draw: f32,
  config: QueueConfig,
  palette: Option<Palette>
}

impl CoordinateQueue {
  /// Starts empty. The palette, if the color strategy needs one, is extracted here once.
  pub fn new(config: QueueConfig, target: &RgbImage) -> Result<Self> {
    let palette = if config.color_strategy.uses_palette() {
      let palette = Palette::extract(target, config.palette_size)?;
      info!("using {} palette colors", palette.len());
      Some(palette)
    } else {
      None
    };
    Ok(Self {
      entries: VecDeque::new(),
      max_draw: config.initial_max_draw,
      config,
      palette
    })
  }

  /// Current upper bound on generated shape size.
  pub fn max_draw(&self) -> f32 {
    self.max_draw
  }

  pub fn palette(&self) -> Option<&Palette> {
    self.palette.as_ref()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Front to back.
  pub fn iter(&self) -> impl Iterator<Item = &CandidatePoint> + '_ {
    self.entries.iter()
  }

  pub fn dequeue(&mut self) -> Option<CandidatePoint> {
    self.entries.pop_front()
  }

  /// Decay `max_draw`, then replace the queue with the highest-error points of a grid
  /// laid over the canvas, sorted by descending error. Returns the number queued.
  pub fn refill(
    &mut self,
    target: &RgbImage,
    accumulator: &RgbImage,
    rng: &mut impl Rng
  ) -> Result<usize> {
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
      return Err(Error::InvalidDimensions { width, height });
    }
    if accumulator.dimensions() != (width, height) {
      let (width, height) = accumulator.dimensions();
      return Err(Error::InvalidDimensions { width, height });
    }

    self.max_draw = (self.max_draw * self.config.decay_factor)
      .max(self.config.min_max_draw);
    let step = self.config.sampling_step.step(self.max_draw);
    let (xs, ys) = (grid_axis(width, step), grid_axis(height, step));

    let strategy = self.config.color_strategy;
    let palette = self.palette.as_ref();
    let mut entries = ys.par_iter()
      .flat_map_iter(|&y| xs.iter().map(move |&x| {
        let expected = target.get_pixel(x, y);
        let color = match (strategy, palette) {
          (ColorStrategy::NearestPalette, Some(palette)) => palette.nearest(expected),
          _ => *expected
        };
        CandidatePoint {
          point: Point2D::new(x, y),
          color,
          priority: distance(expected, accumulator.get_pixel(x, y))
        }
      }))
      .collect::<Vec<_>>();

    if let (ColorStrategy::RandomPalette, Some(palette)) = (strategy, palette) {
      entries.iter_mut()
        .for_each(|entry| entry.color = palette.sample(rng));
    }

    let sampled = entries.len();
    entries.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    entries.truncate(retained(sampled, self.config.prune_fraction));

    debug!(
      "refill: max_draw {:.2}, step {}, kept {} of {} candidates",
      self.max_draw, step, entries.len(), sampled
    );
    if entries.is_empty() {
      return Err(Error::QueueExhaustion { width, height });
    }
    self.entries = entries.into();
    Ok(self.entries.len())
  }
}

/// Grid coordinates along one axis of length `len`: every `step`, plus the far edge.
/// Clamped into `[0, len - 1]`, so never empty for `len > 0`.
fn grid_axis(len: u32, step: u32) -> Vec<u32> {
  let last = len.saturating_sub(1);
  (0..=len)
    .step_by(step.max(1) as usize)
    .chain(std::iter::once(len))
    .map(|v| v.min(last))
    .dedup()
    .collect()
}

/// Candidates surviving a prune of `prune_fraction`. At least one whenever `n > 0`.
fn retained(n: usize, prune_fraction: f32) -> usize {
  // strip f32 representation noise, e.g. 0.7f32 is 0.69999998
  let retain = ((1.0 - prune_fraction as f64) * 1e6).round() / 1e6;
  let keep = (n as f64 * retain).ceil() as usize;
  keep.clamp(n.min(1), n)
}
