//! Engine configuration.
//!
//! The known variants of the algorithm differ only in the knobs below (shape family,
//! prune fraction, sampling step and color selection), so they are expressed as
//! [`Preset`]s over one engine rather than separate code paths.

use {
  std::{str::FromStr, time::Duration},
  image::Rgb,
  crate::{
    error::{Error, Result},
    solver::ShapeKind
  }
};

/// Largest accepted `initial_max_draw` and `min_stroke`, in pixels. Keeps every shape
/// bounding box well inside `i32` pixel coordinates.
pub const MAX_DRAW_LIMIT: f32 = 1.0e6;
/// Largest accepted `stroke_ratio`.
pub const MAX_STROKE_RATIO: f32 = 10.0;

/// Grid spacing of the refill sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingStep {
  /// `max(1, floor(max_draw * fraction))`
  Proportional(f32),
  Fixed(u32),
}

impl SamplingStep {
  pub fn step(&self, max_draw: f32) -> u32 {
    match *self {
      SamplingStep::Proportional(fraction) => ((max_draw * fraction).floor() as u32).max(1),
      SamplingStep::Fixed(step) => step.max(1)
    }
  }
}

/// How a queued location picks the color of the shape later drawn there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorStrategy {
  /// The target's own color at that location.
  Target,
  /// The palette entry nearest to the target's color at that location.
  NearestPalette,
  /// Any palette entry, uniformly at random.
  RandomPalette,
}

impl ColorStrategy {
  pub fn uses_palette(self) -> bool {
    !matches!(self, ColorStrategy::Target)
  }
}

impl FromStr for ColorStrategy {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "target" => Ok(ColorStrategy::Target),
      "palette" | "nearest-palette" => Ok(ColorStrategy::NearestPalette),
      "random-palette" => Ok(ColorStrategy::RandomPalette),
      _ => Err(Error::InvalidConfig(format!("unknown color strategy `{s}`")))
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueConfig {
  /// Value of `max_draw` before the first refill.
  pub initial_max_draw: f32,
  /// Applied to `max_draw` on every refill.
  pub decay_factor: f32,
  /// `max_draw` never decays below this.
  pub min_max_draw: f32,
  pub sampling_step: SamplingStep,
  /// Share of the lowest-error candidates dropped after sorting, in `[0, 1)`.
  pub prune_fraction: f32,
  pub color_strategy: ColorStrategy,
  /// Number of colors quantized out of the target, when the strategy needs a palette.
  pub palette_size: usize,
}

impl Default for QueueConfig {
  fn default() -> Self {
    QueueConfig {
      initial_max_draw: 20.0,
      decay_factor: 0.9,
      min_max_draw: 3.0,
      sampling_step: SamplingStep::Proportional(0.5),
      prune_fraction: 0.8,
      color_strategy: ColorStrategy::Target,
      palette_size: 20
    }}}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
  /// Drawn from uniformly. Must not be empty.
  pub kinds: Vec<ShapeKind>,
  /// Stroke width as a share of `w + h`.
  pub stroke_ratio: f32,
  pub min_stroke: f32,
}

impl Default for ShapeConfig {
  fn default() -> Self {
    ShapeConfig {
      kinds: vec![ShapeKind::Ellipse],
      stroke_ratio: 0.1,
      min_stroke: 1.0
    }}}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
  pub queue: QueueConfig,
  pub shapes: ShapeConfig,
  /// Initial color of the accumulator.
  pub background: Rgb<u8>,
  /// Seed of the engine's random source. Taken from the wall clock when `None`.
  pub seed: Option<u64>,
  /// Width of the accepted-iterations counter window.
  pub throughput_window: Duration,
}

impl Default for EngineConfig {
  fn default() -> Self {
    EngineConfig {
      queue: QueueConfig::default(),
      shapes: ShapeConfig::default(),
      background: Rgb([0, 0, 0]),
      seed: None,
      throughput_window: Duration::from_secs(1)
    }}}

impl EngineConfig {
  pub fn validate(&self) -> Result<()> {
    let QueueConfig {
      initial_max_draw, decay_factor, min_max_draw, sampling_step, prune_fraction,
      color_strategy, palette_size
    } = &self.queue;
    let invalid = |msg: &str| Err(Error::InvalidConfig(msg.into()));

    // shape sizes are drawn from [1, max_draw), which must be a non-empty range
    if !(*min_max_draw > 1.0) {
      return invalid("min_max_draw must be greater than 1");
    }
    if !(*initial_max_draw >= *min_max_draw) {
      return invalid("initial_max_draw must not be below min_max_draw");
    }
    if !(*initial_max_draw <= MAX_DRAW_LIMIT) {
      return invalid("initial_max_draw is too large");
    }
    if !(*decay_factor > 0.0 && *decay_factor <= 1.0) {
      return invalid("decay_factor must be in (0, 1]");
    }
    if !(*prune_fraction >= 0.0 && *prune_fraction < 1.0) {
      return invalid("prune_fraction must be in [0, 1)");
    }
    if let SamplingStep::Proportional(fraction) = sampling_step {
      if !(*fraction > 0.0) || !fraction.is_finite() {
        return invalid("sampling step fraction must be positive");
      }
    }
    if color_strategy.uses_palette() && *palette_size == 0 {
      return invalid("palette_size must be non-zero for palette color strategies");
    }
    if self.shapes.kinds.is_empty() {
      return invalid("at least one shape kind is required");
    }
    let ShapeConfig { stroke_ratio, min_stroke, .. } = &self.shapes;
    if !(*stroke_ratio >= 0.0 && *stroke_ratio <= MAX_STROKE_RATIO) {
      return invalid("stroke_ratio out of range");
    }
    if !(*min_stroke > 0.0 && *min_stroke <= MAX_DRAW_LIMIT) {
      return invalid("min_stroke out of range");
    }
    if self.throughput_window.is_zero() {
      return invalid("throughput_window must be non-zero");
    }
    Ok(())
  }
}

/// Named configurations reproducing the known variants of the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
  /// Axis-aligned ellipses in quantized palette colors, coarse pruning.
  PaletteEllipses,
  /// Ellipses, lines and curves with rotation, in raw target colors, aggressive pruning.
  TargetStrokes,
}

impl Preset {
  pub fn config(self) -> EngineConfig {
    let mut config = EngineConfig::default();
    match self {
      Preset::PaletteEllipses => {
        config.queue.color_strategy = ColorStrategy::NearestPalette;
        config.queue.prune_fraction = 0.7;
        config.queue.sampling_step = SamplingStep::Proportional(0.5);
      }
      Preset::TargetStrokes => {
        config.queue.color_strategy = ColorStrategy::Target;
        config.queue.prune_fraction = 0.85;
        config.queue.sampling_step = SamplingStep::Proportional(0.75);
        config.shapes.kinds = vec![ShapeKind::Ellipse, ShapeKind::Line, ShapeKind::Curve];
      }
    }
    config
  }
}

impl FromStr for Preset {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "palette-ellipses" => Ok(Preset::PaletteEllipses),
      "target-strokes" => Ok(Preset::TargetStrokes),
      _ => Err(Error::InvalidConfig(format!("unknown preset `{s}`")))
    }
  }
}
