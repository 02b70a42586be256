use {
  anyhow::{Context, Result},
  clap::Parser,
  image::Rgb,
  log::info,
  shape_anneal::{
    config::{ColorStrategy, EngineConfig, Preset, SamplingStep},
    image_io,
    logging::{init_logging, LoggingConfig},
    solver::{Controller, ShapeKind, Step}
  },
  std::{
    path::PathBuf,
    time::{Duration, Instant}
  }
};

/// Approximate an image with randomly placed shapes, keeping only those that help.
#[derive(Parser, Debug)]
#[command(name = "shape-anneal", version)]
struct Cli {
  /// Target image (PNG or JPEG)
  input: PathBuf,

  /// Where to write the final canvas
  #[arg(short, long, default_value = "out.png")]
  output: PathBuf,

  /// Start from a named configuration: palette-ellipses, target-strokes
  #[arg(long)]
  preset: Option<Preset>,

  /// Shape kinds to draw, comma separated: ellipse, line, curve
  #[arg(long, value_delimiter = ',')]
  shapes: Vec<ShapeKind>,

  /// Shape color source: target, palette, random-palette
  #[arg(long)]
  color: Option<ColorStrategy>,

  /// Number of palette colors for the palette strategies
  #[arg(long)]
  palette_size: Option<usize>,

  /// Share of lowest-error candidates dropped on each refill, in [0, 1)
  #[arg(long)]
  prune: Option<f32>,

  /// Grid spacing of the refill sampler as a share of the maximum shape size
  #[arg(long, conflicts_with = "step")]
  step_fraction: Option<f32>,

  /// Fixed grid spacing of the refill sampler, in pixels
  #[arg(long)]
  step: Option<u32>,

  /// Initial maximum shape size
  #[arg(long)]
  max_draw: Option<f32>,

  /// Shape size decay applied on each refill
  #[arg(long)]
  decay: Option<f32>,

  /// Initial canvas color as RRGGBB hex
  #[arg(long, value_parser = parse_hex_color)]
  background: Option<Rgb<u8>>,

  /// Random seed. Taken from the clock when omitted
  #[arg(long)]
  seed: Option<u64>,

  /// Stop after this many evaluated attempts
  #[arg(short = 'n', long)]
  iterations: Option<u64>,

  /// Stop after this many seconds
  #[arg(short, long, default_value_t = 30.0)]
  duration: f64,

  /// Log filter, overrides RUST_LOG
  #[arg(long)]
  log: Option<String>,

  /// Timestamp log records
  #[arg(long)]
  timestamps: bool,
}

impl Cli {
  fn engine_config(&self) -> EngineConfig {
    let mut config = self.preset
      .map(Preset::config)
      .unwrap_or_default();
    if !self.shapes.is_empty() {
      config.shapes.kinds = self.shapes.clone();
    }
    if let Some(color) = self.color { config.queue.color_strategy = color; }
    if let Some(size) = self.palette_size { config.queue.palette_size = size; }
    if let Some(prune) = self.prune { config.queue.prune_fraction = prune; }
    if let Some(fraction) = self.step_fraction { config.queue.sampling_step = SamplingStep::Proportional(fraction); }
    if let Some(step) = self.step { config.queue.sampling_step = SamplingStep::Fixed(step); }
    if let Some(max_draw) = self.max_draw { config.queue.initial_max_draw = max_draw; }
    if let Some(decay) = self.decay { config.queue.decay_factor = decay; }
    if let Some(background) = self.background { config.background = background; }
    config.seed = self.seed;
    config
  }
}

fn parse_hex_color(s: &str) -> Result<Rgb<u8>, String> {
  let s = s.trim_start_matches('#');
  let value = u32::from_str_radix(s, 16)
    .ok()
    .filter(|_| s.len() == 6)
    .ok_or_else(|| format!("`{s}` is not an RRGGBB color"))?;
  Ok(Rgb([(value >> 16) as u8, (value >> 8) as u8, value as u8]))
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(&LoggingConfig {
    filter: cli.log.clone(),
    timestamps: cli.timestamps
  });

  let config = cli.engine_config();
  let target = image_io::load_target(&cli.input)?;
  let mut controller = Controller::from_target(target, &config)?;
  controller.resume();

  let deadline = Instant::now() + Duration::from_secs_f64(cli.duration.max(0.0));
  let mut windows = 0;
  loop {
    if cli.iterations.map_or(false, |n| controller.counters().iterations >= n)
      || Instant::now() >= deadline {
      break;
    }
    if let Step::Refilled(queued) = controller.tick()? {
      log::debug!("queued {queued} candidates");
    }
    if controller.throughput().windows_completed() != windows {
      windows = controller.throughput().windows_completed();
      info!(
        "accepted per {:?}: {}, max size: {:.2}",
        controller.throughput().window(),
        controller.accepted_per_window(),
        controller.max_draw()
      );
    }
  }

  let counters = controller.counters();
  info!(
    "{} attempts, {} accepted, {} refills",
    counters.iterations, counters.accepted, counters.refills
  );
  image_io::save_canvas(&cli.output, controller.canvas())
    .with_context(|| format!("writing {:?}", cli.output))?;
  info!("wrote {:?}", cli.output);
  Ok(())
}
