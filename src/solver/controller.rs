use {
  super::{evaluate, CoordinateQueue, Counters, ShapeGenerator, Throughput},
  crate::{
    config::EngineConfig,
    drawing::{Draw, Patch},
    error::{Error, Result}
  },
  humansize::{file_size_opts, FileSize},
  image::RgbImage,
  log::info,
  rand::SeedableRng,
  rand_pcg::Pcg64,
  std::time::{Instant, SystemTime, UNIX_EPOCH}
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
  Paused,
  Running
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Paused,
  /// The queue was empty and has been refilled with this many candidates.
  Refilled(usize),
  Accepted,
  Rejected
}

/// All state the engine mutates: the accumulator, the queue with its decay parameter,
/// and the counters. The target is held alongside and never modified.
#[derive(Debug, Clone)]
pub struct Approximation {
  target: RgbImage,
  accumulator: RgbImage,
  queue: CoordinateQueue,
  counters: Counters
}

impl Approximation {
  /// Start from a blank accumulator filled with `config.background`.
  pub fn new(target: RgbImage, config: &EngineConfig) -> Result<Self> {
    let (width, height) = target.dimensions();
    let accumulator = RgbImage::from_pixel(width, height, config.background);
    Self::with_accumulator(target, accumulator, config)
  }

  /// Resume from an existing accumulator of the target's size.
  pub fn with_accumulator(target: RgbImage, accumulator: RgbImage, config: &EngineConfig) -> Result<Self> {
    let (width, height) = target.dimensions();
    if width == 0 || height == 0 {
      return Err(Error::InvalidDimensions { width, height });
    }
    if accumulator.dimensions() != target.dimensions() {
      let (width, height) = accumulator.dimensions();
      return Err(Error::InvalidDimensions { width, height });
    }
    config.validate()?;

    info!(
      "canvas {}x{}, accumulator {}",
      width, height,
      accumulator.as_raw().len()
        .file_size(file_size_opts::CONVENTIONAL)
        .unwrap_or_default()
    );
    Ok(Self {
      queue: CoordinateQueue::new(config.queue.clone(), &target)?,
      target,
      accumulator,
      counters: Counters::default()
    })
  }

  pub fn target(&self) -> &RgbImage {
    &self.target
  }

  pub fn accumulator(&self) -> &RgbImage {
    &self.accumulator
  }

  pub fn queue(&self) -> &CoordinateQueue {
    &self.queue
  }

  pub fn counters(&self) -> Counters {
    self.counters
  }

  pub fn into_accumulator(self) -> RgbImage {
    self.accumulator
  }
}

/// Drives the engine one iteration per tick. Starts paused.
#[derive(Debug, Clone)]
pub struct Controller {
  state: Approximation,
  generator: ShapeGenerator,
  rng: Pcg64,
  run_state: RunState,
  throughput: Throughput
}

impl Controller {
  pub fn new(state: Approximation, config: &EngineConfig) -> Result<Self> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(wall_clock_seed);
    info!("seed {seed}");
    Ok(Self {
      state,
      generator: ShapeGenerator::new(config.shapes.clone()),
      rng: Pcg64::seed_from_u64(seed),
      run_state: RunState::Paused,
      throughput: Throughput::new(config.throughput_window)
    })
  }

  pub fn from_target(target: RgbImage, config: &EngineConfig) -> Result<Self> {
    Self::new(Approximation::new(target, config)?, config)
  }

  pub fn run_state(&self) -> RunState {
    self.run_state
  }

  pub fn pause(&mut self) {
    self.run_state = RunState::Paused;
  }

  pub fn resume(&mut self) {
    self.run_state = RunState::Running;
  }

  pub fn toggle(&mut self) -> RunState {
    self.run_state = match self.run_state {
      RunState::Paused => RunState::Running,
      RunState::Running => RunState::Paused
    };
    self.run_state
  }

  pub fn tick(&mut self) -> Result<Step> {
    self.tick_at(Instant::now())
  }

  /// Like [`tick`](Self::tick), with the throughput clock supplied by the caller.
  pub fn tick_at(&mut self, now: Instant) -> Result<Step> {
    let step = match self.run_state {
      RunState::Paused => Step::Paused,
      RunState::Running => self.iterate()?
    };
    self.throughput.roll(now);
    Ok(step)
  }

  fn iterate(&mut self) -> Result<Step> {
    let Approximation { target, accumulator, queue, counters } = &mut self.state;
    let target: &RgbImage = target;

    let candidate = match queue.dequeue() {
      Some(x) => x,
      None => {
        let queued = queue.refill(target, &*accumulator, &mut self.rng)?;
        counters.refills += 1;
        return Ok(Step::Refilled(queued));
      }
    };
    counters.iterations += 1;

    let shape = self.generator.generate(&candidate, queue.max_draw(), &mut self.rng);
    let mut attempt = match Patch::capture_clamped(&*accumulator, shape.bounds) {
      Some(x) => x,
      None => return Ok(Step::Rejected)
    };
    shape.draw(&mut attempt);

    if evaluate(target, &*accumulator, &attempt, shape.bounds).accepts() {
      attempt.commit(accumulator);
      counters.accepted += 1;
      self.throughput.record();
      Ok(Step::Accepted)
    } else {
      Ok(Step::Rejected)
    }
  }

  /// The accumulator, for presentation.
  pub fn canvas(&self) -> &RgbImage {
    self.state.accumulator()
  }

  pub fn approximation(&self) -> &Approximation {
    &self.state
  }

  pub fn into_approximation(self) -> Approximation {
    self.state
  }

  /// Accepted iterations in the last closed throughput window.
  pub fn accepted_per_window(&self) -> u32 {
    self.throughput.per_window()
  }

  pub fn throughput(&self) -> &Throughput {
    &self.throughput
  }

  pub fn max_draw(&self) -> f32 {
    self.state.queue.max_draw()
  }

  pub fn counters(&self) -> Counters {
    self.state.counters
  }
}

fn wall_clock_seed() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_nanos() as u64)
    .unwrap_or_default()
}
