//! The approximation engine.
//!
//! One [`Controller::tick`] runs one iteration of
//! dequeue → [generate](ShapeGenerator) → draw onto a [`Patch`](crate::drawing::Patch)
//! → [evaluate] → commit or discard. When the [`CoordinateQueue`] runs dry the tick
//! refills it instead, shrinking the size-decay parameter `max_draw`.

pub mod queue;
pub use queue::CoordinateQueue;

pub mod generator;
pub use generator::{ShapeGenerator, ShapeKind, ShapeSpec};

pub mod evaluator;
pub use evaluator::{evaluate, Score};

pub mod controller;
pub use controller::{Approximation, Controller, RunState, Step};

mod metrics;
pub use metrics::{Counters, Throughput};


use {
  crate::geometry::PixelSpace,
  euclid::Point2D,
  image::Rgb
};

/// A queued location to try a shape at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidatePoint {
  pub point: Point2D<u32, PixelSpace>,
  /// Color of the shape later drawn at `point`.
  pub color: Rgb<u8>,
  /// Color distance between target and accumulator at `point`, as of the refill that
  /// queued it. Not refreshed while the queue drains.
  pub priority: f32
}
