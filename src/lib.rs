//! Approximate a raster image by annealed random shape overlays.
//!
//! The engine keeps an accumulator canvas and repeatedly tries to improve it. Each try
//! draws one randomly sized shape of a promising color at a promising location. The
//! shape stays only if it reduces the color error against the target inside its own
//! bounding box. Locations come from a [`CoordinateQueue`](solver::CoordinateQueue) of
//! the worst-approximated grid points. Every time the queue runs dry the maximum shape
//! size decays, so the picture is built from coarse blobs down to fine detail.
//!
//! It is split into the [`solver`] module, which drives the loop, and [`drawing`] with
//! [`geometry`], which rasterize the shapes.
//!
//! # Basic usage
//! ```no_run
//! # use shape_anneal::{
//! #   config::EngineConfig,
//! #   error::Result,
//! #   image_io,
//! #   solver::{Controller, Step}
//! # };
//! # fn main() -> Result<()> {
//! let target = image_io::load_target("target.jpg")?;
//! let config = EngineConfig {
//!   seed: Some(0),
//!   ..Default::default()
//! };
//!
//! // the controller starts paused
//! let mut controller = Controller::from_target(target, &config)?;
//! controller.resume();
//!
//! for _ in 0..100_000 {
//!   if let Step::Refilled(n) = controller.tick()? {
//!     println!("{} candidates, max size {}", n, controller.max_draw());
//!   }
//! }
//! image_io::save_canvas("out.png", controller.canvas())?;
//! #   Ok(())
//! # }
//! ```
//!
//! Drawing works on anything implementing [`Canvas`](drawing::Canvas). That covers a
//! full `RgbImage` as well as a [`Patch`](drawing::Patch), the bounding-box-sized scratch
//! copy the controller uses for attempts:
//! ```
//! # use {
//! #   shape_anneal::{
//! #     drawing::Draw,
//! #     geometry::{Circle, Shape},
//! #   },
//! #   euclid::Vector2D as V2,
//! #   image::{Rgb, RgbImage}
//! # };
//! let mut image = RgbImage::new(64, 64);
//! Circle
//!   .scale(V2::splat(16.0f32))
//!   .translate(V2::splat(32.0f32))
//!   .texture(Rgb([255u8, 255, 255]))
//!   .draw(&mut image);
//! assert_eq!(image.get_pixel(32, 32), &Rgb([255, 255, 255]));
//! ```

pub mod error;
pub mod config;
pub mod color;
pub mod sdf;
pub mod geometry;
pub mod drawing;
pub mod solver;
pub mod image_io;
pub mod logging;
