use {
  super::*,
  crate::{
    geometry::{Circle, Shape},
    solver::{CandidatePoint, ShapeGenerator, ShapeKind, ShapeSpec},
    config::ShapeConfig
  },
  euclid::Vector2D as V2,
  image::Rgb,
  rand::SeedableRng
};

const SENTINEL: Rgb<u8> = Rgb([1, 2, 3]);
const INK: Rgb<u8> = Rgb([250, 100, 0]);

fn shapes_near(width: u32, height: u32, n: usize) -> Vec<ShapeSpec> {
  let generator = ShapeGenerator::new(ShapeConfig {
    kinds: vec![ShapeKind::Ellipse, ShapeKind::Line, ShapeKind::Curve],
    ..Default::default()
  });
  let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
  (0..n).map(|i| {
    // walk the candidates along the edges and corners as well as the interior
    let candidate = CandidatePoint {
      point: [(i as u32 * 7) % width, (i as u32 * 3) % height].into(),
      color: INK,
      priority: 0.0
    };
    generator.generate(&candidate, 12.0, &mut rng)
  }).collect()
}

#[test] fn texture_fill() {
  let mut image = RgbImage::from_pixel(32, 32, SENTINEL);
  Circle
    .scale(V2::splat(8.0f32))
    .translate(V2::splat(16.0f32))
    .texture(INK)
    .draw(&mut image);
  assert_eq!(*image.get_pixel(16, 16), INK);
  assert_eq!(*image.get_pixel(0, 0), SENTINEL);
  assert_eq!(*image.get_pixel(31, 16), SENTINEL);
}

#[test] fn texture_off_canvas() {
  let mut image = RgbImage::from_pixel(8, 8, SENTINEL);
  Circle
    .scale(V2::splat(2.0f32))
    .translate(V2::splat(-20.0f32))
    .texture(INK)
    .draw(&mut image);
  assert!(image.pixels().all(|p| *p == SENTINEL));
}

#[test] fn eccentric_ellipse_edge() {
  let shape = ShapeSpec::new(
    ShapeKind::Ellipse,
    Point2D::new(15.5, 15.5),
    Size2D::new(20.6, 2.0),
    euclid::Angle::zero(),
    0.0,
    INK,
    0.0
  );
  assert!(shape.bounds.contains(Point2D::new(26, 15)));
  let mut image = RgbImage::from_pixel(32, 32, SENTINEL);
  shape.draw(&mut image);
  // 0.3 inside the tip of the major axis, then 0.7 outside it
  assert_ne!(*image.get_pixel(25, 15), SENTINEL);
  assert_eq!(*image.get_pixel(26, 15), SENTINEL);
  assert_eq!(*image.get_pixel(15, 15), INK);
}

#[test] fn paints_only_inside_bounds() {
  let (width, height) = (24, 16);
  shapes_near(width, height, 200).into_iter().for_each(|shape| {
    let mut image = RgbImage::from_pixel(width, height, SENTINEL);
    shape.draw(&mut image);
    image.enumerate_pixels()
      .filter(|(_, _, p)| **p != SENTINEL)
      .for_each(|(x, y, _)| assert!(
        shape.bounds.contains(Point2D::new(x as i32, y as i32)),
        "({x}, {y}) painted outside {:?} by {:?}", shape.bounds, shape
      ));
  });
}

#[test] fn patch_matches_full_canvas() {
  let (width, height) = (24, 16);
  let canvas = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8 * 10, y as u8 * 15, 40]));
  shapes_near(width, height, 100).into_iter().for_each(|shape| {
    let mut full = canvas.clone();
    shape.draw(&mut full);

    let mut patch = match Patch::capture_clamped(&canvas, shape.bounds) {
      Some(x) => x,
      None => panic!("shape centered on the canvas has no region: {shape:?}")
    };
    shape.draw(&mut patch);
    let mut committed = canvas.clone();
    patch.commit(&mut committed);

    assert_eq!(committed, full, "{shape:?}");
  });
}

#[test] fn patch_capture_clamped() {
  let canvas = RgbImage::from_fn(10, 6, |x, y| Rgb([x as u8, y as u8, 0]));
  let patch = Patch::capture_clamped(&canvas, Box2D::new([-3, 2].into(), [4, 40].into()))
    .unwrap();
  assert_eq!(patch.region(), Box2D::new([0, 2].into(), [4, 6].into()));
  assert_eq!(patch.pixel(3, 5), Rgb([3, 5, 0]));

  assert!(Patch::capture_clamped(&canvas, Box2D::new([10, 0].into(), [12, 3].into())).is_none());
}

#[test] fn patch_is_isolated() {
  let canvas = RgbImage::from_pixel(10, 10, SENTINEL);
  let mut patch = Patch::capture(&canvas, Box2D::new([2, 2].into(), [8, 8].into()));
  *patch.pixel_mut(4, 4) = INK;
  assert_eq!(*canvas.get_pixel(4, 4), SENTINEL);
  assert_eq!(patch.pixel(4, 4), INK);
}
