use {
  super::*,
  euclid::Box2D
};

fn near(a: f32, b: f32) -> bool {
  (a - b).abs() < 1e-4
}

#[test] fn pixel_bounds_round_out() {
  let bounds = Box2D::new(P2::new(2.3, 4.7), P2::new(5.2, 6.0));
  assert_eq!(pixel_bounds(bounds), PixelBox::new([1, 4].into(), [6, 7].into()));
}

#[test] fn pixel_bounds_saturate() {
  let huge = Box2D::new(P2::new(-1e12, 0.0), P2::new(f32::INFINITY, 4.0));
  let bounds = pixel_bounds(huge);
  assert_eq!(bounds.min.x, -1_000_000_000);
  assert_eq!(bounds.max.x, 1_000_000_000);
  assert_eq!(
    clamp_to_canvas(bounds, Size2D::new(8, 8)).map(|b| (b.min.x, b.max.x)),
    Some((0, 8))
  );

  let nan = pixel_bounds(Box2D::new(P2::new(f32::NAN, 0.0), P2::new(2.0, f32::NAN)));
  assert_eq!(clamp_to_canvas(nan, Size2D::new(8, 8)), None);
}

#[test] fn clamp() {
  let size = Size2D::new(4, 10);
  assert_eq!(
    clamp_to_canvas(PixelBox::new([-3, -2].into(), [5, 20].into()), size),
    Some(Box2D::new([0, 0].into(), [4, 10].into()))
  );
  assert_eq!(clamp_to_canvas(PixelBox::new([4, 0].into(), [9, 3].into()), size), None);
}

#[test] fn ellipse() {
  let ellipse = Circle
    .scale(V2::new(4.0f32, 2.0))
    .translate(V2::new(10.0f32, 10.0));
  assert!(ellipse.sdf(P2::new(10.0, 10.0)) < 0.0);
  assert!(ellipse.sdf(P2::new(13.5, 10.0)) < 0.0);
  assert!(ellipse.sdf(P2::new(14.5, 10.0)) > 0.0);
  assert!(ellipse.sdf(P2::new(10.0, 12.5)) > 0.0);
  assert_eq!(
    ellipse.bounding_box(),
    Box2D::new(P2::new(6.0, 8.0), P2::new(14.0, 12.0))
  );
}

#[test] fn eccentric_ellipse() {
  let ellipse = Ellipse { radii: V2::new(10.0, 1.0) };
  assert!(near(ellipse.sdf(P2::new(10.6, 0.0)), 0.6));
  assert!(near(ellipse.sdf(P2::new(0.0, 1.6)), 0.6));
  assert!(near(ellipse.sdf(P2::new(5.0, 0.0)), -5.0));
  assert!(near(ellipse.sdf(P2::new(0.0, 0.0)), -1.0));
  // the scaled circle underestimates along the major axis
  let scaled = Circle.scale(V2::new(10.0f32, 1.0));
  assert!(scaled.sdf(P2::new(10.6, 0.0)) < 0.1);
  assert_eq!(
    ellipse.bounding_box(),
    Box2D::new(P2::new(-10.0, -1.0), P2::new(10.0, 1.0))
  );
}

#[test] fn rotated_segment() {
  let segment = Segment { from: P2::new(-5.0, 0.0), to: P2::new(5.0, 0.0) }
    .rotate(Angle::degrees(90.0f32));
  assert!(near(segment.sdf(P2::new(0.0, 5.0)), 0.0));
  assert!(near(segment.sdf(P2::new(0.0, -2.0)), 0.0));
  assert!(near(segment.sdf(P2::new(5.0, 0.0)), 5.0));

  let bounds = segment.bounding_box();
  assert!(near(bounds.min.y, -5.0) && near(bounds.max.y, 5.0));
  assert!(near(bounds.min.x, 0.0) && near(bounds.max.x, 0.0));
}

#[test] fn stroke() {
  let line = Segment { from: P2::new(0.0, 0.0), to: P2::new(10.0, 0.0) }
    .stroke(4.0f32);
  assert!(near(line.sdf(P2::new(5.0, 0.0)), -2.0));
  assert!(near(line.sdf(P2::new(5.0, 3.0)), 1.0));
  assert_eq!(line.bounding_box(), Box2D::new(P2::new(-2.0, -2.0), P2::new(12.0, 2.0)));
}

#[test] fn curve() {
  let curve = QuadCurve {
    from: P2::new(-4.0, 2.0),
    ctrl: P2::new(0.0, -2.0),
    to: P2::new(4.0, 2.0)
  };
  assert!(near(curve.sdf(curve.from), 0.0));
  assert!(near(curve.sdf(curve.to), 0.0));
  // apex of the parabola is halfway to the control point
  assert!(near(curve.sdf(P2::new(0.0, 0.0)), 0.0));
  assert!(curve.sdf(P2::new(0.0, -2.0)) > 1.0);
  assert_eq!(curve.bounding_box(), Box2D::new(P2::new(-4.0, -2.0), P2::new(4.0, 2.0)));
}
