use {
  crate::{
    drawing::{Canvas, Draw, Texture, paint_region},
    geometry::{pixel_center, Shape}
  },
  image::{Pixel, Rgb}
};

/// Solid fill, antialiased over a one pixel wide edge.
impl <Cutie, C> Draw<C> for Texture<Cutie, Rgb<u8>>
  where Cutie: Shape,
        C: Canvas
{
  fn draw(&self, image: &mut C) {
    let region = match paint_region(self.shape.bounding_box(), image) {
      Some(x) => x,
      None => return // bounding box has no intersection with the buffer at all
    };

    itertools::iproduct!(region.y_range(), region.x_range())
      .for_each(|(y, x)| {
        let coverage = sdf_coverage(self.shape.sdf(pixel_center(x, y)));
        if coverage > 0.0 {
          let pixel = image.pixel_mut(x, y);
          *pixel = blend(*pixel, self.texture, coverage);
        }
      });
  }
}

/// Fraction of a pixel covered by the shape, from the distance at the pixel center.
fn sdf_coverage(sdf: f32) -> f32 {
  (0.5 - sdf).clamp(0.0, 1.0)
}

fn blend(under: Rgb<u8>, over: Rgb<u8>, alpha: f32) -> Rgb<u8> {
  under.map2(&over, |a, b| {
    let (a, b) = (a as f32, b as f32);
    (a + (b - a) * alpha).round() as u8
  })
}
