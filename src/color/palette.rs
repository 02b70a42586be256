use {
  super::abs_error,
  crate::error::{Error, Result},
  image::{Rgb, RgbImage},
  itertools::Itertools,
  rand::{seq::SliceRandom, Rng}
};

/// Upper bound on the number of pixels fed into the clustering.
const MAX_SAMPLES: usize = 4096;
const KMEANS_ITERATIONS: usize = 10;

/// A small fixed set of colors, extracted once from the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
  colors: Vec<Rgb<u8>>
}

impl Palette {
  pub fn from_colors(colors: Vec<Rgb<u8>>) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::InvalidConfig("palette must contain at least one color".into()));
    }
    Ok(Self { colors })
  }

  /// Quantize `image` down to at most `size` distinct colors.
  ///
  /// k-means with farthest-point seeding over an evenly strided subsample of the image.
  /// Deterministic for a given image.
  pub fn extract(image: &RgbImage, size: usize) -> Result<Self> {
    if size == 0 {
      return Err(Error::InvalidConfig("palette size must be non-zero".into()));
    }
    let pixel_count = image.width() as usize * image.height() as usize;
    let stride = ((pixel_count + MAX_SAMPLES - 1) / MAX_SAMPLES).max(1);
    let samples = image.pixels()
      .step_by(stride)
      .map(|p| p.0.map(f32::from))
      .collect::<Vec<_>>();
    if samples.is_empty() {
      return Err(Error::InvalidDimensions { width: image.width(), height: image.height() });
    }

    let mut centroids = Vec::with_capacity(size);
    centroids.push(samples[samples.len() / 2]);
    while centroids.len() < size {
      let (farthest, dist) = samples.iter()
        .map(|s| centroids.iter().map(|c| dist_sq(s, c)).fold(f32::MAX, f32::min))
        .enumerate()
        .fold((0, 0.0), |best, (i, d)| if d > best.1 { (i, d) } else { best });
      // every sample already coincides with a centroid
      if dist == 0.0 { break; }
      centroids.push(samples[farthest]);
    }

    let mut sums = vec![[0.0f32; 3]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];
    for _ in 0..KMEANS_ITERATIONS {
      sums.fill([0.0; 3]);
      counts.fill(0);
      for s in &samples {
        let i = nearest_index(s, &centroids);
        counts[i] += 1;
        (0..3).for_each(|c| sums[i][c] += s[c]);
      }
      centroids.iter_mut()
        .zip(sums.iter().zip(&counts))
        .filter(|(_, (_, &n))| n > 0)
        .for_each(|(centroid, (sum, &n))| *centroid = sum.map(|v| v / n as f32));
    }

    let colors = centroids.into_iter()
      .map(|c| Rgb(c.map(|v| v.round().clamp(0.0, 255.0) as u8)))
      .unique()
      .collect();
    Self::from_colors(colors)
  }

  pub fn colors(&self) -> &[Rgb<u8>] {
    &self.colors
  }

  pub fn len(&self) -> usize {
    self.colors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.colors.is_empty()
  }

  /// Closest palette entry under the color metric. Linear scan; ties go to the earlier entry.
  pub fn nearest(&self, color: &Rgb<u8>) -> Rgb<u8> {
    self.colors.iter()
      .min_by_key(|c| abs_error(*c, color))
      .copied()
      .unwrap_or(*color)
  }

  pub fn sample(&self, rng: &mut impl Rng) -> Rgb<u8> {
    self.colors.choose(rng)
      .copied()
      .unwrap_or(Rgb([0, 0, 0]))
  }
}

fn dist_sq(a: &[f32; 3], b: &[f32; 3]) -> f32 {
  (0..3).map(|i| (a[i] - b[i]).powi(2)).sum()
}

fn nearest_index(s: &[f32; 3], centroids: &[[f32; 3]]) -> usize {
  centroids.iter()
    .map(|c| dist_sq(s, c))
    .enumerate()
    .fold((0, f32::MAX), |best, (i, d)| if d < best.1 { (i, d) } else { best })
    .0
}
