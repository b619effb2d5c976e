//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Each bucket runs its own
//! random stream, so the assembled image does not depend on scheduling.

use crate::integrator::{render_pixel, RenderConfig};
use crate::{Camera, Color, Hittable};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering an image, in row-major order.
///
/// Edge buckets are clipped to the image bounds.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    buckets
}

/// Render a single bucket to a vector of colors.
///
/// The bucket's random stream is derived from the base seed and the
/// bucket index, so a fixed seed reproduces the same pixels no matter
/// which worker picks the bucket up.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(
    bucket: &Bucket,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(bucket.index as u64));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let color = render_pixel(
                camera,
                world,
                bucket.x + local_x,
                bucket.y + local_y,
                config,
                &mut rng,
            );
            pixels.push(color);
        }
    }

    pixels
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

impl BucketResult {
    /// Create a new bucket result.
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HittableList;

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid

        // Total pixels should equal image size
        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_partial_fit() {
        let buckets = generate_buckets(100, 100, 64);
        assert_eq!(buckets.len(), 4); // 2x2 grid with clipped edges

        let total_pixels: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total_pixels, 100 * 100);

        // Edge buckets are clipped, never dropped
        assert_eq!(buckets[3].width, 36);
        assert_eq!(buckets[3].height, 36);
    }

    #[test]
    fn test_generate_buckets_row_major() {
        let buckets = generate_buckets(192, 128, 64);
        assert_eq!(buckets.len(), 6); // 3x2 grid

        assert_eq!((buckets[0].x, buckets[0].y), (0, 0));
        assert_eq!((buckets[1].x, buckets[1].y), (64, 0));
        assert_eq!((buckets[3].x, buckets[3].y), (0, 64));
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.index, i);
        }
    }

    #[test]
    fn test_render_bucket_is_deterministic() {
        let world = HittableList::new();
        let camera = Camera::default();
        let config = RenderConfig {
            width: 32,
            height: 32,
            samples_per_pixel: 2,
            max_depth: 3,
            seed: 5,
        };

        let bucket = Bucket::new(0, 0, 8, 8, 0);
        let first = render_bucket(&bucket, &camera, &world, &config);
        let second = render_bucket(&bucket, &camera, &world, &config);

        assert_eq!(first.len(), 64);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_bucket_sky_only() {
        // With no objects every pixel lands somewhere on the gradient
        let world = HittableList::new();
        let camera = Camera::default();
        let config = RenderConfig {
            width: 16,
            height: 16,
            samples_per_pixel: 1,
            max_depth: 3,
            seed: 1,
        };

        let bucket = Bucket::new(0, 0, 16, 16, 0);
        for color in render_bucket(&bucket, &camera, &world, &config) {
            assert!(color.min_element() >= 0.5);
            assert!(color.max_element() <= 1.0);
            // Blue never dips below the other channels in the sky
            assert!(color.z >= color.x && color.z >= color.y);
        }
    }

    #[test]
    fn test_bucket_pixel_count() {
        assert_eq!(Bucket::new(0, 0, 64, 64, 0).pixel_count(), 4096);
        assert_eq!(Bucket::new(64, 0, 36, 64, 1).pixel_count(), 2304);
    }
}
