//! Recursive color integration and the render driver.
//!
//! The integrator walks ray → hit → scatter → recursive ray, multiplying
//! attenuation at every bounce until absorption, depth exhaustion, or
//! escape to the sky background. The driver fans buckets out across rayon
//! workers and assembles the final image buffer.

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::sampling::gen_f32;
use crate::{Camera, Color, Hittable, Ray};
use glint_math::Interval;
use log::{debug, info};
use rand::RngCore;
use rayon::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Lower search bound suppressing self-intersection ("shadow acne").
const T_MIN: f32 = 1e-4;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image width in pixels
    pub width: u32,
    /// Output image height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-bucket random streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 450,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// This is the core integration function. Each scattering event spawns
/// exactly one recursive ray, so stack depth is bounded by `depth`.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, depth: u32, rng: &mut dyn RngCore) -> Color {
    // Bounce limit reached: no light gathered
    if depth == 0 {
        return Color::ZERO;
    }

    match world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) {
        Some(rec) => match rec.material.scatter(ray, &rec, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.scattered, world, depth - 1, rng)
            }
            // Absorbed
            None => Color::ZERO,
        },
        None => sky_gradient(ray),
    }
}

/// Background: vertical gradient from white at the horizon to sky blue
/// straight up.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * white + t * blue
}

/// Render a single pixel with multi-sampling.
///
/// Averages jittered samples in linear space; gamma is applied later at
/// byte conversion.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) / (config.width - 1) as f32;
        // Image rows run top-down, t runs bottom-up
        let t = ((config.height - 1 - y) as f32 + gen_f32(rng)) / (config.height - 1) as f32;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGBA.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * linear_to_gamma(color.x).clamp(0.0, 0.999)) as u8;
    let g = (255.0 * linear_to_gamma(color.y).clamp(0.0, 0.999)) as u8;
    let b = (255.0 * linear_to_gamma(color.z).clamp(0.0, 0.999)) as u8;
    [r, g, b, 255]
}

/// Error writing a rendered image to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Simple image buffer for storing render output in linear color.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to gamma-corrected RGBA bytes.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the buffer as an 8-bit RGBA PNG.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let mut img = image::RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgba(color_to_rgba(self.get(x, y)));
        }
        img.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are rendered in parallel; each bucket runs its own random
/// stream derived from `config.seed`, so a fixed seed reproduces the
/// image byte-for-byte regardless of scheduling.
pub fn render(camera: &Camera, world: &dyn Hittable, config: &RenderConfig) -> ImageBuffer {
    let start = std::time::Instant::now();

    let buckets = generate_buckets(config.width, config.height, DEFAULT_BUCKET_SIZE);
    debug!(
        "generated {} buckets of up to {}px",
        buckets.len(),
        DEFAULT_BUCKET_SIZE
    );
    info!(
        "rendering {}x{} at {} spp, depth {}",
        config.width, config.height, config.samples_per_pixel, config.max_depth
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, world, config)))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let idx = (local_y * bucket.width + local_x) as usize;
                image.set(
                    bucket.x + local_x,
                    bucket.y + local_y,
                    result.pixels[idx],
                );
            }
        }
    }

    info!("render finished in {:.2?}", start.elapsed());
    image
}
