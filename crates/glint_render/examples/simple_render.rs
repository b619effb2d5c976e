//! Minimal renderer example.
//!
//! Renders the fixed three-sphere scene and saves a PNG.

use glint_math::Vec3;
use glint_render::{render, simple_scene, Camera, RenderConfig};

fn main() {
    let world = simple_scene();

    let camera = Camera::new(
        20.0,
        Vec3::new(13.0, 2.0, 3.0), // look_from
        Vec3::ZERO,                // look_at
        Vec3::Y,                   // vup
        0.1,
        10.0,
    );

    let config = RenderConfig {
        width: 400,
        height: 225,
        samples_per_pixel: 25,
        max_depth: 10,
        seed: 42,
    };

    println!(
        "Rendering {}x{} @ {} spp...",
        config.width, config.height, config.samples_per_pixel
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &world, &config);
    println!("Rendered in {:?}", start.elapsed());

    image
        .save_png("simple_render.png")
        .expect("Failed to save image");
    println!("Saved to simple_render.png");
}
