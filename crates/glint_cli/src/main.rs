use anyhow::{Context, Result};
use clap::Parser;
use glint_math::Vec3;
use glint_render::{random_scene, render, simple_scene, Camera, RenderConfig};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod cli;
mod logger;

use cli::{Args, ScenePreset};
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("glint {}", env!("CARGO_PKG_VERSION"));
    info!(
        "image {}x{}, {} samples per pixel, depth {}",
        args.width, args.height, args.samples_per_pixel, args.max_depth
    );

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed {}", seed);

    let world = match args.scene {
        ScenePreset::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_scene(&mut rng)
        }
        ScenePreset::Simple => simple_scene(),
    };
    info!("scene contains {} objects", world.len());

    // The book-cover shot: long lens, slight defocus, focused on the origin
    let camera = Camera::new(
        20.0,
        Vec3::new(13.0, 2.0, 3.0),
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
        0.1,
        10.0,
    );

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        seed,
    };

    let image = render(&camera, &world, &config);

    image
        .save_png(&args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    info!("saved {}", args.output);

    Ok(())
}
