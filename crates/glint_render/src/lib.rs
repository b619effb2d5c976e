//! Glint - CPU ray tracing
//!
//! A stochastic recursive ray tracer: camera rays scatter off diffuse,
//! metallic, and dielectric spheres, multiplying attenuation at every
//! bounce until absorption, depth exhaustion, or escape to the sky.

mod ray;
mod hittable;
mod material;
mod sphere;
mod camera;
mod sampling;
mod integrator;
mod bucket;
mod scene;

pub use ray::Ray;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use sphere::Sphere;
pub use camera::{Camera, ASPECT_RATIO};
pub use sampling::{
    gen_f32, gen_range_f32, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
    random_vec3, random_vec3_range,
};
pub use integrator::{
    color_to_rgba, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, OutputError,
    RenderConfig,
};
pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use scene::{random_scene, simple_scene};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Vec3};
