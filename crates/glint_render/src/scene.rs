//! Scene construction.
//!
//! Builders for the scenes the renderer ships with. Materials are shared
//! across primitives through Arc, never copied per sphere.

use crate::sampling::{gen_f32, gen_range_f32, random_vec3, random_vec3_range};
use crate::{Color, Dielectric, HittableList, Lambertian, Material, Metal, Sphere};
use glint_math::Vec3;
use rand::RngCore;
use std::sync::Arc;

/// The random-spheres showcase scene: a grey ground sphere, a jittered
/// 22x22 field of small diffuse/metal/glass spheres, and three large
/// feature spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    // One glass material shared by every glass sphere
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep clear of the metal feature sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_vec3(rng) * random_vec3(rng);
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Lambertian::new(albedo)),
                )));
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec3_range(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                world.add(Box::new(Sphere::new(
                    center,
                    0.2,
                    Arc::new(Metal::new(albedo, fuzz)),
                )));
            } else {
                // Glass
                world.add(Box::new(Sphere::new(center, 0.2, glass.clone())));
            }
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        glass.clone(),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    world
}

/// A small fixed scene: the ground plus the three feature spheres.
///
/// Cheap enough for quick renders and deterministic tests.
pub fn simple_scene() -> HittableList {
    let mut world = HittableList::new();

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_simple_scene_object_count() {
        assert_eq!(simple_scene().len(), 4);
    }

    #[test]
    fn test_random_scene_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = random_scene(&mut rng);

        // Ground, three feature spheres, and at most 22x22 small ones
        assert!(world.len() >= 4);
        assert!(world.len() <= 4 + 22 * 22);
    }

    #[test]
    fn test_random_scene_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(random_scene(&mut a).len(), random_scene(&mut b).len());
    }
}
