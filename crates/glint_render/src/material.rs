//! Material trait for surface scattering.

use crate::{hittable::HitRecord, sampling, Ray};
use glint_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// A scattered ray and the attenuation applied to its contribution.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// Trait for materials that describe how light interacts with surfaces.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns the scattered ray and its attenuation, or None if the ray
    /// is absorbed.
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult>;
}

/// Lambertian (diffuse) material.
#[derive(Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        _ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let mut scatter_direction = rec.normal + sampling::random_unit_vector(rng);

        // Catch degenerate scatter direction
        if near_zero(scatter_direction) {
            scatter_direction = rec.normal;
        }

        Some(ScatterResult {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, scatter_direction),
        })
    }
}

/// Metal (specular) material.
pub struct Metal {
    /// Surface color. Reflectance in this model is unmodulated by it.
    pub albedo: Color,
    /// Roughness in [0, 1]
    pub fuzz: f32,
}

impl Metal {
    /// Create a new Metal material.
    ///
    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self {
            albedo,
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let reflected = reflect(ray_in.direction().normalize(), rec.normal);
        let scattered_dir = reflected + self.fuzz * sampling::random_in_unit_sphere(rng);

        // Absorb the ray if fuzz pushed it below the surface
        if scattered_dir.dot(rec.normal) > 0.0 {
            Some(ScatterResult {
                attenuation: Color::ONE,
                scattered: Ray::new(rec.p, scattered_dir),
            })
        } else {
            None
        }
    }
}

/// Dielectric (glass) material.
pub struct Dielectric {
    /// Index of refraction
    ior: f32,
}

impl Dielectric {
    /// Create a new Dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord,
        _rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        let refraction_ratio = if rec.front_face {
            1.0 / self.ior
        } else {
            self.ior
        };

        let unit_direction = ray_in.direction().normalize();
        let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        // Past the critical angle refraction is geometrically impossible
        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract {
            reflect(unit_direction, rec.normal)
        } else {
            refract(unit_direction, rec.normal, refraction_ratio)
        };

        Some(ScatterResult {
            attenuation: Color::ONE,
            scattered: Ray::new(rec.p, direction),
        })
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface via Snell's law.
#[inline]
fn refract(uv: Vec3, n: Vec3, etai_over_etat: f32) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// True if the vector is near zero in all three components.
#[inline]
fn near_zero(v: Vec3) -> bool {
    const S: f32 = 1e-8;
    v.x.abs() < S && v.y.abs() < S && v.z.abs() < S
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A hit on the xz plane at the origin, normal up.
    fn floor_hit(material: &dyn Material, front_face: bool) -> HitRecord<'_> {
        HitRecord {
            p: Vec3::ZERO,
            normal: Vec3::Y,
            material,
            t: 1.0,
            front_face,
        }
    }

    #[test]
    fn test_lambertian_always_scatters_with_albedo() {
        let material = Lambertian::new(Color::new(0.8, 0.3, 0.1));
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = floor_hit(&material, true);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let scatter = material
                .scatter(&ray, &rec, &mut rng)
                .expect("diffuse never absorbs");
            assert_eq!(scatter.attenuation, Color::new(0.8, 0.3, 0.1));
            // Unit offset from the unit normal can never point below the surface
            assert!(scatter.scattered.direction().dot(rec.normal) >= 0.0);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let material = Metal::new(Color::new(0.7, 0.6, 0.5), 0.0);
        let ray = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let rec = floor_hit(&material, true);
        let mut rng = StdRng::seed_from_u64(12);

        let scatter = material
            .scatter(&ray, &rec, &mut rng)
            .expect("mirror reflection stays above the surface");

        // Angle of incidence equals angle of reflection
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((scatter.scattered.direction().normalize() - expected).length() < 1e-6);
        // Reflectance is white regardless of albedo
        assert_eq!(scatter.attenuation, Color::ONE);
    }

    #[test]
    fn test_metal_absorbs_below_surface() {
        let material = Metal::new(Color::ONE, 0.0);
        // Incoming from below: the mirror image lands under the surface
        let ray = Ray::new(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));
        let rec = floor_hit(&material, true);
        let mut rng = StdRng::seed_from_u64(13);

        assert!(material.scatter(&ray, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_metal_fuzz_clamped() {
        let material = Metal::new(Color::ONE, 5.0);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = floor_hit(&material, true);
        let mut rng = StdRng::seed_from_u64(14);

        // Straight-down incidence reflects straight up; with fuzz clamped to
        // one the perturbed ray cannot leave the upper hemisphere
        for _ in 0..100 {
            let scatter = material
                .scatter(&ray, &rec, &mut rng)
                .expect("perturbation is strictly shorter than the reflection");
            assert!(scatter.scattered.direction().y > 0.0);
        }
    }

    #[test]
    fn test_dielectric_refracts_head_on() {
        let material = Dielectric::new(1.5);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let rec = floor_hit(&material, true);
        let mut rng = StdRng::seed_from_u64(15);

        let scatter = material
            .scatter(&ray, &rec, &mut rng)
            .expect("dielectric always scatters");

        // Normal incidence passes straight through
        assert!((scatter.scattered.direction() - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);
        assert_eq!(scatter.attenuation, Color::ONE);
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Dielectric::new(1.5);
        // Exiting the medium at grazing incidence: sin(theta) > 1/1.5
        let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.0), Vec3::new(1.0, -0.5, 0.0));
        let rec = floor_hit(&material, false);
        let mut rng = StdRng::seed_from_u64(16);

        let scatter = material
            .scatter(&ray, &rec, &mut rng)
            .expect("reflection, not absorption");

        // The ray must reflect: outgoing y flips sign, x is preserved
        let dir = scatter.scattered.direction();
        let expected = reflect(ray.direction().normalize(), rec.normal);
        assert!((dir - expected).length() < 1e-6);
        assert!(dir.y > 0.0);
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::splat(1e-9)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-9, 1e-7)));
        assert!(!near_zero(Vec3::Y));
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::Y;
        assert_eq!(reflect(v, n), Vec3::new(1.0, 1.0, 0.0));
    }
}
