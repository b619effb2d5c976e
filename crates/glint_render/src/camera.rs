//! Camera for ray generation.

use crate::{sampling, Ray};
use glint_math::Vec3;
use rand::RngCore;

/// Fixed output aspect ratio.
pub const ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Camera mapping normalized image-plane coordinates to world-space rays.
///
/// All derived state is computed once at construction; generating a ray
/// only reads it, so one camera can serve every render worker.
#[derive(Debug, Clone)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    // Orthonormal basis: u = right, v = up, w = back
    u: Vec3,
    v: Vec3,
    w: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Create a new camera.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `look_from` / `look_at` / `vup`: position and orientation
    /// - `aperture`: lens diameter; 0 disables depth of field
    /// - `focus_dist`: distance to the plane of perfect focus
    pub fn new(
        vfov: f32,
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        aperture: f32,
        focus_dist: f32,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = ASPECT_RATIO * viewport_height;

        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            w,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image-plane coordinates (s, t).
    ///
    /// s and t run over [0, 1], left-to-right and bottom-to-top. The ray
    /// origin is jittered across the lens disk while the focal-plane target
    /// stays fixed, which is what produces depth-of-field blur.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * sampling::random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }

    /// The camera position.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// The orthonormal camera basis (right, up, back).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.u, self.v, self.w)
    }
}

impl Default for Camera {
    /// A pinhole camera at the origin looking down -Z: unit focal length,
    /// zero aperture.
    fn default() -> Self {
        Self::new(90.0, Vec3::ZERO, Vec3::NEG_Z, Vec3::Y, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pinhole_center_ray() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);

        // Zero aperture: the origin never moves
        assert_eq!(ray.origin(), Vec3::ZERO);
        // The half-extents cancel exactly at the image center
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_pinhole_corner_ray() {
        let camera = Camera::default();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.0, 0.0, &mut rng);
        let dir = ray.direction();

        // Lower-left corner of a 16:9 viewport at unit focal length
        assert!((dir.x - (-ASPECT_RATIO)).abs() < 1e-3);
        assert!((dir.y - (-1.0)).abs() < 1e-3);
        assert_eq!(dir.z, -1.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(
            20.0,
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            0.1,
            10.0,
        );
        let (u, v, w) = camera.basis();

        assert!(u.dot(v).abs() < 1e-6);
        assert!(u.dot(w).abs() < 1e-6);
        assert!(v.dot(w).abs() < 1e-6);
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((w.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lens_jitter_keeps_focal_target_fixed() {
        let camera = Camera::new(
            20.0,
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::ZERO,
            Vec3::Y,
            2.0,
            10.0,
        );
        let mut rng = StdRng::seed_from_u64(9);

        // Wherever the origin lands on the lens, origin + direction is the
        // same focal-plane point
        let target = camera.lower_left_corner + 0.25 * camera.horizontal + 0.75 * camera.vertical;
        for _ in 0..50 {
            let ray = camera.get_ray(0.25, 0.75, &mut rng);
            assert!((ray.origin() + ray.direction() - target).length() < 1e-3);
            assert!((ray.origin() - camera.origin).length() <= camera.lens_radius + 1e-6);
        }
    }
}
