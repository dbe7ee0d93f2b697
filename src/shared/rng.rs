//! Per-thread pseudo-random source.
//!
//! One [`Randomness`] is constructed per row task per iteration, seeded from
//! the camera's master RNG. [`rand_pcg::Pcg32`] gives a long enough period
//! and is cheap enough to construct fresh for every row.

use crate::core::types::{Number, Vector2};
use crate::shared::validate;
use rand::Rng;
use rand_core::SeedableRng;
use rand_pcg::Pcg32;

pub struct Randomness {
    rng: Pcg32,
}

impl Randomness {
    pub fn new(seed: u32) -> Self {
        Self { rng: Pcg32::seed_from_u64(seed as u64) }
    }

    pub fn next_unsigned(&mut self) -> u32 {
        self.rng.gen()
    }

    /// A float in `[0, 1)`.
    pub fn next_unit_float(&mut self) -> Number {
        let n = self.rng.gen_range(0.0..1.0);
        validate::number(n);
        n
    }

    /// A float in `[lo, hi)`.
    pub fn next_float(&mut self, lo: Number, hi: Number) -> Number {
        let n = self.rng.gen_range(lo..hi);
        validate::number(n);
        n
    }

    /// A point uniformly distributed on the unit disk, via Shirley's
    /// concentric-map warp (avoids the rejection loop's unbounded worst case).
    pub fn area_sample_disk(&mut self) -> Vector2 {
        let a = self.next_float(-1.0, 1.0);
        let b = self.next_float(-1.0, 1.0);
        if a == 0.0 && b == 0.0 {
            return Vector2::ZERO;
        }

        let (r, theta) = if a.abs() > b.abs() {
            (a, std::f32::consts::FRAC_PI_4 * (b / a))
        } else {
            (b, std::f32::consts::FRAC_PI_2 - std::f32::consts::FRAC_PI_4 * (a / b))
        };

        let v = Vector2::new(r * theta.cos(), r * theta.sin());
        validate::vector2(v);
        v
    }

    /// A direction cosine-weighted around `normal`, used by diffuse
    /// scattering implementations.
    pub fn cosine_sample_hemisphere(&mut self, normal: crate::core::types::Vector3) -> crate::core::types::Vector3 {
        use crate::core::types::Vector3;

        let d = self.area_sample_disk();
        let z = (1.0 - d.x * d.x - d.y * d.y).max(0.0).sqrt();
        let (tangent, bitangent) = orthonormal_basis(normal);
        let v = tangent * d.x + bitangent * d.y + normal * z;
        let v = v.normalize();
        validate::normal3(v);
        v
    }

    /// A direction uniformly distributed on the unit sphere.
    pub fn uniform_sample_sphere(&mut self) -> crate::core::types::Vector3 {
        use crate::core::types::Vector3;

        let z = self.next_float(-1.0, 1.0);
        let phi = self.next_float(0.0, std::f32::consts::TAU);
        let r = (1.0 - z * z).max(0.0).sqrt();
        let v = Vector3::new(r * phi.cos(), r * phi.sin(), z);
        validate::normal3(v);
        v
    }
}

fn orthonormal_basis(n: crate::core::types::Vector3) -> (crate::core::types::Vector3, crate::core::types::Vector3) {
    use crate::core::types::Vector3;

    let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;
    let tangent = Vector3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
    let bitangent = Vector3::new(b, sign + n.y * n.y * a, -n.y);
    (tangent, bitangent)
}
