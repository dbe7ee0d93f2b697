//! The path-tracing integrator: Russian-roulette termination, emission
//! accounting, and next-event estimation (uniform one-light sampling).

use crate::capability::{Accelerator, Geom, Material};
use crate::core::targets;
use crate::core::Colour;
use crate::shared::rng::Randomness;
use crate::shared::LightRay;

/// Depth at which Russian roulette starts being considered.
pub const RR_DEPTH_1: u32 = 3;
/// Depth at which Russian roulette becomes more aggressive (lower survival
/// probability ceiling), for paths that have bounced many times.
pub const RR_DEPTH_2: u32 = 5;
/// Hard upper bound on the radiance returned by [`RadianceEstimator::trace`].
/// Introduces bias in exchange for bounding fireflies from near-singular
/// BSDF/PDF ratios.
pub const BIASED_RADIANCE_CLAMPING: f32 = 10.0;

/// Ties an [`Accelerator`] to the scene's cached emitter list, and exposes
/// the bounce-loop integrator that consumes both.
pub struct RadianceEstimator<'scene> {
    accel: &'scene dyn Accelerator,
    emitters: &'scene [&'scene dyn Geom],
}

impl<'scene> RadianceEstimator<'scene> {
    pub fn new(accel: &'scene dyn Accelerator, emitters: &'scene [&'scene dyn Geom]) -> Self {
        Self { accel, emitters }
    }

    /// Estimates the radiance arriving along `r`, by an unbounded random walk
    /// terminated by Russian roulette. The result is clamped to
    /// `[0, BIASED_RADIANCE_CLAMPING]` per channel.
    pub fn trace(&self, mut r: LightRay, rng: &mut Randomness) -> Colour {
        puffin::profile_function!();

        let mut l = Colour::BLACK;
        let mut did_direct_illuminate = false;

        for depth in 0.. {
            if depth >= RR_DEPTH_1 || r.is_black() {
                let rv = rng.next_unit_float();
                let hi = if depth >= RR_DEPTH_2 { 0.75 } else { 1.00 };
                let prob_live = crate::shared::math::clamped_lerp(0.25, hi, r.luminance());

                if rv < prob_live {
                    r.throughput = r.throughput / prob_live;
                } else {
                    break;
                }
            }

            let Some((geom, isect)) = self.accel.intersect(&r.ray) else {
                break;
            };

            if let Some(light) = geom.area_light() {
                if !did_direct_illuminate {
                    l += r.throughput.cwise_mul(light.emit(&r, &isect));
                }
            }

            let Some(material) = geom.material() else {
                break;
            };

            if !material.should_direct_illuminate() {
                r = material.scatter(rng, &r, &isect);
                did_direct_illuminate = false;
            } else {
                l += r.throughput.cwise_mul(self.uniform_sample_one_light(rng, &r, &isect, material));
                r = material.scatter(rng, &r, &isect);
                did_direct_illuminate = true;
            }
        }

        let clamped = l.clamp(0.0, BIASED_RADIANCE_CLAMPING);
        tracing::trace!(target: targets::ESTIMATOR, ?clamped, "path terminated");
        clamped
    }

    /// Picks one emitter uniformly at random and returns its direct-lighting
    /// contribution scaled by `1 / P[this light] = emitters.len()`. Returns
    /// black without touching `rng` if there are no emitters.
    fn uniform_sample_one_light(
        &self,
        rng: &mut Randomness,
        incoming: &LightRay,
        isect: &crate::shared::Intersection,
        material: &dyn Material,
    ) -> Colour {
        let num_lights = self.emitters.len();
        if num_lights == 0 {
            return Colour::BLACK;
        }

        let idx = (rng.next_unit_float() * num_lights as f32).floor() as usize;
        let idx = idx.min(num_lights - 1);
        let emitter = self.emitters[idx];
        let light = emitter.area_light().expect("cached emitters always have an area light");

        light.direct_illuminate(rng, incoming, isect, material, emitter, self.accel) * num_lights as f32
    }
}
