use crate::capability::accelerator::Accelerator;
use crate::capability::geom::Geom;
use crate::capability::material::Material;
use crate::core::Colour;
use crate::shared::rng::Randomness;
use crate::shared::{Intersection, LightRay};

/// Emission behaviour attached to a [`Geom`].
pub trait AreaLight: Send + Sync {
    /// Radiance emitted back along `incoming.ray.direction()` at `isect`.
    fn emit(&self, incoming: &LightRay, isect: &Intersection) -> Colour;

    /// Next-event-estimation contribution: samples a point on this light,
    /// evaluates the material's BSDF toward it, traces a shadow ray through
    /// `accel`, and returns the resulting estimator already divided by
    /// whatever PDF was used to sample the point on the light (but *not*
    /// divided by the probability of choosing this light among all lights —
    /// that factor is applied by the caller, see
    /// [`crate::estimator::uniform_sample_one_light`]).
    #[allow(clippy::too_many_arguments)]
    fn direct_illuminate(
        &self,
        rng: &mut Randomness,
        incoming: &LightRay,
        isect: &Intersection,
        material: &dyn Material,
        emitter: &dyn Geom,
        accel: &dyn Accelerator,
    ) -> Colour;
}
