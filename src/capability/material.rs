use crate::shared::rng::Randomness;
use crate::shared::{Intersection, LightRay};

/// A surface shading model.
///
/// `scatter` returns the *outgoing* light ray with throughput already
/// divided by whatever PDF was used to sample it — the estimator never sees
/// the PDF directly.
pub trait Material: Send + Sync {
    /// Samples an outgoing direction given the incoming light ray and hit.
    /// The returned throughput already has the material's contribution
    /// folded in and is divided by the sampling PDF.
    fn scatter(&self, rng: &mut Randomness, incoming: &LightRay, isect: &Intersection) -> LightRay;

    /// Whether the estimator should perform next-event estimation (direct
    /// light sampling) at hits on this material. `false` for perfectly
    /// specular/dielectric surfaces, where direct sampling a light would
    /// almost always miss and only adds variance.
    fn should_direct_illuminate(&self) -> bool;
}
