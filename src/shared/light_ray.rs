use crate::core::Colour;
use crate::shared::ray::Ray;

/// A ray carrying accumulated path throughput. The estimator's bounce loop
/// mutates `throughput` (Russian-roulette rescaling) and replaces `ray`
/// (scattering) every iteration.
#[derive(Copy, Clone, Debug)]
pub struct LightRay {
    pub ray: Ray,
    pub throughput: Colour,
}

impl LightRay {
    pub fn new(ray: Ray, throughput: Colour) -> Self {
        Self { ray, throughput }
    }

    /// A fresh camera ray with unit throughput.
    pub fn primary(ray: Ray) -> Self {
        Self::new(ray, Colour::WHITE)
    }

    pub fn is_black(&self) -> bool {
        self.throughput.is_black(crate::shared::validate::EPSILON)
    }

    pub fn luminance(&self) -> f32 {
        self.throughput.luminance()
    }
}
