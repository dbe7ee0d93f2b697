use crate::capability::geom::Geom;
use crate::shared::{Intersection, Ray};

/// Looks up ray/scene intersections. The sole implementation shipped by this
/// crate is [`crate::accel::linear_time::LinearTime`]; a spatial structure
/// (BVH, kd-tree, ...) would implement the same trait.
pub trait Accelerator: Send + Sync {
    /// The nearest hit geom and its intersection, if any.
    fn intersect(&self, ray: &Ray) -> Option<(&dyn Geom, Intersection)>;

    /// True if anything is hit within `max_dist`. May short-circuit on the
    /// first qualifying hit.
    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool;
}
