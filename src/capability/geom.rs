use crate::capability::{AreaLight, Material};
use crate::core::types::{Number, Point3};
use crate::shared::{BoundBox, Intersection, Ray};

/// The base capability for all renderable geometry.
///
/// A `Geom` borrows its material and area light rather than owning them —
/// both are expected to outlive the scene graph and may be shared across
/// many geoms.
pub trait Geom: Send + Sync {
    /// Finds the nearest intersection with `ray`, if any.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// Cheaper shadow-ray query: true if `ray` hits something within
    /// `max_dist`. Implementations may early-out without computing full
    /// intersection data.
    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool;

    /// A box enclosing every point this geom could ever report a hit at.
    /// Geoms with no finite extent (an infinite plane, say) return
    /// [`BoundBox::INFINITE`]. Not consulted by [`crate::accel::LinearTime`],
    /// which scans every geom regardless; a spatial accelerator would use it
    /// to cull.
    fn bound_box(&self) -> BoundBox;

    /// An optional, tighter bounding sphere `(center, radius)`. Geoms for
    /// which a sphere isn't a natural or tighter fit than [`Self::bound_box`]
    /// can leave this as `None`.
    fn bound_sphere(&self) -> Option<(Point3, Number)> {
        None
    }

    /// The material used to shade this geom, if any.
    fn material(&self) -> Option<&dyn Material>;

    /// The area light causing emission from this geom, if any.
    fn area_light(&self) -> Option<&dyn AreaLight>;

    /// Refines a composite object into the constituent parts that can
    /// actually be intersected (e.g. expanding a mesh into triangles).
    /// The default implementation treats `self` as already a leaf.
    fn refine<'a>(&'a self, out: &mut Vec<&'a dyn Geom>) {
        out.push(self);
    }
}
