//! Axis-aligned bounding boxes, used by [`crate::capability::Geom::bound_box`].
//!
//! Nothing in this crate's shipped [`crate::accel::LinearTime`] accelerator
//! actually culls against these boxes (a linear scan has no use for them),
//! but the capability is part of the `Geom` surface so that a spatial
//! accelerator (a BVH, say) can be written against this crate without
//! changing the trait.

use crate::core::types::{Number, Point3};

/// The box spans between corners `min` and `max`, inclusive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundBox {
    /// A box with no extent at all, the identity element for [`Self::encompass`].
    pub const EMPTY: BoundBox = BoundBox {
        min: Point3::new(Number::INFINITY, Number::INFINITY, Number::INFINITY),
        max: Point3::new(Number::NEG_INFINITY, Number::NEG_INFINITY, Number::NEG_INFINITY),
    };

    /// An unbounded box, for geoms with no finite extent (e.g. an infinite plane).
    pub const INFINITE: BoundBox = BoundBox {
        min: Point3::new(Number::NEG_INFINITY, Number::NEG_INFINITY, Number::NEG_INFINITY),
        max: Point3::new(Number::INFINITY, Number::INFINITY, Number::INFINITY),
    };

    /// Builds a box from two corners, which need not already be sorted.
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    /// The smallest box containing both `self` and `other`.
    pub fn encompass(&self, other: &BoundBox) -> BoundBox {
        BoundBox { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: Point3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
