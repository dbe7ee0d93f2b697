use crate::capability::{Accelerator, Geom};
use crate::core::targets;
use crate::shared::{BoundBox, Intersection, Ray};

/// An unaccelerated, linear-time lookup structure: every query scans every
/// geom. Correct for any scene size, and the natural baseline against which
/// a real spatial structure would be benchmarked.
pub struct LinearTime<'scene> {
    objs: Vec<&'scene dyn Geom>,
}

impl<'scene> LinearTime<'scene> {
    pub fn new(objs: Vec<&'scene dyn Geom>) -> Self {
        tracing::debug!(target: targets::ACCEL, count = objs.len(), "built linear-time accelerator");
        Self { objs }
    }

    pub fn len(&self) -> usize {
        self.objs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }
}

impl<'scene> Accelerator for LinearTime<'scene> {
    fn intersect(&self, ray: &Ray) -> Option<(&dyn Geom, Intersection)> {
        puffin::profile_function!();

        let mut best: Option<(&dyn Geom, Intersection)> = None;
        for &g in &self.objs {
            if let Some(isect) = g.intersect(ray) {
                let better = match &best {
                    Some((_, cur)) => isect.distance < cur.distance,
                    None => true,
                };
                if better {
                    best = Some((g, isect));
                }
            }
        }
        best
    }

    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool {
        puffin::profile_function!();
        self.objs.iter().any(|g| g.intersect_shadow(ray, max_dist))
    }
}
