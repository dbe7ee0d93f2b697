use crate::core::types::{Number, Point2, Point3, Vector3};

/// Geometric record of a ray/geometry hit.
///
/// The default distance is `+INFINITY`, so an un-hit `Intersection` always
/// compares as farther than any real hit — mirroring the "no intersection
/// found yet" sentinel used by linear-scan accelerators.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub distance: Number,
    pub position: Point3,
    pub normal: Vector3,
    pub uv: Point2,
    pub front_face: bool,
}

impl Default for Intersection {
    fn default() -> Self {
        Self {
            distance: Number::INFINITY,
            position: Point3::ZERO,
            normal: Vector3::Y,
            uv: Point2::ZERO,
            front_face: true,
        }
    }
}

impl Intersection {
    /// Builds an intersection, flipping `normal` to face against `ray_dir`
    /// and recording whether the outward geometric normal agreed with it.
    pub fn with_face_forward(
        distance: Number,
        position: Point3,
        outward_normal: Vector3,
        uv: Point2,
        ray_dir: Vector3,
    ) -> Self {
        let front_face = outward_normal.dot(ray_dir) < 0.0;
        let normal = if front_face { outward_normal } else { -outward_normal };
        Self { distance, position, normal, uv, front_face }
    }
}
