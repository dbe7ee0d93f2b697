use crate::core::types::{Point3, Vector3};
use crate::shared::validate;

/// A ray in world space. `direction` is always kept normalised.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Constructs a ray, normalising `direction`.
    ///
    /// # Panics (debug only)
    /// Panics if `direction` is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        let direction = direction.normalize();
        validate::point3(origin);
        validate::normal3(direction);
        Self { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}
