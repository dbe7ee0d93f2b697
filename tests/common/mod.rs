//! Minimal fixture `Geom`/`Material`/`AreaLight` implementations used only
//! by the end-to-end test suite, so it can exercise the renderer without
//! pulling in a full scene-parsing/geometry crate.

use raydiance::capability::{AreaLight, Geom, Material};
use raydiance::core::types::{Point2, Point3, Vector3};
use raydiance::shared::{BoundBox, Intersection, LightRay, Randomness, Ray};
use raydiance::Colour;
use std::f32::consts::PI;

const SHADOW_EPSILON: f32 = 1e-3;

pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub material: Option<Box<dyn Material>>,
    pub light: Option<Box<dyn AreaLight>>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius, material: None, light: None }
    }

    pub fn with_material(mut self, m: impl Material + 'static) -> Self {
        self.material = Some(Box::new(m));
        self
    }

    pub fn with_light(mut self, l: impl AreaLight + 'static) -> Self {
        self.light = Some(Box::new(l));
        self
    }
}

impl Geom for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = half_b * half_b - a * c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let mut t = (-half_b - sqrt_disc) / a;
        if t <= 1e-4 {
            t = (-half_b + sqrt_disc) / a;
            if t <= 1e-4 {
                return None;
            }
        }
        let pos = ray.at(t);
        let outward = (pos - self.center) / self.radius;
        Some(Intersection::with_face_forward(t, pos, outward, Point2::ZERO, ray.direction()))
    }

    fn intersect_shadow(&self, ray: &Ray, max_dist: f32) -> bool {
        self.intersect(ray).is_some_and(|i| i.distance < max_dist)
    }

    fn bound_box(&self) -> BoundBox {
        let r = Vector3::splat(self.radius);
        BoundBox::new(self.center - r, self.center + r)
    }

    fn material(&self) -> Option<&dyn Material> {
        self.material.as_deref()
    }

    fn area_light(&self) -> Option<&dyn AreaLight> {
        self.light.as_deref()
    }
}

/// A perfectly diffuse (Lambertian) surface.
pub struct Lambert {
    pub albedo: Colour,
}

impl Material for Lambert {
    fn scatter(&self, rng: &mut Randomness, incoming: &LightRay, isect: &Intersection) -> LightRay {
        let dir = rng.cosine_sample_hemisphere(isect.normal);
        let origin = isect.position + isect.normal * SHADOW_EPSILON;
        LightRay::new(Ray::new(origin, dir), incoming.throughput.cwise_mul(self.albedo))
    }

    fn should_direct_illuminate(&self) -> bool {
        true
    }
}

/// A perfect mirror: no next-event estimation, since a randomly-sampled
/// light would almost never line up with the single reflected direction.
pub struct Mirror;

impl Material for Mirror {
    fn scatter(&self, _rng: &mut Randomness, incoming: &LightRay, isect: &Intersection) -> LightRay {
        let d = incoming.ray.direction();
        let reflected = d - 2.0 * d.dot(isect.normal) * isect.normal;
        let origin = isect.position + isect.normal * SHADOW_EPSILON;
        LightRay::new(Ray::new(origin, reflected), incoming.throughput)
    }

    fn should_direct_illuminate(&self) -> bool {
        false
    }
}

/// An emissive sphere light. `surface_albedo` is the diffuse reflectance of
/// whatever [`Lambert`] surfaces it is expected to illuminate — fixtures
/// wire this up directly rather than querying the material trait object, to
/// avoid needing runtime downcasting through a test-only `Any` bound.
pub struct SphereLight {
    pub radiance: Colour,
    pub surface_albedo: Colour,
    pub center: Point3,
    pub radius: f32,
}

impl AreaLight for SphereLight {
    fn emit(&self, _incoming: &LightRay, _isect: &Intersection) -> Colour {
        self.radiance
    }

    fn direct_illuminate(
        &self,
        rng: &mut Randomness,
        _incoming: &LightRay,
        isect: &Intersection,
        _material: &dyn Material,
        _emitter: &dyn Geom,
        accel: &dyn raydiance::Accelerator,
    ) -> Colour {
        let normal = rng.uniform_sample_sphere();
        let light_point = self.center + normal * self.radius;

        let to_light = light_point - isect.position;
        let dist_sq = to_light.length_squared();
        let dist = dist_sq.sqrt();
        if dist <= SHADOW_EPSILON {
            return Colour::BLACK;
        }
        let wi = to_light / dist;

        let cos_surface = isect.normal.dot(wi);
        let cos_light = normal.dot(-wi);
        if cos_surface <= 0.0 || cos_light <= 0.0 {
            return Colour::BLACK;
        }

        let shadow_ray = Ray::new(isect.position + isect.normal * SHADOW_EPSILON, wi);
        if accel.intersect_shadow(&shadow_ray, dist - 2.0 * SHADOW_EPSILON) {
            return Colour::BLACK;
        }

        let area = 4.0 * PI * self.radius * self.radius;
        let pdf_area = 1.0 / area;
        let pdf_solid_angle = pdf_area * dist_sq / cos_light;

        let brdf = self.surface_albedo / PI;
        self.radiance.cwise_mul(brdf) * (cos_surface / pdf_solid_angle)
    }
}

pub fn unit_camera_xform() -> raydiance::CameraTransform {
    raydiance::CameraTransform::new(0.0, Vector3::X, Vector3::ZERO).expect("identity transform is never degenerate")
}
