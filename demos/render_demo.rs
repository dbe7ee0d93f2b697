//! Renders a handful of iterations of a trivial hard-coded scene and prints
//! the mean pixel luminance, to demonstrate the public API end-to-end.

use raydiance::accel::LinearTime;
use raydiance::camera::{Camera, CameraParams};
use raydiance::core::types::{Point3, Vector3};
use raydiance::shared::{BoundBox, Intersection, LightRay, Randomness, Ray};
use raydiance::{Accelerator, AreaLight, CameraTransform, Colour, Geom, Material, PresentBuffer};

struct Sphere {
    center: Point3,
    radius: f32,
    material: Option<Box<dyn Material>>,
    light: Option<Box<dyn AreaLight>>,
}

impl Geom for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin() - self.center;
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;
        let disc = half_b * half_b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -half_b - disc.sqrt();
        if t <= 1e-4 {
            return None;
        }
        let pos = ray.at(t);
        let outward = (pos - self.center) / self.radius;
        Some(Intersection::with_face_forward(
            t,
            pos,
            outward,
            raydiance::core::types::Point2::ZERO,
            ray.direction(),
        ))
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

struct FlatEmitter(Colour);
impl AreaLight for FlatEmitter {
    fn emit(&self, _incoming: &LightRay, _isect: &Intersection) -> Colour {
        self.0
    }
    fn direct_illuminate(
        &self,
        _rng: &mut Randomness,
        _incoming: &LightRay,
        _isect: &Intersection,
        _material: &dyn Material,
        _emitter: &dyn Geom,
        _accel: &dyn Accelerator,
    ) -> Colour {
        Colour::BLACK
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let sky = Sphere {
        center: Point3::new(0.0, 0.0, -10.0),
        radius: 1000.0,
        material: None,
        light: Some(Box::new(FlatEmitter(Colour::new(0.4, 0.6, 1.0)))),
    };
    let objs: Vec<&dyn Geom> = vec![&sky];
    let accel = LinearTime::new(objs.clone());

    let xform = CameraTransform::new(0.0, Vector3::X, Vector3::ZERO).unwrap();
    let params = CameraParams {
        xform,
        width: 64,
        height: 48,
        fov: std::f32::consts::FRAC_PI_4,
        focal_length: 50.0,
        f_stop: 8.0,
        samples_per_pixel: 4,
        filter_width: 1.5,
        num_threads: 4,
        seed: 42,
    };

    let mut camera = Camera::new(params, Box::new(accel), &objs).expect("valid camera parameters");
    let present = PresentBuffer::new(64, 48);

    camera.render_multiple(&present, 3);

    let pixels = present.raw_pixels_snapshot();
    let mean: f32 = pixels.iter().map(|p| p[0] as f32 + p[1] as f32 + p[2] as f32).sum::<f32>()
        / (pixels.len() as f32 * 3.0 * 255.0);
    println!("rendered {} iterations, mean channel value = {mean:.3}", camera.iterations());
}
