//! Eye/lens sampling, pixel-to-ray mapping, and the per-iteration render
//! driver.

use crate::capability::{Accelerator, Geom};
use crate::core::targets;
use crate::core::types::{Number, Point2, Point3, Vector3};
use crate::error::CameraError;
use crate::estimator::RadianceEstimator;
use crate::image::{Image, PresentBuffer};
use crate::pool::WorkerPool;
use crate::shared::{LightRay, Randomness, Ray};

/// World-space transform applied to camera-space rays: rotation about an
/// arbitrary axis, applied first, then a translation.
#[derive(Copy, Clone, Debug)]
pub struct CameraTransform {
    rotation: glam::Quat,
    translation: Vector3,
}

impl CameraTransform {
    pub fn new(rotate_angle: Number, rotate_axis: Vector3, translate: Vector3) -> Result<Self, CameraError> {
        let axis = rotate_axis.try_normalize().ok_or(CameraError::DegenerateTransform)?;
        Ok(Self { rotation: glam::Quat::from_axis_angle(axis, rotate_angle), translation: translate })
    }

    fn transform_point(&self, p: Point3) -> Point3 {
        self.rotation * p + self.translation
    }
}

struct FocalPlane {
    origin: Point3,
    right: Number,
    up: Number,
}

/// Owns the accelerator, image accumulator, worker pool, and per-iteration
/// RNG state for a single camera's view of a scene.
pub struct Camera<'scene> {
    accel: Box<dyn Accelerator + 'scene>,
    emitters: Vec<&'scene dyn Geom>,
    image: Image,
    pool: WorkerPool,
    xform: CameraTransform,
    focal_plane: FocalPlane,
    lens_radius: Number,
    master_rng: Randomness,
    row_seeds: Vec<u32>,
    iters: u64,
}

pub struct CameraParams {
    pub xform: CameraTransform,
    pub width: u32,
    pub height: u32,
    pub fov: Number,
    pub focal_length: Number,
    pub f_stop: Number,
    pub samples_per_pixel: usize,
    pub filter_width: Number,
    pub num_threads: usize,
    pub seed: u32,
}

impl<'scene> Camera<'scene> {
    pub fn new(
        params: CameraParams,
        accel: Box<dyn Accelerator + 'scene>,
        objs: &'scene [&'scene dyn Geom],
    ) -> Result<Self, CameraError> {
        let CameraParams {
            xform,
            width,
            height,
            fov,
            focal_length,
            f_stop,
            samples_per_pixel,
            filter_width,
            num_threads,
            seed,
        } = params;

        if width == 0 || height == 0 {
            return Err(CameraError::InvalidDimensions(width, height));
        }
        if !fov.is_finite() || fov <= 0.0 || fov >= std::f32::consts::PI {
            return Err(CameraError::InvalidFov(fov));
        }

        let (w, h) = (width as Number, height as Number);
        let (half_up, half_right) = if w > h {
            let half_up = focal_length * (0.5 * fov).tan();
            (half_up, half_up * w / h)
        } else {
            let half_right = focal_length * (0.5 * fov).tan();
            (half_right * h / w, half_right)
        };

        let focal_plane = FocalPlane {
            origin: Point3::new(-half_right, half_up, -focal_length),
            right: 2.0 * half_right,
            up: -2.0 * half_up,
        };

        let lens_radius = (focal_length / f_stop) * 0.5;

        let mut emitters = Vec::new();
        for &g in objs {
            if g.area_light().is_some() {
                g.refine(&mut emitters);
            }
        }
        tracing::debug!(target: targets::CAMERA, emitters = emitters.len(), "cached scene emitters");

        let pool = WorkerPool::new(num_threads)?;
        let row_seeds = vec![0u32; height as usize];

        Ok(Self {
            accel,
            emitters,
            image: Image::new(width as usize, height as usize, samples_per_pixel, filter_width),
            pool,
            xform,
            focal_plane,
            lens_radius,
            master_rng: Randomness::new(seed),
            row_seeds,
            iters: 0,
        })
    }

    pub fn iterations(&self) -> u64 {
        self.iters
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Runs one full iteration (every pixel, `samples_per_pixel` samples
    /// each), commits the result, and presents it.
    pub fn render_once(&mut self, present: &PresentBuffer) {
        self.iters += 1;
        let height = self.image.height();

        for seed in self.row_seeds.iter_mut() {
            *seed = self.master_rng.next_unsigned();
        }

        let start = std::time::Instant::now();

        let estimator = RadianceEstimator::new(self.accel.as_ref(), &self.emitters);
        let row_seeds = &self.row_seeds;
        let width = self.image.width();
        let spp = self.image.samples_per_pixel();
        let filter_width = self.image.filter_width();
        let xform = self.xform;
        let focal_plane_origin = self.focal_plane.origin;
        let focal_plane_right = self.focal_plane.right;
        let focal_plane_up = self.focal_plane.up;
        let lens_radius = self.lens_radius;

        let rows = self.image.rows_mut();
        self.pool.dispatch(rows, move |y, mut row| {
            let mut rng = Randomness::new(row_seeds[y]);
            for x in 0..width {
                for sample_idx in 0..spp {
                    let offset_x = rng.next_float(-filter_width, filter_width);
                    let offset_y = rng.next_float(-filter_width, filter_width);

                    let pos_x = x as Number + offset_x;
                    let pos_y = y as Number + offset_y;

                    let frac_x = pos_x / (width as Number - 1.0);
                    let frac_y = pos_y / (height as Number - 1.0);

                    let look_at = focal_plane_origin
                        + Vector3::new(focal_plane_right * frac_x, focal_plane_up * frac_y, 0.0);

                    let disk = rng.area_sample_disk() * lens_radius;
                    let eye = Point3::new(disk.x, disk.y, 0.0);

                    let eye_world = xform.transform_point(eye);
                    let look_at_world = xform.transform_point(look_at);
                    let dir = (look_at_world - eye_world).normalize();

                    let l = estimator.trace(LightRay::primary(Ray::new(eye_world, dir)), &mut rng);
                    Image::set_sample(&mut row, x, Point2::new(pos_x, pos_y), sample_idx, l);
                }
            }
        });

        self.image.commit_samples();
        self.image.present(present);

        let elapsed = start.elapsed();
        tracing::info!(target: targets::CAMERA, iteration = self.iters, seconds = elapsed.as_secs_f32(), "rendered iteration");
    }

    /// Runs `iterations` iterations, or forever if negative.
    pub fn render_multiple(&mut self, present: &PresentBuffer, iterations: i64) {
        if iterations < 0 {
            tracing::info!(target: targets::CAMERA, "rendering indefinitely");
            loop {
                self.render_once(present);
            }
        } else {
            tracing::info!(target: targets::CAMERA, iterations, "rendering fixed iteration count");
            for _ in 0..iterations {
                self.render_once(present);
            }
        }
    }
}
