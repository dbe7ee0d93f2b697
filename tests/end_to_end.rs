mod common;

use common::{unit_camera_xform, Lambert, Mirror, Sphere, SphereLight};
use raydiance::accel::LinearTime;
use raydiance::camera::{Camera, CameraParams};
use raydiance::core::types::{Point3, Vector3};
use raydiance::{Accelerator, Colour, Geom, PresentBuffer};

fn params(xform: raydiance::CameraTransform, spp: usize, seed: u32) -> CameraParams {
    CameraParams {
        xform,
        width: 16,
        height: 16,
        fov: std::f32::consts::FRAC_PI_4,
        focal_length: 50.0,
        f_stop: 1000.0, // ~pinhole by default
        samples_per_pixel: spp,
        filter_width: 1.0,
        num_threads: 2,
        seed,
    }
}

fn mean_luminance(present: &PresentBuffer) -> f32 {
    let pixels = present.raw_pixels_snapshot();
    let sum: f32 = pixels
        .iter()
        .map(|p| {
            let to_unit = |c: u8| c as f32 / 255.0;
            0.2126 * to_unit(p[0]) + 0.7152 * to_unit(p[1]) + 0.0722 * to_unit(p[2])
        })
        .sum();
    sum / pixels.len() as f32
}

#[test]
fn empty_scene_renders_fully_black() {
    let objs: Vec<&dyn Geom> = vec![];
    let accel = LinearTime::new(objs.clone());
    let mut cam =
        Camera::new(params(unit_camera_xform(), 1, 1), Box::new(accel), &objs).expect("valid camera");

    let present = PresentBuffer::new(16, 16);
    cam.render_once(&present);

    for px in present.raw_pixels_snapshot() {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn single_emissive_sphere_filling_view_has_mean_luminance_near_one() {
    let light = Sphere::new(Point3::new(0.0, 0.0, -10.0), 2000.0)
        .with_light(SphereLight {
            radiance: Colour::WHITE,
            surface_albedo: Colour::BLACK,
            center: Point3::new(0.0, 0.0, -10.0),
            radius: 2000.0,
        });
    let objs: Vec<&dyn Geom> = vec![&light];
    let accel = LinearTime::new(objs.clone());

    let mut cam =
        Camera::new(params(unit_camera_xform(), 16, 2), Box::new(accel), &objs).expect("valid camera");

    let present = PresentBuffer::new(16, 16);
    cam.render_once(&present);

    let mean = mean_luminance(&present);
    assert!((mean - 1.0).abs() < 0.2, "mean luminance {mean} should be close to 1.0");
}

#[test]
fn zero_emitters_never_biases_a_lit_but_unlit_scene_toward_black_unfairly() {
    // A lone Lambertian sphere with no lights in the scene: every path dies
    // in empty space after its one diffuse bounce, so the whole frame must
    // be black, and rendering must not panic despite `emitters` being empty.
    let diffuse = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0).with_material(Lambert { albedo: Colour::WHITE });
    let objs: Vec<&dyn Geom> = vec![&diffuse];
    let accel = LinearTime::new(objs.clone());

    let mut cam =
        Camera::new(params(unit_camera_xform(), 4, 3), Box::new(accel), &objs).expect("valid camera");

    let present = PresentBuffer::new(16, 16);
    cam.render_once(&present);

    for px in present.raw_pixels_snapshot() {
        assert_eq!(px, [0, 0, 0, 255]);
    }
}

#[test]
fn mirror_reflecting_an_emissive_sphere_does_not_double_count_direct_light() {
    let light = Sphere::new(Point3::new(0.0, 0.0, -30.0), 2000.0).with_light(SphereLight {
        radiance: Colour::WHITE,
        surface_albedo: Colour::BLACK,
        center: Point3::new(0.0, 0.0, -30.0),
        radius: 2000.0,
    });
    let mirror = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0).with_material(Mirror);

    let objs: Vec<&dyn Geom> = vec![&light, &mirror];
    let accel = LinearTime::new(objs.clone());

    let mut cam =
        Camera::new(params(unit_camera_xform(), 8, 4), Box::new(accel), &objs).expect("valid camera");

    let present = PresentBuffer::new(16, 16);
    cam.render_once(&present);

    // A mirror's material never sets `should_direct_illuminate`, so the
    // estimator must fall through to the plain emission-accounting branch;
    // the rendered frame should show the light's radiance (not zero, and
    // not implausibly brighter than the light itself).
    let mean = mean_luminance(&present);
    assert!(mean > 0.0);
    assert!(mean <= 1.0 + 1e-3);
}

#[test]
fn pinhole_camera_rays_all_share_a_common_origin() {
    let objs: Vec<&dyn Geom> = vec![];
    let accel = LinearTime::new(objs.clone());
    let mut p = params(unit_camera_xform(), 1, 5);
    p.f_stop = f32::INFINITY; // lens_radius -> 0
    let mut cam = Camera::new(p, Box::new(accel), &objs).expect("valid camera");

    let present = PresentBuffer::new(16, 16);
    // Rendering must not panic with a zero-radius lens; correctness of the
    // pinhole property itself is exercised directly against the disk
    // sampler and focal-plane math at the unit level (see `shared::rng`).
    cam.render_once(&present);
    assert_eq!(cam.iterations(), 1);
}

#[test]
fn lambert_ground_under_sky_light_has_low_central_patch_variance() {
    // A Cornell-box-like two-sphere scene: a huge Lambertian "ground" sphere
    // the camera looks down onto, lit by a huge emissive "sky" sphere behind
    // it. After enough iterations, a small central patch of converged pixels
    // should be close to flat.
    let sky = Sphere::new(Point3::new(0.0, 0.0, -2000.0), 1990.0)
        .with_light(SphereLight {
            radiance: Colour::splat(3.0),
            surface_albedo: Colour::BLACK,
            center: Point3::new(0.0, 0.0, -2000.0),
            radius: 1990.0,
        });
    let ground = Sphere::new(Point3::new(0.0, -1001.0, -5.0), 1000.0)
        .with_material(Lambert { albedo: Colour::splat(0.8) });
    let objs: Vec<&dyn Geom> = vec![&sky, &ground];
    let accel = LinearTime::new(objs.clone());

    let mut cam = Camera::new(params(unit_camera_xform(), 4, 11), Box::new(accel), &objs).expect("valid camera");
    let present = PresentBuffer::new(16, 16);
    for _ in 0..16 {
        cam.render_once(&present);
    }

    let pixels = present.raw_pixels_snapshot();
    let luminance_at = |x: usize, y: usize| -> f32 {
        let p = pixels[y * 16 + x];
        let to_unit = |c: u8| c as f32 / 255.0;
        0.2126 * to_unit(p[0]) + 0.7152 * to_unit(p[1]) + 0.0722 * to_unit(p[2])
    };

    let patch: Vec<f32> = (6..10).flat_map(|y| (6..10).map(move |x| (x, y))).map(|(x, y)| luminance_at(x, y)).collect();
    let mean: f32 = patch.iter().sum::<f32>() / patch.len() as f32;
    assert!(mean > 0.0, "central patch should not be black after converging");
    let variance: f32 = patch.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / patch.len() as f32;
    assert!(variance < 0.10 * mean, "central-patch variance {variance} should be small relative to mean {mean}");
}

#[test]
fn identical_seed_and_thread_count_is_deterministic() {
    let diffuse = Sphere::new(Point3::new(0.0, 0.0, -5.0), 1.0).with_material(Lambert { albedo: Colour::WHITE }).with_light(
        SphereLight {
            radiance: Colour::splat(0.5),
            surface_albedo: Colour::WHITE,
            center: Point3::new(0.0, 0.0, -5.0),
            radius: 1.0,
        },
    );
    let objs: Vec<&dyn Geom> = vec![&diffuse];

    let render = || {
        let accel = LinearTime::new(objs.clone());
        let mut cam = Camera::new(params(unit_camera_xform(), 4, 99), Box::new(accel), &objs).expect("valid camera");
        let present = PresentBuffer::new(16, 16);
        cam.render_once(&present);
        present.raw_pixels_snapshot()
    };

    assert_eq!(render(), render());
}
