// Host-side tests for the camera rig.
// The crate itself is wasm-only, so the pure core modules are pulled in
// directly by path.

#![allow(dead_code)]

#[path = "../src/core/camera.rs"]
mod camera;
#[path = "../src/core/constants.rs"]
mod constants;

use camera::CameraRig;
use glam::Vec3;

#[test]
fn aspect_tracks_the_viewport() {
    let rig = CameraRig::new(1600.0, 800.0);
    assert!((rig.aspect - 2.0).abs() < 1e-6);
    assert!((rig.fovy_radians - constants::CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
}

#[test]
fn narrow_viewports_pull_the_camera_back() {
    let mut rig = CameraRig::new(1024.0, 768.0);
    assert_eq!(rig.eye_z, constants::CAMERA_Z_WIDE);
    rig.retune(500.0, 900.0);
    assert_eq!(rig.eye_z, constants::CAMERA_Z_NARROW);
    rig.retune(768.0, 500.0);
    assert_eq!(rig.eye_z, constants::CAMERA_Z_WIDE);
}

#[test]
fn zero_height_does_not_divide_by_zero() {
    let rig = CameraRig::new(800.0, 0.0);
    assert!(rig.aspect.is_finite());
}

#[test]
fn origin_projects_to_the_screen_center() {
    let rig = CameraRig::new(1024.0, 768.0);
    let clip = rig.view_proj() * Vec3::ZERO.extend(1.0);
    let ndc = clip / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn matrices_are_finite() {
    let rig = CameraRig::new(1.0, 1.0);
    assert!(rig.view_proj().to_cols_array().iter().all(|v| v.is_finite()));
    assert!(rig.view_matrix().to_cols_array().iter().all(|v| v.is_finite()));
}
