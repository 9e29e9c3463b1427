// Host-side tests for the orbit rig and camera matrices.

use exo_core::constants::{CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_TARGET};
use exo_core::*;
use glam::{Vec3, Vec4};

#[test]
fn starts_at_front_view() {
    let rig = OrbitRig::new();
    assert_eq!(rig.eye, CameraView::Front.eye());
    assert_eq!(rig.target, CAMERA_TARGET);
    assert!(!rig.is_tweening());
}

#[test]
fn zoom_clamps_to_range() {
    let mut rig = OrbitRig::new();
    for _ in 0..200 {
        rig.step(0.0, 5.0);
    }
    assert!((rig.distance() - CAMERA_MIN_DISTANCE).abs() < 1e-4);

    for _ in 0..200 {
        rig.step(0.0, -5.0);
    }
    assert!((rig.distance() - CAMERA_MAX_DISTANCE).abs() < 1e-4);
}

#[test]
fn tiny_zoom_is_ignored() {
    let mut rig = OrbitRig::new();
    let before = rig.eye;
    rig.step(0.0, 0.0001);
    assert_eq!(rig.eye, before);
}

#[test]
fn zoom_keeps_view_direction() {
    let mut rig = OrbitRig::new();
    let dir = (rig.eye - rig.target).normalize();
    rig.step(0.0, 1.0);
    let after = (rig.eye - rig.target).normalize();
    assert!(dir.abs_diff_eq(after, 1e-5));
}

#[test]
fn view_tween_reaches_target() {
    let mut rig = OrbitRig::new();
    rig.set_view(CameraView::Side);
    assert!(rig.is_tweening());
    rig.step(0.0, 0.0);
    assert!(rig.eye != CameraView::Side.eye(), "tween moves gradually");
    for _ in 0..20 {
        rig.step(0.0, 0.0);
    }
    assert!(!rig.is_tweening());
    assert!(rig.eye.abs_diff_eq(CameraView::Side.eye(), 1e-5));
}

#[test]
fn reset_snaps_and_cancels_tween() {
    let mut rig = OrbitRig::new();
    rig.set_view(CameraView::Back);
    rig.step(0.0, 0.0);
    rig.reset();
    assert!(!rig.is_tweening());
    assert_eq!(rig.eye, CameraView::Front.eye());
}

#[test]
fn armor_spins_idle_and_with_rotation() {
    let mut idle = OrbitRig::new();
    idle.step(0.0, 0.0);
    assert!((idle.armor_yaw - 0.0035).abs() < 1e-6);

    let mut driven = OrbitRig::new();
    driven.step(1.0, 0.0);
    assert!((driven.armor_yaw - (0.0035 + 0.012)).abs() < 1e-6);

    let mut wrapped = OrbitRig::new();
    for _ in 0..2000 {
        wrapped.step(1.0, 0.0);
    }
    assert!((0.0..std::f32::consts::TAU).contains(&wrapped.armor_yaw));
}

#[test]
fn top_view_zoom_stays_finite() {
    let mut rig = OrbitRig::new();
    rig.set_view(CameraView::Top);
    for _ in 0..20 {
        rig.step(0.0, 0.0);
    }
    rig.step(0.0, 2.0);
    assert!(rig.eye.is_finite());
}

#[test]
fn target_projects_to_screen_center() {
    let rig = OrbitRig::new();
    let cam = rig.camera(16.0 / 9.0);
    let clip = cam.view_projection() * Vec4::new(cam.target.x, cam.target.y, cam.target.z, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn camera_guards_degenerate_aspect() {
    let cam = OrbitRig::new().camera(0.0);
    assert!(cam.aspect > 0.0);
    assert!(cam.projection_matrix().is_finite());
    assert_eq!(cam.up, Vec3::Y);
}

#[test]
fn preview_camera_ignores_rig_state() {
    let mut rig = OrbitRig::new();
    rig.set_view(CameraView::Top);
    for _ in 0..30 {
        rig.step(1.0, 2.0);
    }
    let preview = Camera::preview();
    assert_eq!(preview.eye, Vec3::new(1.8, 2.3, 4.7));
    assert_eq!(preview.target, Vec3::new(0.0, 1.1, 0.0));
    assert_eq!(preview.aspect, 1.0);
    assert!((preview.fovy_radians - 40f32.to_radians()).abs() < 1e-6);
    assert_ne!(preview.eye, rig.eye);
}
