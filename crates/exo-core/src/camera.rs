//! Orbit camera rig for the hologram view.
//!
//! These types avoid platform-specific APIs. The web frontend steps the rig
//! once per animation frame with the latest gesture velocities and builds
//! its projection from [`Camera`].

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Fixed square camera for the power card render, independent of the
    /// live rig's view, zoom and spin.
    pub fn preview() -> Self {
        Self {
            eye: PREVIEW_EYE,
            target: PREVIEW_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: PREVIEW_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

/// Preset viewpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraView {
    #[default]
    Front,
    Side,
    Back,
    Top,
}

impl CameraView {
    pub const ALL: [CameraView; 4] = [Self::Front, Self::Side, Self::Back, Self::Top];

    pub fn eye(&self) -> Vec3 {
        match self {
            Self::Front => Vec3::new(1.8, 2.2, 4.6),
            Self::Side => Vec3::new(4.8, 2.1, 0.0),
            Self::Back => Vec3::new(-1.6, 2.1, -4.8),
            Self::Top => Vec3::new(0.01, 6.0, 0.01),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Side => "side",
            Self::Back => "back",
            Self::Top => "top",
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: Vec3,
    to: Vec3,
    t: f32,
}

/// Camera position plus the armor's accumulated spin.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub eye: Vec3,
    pub target: Vec3,
    /// Armor yaw in radians, integrated from rotation velocity.
    pub armor_yaw: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    tween: Option<Tween>,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            eye: CameraView::Front.eye(),
            target: CAMERA_TARGET,
            armor_yaw: 0.0,
            min_distance: CAMERA_MIN_DISTANCE,
            max_distance: CAMERA_MAX_DISTANCE,
            tween: None,
        }
    }
}

impl OrbitRig {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    #[inline]
    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Start a linear fly-to toward a preset view.
    pub fn set_view(&mut self, view: CameraView) {
        self.tween = Some(Tween {
            from: self.eye,
            to: view.eye(),
            t: 0.0,
        });
    }

    /// Snap to the front view and cancel any fly-to.
    pub fn reset(&mut self) {
        self.tween = None;
        self.eye = CameraView::Front.eye();
        self.target = CAMERA_TARGET;
    }

    /// Advance one animation frame.
    pub fn step(&mut self, rotation_velocity: f32, zoom_velocity: f32) {
        self.armor_yaw += ARMOR_IDLE_SPIN + rotation_velocity * ARMOR_SPIN_PER_ROTATION;
        self.armor_yaw = self.armor_yaw.rem_euclid(std::f32::consts::TAU);

        if let Some(mut tw) = self.tween {
            tw.t = (tw.t + VIEW_TWEEN_STEP).min(1.0);
            self.eye = tw.from.lerp(tw.to, tw.t);
            self.tween = (tw.t < 1.0).then_some(tw);
        }

        if zoom_velocity.abs() > ZOOM_VELOCITY_EPSILON {
            let offset = self.eye - self.target;
            // Top view sits almost exactly above the target; keep a direction.
            let dir = offset.try_normalize().unwrap_or(Vec3::Z);
            let next = (offset.length() - zoom_velocity * ZOOM_STEP_SCALE)
                .clamp(self.min_distance, self.max_distance);
            self.eye = self.target + dir * next;
        }
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
