use super::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, CAMERA_Z_NARROW, CAMERA_Z_WIDE, NARROW_VIEWPORT_PX,
};
use glam::{Mat4, Vec3};

/// Perspective camera on the +Z axis looking at the origin. The eye distance
/// is a step function of viewport width: narrow viewports pull the camera
/// back so the fully deformed orb never leaves the frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub eye_z: f32,
}

impl CameraRig {
    /// `width`/`height` are CSS logical pixels.
    pub fn new(width: f32, height: f32) -> Self {
        let mut rig = Self {
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            eye_z: CAMERA_Z_WIDE,
        };
        rig.retune(width, height);
        rig
    }

    /// Recompute aspect and step distance after a viewport change.
    pub fn retune(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
        self.eye_z = if width < NARROW_VIEWPORT_PX {
            CAMERA_Z_NARROW
        } else {
            CAMERA_Z_WIDE
        };
    }

    /// Clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.eye_z), Vec3::ZERO, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
