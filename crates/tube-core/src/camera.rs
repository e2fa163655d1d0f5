//! Camera description and mouse-parallax math.
//!
//! These types avoid platform-specific APIs; the web frontend consumes them
//! to build view/projection matrices each frame.

use crate::constants::{CAMERA_DISTANCE, PARALLAX_ANGLE_OFFSET_DEG};
use glam::{Mat4, Quat, Vec2, Vec3};

/// Simple right-handed camera with perspective projection.
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
}

/// Camera eye position for the mouse-parallax mode.
///
/// `offset` is the smoothed mouse position in [-1, 1] on both axes. The base
/// eye sits on the +Z axis and tilts away from the pointer by up to
/// `PARALLAX_ANGLE_OFFSET_DEG` on each axis, always at `CAMERA_DISTANCE`
/// from the origin.
pub fn parallax_eye(offset: Vec2) -> Vec3 {
    let base = Vec3::Z;
    let radian_offset = PARALLAX_ANGLE_OFFSET_DEG.to_radians();
    let x_off = offset.y * radian_offset;
    let y_off = offset.x * radian_offset;
    let rot = Quat::from_axis_angle(Vec3::X, -x_off) * Quat::from_axis_angle(Vec3::Y, -y_off);
    (rot * base) * CAMERA_DISTANCE
}
