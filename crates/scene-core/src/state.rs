//! Per-frame state types shared with the native frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! frontend builds a fresh [`FrameState`] each rendered frame and passes it
//! into every update hook, so no component reads hidden global camera or
//! clock state.

use glam::{Mat4, Vec3};

/// Read-only snapshot of the host frame loop: where the camera is and how
/// much wall-clock time has elapsed since the scene mounted.
#[derive(Clone, Copy, Debug)]
pub struct FrameState {
    pub camera_position: Vec3,
    pub elapsed_seconds: f32,
}

impl FrameState {
    pub fn new(camera_position: Vec3, elapsed_seconds: f32) -> Self {
        Self {
            camera_position,
            elapsed_seconds,
        }
    }
}

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
}
