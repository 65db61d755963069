//! # Camera
//!
//! Fixed perspective camera on the +Z axis looking at the origin.

use config::constants::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, DEFAULT_SURFACE_SIZE,
};
use glam::{DMat4, DVec3};

/// Perspective camera tied to the output surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: DVec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    width: u32,
    height: u32,
}

impl Default for Camera {
    fn default() -> Self {
        let (width, height) = DEFAULT_SURFACE_SIZE;
        Self::new(width, height)
    }
}

impl Camera {
    /// Creates the camera for a surface. Zero dimensions are raised to one.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Follows a surface resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Surface size in pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Width over height.
    #[inline]
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// World → camera matrix.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, DVec3::ZERO, DVec3::Y)
    }

    /// Camera → clip matrix (OpenGL depth range).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect(),
            self.near,
            self.far,
        )
    }

    /// World → clip matrix.
    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
