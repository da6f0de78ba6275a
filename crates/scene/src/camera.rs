//! Camera and stereo camera rig.

use glam::{Mat4, Quat, Vec3};

/// Projection type for the camera.
#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    /// Orthographic projection
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

/// A camera for rendering the scene.
///
/// The camera is a capability slot: attach it to a node and the node's
/// world transform places it in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera rotation
    pub rotation: Quat,
    /// Projection settings
    pub projection: Projection,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            rotation: Quat::IDENTITY,
            projection: Projection::Perspective {
                fov_y: 45.0_f32.to_radians(),
                aspect: 16.0 / 9.0,
                near: 0.1,
                far: 1000.0,
            },
        }
    }
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the perspective projection.
    pub fn set_perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Projection::Perspective {
            fov_y,
            aspect,
            near,
            far,
        };
    }

    /// Update the aspect ratio (for perspective projection).
    pub fn set_aspect(&mut self, aspect: f32) {
        if let Projection::Perspective {
            fov_y, near, far, ..
        } = self.projection
        {
            self.projection = Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            };
        }
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.rotation * Vec3::NEG_Z;
        let target = self.position + forward;
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Mat4::perspective_rh(fov_y, aspect, near, far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => Mat4::orthographic_rh(left, right, bottom, top, near, far),
        }
    }
}

/// A stereo camera rig: one camera per eye, separated along the head's
/// right vector.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// The head-centered camera both eyes derive from.
    pub camera: Camera,
    /// Distance between the two eyes, in scene units.
    pub eye_separation: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            // Average human interpupillary distance in meters.
            eye_separation: 0.064,
        }
    }
}

impl CameraRig {
    /// Create a rig around the given camera.
    pub fn new(camera: Camera, eye_separation: f32) -> Self {
        Self {
            camera,
            eye_separation,
        }
    }

    /// World-space position of the left eye.
    pub fn left_eye_position(&self) -> Vec3 {
        let right = self.camera.rotation * Vec3::X;
        self.camera.position - right * (self.eye_separation / 2.0)
    }

    /// World-space position of the right eye.
    pub fn right_eye_position(&self) -> Vec3 {
        let right = self.camera.rotation * Vec3::X;
        self.camera.position + right * (self.eye_separation / 2.0)
    }

    /// View matrix for the left eye.
    pub fn left_view_matrix(&self) -> Mat4 {
        self.eye_view_matrix(self.left_eye_position())
    }

    /// View matrix for the right eye.
    pub fn right_view_matrix(&self) -> Mat4 {
        self.eye_view_matrix(self.right_eye_position())
    }

    fn eye_view_matrix(&self, eye: Vec3) -> Mat4 {
        let forward = self.camera.rotation * Vec3::NEG_Z;
        Mat4::look_at_rh(eye, eye + forward, Vec3::Y)
    }
}
