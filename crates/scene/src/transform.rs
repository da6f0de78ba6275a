//! Transform component for scene nodes.
//!
//! A [`Transform`] holds the position, rotation, and scale of one node.
//! Unlike a free-standing transform hierarchy, parenting lives in the scene
//! graph itself: the graph's update traversal composes each node's local
//! matrix with its parent's world matrix.

use glam::{Mat4, Quat, Vec3};

/// A transform representing position, rotation, and scale.
///
/// Every node created through [`Scene::create_node`](crate::Scene) gets a
/// default transform attached; the slot can be replaced or cleared like any
/// other capability slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform {
    /// Position in local space (relative to the parent node, if any)
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Get the local transformation matrix.
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the normal matrix (inverse transpose) for a world matrix.
    ///
    /// If the matrix is not invertible (e.g. contains zero scale), the
    /// identity matrix is returned to avoid NaN/Inf values.
    pub fn normal_matrix(world: Mat4) -> Mat4 {
        const EPSILON: f32 = 1e-6;
        let det = world.determinant();
        if det.abs() < EPSILON {
            Mat4::IDENTITY
        } else {
            world.inverse().transpose()
        }
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the right direction vector.
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq_vec3(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn test_transform_builder() {
        let t = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(Vec3::splat(2.0));

        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vec3::splat(2.0));
    }

    #[test]
    fn test_local_matrix_translation() {
        let t = Transform::new().with_position(Vec3::new(1.0, 2.0, 3.0));
        let p = t.local_matrix().transform_point3(Vec3::ZERO);
        assert!(approx_eq_vec3(p, Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_normal_matrix_identity() {
        assert_eq!(Transform::normal_matrix(Mat4::IDENTITY), Mat4::IDENTITY);
    }

    #[test]
    fn test_normal_matrix_with_scale() {
        let world = Transform::new()
            .with_scale(Vec3::new(1.0, 2.0, 1.0))
            .local_matrix();
        assert_eq!(
            Transform::normal_matrix(world),
            world.inverse().transpose()
        );
    }

    #[test]
    fn test_normal_matrix_non_invertible() {
        let world = Transform::new().with_scale(Vec3::ZERO).local_matrix();
        let normal = Transform::normal_matrix(world);

        // Identity fallback, no NaN values.
        assert_eq!(normal, Mat4::IDENTITY);
    }

    #[test]
    fn test_direction_vectors() {
        let t = Transform::default();

        // Default orientation: -Z forward, +X right, +Y up.
        assert_eq!(t.forward(), Vec3::NEG_Z);
        assert_eq!(t.right(), Vec3::X);
        assert_eq!(t.up(), Vec3::Y);
    }

    #[test]
    fn test_rotated_direction_vectors() {
        let t = Transform::new()
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!(approx_eq_vec3(t.forward(), Vec3::NEG_X));
        assert!(approx_eq_vec3(t.right(), Vec3::NEG_Z));
    }
}
