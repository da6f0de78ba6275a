//! Mesh data and generators.

use glam::Vec3;
use vantage_core::Handle;

use crate::error::{ResourceError, ResourceResult};

/// Handle to a mesh stored in a scene's mesh arena.
pub type MeshHandle = Handle<Mesh>;

/// A mesh containing vertex and index data.
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Generate a rectangle centered on the origin in the XY plane.
    ///
    /// The quad faces +Z with counter-clockwise winding and covers the full
    /// texture coordinate range, v increasing downward. This is the geometry
    /// behind the width/height node constructors.
    pub fn quad(width: f32, height: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self {
            positions: vec![
                Vec3::new(-hw, -hh, 0.0),
                Vec3::new(hw, -hh, 0.0),
                Vec3::new(hw, hh, 0.0),
                Vec3::new(-hw, hh, 0.0),
            ],
            normals: vec![Vec3::Z; 4],
            tex_coords: vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            indices: vec![0, 1, 2, 0, 2, 3],
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Compute the axis-aligned bounding box of the vertex positions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::EmptyMesh`] for a mesh with no positions.
    pub fn aabb(&self) -> ResourceResult<(Vec3, Vec3)> {
        let first = *self.positions.first().ok_or(ResourceError::EmptyMesh)?;
        let mut min = first;
        let mut max = first;
        for p in &self.positions[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Ok((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_geometry() {
        let quad = Mesh::quad(2.0, 4.0);

        assert_eq!(quad.vertex_count(), 4);
        assert_eq!(quad.triangle_count(), 2);
        assert_eq!(quad.normals.len(), quad.positions.len());
        assert_eq!(quad.tex_coords.len(), quad.positions.len());

        let (min, max) = quad.aabb().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_quad_faces_forward() {
        let quad = Mesh::quad(1.0, 1.0);
        for n in &quad.normals {
            assert_eq!(*n, Vec3::Z, "quad normals must face +Z");
        }
        // CCW winding for the first triangle when viewed from +Z.
        let [a, b, c] = [0, 1, 2].map(|i| quad.positions[quad.indices[i] as usize]);
        let cross = (b - a).cross(c - a);
        assert!(cross.z > 0.0, "first triangle must wind counter-clockwise");
    }

    #[test]
    fn test_empty_mesh_has_no_aabb() {
        let mesh = Mesh::default();
        assert!(matches!(mesh.aabb(), Err(ResourceError::EmptyMesh)));
    }
}
