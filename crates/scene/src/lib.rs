//! Scene graph for the vantage engine.
//!
//! This crate provides the node tree the renderer traverses:
//! - [`Scene`]: arena-backed node storage and graph operations
//! - [`Node`]: capability slots (transform, render payload, camera,
//!   camera rig, pick volume, light)
//! - [`Transform`] hierarchy with world-matrix updates
//! - Camera and stereo camera rig
//! - Pick volumes for ray picking
//!
//! Nodes are addressed by [`NodeId`] handles; a freed node's handles go
//! stale and are rejected instead of aliasing reused storage.

mod camera;
mod error;
mod graph;
mod light;
mod node;
mod pick;
mod transform;

pub use camera::{Camera, CameraRig, Projection};
pub use error::{SceneError, SceneResult};
pub use graph::{Children, Scene};
pub use light::{DirectionalLight, Light, PointLight};
pub use node::{Node, NodeId, RenderPayload};
pub use pick::PickVolume;
pub use transform::Transform;
