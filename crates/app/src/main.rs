//! Demo application: builds a small scene and reports what a renderer
//! would see.

use glam::Vec3;
use tracing::{error, info};

use vantage_core::version;
use vantage_resources::Texture;
use vantage_scene::{CameraRig, DirectionalLight, Light, PickVolume, Scene, Transform};
use vantage_shader::{make_layout, ShaderRegistry, TemplateKind};

fn run() -> vantage_core::Result<()> {
    let mut scene = Scene::new();
    let mut registry = ShaderRegistry::new();

    // Head node carrying the stereo rig.
    let head = scene.create_node();
    if let Some(node) = scene.node_mut(head) {
        node.set_name("head");
        node.attach_camera_rig(CameraRig::default());
    }

    // A sun, grouped under the head so the whole scene moves as a unit.
    let sun = scene.create_node();
    if let Some(node) = scene.node_mut(sun) {
        node.set_name("sun");
        node.attach_light(Light::Directional(DirectionalLight::default()));
    }
    scene.add_child(head, sun)?;

    // A textured panel one meter ahead, pickable.
    let texture = scene.add_texture(Texture::solid([200, 220, 255, 255]));
    let panel = scene.create_quad_node_with_texture(&mut registry, 1.6, 0.9, texture);
    if let Some(node) = scene.node_mut(panel) {
        node.set_name("panel");
        node.attach_transform(Transform::new().with_position(Vec3::new(0.0, 0.0, -1.0)));
        node.attach_pick_volume(PickVolume::Aabb {
            min: Vec3::new(-0.8, -0.45, -0.01),
            max: Vec3::new(0.8, 0.45, 0.01),
        });
    }
    scene.add_child(head, panel)?;

    // A color-blend variant alongside the standard one.
    let blend = registry.template_shader(TemplateKind::ColorBlend);
    let variant = registry.variant(blend)?;
    let layout = make_layout(&variant.uniform_descriptor, "Material", true)?;
    info!(shaders = registry.len(), "shader registry populated");
    info!("color-blend material block:\n{layout}");

    scene.update();
    info!(
        nodes = scene.node_count(),
        renderables = scene.renderables().count(),
        "scene built"
    );

    for child in scene.children(head)? {
        if let Some(node) = scene.node(child) {
            let pos = node.world_matrix().transform_point3(Vec3::ZERO);
            info!(name = node.name(), ?pos, renderable = node.is_renderable(), "child");
        }
    }

    Ok(())
}

fn main() {
    vantage_core::init_logging();
    info!(version = version::CURRENT, "vantage demo starting");

    if let Err(e) = run() {
        error!("demo failed: {e}");
        std::process::exit(1);
    }
}
