//! Integration test: build and mutate a small scene end to end.

use glam::Vec3;
use vantage_resources::Texture;
use vantage_scene::{Camera, CameraRig, Light, PickVolume, PointLight, Scene, Transform};
use vantage_shader::{ShaderRegistry, TemplateKind};

#[test]
fn test_build_and_mutate_scene() {
    let mut scene = Scene::new();
    let mut registry = ShaderRegistry::new();

    // A root holding a stereo rig, with two renderable children.
    let root = scene.create_node();
    scene.node_mut(root).unwrap().set_name("root");
    scene
        .node_mut(root)
        .unwrap()
        .attach_camera_rig(CameraRig::default());

    let texture = scene.add_texture(Texture::solid([128, 128, 128, 255]));
    let panel = scene.create_quad_node_with_texture(&mut registry, 1.6, 0.9, texture);
    let backdrop = scene.create_quad_node(&mut registry, 10.0, 10.0);
    scene.add_child(root, panel).unwrap();
    scene.add_child(root, backdrop).unwrap();

    // Both renderables share the one unlit template variant.
    assert_eq!(registry.len(), 1, "unlit template registered exactly once");
    assert_eq!(scene.renderables().count(), 2);

    // The panel gets picking and a light; the backdrop stays plain.
    scene.node_mut(panel).unwrap().attach_pick_volume(PickVolume::Aabb {
        min: Vec3::new(-0.8, -0.45, -0.01),
        max: Vec3::new(0.8, 0.45, 0.01),
    });
    scene
        .node_mut(panel)
        .unwrap()
        .attach_light(Light::Point(PointLight::default()));

    // Move the panel a meter forward of the root and update.
    scene
        .node_mut(panel)
        .unwrap()
        .attach_transform(Transform::new().with_position(Vec3::new(0.0, 0.0, -1.0)));
    scene.update();

    let world_pos = scene
        .node(panel)
        .unwrap()
        .world_matrix()
        .transform_point3(Vec3::ZERO);
    assert!((world_pos - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

    // A ray from the root's origin down -Z hits the panel's pick volume
    // (volumes are authored in local space; offset the ray accordingly).
    let volume = *scene.node(panel).unwrap().pick_volume().unwrap();
    assert!(volume.raycast(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z).is_some());

    // Iterate children, then restructure.
    let children: Vec<_> = scene.children(root).unwrap().collect();
    assert_eq!(children, vec![panel, backdrop]);

    scene.remove_child(root, backdrop).unwrap();
    assert_eq!(scene.child_count(root).unwrap(), 1);
    assert_eq!(scene.child_at(root, 0).unwrap(), panel);
    assert!(scene.parent(backdrop).is_none());

    // Attach a plain camera to a new child and verify slot independence.
    let eye = scene.create_node();
    scene.node_mut(eye).unwrap().attach_camera(Camera::default());
    scene.add_child(root, eye).unwrap();

    let root_node = scene.node(root).unwrap();
    assert!(root_node.camera_rig().is_some());
    assert!(root_node.camera().is_none(), "rig slot does not fill the camera slot");

    // Freeing the root orphans the remaining children but keeps them alive.
    scene.free_node(root).unwrap();
    assert!(scene.node(panel).is_some());
    assert!(scene.parent(panel).is_none());
    assert!(scene.node(root).is_none());
}

#[test]
fn test_shader_registry_drives_materials() {
    let mut scene = Scene::new();
    let mut registry = ShaderRegistry::new();

    let blend = registry.template_shader(TemplateKind::ColorBlend);
    let texture = scene.add_texture(Texture::solid([0, 0, 255, 255]));
    let node = scene.create_quad_node_with_shader(2.0, 2.0, texture, blend);

    let payload = scene.node(node).unwrap().render_payload().unwrap();
    assert_eq!(payload.material.shader, blend);

    let variant = registry.variant(blend).unwrap();
    assert_eq!(variant.uniform_descriptor, "float3 u_color float u_factor");
    assert_eq!(
        registry.lookup_shader(&variant.signature),
        Some(blend),
        "signature lookup returns the template's id"
    );
}
