//! Pick volumes for ray picking.
//!
//! A pick volume is the shape the picking traversal tests rays against. A
//! node with no pick volume is transparent to picking even when it renders.

use glam::Vec3;

/// Shape tested during ray picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickVolume {
    /// A sphere around `center`.
    Sphere { center: Vec3, radius: f32 },
    /// An axis-aligned box between `min` and `max`.
    Aabb { min: Vec3, max: Vec3 },
}

impl PickVolume {
    /// True when `point` lies inside (or on) the volume.
    pub fn contains(&self, point: Vec3) -> bool {
        match *self {
            PickVolume::Sphere { center, radius } => point.distance_squared(center) <= radius * radius,
            PickVolume::Aabb { min, max } => {
                point.cmpge(min).all() && point.cmple(max).all()
            }
        }
    }

    /// Intersect a ray with the volume.
    ///
    /// `direction` must be non-zero but need not be normalized. Returns the
    /// smallest non-negative `t` with `origin + t * direction` on the
    /// volume's surface, or `None` when the ray misses. A ray starting
    /// inside the volume hits at `t = 0`.
    pub fn raycast(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        match *self {
            PickVolume::Sphere { center, radius } => {
                let to_origin = origin - center;
                let a = direction.length_squared();
                let b = 2.0 * to_origin.dot(direction);
                let c = to_origin.length_squared() - radius * radius;
                if c <= 0.0 {
                    return Some(0.0);
                }
                let discriminant = b * b - 4.0 * a * c;
                if discriminant < 0.0 {
                    return None;
                }
                let t = (-b - discriminant.sqrt()) / (2.0 * a);
                (t >= 0.0).then_some(t)
            }
            PickVolume::Aabb { min, max } => {
                // Slab test.
                let mut t_enter = f32::NEG_INFINITY;
                let mut t_exit = f32::INFINITY;
                for axis in 0..3 {
                    let o = origin[axis];
                    let d = direction[axis];
                    if d.abs() < f32::EPSILON {
                        if o < min[axis] || o > max[axis] {
                            return None;
                        }
                        continue;
                    }
                    let t0 = (min[axis] - o) / d;
                    let t1 = (max[axis] - o) / d;
                    t_enter = t_enter.max(t0.min(t1));
                    t_exit = t_exit.min(t0.max(t1));
                }
                if t_enter > t_exit || t_exit < 0.0 {
                    return None;
                }
                Some(t_enter.max(0.0))
            }
        }
    }
}
