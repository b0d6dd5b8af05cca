//! Line-of-sight test for the flashlight beam.

use bevy_math::Vec3;

/// Whether a ray from `origin` along `dir` passes through the sphere at
/// `center` with the given `radius`.
///
/// The direction need not be normalized; a zero direction never hits.
/// Spheres behind the origin do not count.
pub fn ray_intersects_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> bool {
    let dir = dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return false;
    }

    let to_center = center - origin;
    let t = to_center.dot(dir);
    if t < 0.0 {
        return false;
    }

    let closest = origin + dir * t;
    closest.distance_squared(center) <= radius * radius
}
