use glam::{Mat4, Vec2, Vec3, Vec4};
use orbit_core::Camera;

/// Compute a world-space ray from canvas backing-store pixel coordinates.
///
/// Returns `(ray_origin, ray_direction)`; the origin is the camera eye.
pub fn screen_to_world_ray(
    camera: &Camera,
    sx: f32,
    sy: f32,
    width: f32,
    height: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = camera.view_proj().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Project a world point to CSS pixels in a `width` x `height` viewport.
/// Points behind the camera or past the far plane yield `None`.
pub fn world_to_screen(view_proj: Mat4, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 1e-6 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Vec2::new(
        (ndc.x * 0.5 + 0.5) * width,
        (0.5 - ndc.y * 0.5) * height,
    ))
}

/// Billboard basis (right, up) in world space for a view matrix.
#[inline]
pub fn billboard_axes(view: Mat4) -> (Vec3, Vec3) {
    (view.row(0).truncate(), view.row(1).truncate())
}
