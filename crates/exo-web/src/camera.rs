use glam::{Mat4, Vec3, Vec4};

#[inline]
/// Project a world-space point into canvas pixel coordinates.
///
/// - `view_proj`: combined projection * view matrix
/// - `width`, `height`: canvas backing store size in pixels
///
/// Returns `None` for points behind the camera or outside the depth range.
pub fn world_to_screen(view_proj: &Mat4, p: Vec3, width: f32, height: f32) -> Option<(f64, f64)> {
    let clip = *view_proj * Vec4::new(p.x, p.y, p.z, 1.0);
    if clip.w <= 1e-5 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    let sx = (ndc.x * 0.5 + 0.5) * width;
    let sy = (1.0 - (ndc.y * 0.5 + 0.5)) * height;
    Some((sx as f64, sy as f64))
}
