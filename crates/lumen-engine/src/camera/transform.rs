use glam::{Mat4, Vec4};

use super::CameraParameters;

/// World-to-view transform.
///
/// Builds the right-handed basis `w = -look`, `u = up × w`, `v = w × u`
/// and returns `R(u, v, w) · T(-position)`: the camera position lands on the
/// origin and its axes line up with world X/Y/Z.
///
/// Precondition: `look` and `up` are not parallel. This is not checked; a
/// degenerate basis produces NaNs.
pub fn view_matrix(camera: &CameraParameters) -> Mat4 {
    let w = -camera.look.normalize();
    let u = camera.up.cross(w).normalize();
    let v = w.cross(u);

    // Rows of the rotation are the basis vectors.
    let rotate = Mat4::from_cols(
        Vec4::new(u.x, v.x, w.x, 0.0),
        Vec4::new(u.y, v.y, w.y, 0.0),
        Vec4::new(u.z, v.z, w.z, 0.0),
        Vec4::W,
    );
    let translate = Mat4::from_translation(-camera.position);

    rotate * translate
}

/// Perspective projection with OpenGL clip conventions.
///
/// With `s = 1 / tan(fov_y / 2)`:
///
/// ```text
/// m[0][0] = s / aspect
/// m[1][1] = s
/// m[2][2] = -(far + near) / (far - near)
/// m[2][3] = -1                      (w_clip = -z_view)
/// m[3][2] = -2 · far · near / (far - near)
/// ```
///
/// Every other entry is zero. `z = -near` maps to NDC -1 and `z = -far` to
/// NDC +1. Argument order (far before near) follows the scene settings API.
pub fn projection_matrix(
    camera: &CameraParameters,
    aspect_ratio: f32,
    far_plane: f32,
    near_plane: f32,
) -> Mat4 {
    let scale = 1.0 / (camera.height_angle / 2.0).tan();
    let depth = far_plane - near_plane;

    Mat4::from_cols(
        Vec4::new(scale / aspect_ratio, 0.0, 0.0, 0.0),
        Vec4::new(0.0, scale, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(far_plane + near_plane) / depth, -1.0),
        Vec4::new(0.0, 0.0, -(2.0 * far_plane * near_plane) / depth, 0.0),
    )
}

/// `width / height` in physical pixels. `height` must be non-zero.
#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height as f32
}

/// Eye position implied by a view matrix: `inverse(view) · (0, 0, 0, 1)`.
///
/// The shader receives this rather than the raw camera position so lighting
/// always agrees with the transform actually used for the vertices.
#[inline]
pub fn eye_position(view: &Mat4) -> Vec4 {
    view.inverse() * Vec4::W
}

#[inline]
pub fn height_angle(camera: &CameraParameters) -> f32 {
    camera.height_angle
}

#[inline]
pub fn focal_length(camera: &CameraParameters) -> f32 {
    camera.focal_length
}

#[inline]
pub fn aperture(camera: &CameraParameters) -> f32 {
    camera.aperture
}
