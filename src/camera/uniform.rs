use glam::Mat4;

use super::core::Camera;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view matrix and the cached camera state.
pub struct CameraUniform {
    /// View matrix (column-major).
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Distance between camera and look-at point.
    pub distance: f32,
    /// Look-at point in world space.
    pub look_at: [f32; 3],
    /// Azimuth in radians.
    pub phi: f32,
    /// Normalized up vector.
    pub top: [f32; 3],
    /// Pitch in radians.
    pub rho: f32,
    /// `sin(phi)`, `cos(phi)`, `sin(rho)`, `cos(rho)`.
    pub trig: [f32; 4],
    /// `sin` and `cos` of the shifted phi.
    pub phi_shift: [f32; 2],
    /// [`super::CameraQuadrant::index`] of the current octant.
    pub quadrant: u32,
    /// 1 when the camera is in its 2D (top-down, unrotated) view.
    pub is_2d: u32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::from_camera(&Camera::new())
    }
}

impl CameraUniform {
    /// Pack the given camera's current state.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            position: camera.position().to_array(),
            distance: camera.distance(),
            look_at: camera.look_at().to_array(),
            phi: camera.phi(),
            top: camera.top().to_array(),
            rho: camera.rho(),
            trig: [
                camera.sin_phi(),
                camera.cos_phi(),
                camera.sin_rho(),
                camera.cos_rho(),
            ],
            phi_shift: [camera.sin_phi_shift(), camera.cos_phi_shift()],
            quadrant: camera.quadrant().index(),
            is_2d: u32::from(camera.is_2d_view()),
        }
    }

    /// Refresh from the given camera's current state.
    pub fn update(&mut self, camera: &Camera) {
        *self = Self::from_camera(camera);
    }

    /// The view matrix as a glam matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.view)
    }
}
