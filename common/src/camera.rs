//! Pixel-space camera for canvas-style 2D drawing

use glam::{Mat4, Vec2};

/// Orthographic camera over canvas pixel coordinates
///
/// Canvas space has its origin in the top-left corner with +y pointing
/// down. At zoom 1 and no offset the whole `width × height` canvas fills
/// the window.
#[derive(Debug, Clone)]
pub struct ScreenCamera {
    pub offset: Vec2,
    pub zoom: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenCamera {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
            width,
            height,
        }
    }

    /// Canvas point shown in the middle of the window
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5 + self.offset
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let center = self.center();
        let half_width = self.width * 0.5 / self.zoom;
        let half_height = self.height * 0.5 / self.zoom;

        // bottom edge has the larger canvas y
        Mat4::orthographic_rh(
            center.x - half_width,
            center.x + half_width,
            center.y + half_height,
            center.y - half_height,
            -1.0,
            1.0,
        )
    }

    /// Pan by a fraction of the visible extent, so panning feels the same
    /// at every zoom level
    pub fn pan(&mut self, fraction: Vec2) {
        self.offset += fraction * Vec2::new(self.width, self.height) / self.zoom;
    }

    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom * (1.0 + delta * 0.1)).clamp(0.05, 20.0);
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_screen_camera(camera: &ScreenCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec3;

    #[test]
    fn canvas_corners_map_to_clip_corners() {
        let camera = ScreenCamera::new(800.0, 600.0);
        let m = camera.view_projection();

        let top_left = m.project_point3(Vec3::new(0.0, 0.0, 0.0));
        assert_abs_diff_eq!(top_left.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(top_left.y, 1.0, epsilon = 1e-6);

        let bottom_right = m.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert_abs_diff_eq!(bottom_right.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bottom_right.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn zoom_keeps_center_fixed() {
        let mut camera = ScreenCamera::new(800.0, 600.0);
        camera.zoom_by(5.0);
        let center = camera.view_projection().project_point3(Vec3::new(400.0, 300.0, 0.0));
        assert_abs_diff_eq!(center.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(center.y, 0.0, epsilon = 1e-6);
        assert!(camera.zoom > 1.0);
    }

    #[test]
    fn pan_moves_center_and_reset_restores_it() {
        let mut camera = ScreenCamera::new(800.0, 600.0);
        camera.pan(Vec2::new(0.1, 0.0));
        assert_abs_diff_eq!(camera.center().x, 480.0, epsilon = 1e-4);

        camera.reset();
        assert_eq!(camera.center(), Vec2::new(400.0, 300.0));
    }
}
