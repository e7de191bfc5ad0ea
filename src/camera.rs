use serde::Deserialize;

use crate::math::{Ray, Vector3};

/// A camera. `direction` is the point the camera looks at, not a direction
/// vector; the forward axis is derived from it when the viewport basis is
/// built. `width` and `height` belong to the output surface and are stamped
/// on before rendering rather than read from the scene file.
#[derive(Clone, Debug, Deserialize)]
pub struct Camera {
    pub position: Vector3,
    /// Look-at point.
    pub direction: Vector3,
    /// Horizontal field of view, in degrees.
    pub fov: f64,
    #[serde(skip)]
    pub width: u32,
    #[serde(skip)]
    pub height: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::default(),
            direction: Vector3::new(0., 0., -1.),
            fov: 60.,
            width: 300,
            height: 200,
        }
    }
}

impl Camera {
    /// Build the screen-to-world basis for the current viewport dimensions.
    pub fn viewport(&self) -> Viewport {
        let eye = (self.direction - self.position).normalize();
        let right = eye.cross(Vector3::new(0., 1., 0.)).normalize();
        let up = right.cross(eye).normalize();

        let half_width = (self.fov / 2. * std::f64::consts::PI / 180.).tan();
        let half_height = self.height as f64 / self.width as f64 * half_width;

        Viewport {
            origin: self.position,
            eye,
            right,
            up,
            half_width,
            half_height,
            pixel_width: half_width * 2. / (self.width as f64 - 1.),
            pixel_height: half_height * 2. / (self.height as f64 - 1.),
        }
    }
}

/// A camera's projection basis, fixed for one frame.
#[derive(Clone, Debug)]
pub struct Viewport {
    origin: Vector3,
    eye: Vector3,
    right: Vector3,
    up: Vector3,
    half_width: f64,
    half_height: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Viewport {
    /// The primary ray through pixel (x, y), where (0, 0) is the top-left
    /// corner of the image.
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let vx = self.right * (x as f64 * self.pixel_width - self.half_width);
        let vy = self.up * (y as f64 * self.pixel_height - self.half_height);
        Ray::new(self.origin, (self.eye + vx + vy).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_camera() -> Camera {
        Camera {
            position: Vector3::default(),
            direction: Vector3::new(0., 0., -5.),
            fov: 90.,
            width: 101,
            height: 101,
        }
    }

    #[test]
    fn center_pixel_looks_straight_ahead() {
        let ray = centered_camera().viewport().primary_ray(50, 50);

        assert_eq!(ray.origin, Vector3::default());
        assert!((ray.direction - Vector3::new(0., 0., -1.)).magnitude() < 1e-12);
    }

    #[test]
    fn corner_pixels_spread_by_the_field_of_view() {
        // 90 degrees across: the frustum half-extent equals the focal distance
        let viewport = centered_camera().viewport();

        let left = viewport.primary_ray(0, 50);
        let expected = Vector3::new(-1., 0., -1.).normalize();

        assert!((left.direction - expected).magnitude() < 1e-12);
    }

    #[test]
    fn look_at_point_fixes_the_forward_axis() {
        let camera = Camera {
            position: Vector3::new(10., 0., 0.),
            direction: Vector3::new(10., 0., 7.),
            fov: 60.,
            width: 11,
            height: 11,
        };

        let ray = camera.viewport().primary_ray(5, 5);

        assert!((ray.direction - Vector3::new(0., 0., 1.)).magnitude() < 1e-12);
    }
}
