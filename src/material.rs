use serde::Deserialize;

use crate::math::Vector3;

/// A 24-bit color, RGB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }
}

impl From<Vector3> for Color {
    /// Clamp a floating color on the 0-255 scale into an output color.
    /// Summed shading terms can overshoot the channel range.
    fn from(v: Vector3) -> Self {
        Self {
            r: v.x.clamp(0., 255.) as u8,
            g: v.y.clamp(0., 255.) as u8,
            b: v.z.clamp(0., 255.) as u8,
        }
    }
}

/// Surface properties shared by every scene object. `color` channels are on
/// a 0-255 scale; the coefficients are expected to sit in [0, 1].
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub color: Vector3,
    pub ambient_k: f64,
    pub diffuse_k: f64,
    pub specular_exponent: f64,
    pub reflective_k: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vector3::new(255., 255., 255.),
            ambient_k: 0.1,
            diffuse_k: 1.,
            specular_exponent: 32.,
            reflective_k: 0.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversion_clamps_overflow() {
        let c = Color::from(Vector3::new(300., -20., 127.9));

        assert_eq!(c, Color::new(255, 0, 127));
    }

    #[test]
    fn material_field_names_follow_the_scene_format() {
        let material: Material = serde_json::from_str(
            r#"{
                "color": [255, 0, 0],
                "ambientK": 0.1,
                "diffuseK": 0.7,
                "specularExponent": 16,
                "reflectiveK": 0.25
            }"#,
        )
        .unwrap();

        assert_eq!(material.color, Vector3::new(255., 0., 0.));
        assert_eq!(material.ambient_k, 0.1);
        assert_eq!(material.diffuse_k, 0.7);
        assert_eq!(material.specular_exponent, 16.);
        assert_eq!(material.reflective_k, 0.25);
    }
}
