use std::ops::{Add, Div, Mul, Sub};

use serde::Deserialize;

/// A vector in 3D space. Also used for colors, with one channel per
/// component on a 0-255 scale.
#[derive(Clone, Copy, PartialEq, Debug, Default, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Vector3s.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: -self.x * other.z + self.z * other.x,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    /// The zero vector normalizes to itself.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            self
        } else {
            self / magnitude
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_cross() {
        let a = Vector3::new(1., 0., 0.);
        let b = Vector3::new(0., 1., 0.);

        assert_eq!(a.dot(b), 0.);
        assert_eq!(a.cross(b), Vector3::new(0., 0., 1.));
        assert_eq!(b.cross(a), Vector3::new(0., 0., -1.));
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = Vector3::new(3., 4., 0.).normalize();

        assert!((v.magnitude() - 1.).abs() < 1e-12);
        assert!((v.x - 0.6).abs() < 1e-12);
        assert!((v.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_stays_zero() {
        assert_eq!(Vector3::default().normalize(), Vector3::default());
    }

    #[test]
    fn deserializes_from_array() {
        let v: Vector3 = serde_json::from_str("[1.5, -2.0, 3.0]").unwrap();

        assert_eq!(v, Vector3::new(1.5, -2., 3.));
    }
}
