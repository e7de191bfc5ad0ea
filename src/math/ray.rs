use super::Vector3;

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray. The direction is expected to be already normalized.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// The point along this ray at parametric distance `t`.
    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray off of a surface point and its normal. The new origin
    /// is nudged `bias` units along the reflected direction so the ray does
    /// not immediately re-strike the surface it left.
    pub fn reflect(&self, point: Vector3, normal: Vector3, bias: f64) -> Ray {
        let direction =
            (self.direction - normal * (2. * self.direction.dot(normal))).normalize();
        Ray::new(point + direction * bias, direction)
    }
}
