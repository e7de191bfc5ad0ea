use serde::Deserialize;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

use super::Intersection;

/// An infinite plane through `center` with unit `normal`. Normals are
/// renormalized when a scene file is loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Plane {
    pub center: Vector3,
    pub normal: Vector3,
    #[serde(flatten)]
    pub material: Material,
}

impl Plane {
    pub fn new(center: Vector3, normal: Vector3, material: Material) -> Self {
        Self {
            center,
            normal,
            material,
        }
    }

    /// Intersect a ray with the plane. Only an exactly parallel ray misses;
    /// there is no backface culling, and an intersection behind the ray
    /// origin is reported with a negative distance.
    #[allow(clippy::float_cmp)]
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let denom = self.normal.dot(ray.direction);
        if denom == 0. {
            return None;
        }

        let t = (self.center - ray.origin).dot(self.normal) / denom;
        Some(Intersection::new(t, ray.along(t)))
    }
}
