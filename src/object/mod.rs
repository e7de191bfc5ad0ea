mod plane;
mod sphere;

use serde::Deserialize;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

pub use plane::*;
pub use sphere::*;

/// The result of a ray intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Signed parametric distance along the ray. Intersections behind the
    /// ray origin carry a negative distance and are filtered by the caller.
    pub distance: f64,
    /// World-space hit location.
    pub point: Vector3,
}

impl Intersection {
    pub fn new(distance: f64, point: Vector3) -> Self {
        Self { distance, point }
    }
}

/// An intersection paired with the object it landed on.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub intersection: Intersection,
    pub object: &'a SceneObject,
}

/// Anything that can sit in a scene. The `type` field of a scene file picks
/// the variant; unknown types are rejected when the file is read.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Sphere(Sphere),
    Plane(Plane),
}

impl SceneObject {
    /// Find the intersection, if any, between the ray provided and this object.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray),
            SceneObject::Plane(plane) => plane.intersect(ray),
        }
    }

    /// The surface normal at a point on this object.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        match self {
            SceneObject::Sphere(sphere) => (point - sphere.center).normalize(),
            SceneObject::Plane(plane) => plane.normal,
        }
    }

    /// Grab this scene object's material.
    pub fn material(&self) -> &Material {
        match self {
            SceneObject::Sphere(sphere) => &sphere.material,
            SceneObject::Plane(plane) => &plane.material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_normal_points_away_from_the_center() {
        let object = SceneObject::Sphere(Sphere::new(
            Vector3::new(0., 0., -5.),
            1.,
            Material::default(),
        ));

        let normal = object.normal_at(Vector3::new(0., 0., -4.));

        assert!((normal - Vector3::new(0., 0., 1.)).magnitude() < 1e-12);
    }

    #[test]
    fn tagged_variants_deserialize() {
        let object: SceneObject = serde_json::from_str(
            r#"{
                "type": "sphere",
                "center": [0, 0, -5],
                "radius": 2,
                "color": [255, 0, 0],
                "ambientK": 0.1,
                "diffuseK": 0.7,
                "specularExponent": 16,
                "reflectiveK": 0.0
            }"#,
        )
        .unwrap();

        match object {
            SceneObject::Sphere(sphere) => {
                assert_eq!(sphere.radius, 2.);
                assert_eq!(sphere.material.color, Vector3::new(255., 0., 0.));
            }
            SceneObject::Plane(_) => panic!("expected a sphere"),
        }
    }

    #[test]
    fn unknown_variants_are_rejected() {
        let result: Result<SceneObject, _> = serde_json::from_str(
            r#"{ "type": "torus", "center": [0, 0, 0] }"#,
        );

        assert!(result.is_err());
    }
}
