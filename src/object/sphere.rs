use serde::Deserialize;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

use super::Intersection;

/// A sphere.
#[derive(Debug, Clone, Deserialize)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
    #[serde(flatten)]
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Solve the ray/sphere quadratic for the near root. A tangent ray
    /// (zero discriminant) counts as a miss, and only the near root is ever
    /// reported, so a ray started inside the sphere yields a negative
    /// distance rather than the forward far root.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = (ray.direction * 2.).dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant > 0. {
            let t = (-b - discriminant.sqrt()) / (2. * a);
            Some(Intersection::new(t, ray.along(t)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at_origin() -> Sphere {
        Sphere::new(Vector3::default(), 1., Material::default())
    }

    #[test]
    fn head_on_ray_hits_the_near_surface() {
        let sphere = Sphere::new(Vector3::default(), 2., Material::default());
        let ray = Ray::new(Vector3::new(0., 0., -10.), Vector3::new(0., 0., 1.));

        let intersection = sphere.intersect(&ray).unwrap();

        assert_eq!(intersection.distance, 8.);
        assert_eq!(intersection.point, Vector3::new(0., 0., -2.));
    }

    #[test]
    fn tangent_ray_misses() {
        // grazes the sphere at (0, 1, 0): the discriminant is exactly zero
        let ray = Ray::new(Vector3::new(0., 1., -10.), Vector3::new(0., 0., 1.));

        assert_eq!(unit_sphere_at_origin().intersect(&ray), None);
    }

    #[test]
    fn offset_ray_misses() {
        let ray = Ray::new(Vector3::new(0., 1.5, -10.), Vector3::new(0., 0., 1.));

        assert_eq!(unit_sphere_at_origin().intersect(&ray), None);
    }

    #[test]
    fn ray_from_the_center_reports_the_near_root_behind_it() {
        let ray = Ray::new(Vector3::default(), Vector3::new(0., 0., 1.));

        let intersection = unit_sphere_at_origin().intersect(&ray).unwrap();

        assert_eq!(intersection.distance, -1.);
    }
}
