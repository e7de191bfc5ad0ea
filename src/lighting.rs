use serde::Deserialize;

use crate::{
    math::{Ray, Vector3},
    object::{Hit, SceneObject},
    scene::{RenderOptions, Scene},
};

/// Ambient coefficient applied to planes. Planes ignore their own ambientK;
/// spheres use theirs.
const PLANE_AMBIENT_K: f64 = 0.05;

/// Dampening applied to the summed diffuse and specular totals once per
/// shadowed light, so the effect compounds when several lights are occluded.
const SHADOW_DAMPENING: f64 = 0.2;

/// Specular highlights reflect a full-intensity white, not the object color.
const SPECULAR_WHITE: Vector3 = Vector3::new(255., 255., 255.);

/// A point light. Emits equally in all directions, with no falloff and no
/// color of its own.
#[derive(Clone, Debug, Deserialize)]
pub struct Light {
    pub position: Vector3,
}

/// Shade a hit from every light in the scene: an ambient term, Lambertian
/// diffuse, and a Blinn half-vector specular, each gated by its toggle in
/// `options`. `ray` is the primary ray, so its origin is the camera position.
pub fn shade(scene: &Scene, ray: &Ray, hit: &Hit, options: &RenderOptions) -> Vector3 {
    let material = hit.object.material();
    let point = hit.intersection.point;
    let normal = hit.object.normal_at(point);
    let view_dir = (ray.origin - point).normalize();

    let mut total_diffuse = 0.;
    let mut total_specular = 0.;
    for light in &scene.lights {
        let light_dir = (light.position - point).normalize();

        total_diffuse += normal.dot(light_dir).max(0.);

        let half_vector = (view_dir + light_dir).normalize();
        total_specular += normal
            .dot(half_vector)
            .max(0.)
            .powf(material.specular_exponent);
    }

    let ambient_k = match hit.object {
        SceneObject::Sphere(_) => material.ambient_k,
        SceneObject::Plane(_) => PLANE_AMBIENT_K,
    };
    let ambient = material.color * ambient_k;
    let mut diffuse = material.color * (total_diffuse * material.diffuse_k);
    let mut specular = SPECULAR_WHITE * total_specular;

    for light in &scene.lights {
        if in_shadow(scene, point, light, options.bias) {
            diffuse = diffuse * SHADOW_DAMPENING;
            specular = specular * SHADOW_DAMPENING;
        }
    }

    let mut color = Vector3::default();
    if options.ambient_enabled {
        color = ambient;
    }
    if options.diffuse_enabled {
        color = color + diffuse;
    }
    if options.specular_enabled {
        color = color + specular;
    }
    color
}

/// Whether `point` is occluded on its way to `light`. True only when some
/// object is struck strictly closer than the light itself; the shadow ray
/// starts `bias` units off the surface to avoid immediate self-intersection.
pub fn in_shadow(scene: &Scene, point: Vector3, light: &Light, bias: f64) -> bool {
    let light_vector = (light.position - point).normalize();
    let shadow_ray = Ray::new(point + light_vector * bias, light_vector);

    match scene.closest_hit(&shadow_ray) {
        Some(hit) => hit.intersection.distance < (light.position - point).magnitude(),
        None => false,
    }
}
