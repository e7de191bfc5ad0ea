use rayon::prelude::*;
use serde::Deserialize;

use crate::{
    camera::Camera,
    lighting::{self, Light},
    material::Color,
    math::{Ray, Vector3},
    object::{Hit, SceneObject},
};

/// Render configuration. Defaults are provided; a scene file may override
/// any field from its `options` block. All three shading terms start
/// disabled, so an empty configuration renders black.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Hard ceiling on the bounce depth a trace may request.
    pub max_depth: u32,
    /// Requested bounce depth for this render.
    #[serde(alias = "sliderDepth")]
    pub current_depth: u32,
    pub ambient_enabled: bool,
    pub diffuse_enabled: bool,
    pub specular_enabled: bool,
    /// Gates whether any non-zero depth is requested at all.
    pub reflection_enabled: bool,
    /// Returned for traces past the depth ceiling.
    pub background_color: Vector3,
    /// Offset applied along secondary ray directions so shadow and
    /// reflection rays do not re-strike the surface that spawned them.
    pub bias: f64,
    /// Output raster size, stamped onto the camera before rendering.
    pub width: u32,
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 5,
            current_depth: 0,
            ambient_enabled: false,
            diffuse_enabled: false,
            specular_enabled: false,
            reflection_enabled: false,
            background_color: Vector3::new(190., 210., 215.),
            bias: 0.001,
            width: 800,
            height: 600,
        }
    }
}

impl RenderOptions {
    /// The depth actually traced: reflections off pins it to zero, and
    /// turning them on with no requested depth still traces one bounce.
    pub fn effective_depth(&self) -> u32 {
        if !self.reflection_enabled {
            0
        } else if self.current_depth == 0 {
            1
        } else {
            self.current_depth
        }
    }
}

/// A scene, which contains a list of objects, lights, and a camera to
/// render from. Read-only while a frame renders.
#[derive(Clone, Debug, Deserialize)]
pub struct Scene {
    pub camera: Camera,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// The closest forward hit along `ray`. Intersections at or behind the
    /// ray origin are discarded, and scene order breaks exact distance ties
    /// in favor of the earlier object.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for object in &self.objects {
            let intersection = match object.intersect(ray) {
                Some(intersection) if intersection.distance > 0. => intersection,
                _ => continue,
            };

            let nearer = match &closest {
                Some(best) => intersection.distance < best.intersection.distance,
                None => true,
            };
            if nearer {
                closest = Some(Hit {
                    intersection,
                    object,
                });
            }
        }

        closest
    }

    /// The closest hit after walking `level` mirror bounces from `ray`.
    /// Level 0 is the primary hit; a deeper level reflects off each struck
    /// surface in turn and reports only the terminal hit of the chain.
    pub fn closest_hit_at(&self, ray: &Ray, level: u32, bias: f64) -> Option<Hit> {
        if level == 0 {
            return self.closest_hit(ray);
        }

        let hit = self.closest_hit(ray)?;
        let normal = hit.object.normal_at(hit.intersection.point);
        let reflected = ray.reflect(hit.intersection.point, normal, bias);
        self.closest_hit_at(&reflected, level - 1, bias)
    }

    /// Trace a primary ray into a color by summing the shaded terminal hit
    /// of every bounce level from 0 through `depth`. Contributions past the
    /// first are attenuated by the primary surface's reflective coefficient.
    /// `None` means no level struck anything; a `depth` past the configured
    /// ceiling short-circuits to the background color.
    pub fn trace(&self, ray: &Ray, depth: u32, options: &RenderOptions) -> Option<Vector3> {
        if depth > options.max_depth {
            return Some(options.background_color);
        }

        let mut final_color: Option<Vector3> = None;
        let mut primary_reflective = 0.;

        for level in 0..=depth {
            let hit = match self.closest_hit_at(ray, level, options.bias) {
                Some(hit) => hit,
                None => continue,
            };

            let color = lighting::shade(self, ray, &hit, options);
            final_color = match final_color {
                Some(total) => Some(total + color * primary_reflective),
                None => {
                    primary_reflective = hit.object.material().reflective_k;
                    Some(color)
                }
            };
        }

        final_color
    }

    /// Render the frame as a row-major list of output colors. Pixels whose
    /// trace contributes nothing stay black. This is the only parallel part
    /// of the pipeline: pixels are independent, so rayon fans them out
    /// across cores.
    pub fn render(&self, options: &RenderOptions) -> Vec<Color> {
        let viewport = self.camera.viewport();
        let depth = options.effective_depth();
        let (width, height) = (self.camera.width, self.camera.height);

        (0..width * height)
            .into_par_iter()
            .map(|i| {
                let ray = viewport.primary_ray(i % width, i / width);
                self.trace(&ray, depth, options)
                    .map(Color::from)
                    .unwrap_or_else(Color::black)
            })
            .collect()
    }

    /// Render the frame out to the desired save file.
    pub fn render_to(
        &self,
        path: &str,
        format: image::ImageFormat,
        options: &RenderOptions,
    ) -> image::ImageResult<()> {
        let rendered = self.render(options);

        let mut imgbuf: image::RgbImage =
            image::ImageBuffer::new(self.camera.width, self.camera.height);

        for (i, color) in rendered.into_iter().enumerate() {
            imgbuf.put_pixel(
                i as u32 % self.camera.width,
                i as u32 / self.camera.width,
                image::Rgb([color.r, color.g, color.b]),
            );
        }

        imgbuf.save_with_format(path, format)
    }
}
