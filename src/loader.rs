//! Scene-file loading and validation.
//!
//! A scene file is a single JSON document with `camera`, `lights`, and
//! `objects` sections plus an optional `options` block for the render
//! configuration. Geometry invariants are checked here, once, so the
//! tracer never has to.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::object::SceneObject;
use crate::scene::{RenderOptions, Scene};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("object {index}: sphere radius must be positive (got {radius})")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("object {index}: plane normal must not be zero-length")]
    DegenerateNormal { index: usize },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// On-disk scene document: the scene itself plus an optional options block.
#[derive(Debug, Deserialize)]
struct SceneFile {
    #[serde(flatten)]
    scene: Scene,
    #[serde(default)]
    options: RenderOptions,
}

/// Load a scene and its render options from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<(Scene, RenderOptions)> {
    let text = fs::read_to_string(path)?;
    parse_scene(&text)
}

/// Parse a scene document out of a JSON string, validate it, and stamp the
/// output dimensions onto the camera.
pub fn parse_scene(text: &str) -> LoadResult<(Scene, RenderOptions)> {
    let SceneFile { mut scene, options } = serde_json::from_str(text)?;

    validate(&mut scene)?;
    scene.camera.width = options.width;
    scene.camera.height = options.height;

    log::info!(
        "loaded scene: {} objects, {} lights, {}x{} viewport",
        scene.objects.len(),
        scene.lights.len(),
        options.width,
        options.height
    );

    Ok((scene, options))
}

fn validate(scene: &mut Scene) -> LoadResult<()> {
    for (index, object) in scene.objects.iter_mut().enumerate() {
        match object {
            SceneObject::Sphere(sphere) => {
                if sphere.radius <= 0. {
                    return Err(LoadError::InvalidRadius {
                        index,
                        radius: sphere.radius,
                    });
                }
            }
            SceneObject::Plane(plane) => {
                if plane.normal.magnitude() == 0. {
                    return Err(LoadError::DegenerateNormal { index });
                }
                plane.normal = plane.normal.normalize();
            }
        }

        let material = object.material();
        for (name, k) in [
            ("ambientK", material.ambient_k),
            ("diffuseK", material.diffuse_k),
            ("reflectiveK", material.reflective_k),
        ] {
            if !(0. ..=1.).contains(&k) {
                log::warn!("object {}: {} = {} is outside [0, 1]", index, name, k);
            }
        }
    }

    Ok(())
}
