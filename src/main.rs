use std::env;
use std::process;
use std::time::Instant;

use raylite::loader;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let scene_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: raylite <scene.json> [output.png]");
            process::exit(2);
        }
    };
    let output_path = args.next().unwrap_or_else(|| "render.png".to_string());

    let (scene, options) = match loader::load_scene(&scene_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("failed to load {}: {}", scene_path, err);
            process::exit(1);
        }
    };

    log::info!(
        "rendering {}x{} at depth {} to {}",
        options.width,
        options.height,
        options.effective_depth(),
        output_path
    );
    let start_time = Instant::now();

    if let Err(err) = scene.render_to(&output_path, image::ImageFormat::Png, &options) {
        log::error!("failed to write {}: {}", output_path, err);
        process::exit(1);
    }

    log::info!("render complete in {:.2}s", start_time.elapsed().as_secs_f64());
}
