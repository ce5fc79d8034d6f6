// Renders the configured scene once and writes the color and depth buffers.
// Run with: cargo run --release -- [config.json] [output_dir]

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use scanz_renderer::{output, ConfigFile, Framebuffer, Renderer};

/// Command-line arguments (both positional, both optional).
struct Args {
    config: Option<PathBuf>,
    output_dir: PathBuf,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let config = args.next().map(PathBuf::from);
        let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

        if let Some(extra) = args.next() {
            anyhow::bail!("unexpected argument '{}'\nUsage: scanz [config.json] [output_dir]", extra);
        }

        Ok(Self { config, output_dir })
    }
}

fn load_config(path: Option<&Path>) -> Result<(ConfigFile, String)> {
    match path {
        Some(path) => {
            let config = ConfigFile::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scene".to_string());
            Ok((config, name))
        }
        None => {
            log::info!("No config given, rendering the sample scene");
            Ok((ConfigFile::default(), "sample".to_string()))
        }
    }
}

fn save_all(framebuffer: &Framebuffer, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    output::save_ppm(framebuffer, dir.join("output.ppm")).context("Failed to save output.ppm")?;
    output::save_depth_pgm(framebuffer, dir.join("zbuffer.pgm"))
        .context("Failed to save zbuffer.pgm")?;
    output::save_png(framebuffer, dir.join("output.png")).context("Failed to save output.png")?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;
    let (config, name) = load_config(args.config.as_deref())?;
    let scene = config.scene(name);

    let renderer = Renderer::new(config.render);

    let start = Instant::now();
    let result = renderer.render(&scene);
    log::info!("Rendered in {:?}", start.elapsed());

    if result.stats.skipped > 0 {
        log::warn!(
            "{} of {} triangles were degenerate and skipped",
            result.stats.skipped,
            result.stats.triangles
        );
    }

    save_all(&result.framebuffer, &args.output_dir)?;
    log::info!(
        "Done: {} pixels covered",
        result.framebuffer.covered_pixels()
    );

    Ok(())
}
