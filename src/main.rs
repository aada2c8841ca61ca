use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use primgen::config::{FileConfig, defaults};
use primgen::mesh::{MeshData, obj_line_count, write_obj};
use primgen::shapes::{generate_cube, generate_pyramid, generate_tile};

/// Generate Wavefront OBJ primitive meshes for game asset pipelines
///
/// Examples:
///   # Generate the default primitive set into assets/models/primitives
///   primgen
///
///   # Write into a different asset root
///   primgen -o build/assets/models/primitives
///
///   # Taller barn roof
///   primgen --pyramid-height 0.8
///
///   # Use a config file
///   primgen --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "primgen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches primgen.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the generated OBJ files
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Half-extent of the square ground tile
    #[arg(long, default_value = "0.5")]
    tile_size: f32,

    /// Half-extent of the tower base cube
    #[arg(long, default_value = "0.45")]
    cube_size: f32,

    /// Side length of the roof pyramid's square base
    #[arg(long, default_value = "0.6")]
    pyramid_base: f32,

    /// Height of the roof pyramid apex
    #[arg(long, default_value = "0.5")]
    pyramid_height: f32,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output_dir.clone()))
        .unwrap_or_else(|| PathBuf::from(defaults::OUTPUT_DIR));
    let tile_size = if (args.tile_size - defaults::TILE_HALF_EXTENT).abs() > 1e-6 {
        args.tile_size
    } else {
        file_config
            .as_ref()
            .map(|c| c.tile_size)
            .unwrap_or(defaults::TILE_HALF_EXTENT)
    };
    let cube_size = if (args.cube_size - defaults::CUBE_HALF_EXTENT).abs() > 1e-6 {
        args.cube_size
    } else {
        file_config
            .as_ref()
            .map(|c| c.cube_size)
            .unwrap_or(defaults::CUBE_HALF_EXTENT)
    };
    let pyramid_base = if (args.pyramid_base - defaults::PYRAMID_BASE).abs() > 1e-6 {
        args.pyramid_base
    } else {
        file_config
            .as_ref()
            .map(|c| c.pyramid_base)
            .unwrap_or(defaults::PYRAMID_BASE)
    };
    let pyramid_height = if (args.pyramid_height - defaults::PYRAMID_HEIGHT).abs() > 1e-6 {
        args.pyramid_height
    } else {
        file_config
            .as_ref()
            .map(|c| c.pyramid_height)
            .unwrap_or(defaults::PYRAMID_HEIGHT)
    };
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    println!("primgen - Primitive Mesh Generator");
    println!("==================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Tile half-extent: {}", tile_size);
        println!("  Cube half-extent: {}", cube_size);
        println!("  Pyramid base: {}", pyramid_base);
        println!("  Pyramid height: {}", pyramid_height);
        println!("  Output directory: {}", output_dir.display());
        println!();
    }

    let assets: [(&str, MeshData); 3] = [
        ("tile_ground.obj", generate_tile(tile_size)),
        ("tower_base.obj", generate_cube(cube_size)),
        ("barn_roof.obj", generate_pyramid(pyramid_base, pyramid_height)),
    ];

    for (file_name, mesh) in &assets {
        let spinner = create_spinner(&format!("Writing {}...", file_name));
        let start = Instant::now();

        let path = output_dir.join(file_name);
        write_obj(mesh, &path).with_context(|| format!("Failed to write {}", path.display()))?;

        spinner.finish_with_message(format!(
            "{}: {} triangles, {} vertices, {} lines [{:.1}s]",
            file_name,
            mesh.triangle_count(),
            mesh.vertex_count(),
            obj_line_count(mesh),
            start.elapsed().as_secs_f32()
        ));
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_dir.display());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
