//! ShapeKit CLI - inspect and generate scene documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use shapekit::{
    init_logging, render_items, scale_interaction, Config, HandleId, InteractionController,
    PointerEvent, Scene, TransformOrigin, Vec2,
};

/// ShapeKit CLI - work with scene documents
#[derive(Parser)]
#[command(name = "shapekit")]
#[command(about = "Inspect and generate ShapeKit scene documents")]
struct Cli {
    /// Settings file (.json or .toml); defaults to the platform config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print world-space render data for a scene document
    Inspect {
        /// Scene document to load
        file: PathBuf,

        /// Print JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },

    /// Build a sample scene, scale it with a drag and save it
    Demo {
        /// Where to write the scene document
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Inspect { file, json } => inspect(&config, &file, json),
        Commands::Demo { out } => demo(&config, &out),
    }
}

/// Loads an explicit config file, or the platform one when it exists.
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()));
    }
    match Config::default_config_path() {
        Ok(path) if path.exists() => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        _ => Ok(Config::default()),
    }
}

fn inspect(config: &Config, file: &Path, json: bool) -> Result<()> {
    let document = shapekit::SceneDocument::load_from_file(file)?;
    let scene = Scene::from_document(&document, config.scene.clone())?;
    let items = render_items(&scene)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{} ({} nodes)", document.metadata.name, scene.len());
    for item in items {
        let indent = "  ".repeat(item.depth);
        let bounds = item
            .bounds
            .map(|b| {
                format!(
                    "[{:.3}, {:.3}] - [{:.3}, {:.3}]",
                    b.min.x, b.min.y, b.max.x, b.max.y
                )
            })
            .unwrap_or_else(|| "empty".to_string());
        println!(
            "{}{} '{}' at ({:.3}, {:.3}) bounds {}",
            indent,
            item.kind,
            item.name,
            item.world_position.x,
            item.world_position.y,
            bounds
        );
    }
    Ok(())
}

fn demo(config: &Config, out: &Path) -> Result<()> {
    let mut scene = Scene::with_config(config.scene.clone());
    let root = scene.root();

    let square = vec![
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ];
    let triangle = vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(1.0, 2.0)];

    let left = scene.add_shape(root, "square", square)?;
    scene.set_position(left, Vec2::new(-3.0, 0.0))?;
    scene.set_rotation_degrees(left, 30.0)?;
    let right = scene.add_shape(root, "triangle", triangle)?;
    scene.set_position(right, Vec2::new(3.0, 1.0))?;
    scene.set_attribute(right, "fill", "#FFB000")?;

    let group = scene.group_children(root)?;

    // Scale the group to twice its size around its box center
    let handle = HandleId(1);
    let mut controller = InteractionController::new();
    controller.bind(scale_interaction(
        &config.interaction,
        handle,
        group,
        TransformOrigin::BoundingBoxCenter,
    ));
    let center = TransformOrigin::BoundingBoxCenter.resolve(&scene, group)?;
    let grab = center + Vec2::new(4.0, 2.0);
    controller.pointer_down(&mut scene, &PointerEvent::on(handle, grab))?;
    let release = center + Vec2::new(8.0, 4.0);
    controller.pointer_move(&mut scene, &PointerEvent::at(release))?;
    controller.pointer_up(&PointerEvent::at(release))?;

    let document = scene.to_document("demo")?;
    document.save_to_file(out)?;

    let mut config = config.clone();
    config.add_recent_file(out.to_path_buf());
    if let Ok(path) = Config::default_config_path() {
        if let Err(err) = config.save_to_file(&path) {
            tracing::warn!("Could not update recent files: {}", err);
        }
    }

    println!("Wrote {} nodes to {}", scene.len(), out.display());
    Ok(())
}
