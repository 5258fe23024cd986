//! Quilt CLI - validate documents and render the quilt to SVG.

use clap::{Parser, Subcommand};
use quilt_core::Size;
use quilt_data::AppState;
use quilt_render::QuiltRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "quilt")]
#[command(about = "Small-multiples sparkline quilt renderer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render both documents to an SVG file
    Render {
        /// Path to the dataset document
        #[arg(default_value = "data/recovery.json")]
        dataset: PathBuf,

        /// Path to the annotation document
        #[arg(default_value = "data/annotations.json")]
        annotations: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in pixels (the surface takes 60% of it)
        #[arg(long, default_value = "960")]
        height: f32,

        /// Output file
        #[arg(short, long, default_value = "quilt.svg")]
        output: PathBuf,
    },

    /// Check both documents for validity
    Check {
        /// Path to the dataset document
        #[arg(default_value = "data/recovery.json")]
        dataset: PathBuf,

        /// Path to the annotation document
        #[arg(default_value = "data/annotations.json")]
        annotations: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Render {
            dataset,
            annotations,
            width,
            height,
            output,
        } => {
            let state = load_state(&dataset, &annotations)?;
            let scene = QuiltRenderer::new(&state).render(Size::new(width, height));
            let svg = quilt_svg::to_svg(&scene);
            fs::write(&output, svg)
                .map_err(|e| format!("cannot write {}: {e}", output.display()))?;
            println!(
                "rendered {}x{} surface to {}",
                scene.size.width,
                scene.size.height,
                output.display()
            );
            Ok(())
        }
        Commands::Check {
            dataset,
            annotations,
        } => {
            let state = load_state(&dataset, &annotations)?;
            println!(
                "ok: {} categories, {} annotations",
                state.dataset.categories.len(),
                state.annotations.len()
            );
            Ok(())
        }
    }
}

/// Read and validate both documents; no rendering happens until both load.
fn load_state(dataset: &Path, annotations: &Path) -> Result<AppState, String> {
    let dataset_json = fs::read_to_string(dataset)
        .map_err(|e| format!("cannot read {}: {e}", dataset.display()))?;
    let annotations_json = fs::read_to_string(annotations)
        .map_err(|e| format!("cannot read {}: {e}", annotations.display()))?;
    AppState::from_json(&dataset_json, &annotations_json).map_err(|e| e.to_string())
}
