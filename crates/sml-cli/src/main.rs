//! sml CLI - scene model export tool
//!
//! Converts JSON scene documents into SML (S-expression markup) text files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sml_export::{ExportSettings, Exporter};
use sml_ir::{Content, Document};

#[derive(Parser)]
#[command(name = "sml")]
#[command(about = "Export scene documents to SML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON scene document to an .sml file
    Export {
        /// Input scene document (.json)
        input: PathBuf,
        /// Output .sml file
        output: PathBuf,
        /// Optional TOML file with layout settings (tuple row widths)
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
    /// Display information about a JSON scene document
    Info {
        /// Path to the scene document
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            input,
            output,
            settings,
        } => export_file(&input, &output, settings.as_deref()),
        Commands::Info { file } => show_info(&file),
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Document::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}

fn export_file(input: &Path, output: &Path, settings: Option<&Path>) -> Result<()> {
    let doc = load_document(input)?;

    let settings = match settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            toml::from_str::<ExportSettings>(&text)
                .with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => ExportSettings::default(),
    };

    let file = fs::File::create(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let out = std::io::BufWriter::new(file);
    let mut out = Exporter::with_settings(&doc, out, settings)
        .export()
        .with_context(|| format!("failed to export {}", input.display()))?;
    out.flush()
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Exported {} -> {}", input.display(), output.display());
    Ok(())
}

fn show_info(path: &Path) -> Result<()> {
    let doc = load_document(path)?;

    println!("Active scene: {}", doc.active_scene);
    println!("Scenes: {}", doc.scenes.len());
    for scene in &doc.scenes {
        println!("  {} ({} objects)", scene.name, scene.objects.len());
    }

    let mut kinds: Vec<(&str, usize)> = Vec::new();
    for content in doc.datablocks.values() {
        let kind = match content {
            Content::Mesh(_) => "mesh",
            Content::Curve(_) => "curve",
            Content::Camera(_) => "camera",
            Content::Lamp(_) => "lamp",
            Content::Metaball(_) => "metaball",
            Content::Text(_) => "text",
            Content::Armature(_) => "armature",
        };
        match kinds.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, count)) => *count += 1,
            None => kinds.push((kind, 1)),
        }
    }
    kinds.sort();

    println!("Datablocks: {}", doc.datablocks.len());
    for (kind, count) in kinds {
        println!("  {kind}: {count}");
    }
    Ok(())
}
