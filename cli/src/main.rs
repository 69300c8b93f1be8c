//! texdoc CLI - build LaTeX documents from JSON manifests

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use texdoc::{Manifest, RenderOutcome};

#[derive(Parser)]
#[command(name = "texdoc")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Build LaTeX documents from JSON manifests and render them to PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a manifest and render it to PDF
    Build {
        /// Manifest file (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Resource folder for sources, images and output (no spaces)
        #[arg(short, long, value_name = "DIR")]
        folder: PathBuf,

        /// LaTeX engine executable
        #[arg(long, env = "TEXDOC_COMPILER", default_value = "pdflatex")]
        compiler: PathBuf,

        /// Output name without extension (defaults to a timestamp)
        #[arg(short, long)]
        name: Option<String>,

        /// Do not open the PDF after rendering
        #[arg(long)]
        no_open: bool,
    },

    /// Print the generated LaTeX without rendering
    Preview {
        /// Manifest file (JSON)
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Resource folder that receives copied images
        #[arg(short, long, value_name = "DIR", default_value = "texdoc-preview")]
        folder: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            manifest,
            folder,
            compiler,
            name,
            no_open,
        } => cmd_build(&manifest, &folder, compiler, name.as_deref(), no_open),
        Commands::Preview {
            manifest,
            folder,
            output,
        } => cmd_preview(&manifest, &folder, output.as_deref()).map(|_| 0),
        Commands::Version => {
            cmd_version();
            Ok(0)
        }
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns the renderer's exit code.
fn cmd_build(
    manifest: &Path,
    folder: &Path,
    compiler: PathBuf,
    name: Option<&str>,
    no_open: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let mut manifest = Manifest::from_file(manifest)?;
    if no_open {
        manifest.options.open_artifact = false;
    }

    let mut builder = manifest.build(compiler, folder)?;
    println!(
        "{} {} steps into {}",
        "Built".green(),
        manifest.steps.len(),
        builder.folder().root().display()
    );

    let outcome = builder.render(name)?;
    print_outcome(&outcome);
    Ok(outcome.exit_code)
}

fn print_outcome(outcome: &RenderOutcome) {
    if outcome.success() {
        println!("\n{}", "Output files:".green().bold());
        println!("  {} {}", "├─".dimmed(), outcome.source.display());
        println!("  {} {}", "└─".dimmed(), outcome.artifact.display());
    } else {
        println!(
            "{} renderer exited with code {}; see the log next to {}",
            "Failed:".red().bold(),
            outcome.exit_code,
            outcome.source.display()
        );
    }

    let stats = &outcome.stats;
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Elements".bold(), stats.element_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Charts".bold(), stats.chart_count);
    println!("{}: {}", "Lists".bold(), stats.list_count);
}

fn cmd_preview(
    manifest: &Path,
    folder: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let markup = texdoc::preview_manifest(manifest, folder)?;

    if let Some(path) = output {
        fs::write(path, &markup)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markup);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "texdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("LaTeX document assembly tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::try_parse_from([
            "texdoc", "build", "doc.json", "--folder", "out", "--name", "report", "--no-open",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                manifest,
                folder,
                name,
                no_open,
                ..
            } => {
                assert_eq!(manifest, PathBuf::from("doc.json"));
                assert_eq!(folder, PathBuf::from("out"));
                assert_eq!(name.as_deref(), Some("report"));
                assert!(no_open);
            }
            _ => panic!("Expected build command"),
        }
    }

    #[test]
    fn test_preview_to_file() {
        let temp = tempfile::tempdir().unwrap();
        let manifest = temp.path().join("doc.json");
        fs::write(
            &manifest,
            r#"{"steps": [{"type": "paragraph", "heading": "H", "text": "Body"}]}"#,
        )
        .unwrap();
        let output = temp.path().join("doc.tex");

        cmd_preview(&manifest, &temp.path().join("out"), Some(&output)).unwrap();

        let markup = fs::read_to_string(&output).unwrap();
        assert!(markup.contains("\\paragraph{H}\nBody\n\\end{document}"));
    }
}
