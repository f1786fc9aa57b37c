//! Layout Studio - A terminal editor for section-based page layouts
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use lstudio_core::prelude::*;

/// Layout Studio - A terminal editor for section-based page layouts
#[derive(Parser, Debug)]
#[command(name = "lstudio")]
#[command(about = "A terminal editor for section-based page layouts", long_about = None)]
struct Args {
    /// Project directory holding the layout file
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the normalized layout as JSON instead of opening the editor
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Get project path from args or use current directory
    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !project_path.is_dir() {
        eprintln!("❌ Not a directory: {}", project_path.display());
        eprintln!();
        eprintln!("Hint: pass the directory that holds (or will hold) layout.json:");
        eprintln!("      lstudio /path/to/site");
        std::process::exit(1);
    }

    if args.headless {
        layout_studio::run_headless(&project_path).await
    } else {
        layout_studio::run_with_project(&project_path).await
    }
}
