// File: crates/evalplot/src/main.rs
// Summary: CLI entry point; parses arguments and invokes the core render routine.

use std::path::PathBuf;

use clap::Parser;
use evalplot_core::{render, RenderRequest};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plot evaluation results from CSV.")]
struct Args {
    /// Input CSV file with columns `epoch`, `probe_attr`, `loss`.
    #[arg(long)]
    csv: PathBuf,

    /// Path to save the output chart image.
    #[arg(long)]
    output: PathBuf,

    /// Title for the chart.
    #[arg(long, default_value = "Evaluation Results")]
    title: String,

    /// Color theme (light, dark); unknown names fall back to light.
    #[arg(long, default_value = "light")]
    theme: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let req = RenderRequest {
        csv_path: args.csv,
        output_path: args.output,
        title: args.title,
        theme: args.theme,
    };

    // Failures are already logged by the render routine; surface one
    // human-readable status line either way and terminate normally.
    match render(&req) {
        Ok(path) => println!("Chart successfully saved to {}", path.display()),
        Err(e) => println!("Error: {e}"),
    }
}
