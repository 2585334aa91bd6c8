use crate::config::{Config, load_config};
use crate::generator::{RenderedFigure, run_with_dump};
use crate::render::OutputFormat;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "netplots",
    version,
    about = "Render the star, tree, small-world and random network figures"
)]
pub struct Args {
    /// Existing directory the figures are written to [default: output]
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Output format [default: pdf]
    #[arg(short = 'e', long = "outputFormat", value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Seed for the randomized graphs and layouts; omit for a fresh draw
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Config file (JSON5) with theme overrides
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Write every generated graph and its node positions as JSON
    #[arg(long = "dump-layout")]
    pub dump_layout: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    let figures = run_with_dump(&config, args.dump_layout.as_deref())?;
    for figure in &figures {
        println!("{}", describe(figure));
    }
    Ok(())
}

/// Config file values, then command-line flags on top.
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(format) = args.output_format {
        config.output.format = format;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn describe(figure: &RenderedFigure) -> String {
    let panels: Vec<String> = figure
        .panels
        .iter()
        .map(|panel| format!("{} nodes/{} edges", panel.nodes, panel.edges))
        .collect();
    format!("{} ({})", figure.path.display(), panels.join(", "))
}
