//! marktree CLI - render one Markdown document to an HTML fragment

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use marktree::{RenderOptions, Renderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marktree")]
#[command(about = "Convert a Markdown document to HTML")]
struct Cli {
    /// Input Markdown file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output HTML file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quote attribute values with `'` instead of `"`
    #[arg(long)]
    single_quote: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let markdown = read_input(&cli.input)?;

    let mut options = RenderOptions::default();
    if cli.single_quote {
        options.attribute_quote = '\'';
    }

    let html = Renderer::with_options(options)
        .render(&markdown)
        .with_context(|| format!("failed to render {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), "wrote html");
        }
        None => io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }

    fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
