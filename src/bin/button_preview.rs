//! Renders a button props file to HTML or CSS.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use styled_button::{ButtonProps, PropsFormat};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl From<Format> for PropsFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => PropsFormat::Json,
            Format::Yaml => PropsFormat::Yaml,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "button-preview", about = "Render button props to HTML", version)]
struct Cli {
    /// Props file (.json, .yaml or .yml)
    props: PathBuf,

    /// Override the format inferred from the file extension
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Print the resolved inline CSS instead of HTML
    #[arg(long)]
    css: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<ButtonProps> {
    let props = match cli.format {
        Some(format) => {
            let source = std::fs::read_to_string(&cli.props)
                .with_context(|| format!("reading {}", cli.props.display()))?;
            PropsFormat::from(format).parse(&source)?
        }
        None => ButtonProps::from_path(&cli.props)?,
    };
    Ok(props)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let props = load(&cli).with_context(|| format!("loading {}", cli.props.display()))?;
    let button = props.render();

    if cli.css {
        println!("{}", button.style().to_css());
    } else {
        println!("{}", button.to_html().context("rendering button")?);
    }
    Ok(())
}
