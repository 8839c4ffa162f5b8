use anyhow::Result;
use clap::Parser;
use colored::*;
use md2pdf_prep::{BuildRequest, Builder, ConfigSource, DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "md2pdf-prep")]
#[command(about = "Build templates for md2pdf.")]
#[command(version = "0.1.0")]
struct Args {
    /// Output directory for generated md2pdf files
    #[arg(value_name = "OUTDIR")]
    output_dir: PathBuf,

    /// Content MD files to append in resultant MD file
    #[arg(value_name = "CONTENTFILES", required = true, num_args = 1..)]
    content_mds: Vec<PathBuf>,

    /// The CSS file for styling the resultant MD file
    #[arg(long)]
    css: Option<PathBuf>,

    /// Header MD content to append to resultant MD file
    #[arg(long)]
    header: Option<PathBuf>,

    /// Footer MD file (checked for existence, content not used)
    #[arg(long)]
    footer: Option<PathBuf>,

    /// JSON file with the document title and metadata
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("md2pdf_prep=info".parse()?);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
    Ok(())
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to set up logging: {e}");
    }

    let args = Args::parse();

    let request = BuildRequest::new(args.output_dir, args.content_mds)
        .with_css(args.css)
        .with_header(args.header)
        .with_footer(args.footer);

    let builder = Builder::new(request, ConfigSource::File(args.config));

    match builder.run() {
        Ok(outputs) => {
            info!("Wrote {}", outputs.content.display().to_string().green());
            info!("Wrote {}", outputs.style.display().to_string().green());
        }
        Err(e) => {
            error!("{}", e.to_string().red());
            process::exit(e.exit_code());
        }
    }
}
