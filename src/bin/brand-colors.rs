use anyhow::{Context, Result};
use brand_palette::{ExtractOptions, extract_colors_from_images, is_near_grayscale};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Derive a brand color palette from a business's images.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image URLs (http/https) or local paths; logo/brand assets are tried first
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Maximum number of images to sample
    #[arg(short = 'n', long, default_value_t = 5)]
    max_images: usize,

    /// Palette colors extracted per image
    #[arg(short = 'k', long, default_value_t = 5)]
    colors_per_image: usize,

    /// Pixel sampling stride (larger is faster and coarser)
    #[arg(short, long, default_value_t = 10)]
    quality: usize,

    /// Images fetched concurrently
    #[arg(short, long, default_value_t = 4)]
    concurrency: usize,

    /// Keep near-grayscale colors
    #[arg(long)]
    no_filter: bool,

    /// Print colors and frequencies as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> ExtractOptions {
        ExtractOptions {
            max_images: self.max_images,
            colors_per_image: self.colors_per_image,
            quality: self.quality,
            concurrency: self.concurrency,
        }
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "brand_palette=debug,info"
    } else {
        "brand_palette=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let mut result = extract_colors_from_images(&args.inputs, &args.options())
        .await
        .context("color extraction failed")?;

    if !args.no_filter {
        result.colors.retain(|c| !is_near_grayscale(c));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for color in &result.colors {
            println!("{color}");
        }
    }

    Ok(())
}
