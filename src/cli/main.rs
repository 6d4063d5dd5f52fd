use anyhow::{Context, Result};
use clap::Parser;
use imgsim::{compare_images, CompareConfig, RawImageInput, ResampleFilter};
use imgsim_tools::common::utils::init_logger_exe;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Compare two images and report whether they look alike", long_about = None)]
struct Cli {
    #[arg(long, help = "first image (png, jpeg, gif, webp, tiff, bmp, ico, etc)")]
    image1: PathBuf,
    #[arg(long, help = "second image")]
    image2: PathBuf,
    #[arg(
        long,
        help = "resampling filter: nearest, bilinear, catmull-rom, gaussian, lanczos3",
        default_value = "bilinear"
    )]
    filter: String,
    #[arg(
        long,
        help = "decode the images one after the other instead of concurrently",
        default_value_t = false
    )]
    sequential: bool,
    #[arg(long, help = "print the result as JSON", default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() {
    init_logger_exe();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CompareConfig::new(ResampleFilter::from(cli.filter.as_str()), !cli.sequential);
    log::debug!(
        "Comparing {} and {} (filter {}, parallel {})",
        cli.image1.display(),
        cli.image2.display(),
        config.filter,
        config.parallel
    );

    let first = RawImageInput::from_path(&cli.image1)
        .with_context(|| format!("Cannot open {}", cli.image1.display()))?;
    let second = RawImageInput::from_path(&cli.image2)
        .with_context(|| format!("Cannot open {}", cli.image2.display()))?;

    let start = std::time::Instant::now();
    let result = compare_images(first, second, &config).await?;
    log::info!("Time taken: {:.2?}", start.elapsed());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}
