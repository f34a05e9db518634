//! Scan command - run the card-scan workflow on an image and its transcription.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use cardscan_core::scan::encode_data_url;
use cardscan_core::{ScanWorkflow, TranscriptDetector};

use super::load_config;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Card image (jpg, png, webp, gif, bmp, tiff)
    #[arg(long, required = true)]
    image: PathBuf,

    /// OCR transcription of the image
    #[arg(long, required = true)]
    transcript: PathBuf,

    /// Leave the echoed image out of the output
    #[arg(long)]
    no_image: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let media_type = image_media_type(&args.image)?;
    let bytes = fs::read(&args.image)?;
    let transcript = fs::read_to_string(&args.transcript)?;
    debug!("Read {} byte {} image", bytes.len(), media_type);

    let workflow = ScanWorkflow::with_config(TranscriptDetector::new(transcript), &config);
    let card = workflow.scan(&encode_data_url(media_type, &bytes))?;
    let card = if args.no_image { card.without_image() } else { card };

    let output = serde_json::to_string_pretty(&card)?;
    match &args.output {
        Some(path) => fs::write(path, output)?,
        None => println!("{}", output),
    }

    Ok(())
}

fn image_media_type(path: &Path) -> anyhow::Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let media_type = match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => anyhow::bail!("Unsupported image format: {}", extension),
    };

    Ok(media_type)
}
