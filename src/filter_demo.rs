//! Image filter demos: thresholding and region redaction.

use std::path::PathBuf;

use clap::Args;

use hullvis_core::raster;
use hullvis_cv::blur;
use hullvis_cv::{FrameIo, Region, Result};

#[derive(Args)]
pub struct ThresholdArgs {
    /// Image to process
    #[arg(long)]
    pub image: PathBuf,

    /// Threshold level; pixels below it become black
    #[arg(long, default_value_t = 128)]
    pub level: i32,

    /// Output path
    #[arg(long, default_value = "thresholded.png")]
    pub out: PathBuf,
}

pub fn run_threshold(args: ThresholdArgs) -> Result<()> {
    let mut frame = FrameIo::load_gray(&args.image)?;
    let (width, height) = frame.dimensions();

    let data: &mut [u8] = &mut frame;
    raster::threshold(data, width as usize, height as usize, args.level);

    FrameIo::save_gray(&frame, &args.out)?;
    println!(
        "Thresholded {}x{} frame at level {} -> {:?}",
        width, height, args.level, args.out
    );
    Ok(())
}

#[derive(Args)]
pub struct RedactArgs {
    /// Image to process
    #[arg(long)]
    pub image: PathBuf,

    /// Region to blur, as x,y,w,h
    #[arg(long)]
    pub region: Region,

    /// Kernel size override; derived from the region height when omitted
    #[arg(long)]
    pub kernel: Option<u32>,

    /// Output path
    #[arg(long, default_value = "redacted.png")]
    pub out: PathBuf,
}

pub fn run_redact(args: RedactArgs) -> Result<()> {
    let mut frame = FrameIo::load_gray(&args.image)?;

    let ksize = args
        .kernel
        .unwrap_or_else(|| blur::kernel_for_region(&args.region));
    blur::median_blur_region(&mut frame, args.region, ksize)?;

    FrameIo::save_gray(&frame, &args.out)?;
    println!(
        "Blurred region {:?} with a {ksize}x{ksize} kernel -> {:?}",
        args.region, args.out
    );
    Ok(())
}
