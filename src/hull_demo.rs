//! Bouncing point cloud demo: simulate, hull, render, save frames.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use image::RgbImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hullvis_core::{ConvexHullBuilder, Point, PointCloud, SimConfig};
use hullvis_cv::overlay::{self, OverlayConfig};
use hullvis_cv::{FrameIo, Result, RunStats};

#[derive(Args)]
pub struct HullArgs {
    /// Background image; a black canvas is used when omitted
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Canvas width when no background image is given
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Canvas height when no background image is given
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Number of points to launch
    #[arg(long, default_value_t = 12)]
    pub points: usize,

    /// Number of simulation frames
    #[arg(long, default_value_t = 60)]
    pub frames: usize,

    /// RNG seed for point placement
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Directory for the rendered frames
    #[arg(long, default_value = "out")]
    pub out: PathBuf,

    /// Optional stats JSON path
    #[arg(long)]
    pub stats: Option<PathBuf>,
}

pub fn run(args: HullArgs) -> Result<()> {
    let background = match &args.image {
        Some(path) => FrameIo::load_rgb(path)?,
        None => RgbImage::new(args.width, args.height),
    };
    let (width, height) = background.dimensions();

    let sim = SimConfig {
        width: width as i32,
        height: height as i32,
        ..SimConfig::default()
    };

    // Each point comes from a random drag gesture: the release point is the
    // position, the drag vector gives a capped velocity.
    let mut cloud = PointCloud::new();
    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.points {
        let origin = Point::new(
            rng.gen_range(0..width as i32),
            rng.gen_range(0..height as i32),
        );
        let release = Point::new(
            rng.gen_range(0..width as i32),
            rng.gen_range(0..height as i32),
        );
        cloud.launch(origin, release, &sim);
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("Failed to create output directory: {:?}", args.out))?;

    let overlay_config = OverlayConfig::default();
    let mut builder = ConvexHullBuilder::new();
    let mut stats = RunStats {
        points: cloud.len(),
        ..RunStats::default()
    };
    let start = Instant::now();

    for frame_idx in 0..args.frames {
        stats.collisions += cloud.step(&sim);
        let hull = builder.compute(cloud.positions());

        let mut frame = background.clone();
        overlay::draw_hull(&mut frame, cloud.positions(), hull, &overlay_config);

        let path = args.out.join(format!("frame_{frame_idx:04}.png"));
        FrameIo::save_rgb(&frame, &path)?;

        stats.frames += 1;
        stats.hull_vertices = hull.len();
    }

    stats.processing_time_ms = start.elapsed().as_millis() as u64;

    println!("Hull demo completed:");
    println!("  - Frames rendered: {}", stats.frames);
    println!("  - Points simulated: {}", stats.points);
    println!("  - Final hull size: {}", stats.hull_vertices);
    println!("  - Bound collisions: {}", stats.collisions);
    println!("  - Time: {}ms", stats.processing_time_ms);

    if let Some(path) = &args.stats {
        stats.export_json(path)?;
        println!("Stats saved: {path:?}");
    }

    Ok(())
}
