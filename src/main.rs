use clap::{Parser, Subcommand};

mod filter_demo;
mod hull_demo;

#[derive(Parser)]
#[command(
    name = "hullvis",
    about = "Convex hull and raster demos over a small vision core"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a bouncing point cloud and render its convex hull per frame
    Hull(hull_demo::HullArgs),
    /// Zero every pixel of an image below a threshold
    Threshold(filter_demo::ThresholdArgs),
    /// Median-blur a region of an image
    Redact(filter_demo::RedactArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Hull(args) => hull_demo::run(args),
        Command::Threshold(args) => filter_demo::run_threshold(args),
        Command::Redact(args) => filter_demo::run_redact(args),
    };

    if let Err(e) = result {
        eprintln!("Demo failed: {e:#}");
        std::process::exit(1);
    }
}
