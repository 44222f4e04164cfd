//! Hullvis Vision Layer
//!
//! Frame I/O, regions, the detector/tracker seams with the track-else-detect
//! pipeline, and software overlay rendering for the hullvis demos.

pub mod batch;
pub mod blur;
pub mod error;
pub mod frame;
pub mod overlay;
pub mod pipeline;
pub mod region;
pub mod stats;

// Re-export commonly used types
pub use error::FrameError;
pub use frame::FrameIo;
pub use overlay::OverlayConfig;
pub use pipeline::{Detection, PipelineStats, TrackingPipeline};
pub use region::Region;
pub use stats::RunStats;

// Error handling
pub type Result<T> = anyhow::Result<T>;

/// Core traits for the vision seams.
pub mod traits {
    use super::*;
    use image::GrayImage;

    /// Object detector producing candidate regions with scores.
    ///
    /// Implementations are caller-constructed and caller-owned; nothing in
    /// this crate holds one globally.
    pub trait Detector {
        fn detect(&mut self, frame: &GrayImage) -> Result<Vec<Detection>>;
    }

    /// Single-object tracker fed one frame at a time.
    pub trait Tracker {
        /// (Re)start tracking the given region.
        fn init(&mut self, frame: &GrayImage, region: Region);

        /// Follow the object into `frame`; `None` means the track was lost.
        fn track(&mut self, frame: &GrayImage) -> Option<Region>;
    }
}
