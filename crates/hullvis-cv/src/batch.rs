//! Batch helpers over independent frames.

use image::GrayImage;

use hullvis_core::raster;

/// Threshold a single frame in place.
pub fn threshold_frame(frame: &mut GrayImage, level: i32) {
    let (width, height) = frame.dimensions();
    let data: &mut [u8] = frame;
    raster::threshold(data, width as usize, height as usize, level);
}

/// Threshold every frame in place. Frames are disjoint buffers, so with the
/// `parallel` feature the work fans out one frame per task.
pub fn threshold_frames(frames: &mut [GrayImage], level: i32) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        frames
            .par_iter_mut()
            .for_each(|frame| threshold_frame(frame, level));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for frame in frames.iter_mut() {
            threshold_frame(frame, level);
        }
    }
}
