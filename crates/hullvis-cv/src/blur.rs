//! Region redaction via median filtering.

use image::{GrayImage, Luma};

use crate::error::FrameError;
use crate::region::Region;

/// Kernel size the redaction demo derives from a region: a sixth of the
/// region height, bumped to the next odd number when even.
pub fn kernel_for_region(region: &Region) -> u32 {
    let k = (region.height / 6).max(0);
    (k + 1 - k % 2) as u32
}

/// Median-blur the part of `frame` covered by `region` (clipped to the
/// frame). Each pixel becomes the median of the `ksize` x `ksize` window
/// around it, with the window intersected with the region, reading from a
/// snapshot so the filter never observes its own output.
pub fn median_blur_region(
    frame: &mut GrayImage,
    region: Region,
    ksize: u32,
) -> std::result::Result<(), FrameError> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(FrameError::KernelSize(ksize));
    }

    let clipped = region.clamp_to(frame.width(), frame.height());
    if clipped.is_empty() {
        return Ok(());
    }

    let rx = clipped.x as u32;
    let ry = clipped.y as u32;
    let rw = clipped.width as usize;
    let rh = clipped.height as usize;

    // Snapshot of the clipped region, row-major.
    let mut src = vec![0u8; rw * rh];
    for row in 0..rh {
        for col in 0..rw {
            src[row * rw + col] = frame.get_pixel(rx + col as u32, ry + row as u32)[0];
        }
    }

    let r = (ksize / 2) as usize;
    let mut window = Vec::with_capacity((ksize * ksize) as usize);
    for row in 0..rh {
        for col in 0..rw {
            window.clear();
            for wy in row.saturating_sub(r)..=(row + r).min(rh - 1) {
                for wx in col.saturating_sub(r)..=(col + r).min(rw - 1) {
                    window.push(src[wy * rw + wx]);
                }
            }
            window.sort_unstable();
            let median = window[window.len() / 2];
            frame.put_pixel(rx + col as u32, ry + row as u32, Luma([median]));
        }
    }

    Ok(())
}
