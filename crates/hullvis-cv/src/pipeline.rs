//! Track-else-detect orchestration over the detector/tracker seams.

use image::GrayImage;
use serde::Serialize;

use crate::Result;
use crate::region::Region;
use crate::traits::{Detector, Tracker};

/// A candidate object with its detector score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub region: Region,
    pub score: f64,
}

impl Detection {
    pub fn new(region: Region, score: f64) -> Self {
        Self { region, score }
    }
}

/// Counters describing how the pipeline arrived at its outputs.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PipelineStats {
    pub frames: usize,
    pub tracked: usize,
    pub detector_runs: usize,
    pub reinits: usize,
}

/// Per-frame track-else-detect loop: follow the current object with the
/// tracker and fall back to the detector whenever the track is lost or
/// nothing is being tracked yet. The highest-scoring detection wins and
/// re-initializes the tracker.
pub struct TrackingPipeline<D, T> {
    detector: D,
    tracker: T,
    active: bool,
    stats: PipelineStats,
}

impl<D: Detector, T: Tracker> TrackingPipeline<D, T> {
    pub fn new(detector: D, tracker: T) -> Self {
        Self {
            detector,
            tracker,
            active: false,
            stats: PipelineStats::default(),
        }
    }

    /// Feed one frame; returns the followed region, if any.
    pub fn advance(&mut self, frame: &GrayImage) -> Result<Option<Region>> {
        self.stats.frames += 1;

        if self.active {
            if let Some(region) = self.tracker.track(frame) {
                self.stats.tracked += 1;
                return Ok(Some(region));
            }
            self.active = false;
        }

        self.stats.detector_runs += 1;
        let detections = self.detector.detect(frame)?;

        // First-best selection: on score ties the earliest detection wins.
        let mut best: Option<Detection> = None;
        for detection in detections {
            let better = match &best {
                Some(current) => detection.score > current.score,
                None => true,
            };
            if better {
                best = Some(detection);
            }
        }

        match best {
            Some(detection) => {
                self.tracker.init(frame, detection.region);
                self.active = true;
                self.stats.reinits += 1;
                Ok(Some(detection.region))
            }
            None => Ok(None),
        }
    }

    pub fn stats(&self) -> PipelineStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct StubDetector {
        responses: VecDeque<Vec<Detection>>,
        calls: usize,
    }

    impl Detector for StubDetector {
        fn detect(&mut self, _frame: &GrayImage) -> Result<Vec<Detection>> {
            self.calls += 1;
            Ok(self.responses.pop_front().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct StubTracker {
        results: VecDeque<Option<Region>>,
        inits: Vec<Region>,
    }

    impl Tracker for StubTracker {
        fn init(&mut self, _frame: &GrayImage, region: Region) {
            self.inits.push(region);
        }

        fn track(&mut self, _frame: &GrayImage) -> Option<Region> {
            self.results.pop_front().unwrap_or(None)
        }
    }

    fn frame() -> GrayImage {
        GrayImage::new(8, 8)
    }

    #[test]
    fn test_first_frame_detects_and_inits_with_best_score() {
        let weak = Region::new(0, 0, 4, 4);
        let strong = Region::new(4, 4, 4, 4);
        let detector = StubDetector {
            responses: VecDeque::from(vec![vec![
                Detection::new(weak, 3.0),
                Detection::new(strong, 9.0),
            ]]),
            calls: 0,
        };
        let mut pipeline = TrackingPipeline::new(detector, StubTracker::default());

        let result = pipeline.advance(&frame()).unwrap();
        assert_eq!(result, Some(strong));

        let stats = pipeline.stats();
        assert_eq!(stats.detector_runs, 1);
        assert_eq!(stats.reinits, 1);
        assert_eq!(pipeline.tracker.inits, vec![strong]);
    }

    #[test]
    fn test_tracker_hit_skips_detector() {
        let target = Region::new(1, 1, 5, 5);
        let detector = StubDetector {
            responses: VecDeque::from(vec![vec![Detection::new(target, 5.0)]]),
            calls: 0,
        };
        let tracker = StubTracker {
            results: VecDeque::from(vec![Some(Region::new(2, 1, 5, 5))]),
            inits: Vec::new(),
        };
        let mut pipeline = TrackingPipeline::new(detector, tracker);

        // Frame 1: detector initializes the track.
        pipeline.advance(&frame()).unwrap();
        // Frame 2: the tracker answers, so the detector stays idle.
        let result = pipeline.advance(&frame()).unwrap();
        assert_eq!(result, Some(Region::new(2, 1, 5, 5)));
        assert_eq!(pipeline.detector.calls, 1);
        assert_eq!(pipeline.stats().tracked, 1);
    }

    #[test]
    fn test_lost_track_falls_back_to_detector() {
        let first = Region::new(0, 0, 3, 3);
        let second = Region::new(10, 10, 3, 3);
        let detector = StubDetector {
            responses: VecDeque::from(vec![
                vec![Detection::new(first, 1.0)],
                vec![Detection::new(second, 2.0)],
            ]),
            calls: 0,
        };
        let tracker = StubTracker {
            results: VecDeque::from(vec![None]),
            inits: Vec::new(),
        };
        let mut pipeline = TrackingPipeline::new(detector, tracker);

        pipeline.advance(&frame()).unwrap();
        let result = pipeline.advance(&frame()).unwrap();
        assert_eq!(result, Some(second));
        assert_eq!(pipeline.tracker.inits, vec![first, second]);
        assert_eq!(pipeline.stats().reinits, 2);
    }

    #[test]
    fn test_no_detections_yields_no_object() {
        let mut pipeline = TrackingPipeline::new(StubDetector::default(), StubTracker::default());
        let result = pipeline.advance(&frame()).unwrap();
        assert_eq!(result, None);
        assert_eq!(pipeline.stats().frames, 1);
        assert_eq!(pipeline.stats().reinits, 0);
    }

    #[test]
    fn test_score_ties_keep_first_detection() {
        let first = Region::new(0, 0, 2, 2);
        let second = Region::new(5, 5, 2, 2);
        let detector = StubDetector {
            responses: VecDeque::from(vec![vec![
                Detection::new(first, 4.0),
                Detection::new(second, 4.0),
            ]]),
            calls: 0,
        };
        let mut pipeline = TrackingPipeline::new(detector, StubTracker::default());
        let result = pipeline.advance(&frame()).unwrap();
        assert_eq!(result, Some(first));
    }
}
