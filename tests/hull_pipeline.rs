// tests/hull_pipeline.rs
use hullvis_core::{Point, PointCloud, SimConfig, convex_hull, cross_z};
use hullvis_cv::batch;
use hullvis_cv::overlay::{self, OverlayConfig, RED};
use hullvis_cv::{FrameIo, RunStats};
use image::RgbImage;

/// True when `p` is inside or on the polygon walked by `hull`: the hull
/// walk has negative Z at every corner, so contained points sit on the
/// non-positive side of every directed edge.
fn contains(points: &[Point], hull: &[usize], p: Point) -> bool {
    (0..hull.len()).all(|i| {
        let a = points[hull[i]];
        let b = points[hull[(i + 1) % hull.len()]];
        cross_z(a, b, p) <= 0
    })
}

#[test]
fn test_simulated_cloud_stays_inside_its_hull() {
    let sim = SimConfig {
        width: 320,
        height: 240,
        speed_limit: 20,
    };

    let mut cloud = PointCloud::new();
    let gestures = [
        ((10, 10), (40, 200)),
        ((300, 20), (250, 30)),
        ((150, 120), (160, 10)),
        ((80, 230), (90, 220)),
        ((200, 5), (310, 90)),
        ((20, 100), (5, 150)),
        ((270, 200), (240, 235)),
        ((120, 60), (180, 75)),
    ];
    for ((ox, oy), (rx, ry)) in gestures {
        cloud.launch(Point::new(ox, oy), Point::new(rx, ry), &sim);
    }

    for _ in 0..50 {
        cloud.step(&sim);
        let hull = convex_hull(cloud.positions());
        assert!(!hull.is_empty());
        if hull.len() >= 3 {
            for &p in cloud.positions() {
                assert!(
                    contains(cloud.positions(), &hull, p),
                    "{p:?} escaped the hull"
                );
            }
        }
    }
}

#[test]
fn test_hull_overlay_renders_on_a_frame() {
    let points = [
        Point::new(20, 20),
        Point::new(80, 20),
        Point::new(80, 80),
        Point::new(20, 80),
        Point::new(50, 50),
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull.len(), 4);

    let mut frame = RgbImage::new(100, 100);
    overlay::draw_hull(&mut frame, &points, &hull, &OverlayConfig::default());

    // The top edge of the square runs through (50, 20).
    assert_eq!(frame.get_pixel(50, 20), &RED);
    // The interior point gets a marker but no hull edge.
    assert_eq!(frame.get_pixel(52, 50), &RED);
    assert_eq!(frame.get_pixel(50, 55), &image::Rgb([0, 0, 0]));
}

#[test]
fn test_threshold_through_the_frame_wrapper() {
    let mut frame = FrameIo::gray_from_raw(4, 1, vec![10, 200, 127, 128]).unwrap();
    batch::threshold_frame(&mut frame, 128);
    assert_eq!(frame.as_raw(), &vec![0, 200, 0, 128]);
}

#[test]
fn test_run_stats_export() {
    let stats = RunStats {
        frames: 10,
        points: 8,
        hull_vertices: 4,
        collisions: 3,
        processing_time_ms: 12,
    };
    let path = std::env::temp_dir().join("hullvis_run_stats_test.json");
    stats.export_json(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"hull_vertices\": 4"));
    std::fs::remove_file(&path).ok();
}
