use jp4view::calibration::Calibration;
use jp4view::error::Jp4Error;
use jp4view::session::DebugSession;

use image::{GrayImage, Luma, Rgb, RgbImage};

const BASE_VIEWS: [&str; 14] = [
    "raw",
    "g1",
    "g2",
    "b",
    "r",
    "g1-g2",
    "g1-g2 shifted",
    "g1-r",
    "g2-b",
    "r-b",
    "drbg",
    "bayer",
    "col",
    "gray",
];

const REFERENCE_VIEWS: [&str; 4] = ["col jpg", "dcol", "jgray", "dgray"];

fn full_frame(size: u32) -> Calibration {
    Calibration {
        roi_x: 0,
        roi_y: 0,
        roi_width: size,
        roi_height: size,
        flip: false,
    }
}

fn test_raw(size: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]))
}

#[test]
fn test_views_without_reference() {
    let mut session = DebugSession::new(full_frame(64));
    let views = session.run(&test_raw(64), None).unwrap();

    let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, BASE_VIEWS.to_vec());

    let dims = |name: &str| {
        views
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.dimensions())
            .unwrap()
    };
    assert_eq!(dims("raw"), (64, 64));
    assert_eq!(dims("g1"), (32, 32));
    assert_eq!(dims("drbg"), (32, 32));
    assert_eq!(dims("bayer"), (64, 64));
    assert_eq!(dims("col"), (64, 64));
}

#[test]
fn test_views_with_reference() {
    let mut session = DebugSession::new(full_frame(32));
    let reference = RgbImage::from_pixel(32, 32, Rgb([90, 120, 30]));
    let views = session.run(&test_raw(32), Some(&reference)).unwrap();

    let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
    let expected: Vec<&str> = BASE_VIEWS
        .iter()
        .chain(REFERENCE_VIEWS.iter())
        .copied()
        .collect();
    assert_eq!(names, expected);
    assert!(views[views.len() - 3].image.as_rgb8().is_some());
    assert!(views[views.len() - 1].image.as_luma8().is_some());
}

#[test]
fn test_session_can_be_rerun() {
    let mut session = DebugSession::new(full_frame(32));
    let first = session.run(&test_raw(32), None).unwrap();
    let second = session.run(&test_raw(32), None).unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(first[1].image.as_bytes(), second[1].image.as_bytes());
}

#[test]
fn test_misaligned_roi_is_rejected() {
    let mut session = DebugSession::new(full_frame(24));
    match session.run(&test_raw(24), None) {
        Err(Jp4Error::MisalignedDimensions { .. }) => {}
        other => panic!("Unexpected result: {:?}", other.map(|v| v.len())),
    }
}

#[test]
fn test_default_calibration_needs_full_frame() {
    let mut session = DebugSession::new(Calibration::default());
    assert!(matches!(
        session.run(&test_raw(64), None),
        Err(Jp4Error::RoiOutOfBounds { .. })
    ));
}
