use jp4view::calibration::Calibration;
use jp4view::error::Jp4Error;

use image::{GrayImage, Luma, Rgb, RgbImage};

fn ramp_image(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| Luma([(y * width + x) as u8]))
}

#[test]
fn test_default_calibration() {
    let cal = Calibration::default();
    assert_eq!(cal.roi_x, 784);
    assert_eq!(cal.roi_y, 2944);
    assert_eq!(cal.roi_width, 512);
    assert_eq!(cal.roi_height, 512);
    assert!(cal.flip);
}

#[test]
fn test_crop_and_flip() {
    let cal = Calibration {
        roi_x: 2,
        roi_y: 1,
        roi_width: 4,
        roi_height: 4,
        flip: true,
    };
    let out = cal.apply_gray(&ramp_image(8, 6)).unwrap();
    assert_eq!(out.dimensions(), (4, 4));
    // The ROI's top-left ends up bottom-right
    assert_eq!(out.get_pixel(3, 3)[0], 10);
    assert_eq!(out.get_pixel(0, 0)[0], 37);
}

#[test]
fn test_crop_without_flip() {
    let cal = Calibration {
        roi_x: 2,
        roi_y: 1,
        roi_width: 4,
        roi_height: 4,
        flip: false,
    };
    let out = cal.apply_gray(&ramp_image(8, 6)).unwrap();
    assert_eq!(out.get_pixel(0, 0)[0], 10);
    assert_eq!(out.get_pixel(3, 3)[0], 37);
}

#[test]
fn test_rgb_calibration_matches_gray() {
    let cal = Calibration {
        roi_x: 0,
        roi_y: 0,
        roi_width: 2,
        roi_height: 2,
        flip: true,
    };
    let image = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 7]));
    let out = cal.apply_rgb(&image).unwrap();
    assert_eq!(out.get_pixel(0, 0), &Rgb([1, 1, 7]));
    assert_eq!(out.get_pixel(1, 1), &Rgb([0, 0, 7]));
}

#[test]
fn test_roi_out_of_bounds() {
    let image = ramp_image(32, 32);
    match Calibration::default().apply_gray(&image) {
        Err(Jp4Error::RoiOutOfBounds {
            image_width,
            image_height,
            ..
        }) => assert_eq!((image_width, image_height), (32, 32)),
        other => panic!("Unexpected result: {:?}", other),
    }
}
