use image::{ImageFormat, RgbImage};
use recognize_client::model::image::{ImageLimits, ImageMetrics, check_image_limits, check_metrics};
use recognize_client::model::recognition::RecognitionMode;
use std::io::Cursor;

fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut bytes, ImageFormat::Jpeg)
        .unwrap();
    bytes.into_inner()
}

#[test]
fn test_encoded_image_inside_single_bounds() {
    assert_eq!(check_image_limits(&jpeg(400, 300), RecognitionMode::Single), None);
}

#[test]
fn test_encoded_image_too_small() {
    let message = check_image_limits(&jpeg(50, 50), RecognitionMode::Single).unwrap();
    assert_eq!(
        message,
        "Image does not meet the requirements of single mode query image."
    );
}

#[test]
fn test_encoded_image_too_large_for_single_but_fine_for_multi() {
    let image = jpeg(1024, 768);
    assert!(check_image_limits(&image, RecognitionMode::Single).is_some());
    assert_eq!(check_image_limits(&image, RecognitionMode::Multi), None);
}

#[test]
fn test_unreadable_image_is_rejected() {
    let message = check_image_limits(b"definitely not an image", RecognitionMode::Multi).unwrap();
    assert!(message.starts_with("unreadable image"));
}

#[test]
fn test_message_follows_mode() {
    let metrics = ImageMetrics::new(200 * 1024, 50, 50);
    assert_eq!(
        check_metrics(&metrics, RecognitionMode::Multi).as_deref(),
        Some("Image does not meet the requirements of multi mode query image.")
    );
}

#[test]
fn test_limits_for_mode() {
    assert_eq!(ImageLimits::for_mode(RecognitionMode::Single), ImageLimits::SINGLE);
    assert_eq!(ImageLimits::for_mode(RecognitionMode::Multi), ImageLimits::MULTI);
}
