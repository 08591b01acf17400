/// Reference image models
pub mod image;
/// Recognition result models
pub mod recognition;
/// Serialization utilities for service payloads
pub mod serialization;

pub use image::{ImageInfo, images_from_list};
pub use recognition::{RecognitionResponse, RecognizedObject};
