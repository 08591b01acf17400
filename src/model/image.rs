/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Query image preconditions
//!
//! The recognition endpoint rejects images outside fixed bounds. Checking them
//! locally saves a round trip and gives a clearer message.

use crate::constants::{
    MULTIIR_MAX_FILE_SIZE, MULTIIR_MAX_IMAGE_AREA, MULTIIR_MIN_DIMENSION, MULTIIR_MIN_IMAGE_AREA,
    SINGLEIR_MAX_FILE_SIZE, SINGLEIR_MAX_IMAGE_AREA, SINGLEIR_MIN_DIMENSION,
    SINGLEIR_MIN_IMAGE_AREA,
};
use crate::error::AppError;
use crate::model::recognition::RecognitionMode;
use image::ImageReader;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Size and dimensions of a query image
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageMetrics {
    /// File size in KB (1 KB = 1024 bytes)
    pub size_kb: f64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageMetrics {
    /// Metrics for a file of `size_bytes` with the given dimensions
    #[must_use]
    pub fn new(size_bytes: usize, width: u32, height: u32) -> Self {
        Self {
            size_kb: size_bytes as f64 / 1024.0,
            width,
            height,
        }
    }

    /// Reads the dimensions from the encoded image header
    pub fn from_bytes(image: &[u8]) -> Result<Self, AppError> {
        let (width, height) = ImageReader::new(Cursor::new(image))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Self::new(image.len(), width, height))
    }

    /// Area in megapixels
    #[must_use]
    pub fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height) / 1_000_000.0
    }
}

/// Bounds a query image must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageLimits {
    /// Maximum file size in KB
    pub max_file_size: f64,
    /// Minimum width and height in pixels
    pub min_dimension: u32,
    /// Minimum area in megapixels
    pub min_area: f64,
    /// Maximum area in megapixels
    pub max_area: f64,
}

impl ImageLimits {
    /// Limits of single mode queries
    pub const SINGLE: ImageLimits = ImageLimits {
        max_file_size: SINGLEIR_MAX_FILE_SIZE,
        min_dimension: SINGLEIR_MIN_DIMENSION,
        min_area: SINGLEIR_MIN_IMAGE_AREA,
        max_area: SINGLEIR_MAX_IMAGE_AREA,
    };

    /// Limits of multi mode queries
    pub const MULTI: ImageLimits = ImageLimits {
        max_file_size: MULTIIR_MAX_FILE_SIZE,
        min_dimension: MULTIIR_MIN_DIMENSION,
        min_area: MULTIIR_MIN_IMAGE_AREA,
        max_area: MULTIIR_MAX_IMAGE_AREA,
    };

    /// Limits for `mode`
    #[must_use]
    pub fn for_mode(mode: RecognitionMode) -> Self {
        match mode {
            RecognitionMode::Single => Self::SINGLE,
            RecognitionMode::Multi => Self::MULTI,
        }
    }

    /// Whether `metrics` satisfies all five bounds
    #[must_use]
    pub fn accepts(&self, metrics: &ImageMetrics) -> bool {
        let area = metrics.area();
        metrics.size_kb <= self.max_file_size
            && metrics.width >= self.min_dimension
            && metrics.height >= self.min_dimension
            && area >= self.min_area
            && area <= self.max_area
    }
}

/// Message reported for an image outside the limits of `mode`
#[must_use]
pub fn limits_message(mode: RecognitionMode) -> String {
    format!("Image does not meet the requirements of {mode} mode query image.")
}

/// Checks `metrics` against the limits of `mode`
///
/// Returns the rejection message, or `None` when the image is acceptable.
#[must_use]
pub fn check_metrics(metrics: &ImageMetrics, mode: RecognitionMode) -> Option<String> {
    if ImageLimits::for_mode(mode).accepts(metrics) {
        None
    } else {
        Some(limits_message(mode))
    }
}

/// Checks whether a query image follows the requirements of `mode`
///
/// Returns the rejection message, or `None` when the image is acceptable.
/// Images whose dimensions cannot be read are rejected.
#[must_use]
pub fn check_image_limits(image: &[u8], mode: RecognitionMode) -> Option<String> {
    match ImageMetrics::from_bytes(image) {
        Ok(metrics) => check_metrics(&metrics, mode),
        Err(err) => Some(err.message()),
    }
}
