use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the reference image collection
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Counts the images in the collection
    async fn image_count(&self) -> Result<Value, AppError>;

    /// Lists the images in the collection
    ///
    /// The payload is keyed by list position; see
    /// [`images_from_list`](crate::presentation::image::images_from_list) for a typed view.
    async fn image_list(&self) -> Result<Value, AppError>;

    /// Adds an image to the collection
    ///
    /// # Arguments
    /// * `id` - Identifier returned by recognition when this image matches
    /// * `name` - Human readable name
    /// * `data` - JPEG file contents
    async fn image_insert(&self, id: &str, name: &str, data: &[u8]) -> Result<Value, AppError>;

    /// Removes an image from the collection
    async fn image_delete(&self, id: &str) -> Result<Value, AppError>;

    /// Gets the metadata of one image
    async fn image_get(&self, id: &str) -> Result<Value, AppError>;
}
