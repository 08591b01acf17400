use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the recognition index
///
/// Collection changes are only visible to recognition after an index build.
#[async_trait]
pub trait IndexService: Send + Sync {
    /// Starts an index build
    async fn index_build(&self) -> Result<Value, AppError>;

    /// Registers the URL called when an index build completes
    async fn index_callback(&self, callback_url: &str) -> Result<Value, AppError>;

    /// Gets the progress of the current index build
    async fn index_status(&self) -> Result<Value, AppError>;
}
