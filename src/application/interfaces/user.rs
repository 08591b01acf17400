use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account owner endpoints
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the account data
    async fn user_get(&self) -> Result<Value, AppError>;

    /// Deletes the account
    async fn user_delete(&self) -> Result<Value, AppError>;

    /// Gets the account limits (images, queries and index builds left)
    async fn user_limits(&self) -> Result<Value, AppError>;
}
