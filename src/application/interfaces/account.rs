use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for keys, recognition mode and billing
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the recognition API key
    ///
    /// # Arguments
    /// * `regenerate` - Replace the key with a new one first
    async fn key_get(&self, regenerate: bool) -> Result<Value, AppError>;

    /// Gets the recognition mode of the account
    async fn mode_get(&self) -> Result<Value, AppError>;

    /// Toggles the recognition mode between single and multi
    async fn mode_set(&self) -> Result<Value, AppError>;

    /// Lists the payments of the account
    async fn payment_list(&self) -> Result<Value, AppError>;
}
