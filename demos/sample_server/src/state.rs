use recognize_client::prelude::{Client, Config};
use recognize_client::error::AppError;
use std::sync::Arc;

/// State shared by the handlers
#[derive(Clone)]
pub struct AppState {
    /// Client used for every remote call
    pub client: Arc<Client>,
}

impl AppState {
    /// State around an existing client
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// State with a client built from `config`
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        Ok(Self::new(Client::new(config)?))
    }
}
