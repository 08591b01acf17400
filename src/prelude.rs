/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # recognize-client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use recognize_client::prelude::*;
//!
//! let config = Config::with_credentials(Credentials::new("64", "api-key", "clapi-key"));
//! let client = Client::new(config).expect("http client");
//! assert!(!client.handlers().is_registered(OutcomeKind::Success));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, SESSION AND HANDLERS
// ============================================================================

/// recognize.im client
pub use crate::application::client::Client;

/// Session handling
pub use crate::application::auth::Session;

/// Handler registry
pub use crate::application::handlers::{ErrorHandler, Handlers, OutcomeKind, SuccessHandler};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::image::ImageService;
pub use crate::application::interfaces::index::IndexService;
pub use crate::application::interfaces::recognition::RecognitionService;
pub use crate::application::interfaces::user::UserService;

// ============================================================================
// MODELS
// ============================================================================

/// Recognition options and image preconditions
pub use crate::model::image::{ImageLimits, ImageMetrics, check_image_limits};
pub use crate::model::recognition::{RecognitionMode, RecognizeOptions};

/// SOAP requests
pub use crate::model::requests::{SoapMethod, SoapRequest};

/// Typed views over payloads
pub use crate::presentation::{
    ImageInfo, RecognitionResponse, RecognizedObject, images_from_list,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Identifier and hash helpers
pub use crate::utils::{get_id, recognition_hash};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
