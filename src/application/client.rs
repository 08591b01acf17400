/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::handlers::{Handlers, OutcomeKind};
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::image::ImageService;
use crate::application::interfaces::index::IndexService;
use crate::application::interfaces::recognition::RecognitionService;
use crate::application::interfaces::user::UserService;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{HASH_HEADER, IMAGE_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{make_http_request, send_soap};
use crate::model::image::check_image_limits;
use crate::model::recognition::RecognizeOptions;
use crate::model::requests::{SoapMethod, SoapRequest};
use crate::model::responses::evaluate;
use crate::presentation::recognition::RecognitionResponse;
use crate::utils::hash::recognition_hash;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Client for the recognize.im service
///
/// Owns the session, the handler registry and the rate limiter. Management
/// calls authenticate on demand; recognition calls are signed per request and
/// never need a session. Share it across tasks behind an `Arc`.
pub struct Client {
    config: Arc<Config>,
    http_client: reqwest::Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    auth: Auth,
    handlers: Handlers,
}

impl Client {
    /// Creates a new client
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));
        let auth = Auth::new(config.clone(), http_client.clone(), rate_limiter.clone());

        debug!("Client created for {}", config.rest_api.base_url);
        Ok(Self {
            config,
            http_client,
            rate_limiter,
            auth,
            handlers: Handlers::new(),
        })
    }

    /// Configuration of this client
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handler registry of this client
    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Registers the handler called with the payload of every successful call
    pub fn on_success<F>(&self, handler: F)
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.handlers.set_success(Arc::new(handler));
    }

    /// Registers the handler called with the error of every failed call
    pub fn on_error<F>(&self, handler: F)
    where
        F: Fn(&AppError) + Send + Sync + 'static,
    {
        self.handlers.set_error(Arc::new(handler));
    }

    /// Removes the handler registered for `kind`
    pub fn clear_handler(&self, kind: OutcomeKind) {
        self.handlers.clear(kind);
    }

    /// Opens a new session, replacing the current one
    ///
    /// Management calls do this on their own; calling it up front only moves the
    /// round trip earlier. The outcome is not reported to the handlers.
    pub async fn authenticate(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    /// Current session, if any
    pub async fn session(&self) -> Option<Session> {
        self.auth.current().await
    }

    /// Forgets the current session; the next management call logs in again
    pub async fn logout(&self) {
        self.auth.logout().await;
    }

    /// Performs a management call and reports its outcome
    ///
    /// A session is opened first when none is held. The outcome is passed to the
    /// matching handler exactly once and then returned.
    ///
    /// An `auth` request opens a session from the configured credentials and
    /// yields `null`.
    pub async fn call(&self, request: SoapRequest) -> Result<Value, AppError> {
        let method = request.method();
        info!("Calling {}", method);

        let outcome = self.call_internal(&request).await;
        match &outcome {
            Ok(_) => debug!("{} succeeded", method),
            Err(e) => error!("{} failed: {}", method, e),
        }

        self.handlers.dispatch(&outcome);
        outcome
    }

    async fn call_internal(&self, request: &SoapRequest) -> Result<Value, AppError> {
        if !request.method().requires_session() {
            self.auth.login().await?;
            return Ok(Value::Null);
        }

        let session = self.auth.get_session().await?;
        match self.send(request, &session).await {
            Err(AppError::Unauthorized) => {
                warn!(
                    "Session rejected on {}, authenticating again",
                    request.method()
                );
                self.auth.invalidate(&session).await;
                let session = self.auth.get_session().await?;
                self.send(request, &session).await
            }
            other => other,
        }
    }

    async fn send(&self, request: &SoapRequest, session: &Session) -> Result<Value, AppError> {
        let exchange = send_soap(
            &self.http_client,
            self.rate_limiter.clone(),
            &self.config.rest_api.base_url,
            request,
            Some(&session.cookie),
        )
        .await?;

        if let Some(cookie) = exchange.session_cookie {
            self.auth.renew(cookie).await;
        }
        evaluate(exchange.reply)
    }

    /// Recognizes `image` and hands the outcome to `callback`
    ///
    /// The callback runs exactly once, with either the parsed response or the
    /// error. The handler registry is not involved.
    pub async fn recognize_with<F>(&self, image: &[u8], options: RecognizeOptions, callback: F)
    where
        F: FnOnce(Result<RecognitionResponse, AppError>),
    {
        callback(self.recognize(image, options).await);
    }
}

#[async_trait]
impl UserService for Client {
    async fn user_get(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::UserGet.into()).await
    }

    async fn user_delete(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::UserDelete.into()).await
    }

    async fn user_limits(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::UserLimits.into()).await
    }
}

#[async_trait]
impl ImageService for Client {
    async fn image_count(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::ImageCount.into()).await
    }

    async fn image_list(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::ImageList.into()).await
    }

    async fn image_insert(&self, id: &str, name: &str, data: &[u8]) -> Result<Value, AppError> {
        info!("Inserting image {} ({} bytes)", id, data.len());
        self.call(SoapRequest::image_insert(id, name, data)).await
    }

    async fn image_delete(&self, id: &str) -> Result<Value, AppError> {
        self.call(SoapRequest::image_delete(id)).await
    }

    async fn image_get(&self, id: &str) -> Result<Value, AppError> {
        self.call(SoapRequest::image_get(id)).await
    }
}

#[async_trait]
impl IndexService for Client {
    async fn index_build(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::IndexBuild.into()).await
    }

    async fn index_callback(&self, callback_url: &str) -> Result<Value, AppError> {
        self.call(SoapRequest::index_callback(callback_url)).await
    }

    async fn index_status(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::IndexStatus.into()).await
    }
}

#[async_trait]
impl AccountService for Client {
    async fn key_get(&self, regenerate: bool) -> Result<Value, AppError> {
        self.call(SoapRequest::key_get(regenerate)).await
    }

    async fn mode_get(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::ModeGet.into()).await
    }

    async fn mode_set(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::ModeSet.into()).await
    }

    async fn payment_list(&self) -> Result<Value, AppError> {
        self.call(SoapMethod::PaymentList.into()).await
    }
}

#[async_trait]
impl RecognitionService for Client {
    async fn recognize(
        &self,
        image: &[u8],
        options: RecognizeOptions,
    ) -> Result<RecognitionResponse, AppError> {
        if let Some(message) = check_image_limits(image, options.mode) {
            warn!("Query image rejected: {}", message);
            return Err(AppError::ImageRejected(message));
        }

        let credentials = &self.config.credentials;
        let hash = recognition_hash(&credentials.api_key, image);
        let url = format!(
            "{}{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            options.path(&credentials.client_id)
        );
        info!("Recognizing {} bytes in {} mode", image.len(), options.mode);

        let response = make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            Method::POST,
            &url,
            vec![("Content-Type", IMAGE_CONTENT_TYPE), (HASH_HEADER, hash.as_str())],
            Some(image.to_vec()),
        )
        .await?;

        let status = response.status();
        let text = response.text().await?;
        let result: RecognitionResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Unreadable recognition response ({}): {}", status, e);
            if status.is_success() {
                AppError::from(e)
            } else {
                AppError::Unexpected(status)
            }
        })?;
        debug!("Recognition status: {}", result.status);
        Ok(result)
    }
}
