/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session management for the SOAP endpoint
//!
//! A session is the cookie returned by a successful `auth` call. It is created
//! lazily by the first call that needs it, replaced when a response carries a
//! fresh cookie, and dropped when the server rejects it.

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::http::send_soap;
use crate::model::requests::SoapRequest;
use crate::model::responses::evaluate;
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Value of the `Cookie` header attached to SOAP calls
    pub cookie: String,
    /// When the session was established or last renewed
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from a cookie received now
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            established_at: Utc::now(),
        }
    }
}

/// Authentication manager for the SOAP endpoint
///
/// Holds the single session of a [`Client`](crate::application::client::Client).
/// Logins are serialized, so concurrent callers on an unauthenticated client
/// trigger one `auth` round trip between them.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    session: Arc<RwLock<Option<Session>>>,
    login_lock: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance sharing the HTTP client and rate limiter of its owner
    pub fn new(config: Arc<Config>, client: Client, rate_limiter: Arc<RwLock<RateLimiter>>) -> Self {
        Self {
            config,
            client,
            rate_limiter,
            session: Arc::new(RwLock::new(None)),
            login_lock: Mutex::new(()),
        }
    }

    /// Current session, if any, without logging in
    pub async fn current(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Whether a session is held
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Gets the current session, logging in first when there is none
    pub async fn get_session(&self) -> Result<Session, AppError> {
        if let Some(session) = self.current().await {
            return Ok(session);
        }

        let _guard = self.login_lock.lock().await;
        // another caller may have logged in while we waited
        if let Some(session) = self.current().await {
            return Ok(session);
        }

        info!("No active session, logging in");
        self.login_unlocked().await
    }

    /// Performs an `auth` call and stores the resulting session
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError)` - If the call fails, is rejected, or sets no cookie
    pub async fn login(&self) -> Result<Session, AppError> {
        let _guard = self.login_lock.lock().await;
        self.login_unlocked().await
    }

    async fn login_unlocked(&self) -> Result<Session, AppError> {
        let request = SoapRequest::auth(&self.config.credentials);
        debug!(
            "Sending auth request for client {}",
            self.config.credentials.client_id
        );

        let exchange = send_soap(
            &self.client,
            self.rate_limiter.clone(),
            &self.config.rest_api.base_url,
            &request,
            None,
        )
        .await?;

        evaluate(exchange.reply)?;

        let cookie = exchange
            .session_cookie
            .ok_or(AppError::MissingSessionCookie)?;
        let session = Session::new(cookie);

        let mut current = self.session.write().await;
        *current = Some(session.clone());

        info!(
            "✓ Login successful, client: {}",
            self.config.credentials.client_id
        );
        Ok(session)
    }

    /// Replaces the session cookie with one received on a later response
    pub async fn renew(&self, cookie: String) {
        let mut current = self.session.write().await;
        match current.as_mut() {
            Some(session) if session.cookie == cookie => {}
            Some(session) => {
                debug!("Session cookie renewed");
                *session = Session::new(cookie);
            }
            None => debug!("Ignoring cookie received without an active session"),
        }
    }

    /// Drops `rejected` if it is still the current session
    ///
    /// A newer session stored by a concurrent login is kept.
    pub async fn invalidate(&self, rejected: &Session) {
        let mut current = self.session.write().await;
        if current.as_ref() == Some(rejected) {
            warn!("Session rejected by the server, dropping it");
            *current = None;
        }
    }

    /// Clears the current session
    pub async fn logout(&self) {
        info!("Logging out");
        let mut session = self.session.write().await;
        *session = None;
    }
}
