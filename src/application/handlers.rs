//! Success/error handler registry
//!
//! Each client owns one registry holding at most one handler per outcome kind.
//! Handlers are observers: they receive the outcome of every management call,
//! which is also returned to the caller.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

/// Handler invoked with the payload of a successful call
pub type SuccessHandler = Arc<dyn Fn(&Value) + Send + Sync>;
/// Handler invoked with the error of a failed call
pub type ErrorHandler = Arc<dyn Fn(&AppError) + Send + Sync>;

/// Kind of terminal outcome of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// Status zero
    Success,
    /// Fault, non-zero status or transport failure
    Error,
}

impl OutcomeKind {
    /// Kind of `outcome`
    #[must_use]
    pub fn of<T>(outcome: &Result<T, AppError>) -> Self {
        if outcome.is_ok() {
            OutcomeKind::Success
        } else {
            OutcomeKind::Error
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::Success => f.write_str("success"),
            OutcomeKind::Error => f.write_str("error"),
        }
    }
}

impl FromStr for OutcomeKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(OutcomeKind::Success),
            "error" => Ok(OutcomeKind::Error),
            other => Err(AppError::InvalidInput(format!(
                "unknown outcome kind: {other}"
            ))),
        }
    }
}

#[derive(Default)]
struct Slots {
    success: Option<SuccessHandler>,
    error: Option<ErrorHandler>,
}

/// Registry of the success and error handlers of a client
#[derive(Default)]
pub struct Handlers {
    slots: RwLock<Slots>,
}

impl Handlers {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the success handler, replacing any previous one
    pub fn set_success(&self, handler: SuccessHandler) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .success = Some(handler);
    }

    /// Sets the error handler, replacing any previous one
    pub fn set_error(&self, handler: ErrorHandler) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .error = Some(handler);
    }

    /// Removes the handler for `kind`
    pub fn clear(&self, kind: OutcomeKind) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        match kind {
            OutcomeKind::Success => slots.success = None,
            OutcomeKind::Error => slots.error = None,
        }
    }

    /// Whether a handler is registered for `kind`
    #[must_use]
    pub fn is_registered(&self, kind: OutcomeKind) -> bool {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        match kind {
            OutcomeKind::Success => slots.success.is_some(),
            OutcomeKind::Error => slots.error.is_some(),
        }
    }

    /// Reports `outcome` to the matching handler
    ///
    /// The handler runs outside the registry lock, so it may register new
    /// handlers. Without a handler the event is dropped with a warning.
    pub fn dispatch(&self, outcome: &Result<Value, AppError>) {
        let kind = OutcomeKind::of(outcome);
        let (success, error) = {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            (slots.success.clone(), slots.error.clone())
        };

        match (outcome, success, error) {
            (Ok(data), Some(handler), _) => handler(data),
            (Err(err), _, Some(handler)) => handler(err),
            _ => warn!("No {} handler assigned, dropping outcome", kind),
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("success", &self.is_registered(OutcomeKind::Success))
            .field("error", &self.is_registered(OutcomeKind::Error))
            .finish()
    }
}
