/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Credentials;
use crate::model::soap::{build_envelope, render_params};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// SOAP methods exposed by the management endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoapMethod {
    /// Opens a session
    Auth,
    /// Fetches the account data
    UserGet,
    /// Deletes the account
    UserDelete,
    /// Fetches the current account limits
    UserLimits,
    /// Counts the images in the collection
    ImageCount,
    /// Lists the images in the collection
    ImageList,
    /// Adds an image to the collection
    ImageInsert,
    /// Removes an image from the collection
    ImageDelete,
    /// Fetches the metadata of one image
    ImageGet,
    /// Applies pending collection changes to the recognition index
    IndexBuild,
    /// Registers the URL notified when an index build completes
    Callback,
    /// Reports the progress of an index build
    IndexStatus,
    /// Fetches, or regenerates, the recognition API key
    KeyGet,
    /// Fetches the recognition mode
    ModeGet,
    /// Toggles the recognition mode between single and multi
    ModeSet,
    /// Lists the payments of the account
    PaymentList,
}

impl SoapMethod {
    /// Name used both as body element and as endpoint path segment
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SoapMethod::Auth => "auth",
            SoapMethod::UserGet => "userGet",
            SoapMethod::UserDelete => "userDelete",
            SoapMethod::UserLimits => "userLimits",
            SoapMethod::ImageCount => "imageCount",
            SoapMethod::ImageList => "imageList",
            SoapMethod::ImageInsert => "imageInsert",
            SoapMethod::ImageDelete => "imageDelete",
            SoapMethod::ImageGet => "imageGet",
            SoapMethod::IndexBuild => "indexBuild",
            SoapMethod::Callback => "callback",
            SoapMethod::IndexStatus => "indexStatus",
            SoapMethod::KeyGet => "keyGet",
            SoapMethod::ModeGet => "modeGet",
            SoapMethod::ModeSet => "modeSet",
            SoapMethod::PaymentList => "paymentList",
        }
    }

    /// Endpoint path, e.g. `/indexStatus`
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    /// Whether the method may be called without a session
    #[must_use]
    pub fn requires_session(&self) -> bool {
        !matches!(self, SoapMethod::Auth)
    }
}

impl fmt::Display for SoapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A SOAP call: method plus ordered parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    method: SoapMethod,
    params: Vec<(&'static str, String)>,
}

impl SoapRequest {
    /// Request without parameters
    #[must_use]
    pub fn new(method: SoapMethod) -> Self {
        Self {
            method,
            params: Vec::new(),
        }
    }

    /// Appends a parameter
    #[must_use]
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// `auth` request for `credentials`; the `ip` parameter is always sent empty
    #[must_use]
    pub fn auth(credentials: &Credentials) -> Self {
        Self::new(SoapMethod::Auth)
            .param("client_id", credentials.client_id.clone())
            .param("key_clapi", credentials.clapi_key.clone())
            .param("ip", "")
    }

    /// `imageInsert` request; `data` is the JPEG file, sent base64 encoded
    #[must_use]
    pub fn image_insert(id: &str, name: &str, data: &[u8]) -> Self {
        Self::new(SoapMethod::ImageInsert)
            .param("id", id)
            .param("name", name)
            .param("data", STANDARD.encode(data))
    }

    /// `imageDelete` request
    #[must_use]
    pub fn image_delete(id: &str) -> Self {
        Self::new(SoapMethod::ImageDelete).param("ID", id)
    }

    /// `imageGet` request
    #[must_use]
    pub fn image_get(id: &str) -> Self {
        Self::new(SoapMethod::ImageGet).param("ID", id)
    }

    /// `callback` request registering the index build notification URL
    #[must_use]
    pub fn index_callback(callback_url: &str) -> Self {
        Self::new(SoapMethod::Callback).param("callbackURL", callback_url)
    }

    /// `keyGet` request
    #[must_use]
    pub fn key_get(regenerate: bool) -> Self {
        Self::new(SoapMethod::KeyGet).param("regenerate", regenerate.to_string())
    }

    /// Method of this request
    #[must_use]
    pub fn method(&self) -> SoapMethod {
        self.method
    }

    /// Parameters in the order they are rendered
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Full SOAP document for this request
    #[must_use]
    pub fn envelope(&self) -> String {
        build_envelope(self.method.name(), &render_params(&self.params))
    }
}

impl From<SoapMethod> for SoapRequest {
    fn from(method: SoapMethod) -> Self {
        SoapRequest::new(method)
    }
}
