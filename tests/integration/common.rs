// Common utilities for integration tests

use image::{ImageFormat, RgbImage};
use recognize_client::prelude::*;
use std::io::Cursor;

pub const CLIENT_ID: &str = "64";
pub const API_KEY: &str = "6d97d28451";
pub const CLAPI_KEY: &str = "4430d3822ff5d8c640de55a4f35218d8";
pub const SESSION: &str = "PHPSESSID=9f1c2d";

/// Configuration pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config::with_credentials(Credentials::new(CLIENT_ID, API_KEY, CLAPI_KEY)).base_url(base_url)
}

/// Creates a client talking to a mock server
pub fn create_test_client(base_url: &str) -> Client {
    setup_logger();
    Client::new(test_config(base_url)).expect("Failed to build client")
}

/// SOAP response for `method` whose `return` map holds `items`
pub fn soap_response(method: &str, items: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="http://clapi.itraff.pl">
<SOAP-ENV:Body><ns1:{method}Response><return>{items}</return></ns1:{method}Response></SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
    )
}

/// `<item>` with a scalar value
pub fn item(key: &str, value: &str) -> String {
    format!("<item><key>{key}</key><value>{value}</value></item>")
}

/// SOAP fault document
pub fn soap_fault(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
<SOAP-ENV:Body><SOAP-ENV:Fault><faultcode>SOAP-ENV:Server</faultcode><faultstring>{message}</faultstring></SOAP-ENV:Fault></SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
    )
}

/// Successful `auth` response
pub fn auth_ok() -> String {
    soap_response("auth", &item("status", "0"))
}

/// Black JPEG of the given size
pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut bytes, ImageFormat::Jpeg)
        .expect("Failed to encode image");
    bytes.into_inner()
}
