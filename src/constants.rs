/// User agent string sent with every request to the recognize.im API
pub const USER_AGENT: &str = "recognize-client/0.1.0";
/// Default API host. The WSDL lives at `http://clapi.itraff.pl/wsdl`
pub const DEFAULT_BASE_URL: &str = "http://clapi.itraff.pl";
/// Namespace of the SOAP method elements
pub const SOAP_NAMESPACE: &str = "http://clapi.itraff.pl";
/// Default timeout in seconds for HTTP requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the hex encoded MD5 of API key and image bytes
pub const HASH_HEADER: &str = "x-itraff-hash";
/// Content type of recognition uploads
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";
/// Content type of SOAP requests
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";
/// Path prefix of the binary recognition endpoint
pub const RECOGNIZE_PATH: &str = "/v2/recognize/";
/// Message reported when a failed response carries no `message` field
pub const DEFAULT_ERROR_MESSAGE: &str = "an error occurred";

/// Maximum query image size in single mode (KB)
pub const SINGLEIR_MAX_FILE_SIZE: f64 = 500.0;
/// Minimum query image width and height in single mode (px)
pub const SINGLEIR_MIN_DIMENSION: u32 = 100;
/// Minimum query image area in single mode (Mpix)
pub const SINGLEIR_MIN_IMAGE_AREA: f64 = 0.05;
/// Maximum query image area in single mode (Mpix)
pub const SINGLEIR_MAX_IMAGE_AREA: f64 = 0.31;

/// Maximum query image size in multi mode (KB)
pub const MULTIIR_MAX_FILE_SIZE: f64 = 3500.0;
/// Minimum query image width and height in multi mode (px)
pub const MULTIIR_MIN_DIMENSION: u32 = 100;
/// Minimum query image area in multi mode (Mpix)
pub const MULTIIR_MIN_IMAGE_AREA: f64 = 0.1;
/// Maximum query image area in multi mode (Mpix)
pub const MULTIIR_MAX_IMAGE_AREA: f64 = 5.1;
