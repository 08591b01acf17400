/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// HTTP transport with rate limiting
pub mod http;
/// Query image preconditions
pub mod image;
/// Result normalizer for SOAP key/value maps
pub mod normalize;
/// Recognition mode and query options
pub mod recognition;
/// Request models for SOAP calls
pub mod requests;
/// Outcome evaluation of SOAP replies
pub mod responses;
/// SOAP envelope codec
pub mod soap;
