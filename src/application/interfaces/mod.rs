/// Account keys, mode and payments interface
pub mod account;
/// Reference image collection interface
pub mod image;
/// Recognition index interface
pub mod index;
/// Binary recognition interface
pub mod recognition;
/// Account owner interface
pub mod user;
