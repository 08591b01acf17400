/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads a credential from the environment
///
/// Missing or blank values are logged at `error` level and returned as an empty
/// string, so the client can still be built and fail on the first remote call.
pub fn get_credential(env_var: &str) -> String {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().to_string(),
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}
