use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("VENUESCOUT_ENV", "development"));
    let log_level = or_default("VENUESCOUT_LOG_LEVEL", "info");

    // Empty-string credentials are normalized to None here; the provider
    // clients treat both identically as "unconfigured".
    let places_api_key = lookup("GOOGLE_PLACES_KEY").ok().filter(|k| !k.is_empty());
    let vision_api_key = lookup("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

    let places_timeout_secs = parse_u64("VENUESCOUT_PLACES_TIMEOUT_SECS", "10")?;
    let vision_timeout_secs = parse_u64("VENUESCOUT_VISION_TIMEOUT_SECS", "60")?;
    let system_prompt_path = PathBuf::from(or_default(
        "VENUESCOUT_SYSTEM_PROMPT_PATH",
        "./config/system_prompt.txt",
    ));

    let search_radius_m = parse_f64("VENUESCOUT_SEARCH_RADIUS_M", "3000")?;
    if search_radius_m <= 0.0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VENUESCOUT_SEARCH_RADIUS_M".to_string(),
            reason: "radius must be positive".to_string(),
        });
    }

    let photo_max_width = parse_u32("VENUESCOUT_PHOTO_MAX_WIDTH", "800")?;

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        vision_api_key,
        places_timeout_secs,
        vision_timeout_secs,
        system_prompt_path,
        search_radius_m,
        photo_max_width,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
