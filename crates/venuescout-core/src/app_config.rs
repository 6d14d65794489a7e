use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Places provider credential. `None` or empty surfaces as a typed
    /// `Unconfigured` failure at the first provider call, not at load time.
    pub places_api_key: Option<String>,
    /// AI provider credential; same late-failure policy as the places key.
    pub vision_api_key: Option<String>,
    pub places_timeout_secs: u64,
    pub vision_timeout_secs: u64,
    pub system_prompt_path: PathBuf,
    pub search_radius_m: f64,
    pub photo_max_width: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "vision_api_key",
                &self.vision_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_timeout_secs", &self.places_timeout_secs)
            .field("vision_timeout_secs", &self.vision_timeout_secs)
            .field("system_prompt_path", &self.system_prompt_path)
            .field("search_radius_m", &self.search_radius_m)
            .field("photo_max_width", &self.photo_max_width)
            .finish()
    }
}
