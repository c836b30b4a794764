use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const API_BASE_ENV: &str = "FLAVORSHARE_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1546554137-f86b9593a222?w=800&q=80&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub default_image_url: String,
    pub login_delay_ms: u32,
    pub signup_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            login_delay_ms: 600,
            signup_delay_ms: 800,
        }
    }
}

impl Config {
    /// Reads the API base url from the environment (and `.env` on native
    /// targets). Browser builds only see the value baked in at compile time.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        let base = std::env::var(API_BASE_ENV)
            .ok()
            .or_else(|| option_env!("FLAVORSHARE_API_BASE").map(str::to_string));

        match base {
            Some(base) => match Self::default().with_api_base_url(&base) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Ignoring {}={}: {}", API_BASE_ENV, base, e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn with_api_base_url(mut self, base: &str) -> Result<Self> {
        let trimmed = base.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)?;
        if parsed.cannot_be_a_base() {
            return Err(Error::Config(format!("{} cannot be used as a base url", trimmed)));
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}
