use flavorshare_core::Config;
use once_cell::sync::Lazy;

/// Resolved once at startup. The API base comes from `FLAVORSHARE_API_BASE`
/// at build time.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    let config = Config::from_env();
    log::debug!("API base: {}", config.api_base_url);
    config
});
