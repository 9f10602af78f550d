use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};

/// Runtime configuration. Defaults cover local development; `portal.toml`
/// and `PMAJAY_*` environment variables layer on top, env winning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    pub bind_address: String,
    pub port: u16,
    /// Base URL of the hosted backend the complaint insert goes to.
    pub supabase_url: String,
    /// Public (anon) API key for the hosted backend.
    pub supabase_anon_key: String,
    /// Slippy-map tile template handed to clients; never fetched here.
    pub tile_url_template: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            tile_url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
        }
    }
}

impl PortalConfig {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("portal.toml"))
            .merge(Env::prefixed("PMAJAY_"))
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))
    }

    pub fn bind(&self) -> (String, u16) {
        (self.bind_address.clone(), self.port)
    }
}
