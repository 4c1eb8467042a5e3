use std::{collections::HashMap, fs};

use serde::Deserialize;
use shared::protocol::MAX_SHOTS;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub max_shots: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8443".into(),
            max_shots: MAX_SHOTS,
        }
    }
}

/// Layered settings load: defaults, then `bellsim.toml`, then environment
/// overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("bellsim.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("max_shots") {
                if let Ok(parsed) = v.parse::<u32>() {
                    settings.max_shots = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__MAX_SHOTS") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.max_shots = parsed;
        }
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_loopback() {
        let settings = Settings::default();
        assert_eq!(settings.server_bind, "127.0.0.1:8443");
        assert_eq!(settings.max_shots, MAX_SHOTS);
    }
}
