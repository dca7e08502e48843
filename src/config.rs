// ============================================================================
// CONFIG - Configuración en tiempo de compilación
// ============================================================================
// Los valores vienen de variables de entorno (o del .env vía build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080/api";
const DEFAULT_SESSION_MAX_AGE_HOURS: i64 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Antigüedad máxima de una sesión persistida antes de exigir login de nuevo
    pub session_max_age_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            session_max_age_hours: DEFAULT_SESSION_MAX_AGE_HOURS,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("SESSION_MAX_AGE_HOURS"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        session_max_age_hours: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            session_max_age_hours: session_max_age_hours
                .and_then(|v| v.parse().ok())
                .filter(|hours: &i64| *hours > 0)
                .unwrap_or(defaults.session_max_age_hours),
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn parses_values_and_trims_backend_slash() {
        let config = AppConfig::from_values(
            Some("https://gym.example.com/api/"),
            Some("production"),
            Some("false"),
            Some("4"),
        );
        assert_eq!(config.backend_url, "https://gym.example.com/api");
        assert_eq!(config.environment, "production");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.session_max_age_hours, 4);
    }

    #[test]
    fn invalid_numbers_are_ignored() {
        let config = AppConfig::from_values(None, None, Some("quizas"), Some("-3"));
        assert!(config.enable_logging);
        assert_eq!(config.session_max_age_hours, DEFAULT_SESSION_MAX_AGE_HOURS);
    }
}
