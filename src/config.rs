use serde::{Deserialize, Serialize};

/// Configuración de la app. Los valores se fijan en tiempo de compilación
/// desde `.env` (ver build.rs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub auth_api_url_development: String,
    pub auth_api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_api_url_development: "http://localhost:3000".to_string(),
            auth_api_url_production: "https://identity.nexuslabs.one".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            auth_api_url_development: option_env!("AUTH_API_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            auth_api_url_production: option_env!("AUTH_API_URL_PRODUCTION")
                .unwrap_or("https://identity.nexuslabs.one")
                .to_string(),
            environment: option_env!("APP_ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .map(|v| v == "true")
                .unwrap_or(true),
            api_key: option_env!("AUTH_API_KEY").map(str::to_string),
        }
    }

    /// URL base del proveedor de identidad según el entorno activo
    pub fn auth_api_url(&self) -> &str {
        if self.environment == "production" {
            &self.auth_api_url_production
        } else {
            &self.auth_api_url_development
        }
    }
}
