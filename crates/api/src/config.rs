use formkit_core::error::CoreError;
use formkit_core::validation::MessageCatalog;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Locale of the built-in message catalog (default: `en`).
    pub message_locale: String,
    /// Optional JSON catalog file; takes precedence over `message_locale`.
    pub message_catalog_path: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MESSAGE_LOCALE`       | `en`                       |
    /// | `MESSAGE_CATALOG_PATH` | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let message_locale = std::env::var("MESSAGE_LOCALE").unwrap_or_else(|_| "en".into());

        let message_catalog_path = std::env::var("MESSAGE_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            message_locale,
            message_catalog_path,
        }
    }

    /// Resolve the message catalog: the JSON file if configured, otherwise
    /// the built-in catalog for `message_locale`.
    pub fn load_catalog(&self) -> Result<MessageCatalog, CoreError> {
        if let Some(path) = &self.message_catalog_path {
            let json = std::fs::read_to_string(path).map_err(|e| {
                CoreError::Config(format!("Cannot read message catalog '{path}': {e}"))
            })?;
            return MessageCatalog::from_json(&json);
        }
        MessageCatalog::for_locale(&self.message_locale).ok_or_else(|| {
            CoreError::Config(format!(
                "Unsupported MESSAGE_LOCALE '{}'",
                self.message_locale
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(locale: &str, path: Option<&str>) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            message_locale: locale.into(),
            message_catalog_path: path.map(Into::into),
        }
    }

    #[test]
    fn builtin_locale_catalog() {
        let catalog = config("zh-CN", None).load_catalog().unwrap();
        assert_eq!(catalog, MessageCatalog::chinese());
    }

    #[test]
    fn unknown_locale_is_config_error() {
        let err = config("xx", None).load_catalog().unwrap_err();
        assert!(err.to_string().contains("Unsupported MESSAGE_LOCALE 'xx'"));
    }

    #[test]
    fn missing_catalog_file_is_config_error() {
        let err = config("en", Some("/nonexistent/catalog.json"))
            .load_catalog()
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
