/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the local data directory holding the aggregate slots
    pub data_dir: String,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("TABLENOW_DATA_DIR")
                .unwrap_or_else(|_| "./tablenow-data".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Create a config with a custom data directory
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
