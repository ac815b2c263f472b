use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShabbatError {
    #[error("Geolocation request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    SettingsError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Location resolution failed: {message}")]
    LocationError { message: String },

    #[error("Reference data error: {message}")]
    ReferenceDataError { message: String },
}

pub type Result<T> = std::result::Result<T, ShabbatError>;
