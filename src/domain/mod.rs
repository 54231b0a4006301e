pub mod credentials;
pub mod env_document;
pub mod error;
pub mod installer_config;
pub mod language;
pub mod overrides;
pub mod proxy;
pub mod settings;
pub mod synthesis;

pub use env_document::{EnvDocument, Line, QuoteStyle};
pub use error::AppError;
pub use installer_config::{InstallerConfig, parse_config_content};
pub use language::{Language, Messages};
pub use overrides::OverrideSet;
pub use settings::{AdminSettings, CollectedSettings, DatabaseSettings, SiteSettings};
pub use synthesis::{synthesize, synthesize_layered};
