//! Installer configuration loaded from `installer.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::credentials::MIN_PASSWORD_LENGTH;
use crate::domain::proxy::Placeholders;

/// Optional configuration file name in the project root.
pub const CONFIG_FILE: &str = "installer.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

impl InstallerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.paths.validate()?;
        self.proxy.validate()?;
        self.credentials.validate()?;
        self.orchestrator.validate()?;
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<InstallerConfig, AppError> {
    let config: InstallerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// File locations, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Template shipped with the stack.
    #[serde(default = "default_template")]
    pub template: PathBuf,
    /// Environment file read by the orchestrator.
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
    /// Stateful data directories (database storage).
    #[serde(default = "default_data_dirs")]
    pub data_dirs: Vec<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            env_file: default_env_file(),
            data_dirs: default_data_dirs(),
        }
    }
}

impl PathsConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.template.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("paths.template must not be empty".to_string()));
        }
        if self.env_file.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("paths.env_file must not be empty".to_string()));
        }
        if self.template == self.env_file {
            return Err(AppError::InvalidConfig(
                "paths.template and paths.env_file must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_template() -> PathBuf {
    PathBuf::from("example.env")
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_data_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("mysql_data")]
}

/// Reverse-proxy template used when a domain is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    #[serde(default = "default_proxy_template")]
    pub template: PathBuf,
    #[serde(default = "default_proxy_output")]
    pub output: PathBuf,
    #[serde(default = "default_domain_placeholder")]
    pub domain_placeholder: String,
    #[serde(default = "default_email_placeholder")]
    pub email_placeholder: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            template: default_proxy_template(),
            output: default_proxy_output(),
            domain_placeholder: default_domain_placeholder(),
            email_placeholder: default_email_placeholder(),
        }
    }
}

impl ProxyConfig {
    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            domain: self.domain_placeholder.clone(),
            email: self.email_placeholder.clone(),
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.domain_placeholder.is_empty() || self.email_placeholder.is_empty() {
            return Err(AppError::InvalidConfig("proxy placeholders must not be empty".to_string()));
        }
        if self.template == self.output {
            return Err(AppError::InvalidConfig(
                "proxy.template and proxy.output must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_proxy_template() -> PathBuf {
    PathBuf::from("nginx/default.conf.template")
}

fn default_proxy_output() -> PathBuf {
    PathBuf::from("nginx/default.conf")
}

fn default_domain_placeholder() -> String {
    Placeholders::default().domain
}

fn default_email_placeholder() -> String {
    Placeholders::default().email
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    #[serde(default = "default_admin_password_length")]
    pub admin_password_length: usize,
    #[serde(default = "default_database_password_length")]
    pub database_password_length: usize,
    #[serde(default = "default_admin_user")]
    pub default_admin_user: String,
    #[serde(default = "default_http_port")]
    pub default_http_port: u16,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            admin_password_length: default_admin_password_length(),
            database_password_length: default_database_password_length(),
            default_admin_user: default_admin_user(),
            default_http_port: default_http_port(),
        }
    }
}

impl CredentialsConfig {
    fn validate(&self) -> Result<(), AppError> {
        for (name, length) in [
            ("admin_password_length", self.admin_password_length),
            ("database_password_length", self.database_password_length),
        ] {
            if length < MIN_PASSWORD_LENGTH {
                return Err(AppError::InvalidConfig(format!(
                    "credentials.{} must be at least {}",
                    name, MIN_PASSWORD_LENGTH
                )));
            }
        }
        if self.default_admin_user.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "credentials.default_admin_user must not be empty".to_string(),
            ));
        }
        if self.default_http_port == 0 {
            return Err(AppError::InvalidConfig(
                "credentials.default_http_port must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_admin_password_length() -> usize {
    11
}

fn default_database_password_length() -> usize {
    13
}

fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_http_port() -> u16 {
    8080
}

/// Orchestrator command candidates, tried in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrchestratorConfig {
    #[serde(default = "default_commands")]
    pub commands: Vec<Vec<String>>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { commands: default_commands() }
    }
}

impl OrchestratorConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.commands.is_empty() {
            return Err(AppError::InvalidConfig(
                "orchestrator.commands must list at least one command".to_string(),
            ));
        }
        if self.commands.iter().any(|command| command.first().is_none_or(|p| p.trim().is_empty())) {
            return Err(AppError::InvalidConfig(
                "orchestrator.commands entries must start with a program name".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_commands() -> Vec<Vec<String>> {
    vec![
        vec!["docker".to_string(), "compose".to_string()],
        vec!["docker-compose".to_string()],
    ]
}
