//! Settings gathered from the operator and their environment keys.

use crate::domain::{Language, OverrideSet};

pub mod keys {
    pub const LANGUAGE: &str = "LANGUAGE";
    pub const DOMAIN: &str = "DOMAIN";
    pub const HTTP_PORT: &str = "HTTP_PORT";
    pub const SSL_EMAIL: &str = "SSL_EMAIL";
    pub const MYSQL_ROOT_PASSWORD: &str = "MYSQL_ROOT_PASSWORD";
    pub const MYSQL_DATABASE: &str = "MYSQL_DATABASE";
    pub const MYSQL_USER: &str = "MYSQL_USER";
    pub const MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
    pub const ADMIN_LOGIN_USER: &str = "ADMIN_LOGIN_USER";
    pub const ADMIN_LOGIN_PASSWORD: &str = "ADMIN_LOGIN_PASSWORD";
}

/// How the site is exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSettings {
    /// No domain: the stack listens directly on `port`.
    Plain { port: u16 },
    /// Domain behind the TLS proxy; the stack listens on an internal port.
    Ssl { domain: String, internal_port: u16, email: String },
}

impl SiteSettings {
    pub fn ssl_requested(&self) -> bool {
        matches!(self, SiteSettings::Ssl { .. })
    }
}

/// Database answers. An empty field means "keep the current value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub root_password: String,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DatabaseSettings {
    /// Leave every database key untouched.
    pub fn unchanged() -> Self {
        Self {
            root_password: String::new(),
            database: String::new(),
            user: String::new(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSettings {
    pub user: String,
    pub password: String,
    /// Whether the password was generated rather than typed.
    pub generated_password: bool,
}

/// Everything the collector produced, in one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedSettings {
    pub language: Language,
    pub site: SiteSettings,
    pub database: DatabaseSettings,
    pub admin: AdminSettings,
}

impl CollectedSettings {
    pub fn into_overrides(self) -> OverrideSet {
        let mut overrides = OverrideSet::new().with(keys::LANGUAGE, self.language.code());

        match self.site {
            SiteSettings::Plain { port } => {
                overrides.insert(keys::DOMAIN, "");
                overrides.insert(keys::HTTP_PORT, port.to_string());
            }
            SiteSettings::Ssl { domain, internal_port, email } => {
                overrides.insert(keys::DOMAIN, domain);
                overrides.insert(keys::HTTP_PORT, internal_port.to_string());
                overrides.insert(keys::SSL_EMAIL, email);
            }
        }

        overrides.insert(keys::MYSQL_ROOT_PASSWORD, self.database.root_password);
        overrides.insert(keys::MYSQL_DATABASE, self.database.database);
        overrides.insert(keys::MYSQL_USER, self.database.user);
        overrides.insert(keys::MYSQL_PASSWORD, self.database.password);
        overrides.insert(keys::ADMIN_LOGIN_USER, self.admin.user);
        overrides.insert(keys::ADMIN_LOGIN_PASSWORD, self.admin.password);

        overrides
    }
}
