use serde::{Deserialize, Serialize};

use crate::error::LayoutDbError;

/// Connection options for a layout-oriented record store.
///
/// Drivers receive the options once, when the single connection is
/// opened; there is no process-global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOptions {
    pub host: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: Option<u16>,
}

impl StoreOptions {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            database: database.into(),
            user: user.into(),
            password: password.into(),
            port: None,
        }
    }

    #[must_use]
    pub fn builder(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> StoreOptionsBuilder {
        StoreOptionsBuilder {
            opts: StoreOptions::new(host, database, user, password),
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Check the options before handing them to a driver.
    ///
    /// # Errors
    ///
    /// Returns `LayoutDbError::ConfigError` when the host, database, or
    /// user is empty. An empty password is allowed; guest accounts use
    /// one.
    pub fn validate(&self) -> Result<(), LayoutDbError> {
        if self.host.is_empty() {
            return Err(LayoutDbError::ConfigError("host must not be empty".into()));
        }
        if self.database.is_empty() {
            return Err(LayoutDbError::ConfigError(
                "database name must not be empty".into(),
            ));
        }
        if self.user.is_empty() {
            return Err(LayoutDbError::ConfigError("user must not be empty".into()));
        }
        Ok(())
    }
}

/// Fluent builder for [`StoreOptions`].
#[derive(Debug, Clone)]
pub struct StoreOptionsBuilder {
    opts: StoreOptions,
}

impl StoreOptionsBuilder {
    #[must_use]
    pub fn port(mut self, port: Option<u16>) -> Self {
        self.opts.port = port;
        self
    }

    #[must_use]
    pub fn finish(self) -> StoreOptions {
        self.opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_port() {
        let opts = StoreOptions::builder("db.example.net", "crm", "webuser", "pw")
            .port(Some(5003))
            .finish();
        assert_eq!(opts.port, Some(5003));
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        let missing_host = StoreOptions::new("", "crm", "webuser", "pw");
        assert!(matches!(
            missing_host.validate(),
            Err(LayoutDbError::ConfigError(_))
        ));

        let missing_db = StoreOptions::new("db.example.net", "", "webuser", "pw");
        assert!(missing_db.validate().is_err());

        let guest = StoreOptions::new("db.example.net", "crm", "guest", "");
        assert!(guest.validate().is_ok());
    }
}
