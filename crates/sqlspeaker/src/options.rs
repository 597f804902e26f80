//! Connection options.
//!
//! Options come from two places: the config file and the command line.
//! [`ConnectionOptions::merge`] layers the second over the first.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpeakerError};

/// Placeholder shown instead of a password.
const REDACTED: &str = "*****";

/// Where and how to connect.
///
/// Setting a username or password turns integrated security off, since
/// the two ways of authenticating are exclusive.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionOptions {
    /// Server (and instance) name; for SQLite, the database file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Initial database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Plain text password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Authenticate as the current OS user instead of with a login.
    #[serde(default)]
    pub integrated_security: bool,
}

impl ConnectionOptions {
    /// Creates options for the given server.
    #[must_use]
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: Some(server.into()),
            ..Self::default()
        }
    }

    /// Sets the initial database.
    #[must_use]
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Sets login credentials, turning integrated security off.
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.set_username(username);
        self.set_password(password);
        self
    }

    /// Switches to integrated security.
    #[must_use]
    pub const fn integrated(mut self) -> Self {
        self.integrated_security = true;
        self
    }

    /// Sets the login name and turns integrated security off.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
        self.integrated_security = false;
    }

    /// Sets the password and turns integrated security off.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
        self.integrated_security = false;
    }

    /// Layers `overrides` on top of `self`.
    ///
    /// Every value present in `overrides` wins. Credentials in `overrides`
    /// turn integrated security off; `overrides.integrated_security` turns
    /// it on.
    #[must_use]
    pub fn merge(mut self, overrides: Self) -> Self {
        if let Some(server) = overrides.server {
            self.server = Some(server);
        }
        if let Some(database) = overrides.database {
            self.database = Some(database);
        }
        if let Some(username) = overrides.username {
            self.set_username(username);
        }
        if let Some(password) = overrides.password {
            self.set_password(password);
        }
        if overrides.integrated_security {
            self.integrated_security = true;
        }
        self
    }

    /// Returns the server, or an error if none was configured.
    pub fn require_server(&self) -> Result<&str> {
        self.server
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(SpeakerError::MissingServer)
    }

    /// Returns the database name, treating an empty name as unset.
    #[must_use]
    pub fn database_name(&self) -> Option<&str> {
        self.database.as_deref().filter(|d| !d.is_empty())
    }

    /// Renders an ADO.NET style connection string.
    pub fn connection_string(&self) -> Result<String> {
        self.render(false)
    }

    /// Renders the connection string with the password masked, for logs.
    pub fn redacted_connection_string(&self) -> Result<String> {
        self.render(true)
    }

    fn render(&self, redact: bool) -> Result<String> {
        let mut parts = vec![format!("Data Source={}", quote_value(self.require_server()?))];

        if let Some(database) = self.database_name() {
            parts.push(format!("Initial Catalog={}", quote_value(database)));
        }

        if self.integrated_security {
            parts.push("Integrated Security=True".to_string());
        } else {
            if let Some(username) = &self.username {
                parts.push(format!("User ID={}", quote_value(username)));
            }
            if let Some(password) = &self.password {
                let shown = if redact {
                    Cow::Borrowed(REDACTED)
                } else {
                    quote_value(password)
                };
                parts.push(format!("Password={shown}"));
            }
        }

        Ok(parts.join(";"))
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("integrated_security", &self.integrated_security)
            .finish()
    }
}

/// Quotes a connection string value when it would otherwise be misread.
fn quote_value(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.contains([';', '\'', '"'])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace);

    if !needs_quotes {
        Cow::Borrowed(value)
    } else if !value.contains('"') {
        Cow::Owned(format!("\"{value}\""))
    } else if !value.contains('\'') {
        Cow::Owned(format!("'{value}'"))
    } else {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    }
}
