//! Configuration constants and profile loading for blogline
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! server = https://dracox.azurewebsites.net
//!
//! [local]
//! server = http://localhost:8080
//! ```

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for blogline
pub const DEFAULT_PROFILE_PATH: &str = "~/.blogline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "BLOGLINE_PROFILE_PATH";

/// Blog server used when neither `--server` nor the profile names one
pub const DEFAULT_SERVER_URL: &str = "https://dracox.azurewebsites.net";

/// Profile key holding the server base URL
pub const SERVER_KEY: &str = "server";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Settings read from one profile section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogProfile {
    name: String,
    server: Option<String>,
}

impl BlogProfile {
    /// Profile with nothing configured
    pub fn blank<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            server: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }
}

/// Reads profiles from an INI file
#[derive(Debug, Clone)]
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a profile section by name
    ///
    /// A missing file is not an error (there is simply no profile); an
    /// unreadable or malformed file is.
    pub fn get_profile(&self, name: &str) -> Result<Option<BlogProfile>> {
        let expanded = shellexpand::tilde(&self.path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("Profile file '{}' does not exist", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

        Ok(ini.section(Some(name)).map(|section| BlogProfile {
            name: name.to_string(),
            server: section
                .get(SERVER_KEY)
                .map(str::trim)
                .filter(|server| !server.is_empty())
                .map(str::to_string),
        }))
    }

    /// Like [`get_profile`](Self::get_profile), falling back to a blank profile
    pub fn load_or_blank(&self, name: &str) -> Result<BlogProfile> {
        match self.get_profile(name)? {
            Some(profile) => {
                tracing::debug!("Profile '{}' loaded, server: {:?}", name, profile.server());
                Ok(profile)
            }
            None => {
                tracing::debug!("Profile '{}' not found, using blank profile", name);
                Ok(BlogProfile::blank(name))
            }
        }
    }
}

/// Pick the base URL: `--server`, then the profile, then the built-in server
pub fn resolve_server(cli_server: Option<&str>, profile: &BlogProfile) -> String {
    cli_server
        .or_else(|| profile.server())
        .unwrap_or(DEFAULT_SERVER_URL)
        .to_string()
}
