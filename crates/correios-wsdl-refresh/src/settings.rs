//! Runtime settings, resolved once at startup.
//!
//! Layers, lowest precedence first:
//! 1. built-in defaults (`wsdls/` next to this crate, 30 second timeout)
//! 2. `CORREIOS_WSDL_*` environment variables
//!
//! | variable | key | meaning |
//! |---|---|---|
//! | `CORREIOS_WSDL_PATH` | `path` | target directory |
//! | `CORREIOS_WSDL_TIMEOUT_SECS` | `timeout_secs` | per-request timeout |
//! | `CORREIOS_WSDL_REPORT` | `report` | `json` prints the run report to stdout and moves logs to stderr |

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::SettingsError;

/// Prefix of every environment variable read by [`Settings::resolve`].
pub const ENV_PREFIX: &str = "CORREIOS_WSDL";

/// Directory the documents are written to when no override is given.
pub fn default_target_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("wsdls")
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

/// How the binary reports the run outcome besides the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Only the log summary.
    #[default]
    None,
    /// Print the report as JSON on stdout; logs go to stderr.
    Json,
}

impl ReportFormat {
    /// Returns true if logs must stay off stdout so the report can own it.
    pub fn logs_to_stderr(self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    path: PathBuf,
    timeout_secs: u64,
    #[serde(default)]
    report: ReportFormat,
}

/// Resolved settings for a refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    target_dir: PathBuf,
    timeout: Duration,
    report: ReportFormat,
}

impl Settings {
    /// Creates a new builder for Settings.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Resolves settings from the defaults and the process environment.
    pub fn resolve() -> Result<Self, SettingsError> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Resolves settings from the defaults and an explicit variable map
    /// instead of the process environment.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self, SettingsError> {
        let vars: config::Map<String, String> = vars.into_iter().collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self, SettingsError> {
        let raw: RawSettings = Config::builder()
            .set_default("path", default_target_dir().to_string_lossy().into_owned())?
            .set_default("timeout_secs", default_timeout().as_secs())?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Self::builder()
            .target_dir(raw.path)
            .timeout(Duration::from_secs(raw.timeout_secs))
            .report(raw.report)
            .build()
    }

    /// Returns the directory documents are written to.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the report format.
    pub fn report(&self) -> ReportFormat {
        self.report
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            timeout: default_timeout(),
            report: ReportFormat::None,
        }
    }
}

/// Builder for Settings.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    target_dir: Option<PathBuf>,
    timeout: Option<Duration>,
    report: ReportFormat,
}

impl SettingsBuilder {
    /// Sets the target directory.
    pub fn target_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_dir = Some(path.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the report format.
    pub fn report(mut self, report: ReportFormat) -> Self {
        self.report = report;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the target directory is empty or the timeout is zero.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let target_dir = self.target_dir.unwrap_or_else(default_target_dir);
        if target_dir.as_os_str().is_empty() {
            return Err(SettingsError::invalid("path", "cannot be empty"));
        }

        let timeout = self.timeout.unwrap_or_else(default_timeout);
        if timeout.is_zero() {
            return Err(SettingsError::invalid(
                "timeout_secs",
                "must be greater than zero",
            ));
        }

        Ok(Settings {
            target_dir,
            timeout,
            report: self.report,
        })
    }
}
