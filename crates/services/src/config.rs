use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const ENV_BANK_PATH: &str = "QUIZ_BANK_PATH";
pub const ENV_AUTO_FINISH: &str = "QUIZ_AUTO_FINISH";
pub const ENV_WINDOW_TITLE: &str = "QUIZ_WINDOW_TITLE";

const DEFAULT_WINDOW_TITLE: &str = "Quiz";

/// Where the question bank comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BankSource {
    /// The questions compiled into the binary.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankSource::Embedded => f.write_str("embedded bank"),
            BankSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Runtime settings for the quiz app.
///
/// Resolution order is defaults, then environment, then command line flags
/// (applied by the binary through the `with_*` setters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    bank_source: BankSource,
    auto_finish: bool,
    window_title: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_source: BankSource::Embedded,
            auto_finish: true,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl QuizConfig {
    /// Defaults overlaid with `QUIZ_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is present but unusable.
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup(ENV_BANK_PATH) {
            let path = path.trim();
            if path.is_empty() {
                return Err(ConfigError::Empty { key: ENV_BANK_PATH });
            }
            self.bank_source = BankSource::File(PathBuf::from(path));
        }
        if let Some(raw) = lookup(ENV_AUTO_FINISH) {
            self.auto_finish = parse_bool(ENV_AUTO_FINISH, &raw)?;
        }
        if let Some(title) = lookup(ENV_WINDOW_TITLE) {
            let title = title.trim();
            if title.is_empty() {
                return Err(ConfigError::Empty {
                    key: ENV_WINDOW_TITLE,
                });
            }
            self.window_title = title.to_string();
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_bank_source(mut self, source: BankSource) -> Self {
        self.bank_source = source;
        self
    }

    #[must_use]
    pub fn with_auto_finish(mut self, auto_finish: bool) -> Self {
        self.auto_finish = auto_finish;
        self
    }

    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    #[must_use]
    pub fn bank_source(&self) -> &BankSource {
        &self.bank_source
    }

    /// Finish the quiz as soon as the last question is answered.
    #[must_use]
    pub fn auto_finish(&self) -> bool {
        self.auto_finish
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            raw: raw.to_string(),
        }),
    }
}
