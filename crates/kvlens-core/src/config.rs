//! Configuration types for kvlens.
//!
//! [`Config::load`] layers, in order: the built-in defaults, the user's
//! `~/.config/kvlens/config.toml` (or an explicit file), and `KVLENS_*`
//! environment variables. [`Config::defaults`] returns the built-in defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[shell]
prompt       = "> "
exit_message = "Exit..."
grammar      = "full"

[display]
nested            = "expand"
scalars           = "type-name"
uppercase_headers = true
"#;

// ---------------------------------------------------------------------------
// Surface options
// ---------------------------------------------------------------------------

/// Which command forms the shell accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Grammar {
    /// `show buckets`, `use=`, `key=`, `bucket= key=`, `bucket=`, `quit`.
    Full,
    /// Like `Full` without the `use=` / `key=` selection commands.
    Basic,
}

/// Whether arrays and objects are unrolled into deferred tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NestedMode {
    Expand,
    Flat,
}

/// How non-string values are shown in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarStyle {
    /// The JSON type name: `number`, `bool`, `null`, `array`, `object`.
    TypeName,
    /// An empty cell.
    Omit,
    /// The compact JSON text of the value.
    Value,
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// `[shell]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default = "default_exit_message")]
    pub exit_message: String,
    #[serde(default = "default_grammar")]
    pub grammar: Grammar,
}

fn default_prompt() -> String { "> ".to_string() }
fn default_exit_message() -> String { "Exit...".to_string() }
fn default_grammar() -> Grammar { Grammar::Full }

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            exit_message: default_exit_message(),
            grammar: default_grammar(),
        }
    }
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_nested")]
    pub nested: NestedMode,
    #[serde(default = "default_scalars")]
    pub scalars: ScalarStyle,
    #[serde(default = "default_uppercase_headers")]
    pub uppercase_headers: bool,
}

fn default_nested() -> NestedMode { NestedMode::Expand }
fn default_scalars() -> ScalarStyle { ScalarStyle::TypeName }
fn default_uppercase_headers() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            nested: default_nested(),
            scalars: default_scalars(),
            uppercase_headers: default_uppercase_headers(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist and is
    /// read as TOML whatever its extension. Without one, the default
    /// location is used and may be missing. The file is never created.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_layers(path, &config_path())
    }

    fn load_layers(explicit: Option<&Path>, default_path: &Path) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading explicit config");
                config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                    .required(true)
            }
            None => {
                tracing::debug!(path = %default_path.display(), "loading config");
                config::File::new(&default_path.to_string_lossy(), config::FileFormat::Toml)
                    .required(false)
            }
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("KVLENS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("kvlens")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
