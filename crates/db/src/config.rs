//! Bootstrap settings, read from the environment

use docbridge_core::ReasonEncoding;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_NAMESPACE: &str = "docbridge";
const DEFAULT_DATABASE: &str = "main";

/// Which client engine to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    /// In-memory engine (for testing)
    Memory,
    /// Persistent RocksDB engine at the given path
    RocksDb(PathBuf),
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Memory => write!(f, "memory"),
            Engine::RocksDb(path) => write!(f, "rocksdb ({})", path.display()),
        }
    }
}

/// Everything needed to acquire the client handle and configure transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub engine: Engine,
    pub namespace: String,
    pub database: String,
    pub reason_encoding: ReasonEncoding,
}

impl Settings {
    /// In-memory settings with default names
    pub fn memory() -> Self {
        Self {
            engine: Engine::Memory,
            namespace: DEFAULT_NAMESPACE.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            reason_encoding: ReasonEncoding::default(),
        }
    }

    /// Settings from `DOCBRIDGE_*` environment variables.
    ///
    /// `DOCBRIDGE_ENGINE=memory` selects the in-memory engine; otherwise
    /// RocksDB at `DOCBRIDGE_DB_PATH` (default `~/.docbridge/data`). Invalid
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let engine = match var("DOCBRIDGE_ENGINE")
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" | "mem" => Engine::Memory,
            _ => Engine::RocksDb(
                var("DOCBRIDGE_DB_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_data_dir),
            ),
        };

        let reason_encoding = var("DOCBRIDGE_REASON_ENCODING")
            .and_then(|value| value.parse::<ReasonEncoding>().ok())
            .unwrap_or_default();

        Self {
            engine,
            namespace: var("DOCBRIDGE_NAMESPACE").unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            database: var("DOCBRIDGE_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            reason_encoding,
        }
    }

    /// Builder: override the engine
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Builder: override the reason encoding
    pub fn with_reason_encoding(mut self, reason_encoding: ReasonEncoding) -> Self {
        self.reason_encoding = reason_encoding;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::memory().with_engine(Engine::RocksDb(default_data_dir()))
    }
}

/// `~/.docbridge/data`, or `./.docbridge/data` without a home directory
pub fn default_data_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".docbridge");
    path.push("data");
    path
}
