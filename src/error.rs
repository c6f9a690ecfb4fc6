//! Error types shared across the engine, word lists and configuration.
//!
//! Word rejections are not errors here: they come back as
//! [`crate::rules::Rejection`] inside a successful [`crate::engine::Outcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the session engine itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The root word source was empty (or held only blank entries).
    #[error("no root words available to start a session")]
    NoRootWordsAvailable,

    /// The dictionary oracle could not answer.
    #[error("dictionary lookup failed: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Another writer panicked while holding the session lock.
    #[error("session lock poisoned")]
    LockPoisoned,
}

/// Failures reported by a [`crate::dictionary::Dictionary`] implementation.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("language '{requested}' is not supported (dictionary covers '{available}')")]
    UnsupportedLanguage { requested: String, available: String },

    #[error("dictionary unavailable: {0}")]
    Unavailable(String),
}

/// Failures while loading a bundled or external word list.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("bundled word list not found: {name}")]
    BundledNotFound { name: String },

    #[error("word list {name} is not valid UTF-8")]
    NotUtf8 { name: String },

    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The dictionary covers a different language than the one configured.
    #[error("dictionary {name} covers '{available}', but the configured language is '{configured}'")]
    LanguageMismatch {
        name: String,
        configured: String,
        available: String,
    },
}

/// Failures while persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures that end a `--plain` game.
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to serialize session state: {0}")]
    Serialize(#[from] serde_json::Error),
}
