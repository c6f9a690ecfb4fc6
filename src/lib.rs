// Library surface for the binary, headless/integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod language;
pub mod logging;
pub mod plain;
pub mod rules;
pub mod runtime;
pub mod session;
pub mod ui;

pub use dictionary::{Dictionary, WordListDictionary};
pub use engine::{Outcome, SessionEngine, SharedEngine};
pub use error::EngineError;
pub use rules::{Rejection, RejectionKind};
pub use session::SessionState;
