pub mod core;
pub mod source;

pub use self::core::{WordList, ENGLISH, START_WORDS};
