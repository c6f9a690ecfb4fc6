use crate::session::Session;
use itertools::Itertools;

/// Words must be strictly longer than two characters.
pub const MIN_WORD_LENGTH: usize = 3;

/// Tag for each rejection, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum RejectionKind {
    TooShort,
    IsRootWord,
    AlreadyUsed,
    NotPossible,
    NotARealWord,
}

/// Why a submitted word was turned down.
///
/// Rules are checked in declaration order and only the first failure is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort,
    IsRootWord,
    AlreadyUsed,
    NotPossible { root_word: String },
    NotARealWord,
}

impl Rejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::TooShort => RejectionKind::TooShort,
            Rejection::IsRootWord => RejectionKind::IsRootWord,
            Rejection::AlreadyUsed => RejectionKind::AlreadyUsed,
            Rejection::NotPossible { .. } => RejectionKind::NotPossible,
            Rejection::NotARealWord => RejectionKind::NotARealWord,
        }
    }

    /// Short heading for an alert.
    pub fn title(&self) -> String {
        match self {
            Rejection::TooShort => "Too short",
            Rejection::IsRootWord => "Error",
            Rejection::AlreadyUsed => "Word used already",
            Rejection::NotPossible { .. } => "Word not possible",
            Rejection::NotARealWord => "Word can not be recognized",
        }
        .to_string()
    }

    /// Longer explanation for an alert body; may be empty.
    pub fn message(&self) -> String {
        match self {
            Rejection::TooShort => "Word must be longer than two characters".to_string(),
            Rejection::IsRootWord => "Can not write root word itself".to_string(),
            Rejection::AlreadyUsed => String::new(),
            Rejection::NotPossible { root_word } => {
                format!("You can not spell it from '{root_word}'")
            }
            Rejection::NotARealWord => "It does not exist".to_string(),
        }
    }
}

/// Lowercase and trim surrounding whitespace, newlines included.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_long_enough(answer: &str) -> bool {
    answer.chars().count() >= MIN_WORD_LENGTH
}

pub fn is_not_root(answer: &str, root_word: &str) -> bool {
    answer != root_word
}

pub fn is_original<'a, I>(answer: &str, used_words: I) -> bool
where
    I: IntoIterator<Item = &'a String>,
{
    !used_words.into_iter().any(|used| used == answer)
}

/// Can `answer` be spelled from the letters of `root_word`, using each
/// letter at most as often as it occurs there?
pub fn is_possible(answer: &str, root_word: &str) -> bool {
    let mut available = root_word.chars().counts();

    for letter in answer.chars() {
        match available.get_mut(&letter) {
            Some(remaining) if *remaining > 0 => *remaining -= 1,
            _ => return false,
        }
    }
    true
}

/// Runs every rule that needs no dictionary, in order, against an already
/// normalized answer.
pub fn check_local(answer: &str, session: &Session) -> Result<(), Rejection> {
    if !is_long_enough(answer) {
        return Err(Rejection::TooShort);
    }

    if !is_not_root(answer, session.root_word()) {
        return Err(Rejection::IsRootWord);
    }

    if !is_original(answer, session.used_words()) {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_possible(answer, session.root_word()) {
        return Err(Rejection::NotPossible {
            root_word: session.root_word().to_string(),
        });
    }

    Ok(())
}
