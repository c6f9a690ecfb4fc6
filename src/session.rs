use serde::Serialize;
use std::collections::VecDeque;

/// One round of play against a single root word.
#[derive(Debug, Clone)]
pub struct Session {
    root_word: String,
    // most recent first
    used_words: VecDeque<String>,
    score: usize,
}

impl Session {
    pub fn new(root_word: String) -> Self {
        Self {
            root_word,
            used_words: VecDeque::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    pub fn used_words(&self) -> &VecDeque<String> {
        &self.used_words
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Records a validated word and returns the new score.
    ///
    /// Callers are expected to have run the rules first; nothing is checked
    /// here.
    pub(crate) fn accept(&mut self, word: String) -> usize {
        self.score += word.chars().count();
        self.used_words.push_front(word);
        self.score
    }

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            root_word: self.root_word.clone(),
            used_words: self.used_words.iter().cloned().collect(),
            score: self.score,
        }
    }
}

/// Read-only copy of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: usize,
}
