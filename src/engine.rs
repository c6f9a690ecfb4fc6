//! Session engine: owns the current session and runs submissions through
//! the rules.
//!
//! [`SessionEngine`] is the single-owner form; `&mut self` on the mutators
//! gives the single-writer guarantee for free. [`SharedEngine`] puts one
//! behind an `RwLock` for callers that need to observe the session from
//! other threads.

use crate::dictionary::Dictionary;
use crate::error::{EngineError, Result};
use crate::rules::{check_local, normalize, Rejection};
use crate::session::{Session, SessionState};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { word: String, score: usize },
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(rejection) => Some(rejection),
            Outcome::Accepted { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct SessionEngine<D> {
    session: Session,
    dictionary: D,
    language: String,
}

impl<D: Dictionary> SessionEngine<D> {
    /// Creates an engine and starts its first session.
    pub fn new<S, R>(root_words: &[S], dictionary: D, language: &str, rng: &mut R) -> Result<Self>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let root_word = pick_root_word(root_words, rng)?;
        info!(root_word = %root_word, language, "session started");

        Ok(Self {
            session: Session::new(root_word),
            dictionary,
            language: language.to_string(),
        })
    }

    /// Replaces the current session with a fresh one on a random root word.
    ///
    /// On error the previous session is left as it was.
    pub fn start_session<S, R>(&mut self, root_words: &[S], rng: &mut R) -> Result<&str>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let root_word = pick_root_word(root_words, rng)?;
        info!(
            root_word = %root_word,
            previous_score = self.session.score(),
            "session started"
        );

        self.session = Session::new(root_word);
        Ok(self.session.root_word())
    }

    /// Validates a raw submission and records it when every rule passes.
    ///
    /// Rule failures come back as `Ok(Outcome::Rejected(_))`. `Err` is
    /// reserved for a dictionary that could not answer; the session is
    /// unchanged in both cases.
    pub fn submit_word(&mut self, raw: &str) -> Result<Outcome> {
        let answer = normalize(raw);

        if let Err(rejection) = check_local(&answer, &self.session) {
            debug!(word = %answer, kind = %rejection.kind(), "word rejected");
            return Ok(Outcome::Rejected(rejection));
        }

        let recognized = match self.dictionary.is_recognized(&answer, &self.language) {
            Ok(recognized) => recognized,
            Err(err) => {
                warn!(word = %answer, error = %err, "dictionary lookup failed");
                return Err(err.into());
            }
        };

        if !recognized {
            let rejection = Rejection::NotARealWord;
            debug!(word = %answer, kind = %rejection.kind(), "word rejected");
            return Ok(Outcome::Rejected(rejection));
        }

        let score = self.session.accept(answer.clone());
        debug!(word = %answer, score, "word accepted");

        Ok(Outcome::Accepted {
            word: answer,
            score,
        })
    }

    pub fn current_state(&self) -> SessionState {
        self.session.snapshot()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

fn pick_root_word<S, R>(root_words: &[S], rng: &mut R) -> Result<String>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let candidates: Vec<String> = root_words
        .iter()
        .map(|word| normalize(word.as_ref()))
        .filter(|word| !word.is_empty())
        .collect();

    candidates
        .choose(rng)
        .cloned()
        .ok_or(EngineError::NoRootWordsAvailable)
}

/// Thread-safe handle to a [`SessionEngine`].
///
/// Mutators take the write lock for their whole read-decide-write
/// sequence, dictionary lookup included, so readers never see a
/// half-applied submission.
#[derive(Debug)]
pub struct SharedEngine<D> {
    inner: Arc<RwLock<SessionEngine<D>>>,
}

impl<D> Clone for SharedEngine<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Dictionary> SharedEngine<D> {
    pub fn new(engine: SessionEngine<D>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn start_session<S, R>(&self, root_words: &[S], rng: &mut R) -> Result<String>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut engine = self.inner.write().map_err(|_| EngineError::LockPoisoned)?;
        engine.start_session(root_words, rng).map(str::to_string)
    }

    pub fn submit_word(&self, raw: &str) -> Result<Outcome> {
        let mut engine = self.inner.write().map_err(|_| EngineError::LockPoisoned)?;
        engine.submit_word(raw)
    }

    pub fn current_state(&self) -> Result<SessionState> {
        let engine = self.inner.read().map_err(|_| EngineError::LockPoisoned)?;
        Ok(engine.current_state())
    }
}

impl<D: Dictionary> From<SessionEngine<D>> for SharedEngine<D> {
    fn from(engine: SessionEngine<D>) -> Self {
        Self::new(engine)
    }
}
