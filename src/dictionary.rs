//! Dictionary oracle: decides whether a word is real.
//!
//! The engine only ever talks to the [`Dictionary`] trait, so a bundled
//! word list, a spell-checker binding or a remote service can sit behind
//! it. [`WordListDictionary`] is the in-memory implementation used by the
//! binary and by tests.

use crate::error::DictionaryError;
use crate::language::WordList;
use std::collections::HashSet;
use std::sync::Arc;

pub trait Dictionary: Send + Sync {
    /// Reports whether `word` is a recognized entry for `language`.
    fn is_recognized(&self, word: &str, language: &str) -> Result<bool, DictionaryError>;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_recognized(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        (**self).is_recognized(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_recognized(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        (**self).is_recognized(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn is_recognized(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        (**self).is_recognized(word, language)
    }
}

/// Set-backed dictionary for a single language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = WordList::from_words("dictionary", language, words);
        Self::from(list)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<WordList> for WordListDictionary {
    fn from(list: WordList) -> Self {
        Self {
            language: list.language,
            words: list.words.into_iter().collect(),
        }
    }
}

impl Dictionary for WordListDictionary {
    fn is_recognized(&self, word: &str, language: &str) -> Result<bool, DictionaryError> {
        if !language.eq_ignore_ascii_case(&self.language) {
            return Err(DictionaryError::UnsupportedLanguage {
                requested: language.to_string(),
                available: self.language.clone(),
            });
        }
        Ok(self.words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ENGLISH;
    use assert_matches::assert_matches;

    #[test]
    fn test_recognizes_members_only() {
        let dictionary = WordListDictionary::new("en", ["plan", "Lane"]);

        assert!(dictionary.is_recognized("plan", "en").unwrap());
        assert!(dictionary.is_recognized("lane", "en").unwrap());
        assert!(!dictionary.is_recognized("plna", "en").unwrap());
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn test_language_tag_is_case_insensitive() {
        let dictionary = WordListDictionary::new("en", ["plan"]);
        assert!(dictionary.is_recognized("plan", "EN").unwrap());
    }

    #[test]
    fn test_other_language_is_an_error() {
        let dictionary = WordListDictionary::new("en", ["plan"]);

        assert_matches!(
            dictionary.is_recognized("plan", "de"),
            Err(DictionaryError::UnsupportedLanguage { requested, available })
                if requested == "de" && available == "en"
        );
    }

    #[test]
    fn test_bundled_english() {
        let dictionary = WordListDictionary::from(WordList::bundled(ENGLISH).unwrap());

        assert_eq!(dictionary.language(), "en");
        assert!(dictionary.is_recognized("silent", "en").unwrap());
        assert!(!dictionary.is_recognized("zzzzz", "en").unwrap());
    }

    #[test]
    fn test_trait_objects_forward() {
        let boxed: Box<dyn Dictionary> = Box::new(WordListDictionary::new("en", ["plan"]));
        let shared = Arc::new(WordListDictionary::new("en", ["plan"]));

        assert!(boxed.is_recognized("plan", "en").unwrap());
        assert!(shared.is_recognized("plan", "en").unwrap());
    }
}
