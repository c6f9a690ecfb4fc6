use crate::error::WordListError;
use crate::rules::normalize;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// Bundled list of root words to play with.
pub const START_WORDS: &str = "start";
/// Bundled English dictionary.
pub const ENGLISH: &str = "english";

fn default_language() -> String {
    "en".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    /// Loads one of the lists compiled into the binary, e.g. `"start"`.
    pub fn bundled(name: &str) -> Result<Self, WordListError> {
        let file_name = format!("{name}.json");
        let file = LANG_DIR
            .get_file(&file_name)
            .ok_or_else(|| WordListError::BundledNotFound {
                name: name.to_string(),
            })?;

        let contents = file.contents_utf8().ok_or_else(|| WordListError::NotUtf8 {
            name: file_name.clone(),
        })?;

        let list: WordList = from_str(contents).map_err(|source| WordListError::Parse {
            name: file_name,
            source,
        })?;

        Ok(list.normalized())
    }

    /// Builds a list from loose words, normalizing each and dropping blanks.
    pub fn from_words<I, S>(name: &str, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            language: language.to_string(),
            size: 0,
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_string())
                .collect(),
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.words = self
            .words
            .iter()
            .map(|word| normalize(word))
            .filter(|word| !word.is_empty())
            .collect();
        self.size = self.words.len() as u32;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_bundled_start_words() {
        let list = WordList::bundled(START_WORDS).unwrap();

        assert_eq!(list.name, "start");
        assert_eq!(list.language, "en");
        assert!(!list.is_empty());
        assert_eq!(list.size as usize, list.words.len());
        assert!(list.words.iter().all(|w| w.len() >= 8));
    }

    #[test]
    fn test_bundled_english() {
        let list = WordList::bundled(ENGLISH).unwrap();

        assert_eq!(list.name, "english");
        assert!(list.words.contains(&"plan".to_string()));
        assert!(list.words.contains(&"silent".to_string()));
    }

    #[test]
    fn test_bundled_missing() {
        assert_matches!(
            WordList::bundled("klingon"),
            Err(WordListError::BundledNotFound { name }) if name == "klingon"
        );
    }

    #[test]
    fn test_deserialization_defaults_language() {
        let json_data = r#"
        {
            "name": "test",
            "words": ["hello", "world", "test"]
        }
        "#;

        let list: WordList = from_str(json_data).expect("Failed to deserialize test list");

        assert_eq!(list.language, "en");
        assert_eq!(list.words.len(), 3);
    }

    #[test]
    fn test_from_words_normalizes_and_drops_blanks() {
        let list = WordList::from_words("custom", "en", ["  Garden", "", "PLANET\n", "   "]);

        assert_eq!(list.words, vec!["garden", "planet"]);
        assert_eq!(list.size, 2);
    }
}
