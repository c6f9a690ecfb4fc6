use crate::app_dirs::AppDirs;
use crate::error::{ConfigError, WordListError};
use crate::language::{WordList, ENGLISH, START_WORDS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Language tag handed to the dictionary.
    pub language: String,
    /// Bundled dictionary name, used when `dictionary_path` is unset.
    pub dictionary: String,
    /// Bundled root word list name, used when `root_words_path` is unset.
    pub root_words: String,
    pub dictionary_path: Option<PathBuf>,
    pub root_words_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            dictionary: ENGLISH.to_string(),
            root_words: START_WORDS.to_string(),
            dictionary_path: None,
            root_words_path: None,
        }
    }
}

impl Config {
    /// Root words to draw from: the external file if set, else the bundled list.
    pub fn root_word_list(&self) -> Result<WordList, WordListError> {
        match &self.root_words_path {
            Some(path) => WordList::from_path(path, &self.language),
            None => WordList::bundled(&self.root_words),
        }
    }

    /// Dictionary words; the list's language tag must match `language`.
    pub fn dictionary_list(&self) -> Result<WordList, WordListError> {
        let list = match &self.dictionary_path {
            Some(path) => WordList::from_path(path, &self.language)?,
            None => WordList::bundled(&self.dictionary)?,
        };
        if !list.language.eq_ignore_ascii_case(&self.language) {
            return Err(WordListError::LanguageMismatch {
                name: list.name,
                configured: self.language.clone(),
                available: list.language,
            });
        }
        Ok(list)
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("scramble_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|err| {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring unreadable config");
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data).map_err(write_err)?;
        tracing::debug!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            language: "de".into(),
            dictionary: "german".into(),
            root_words: "start".into(),
            dictionary_path: Some(PathBuf::from("/tmp/words.txt")),
            root_words_path: None,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"language": "fr"}"#).unwrap();

        let loaded = FileConfigStore::with_path(&path).load();
        assert_eq!(loaded.language, "fr");
        assert_eq!(loaded.dictionary, ENGLISH);
    }

    #[test]
    fn default_lists_are_bundled() {
        let cfg = Config::default();
        assert_eq!(cfg.root_word_list().unwrap().name, "start");
        assert_eq!(cfg.dictionary_list().unwrap().name, "english");
    }

    #[test]
    fn external_root_words_take_precedence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roots.txt");
        fs::write(&path, "garden\nplanet\n").unwrap();

        let cfg = Config {
            root_words_path: Some(path),
            ..Config::default()
        };
        assert_eq!(cfg.root_word_list().unwrap().words, vec!["garden", "planet"]);
    }

    #[test]
    fn bundled_dictionary_rejects_other_language() {
        let cfg = Config {
            language: "fr".into(),
            ..Config::default()
        };
        assert_matches!(
            cfg.dictionary_list(),
            Err(WordListError::LanguageMismatch { configured, available, .. })
                if configured == "fr" && available == "en"
        );
    }

    #[test]
    fn json_dictionary_tag_must_match_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(
            &path,
            r#"{"name": "british", "language": "en-GB", "size": 1, "words": ["plan"]}"#,
        )
        .unwrap();

        let cfg = Config {
            dictionary_path: Some(path),
            ..Config::default()
        };
        assert_matches!(
            cfg.dictionary_list(),
            Err(WordListError::LanguageMismatch { available, .. }) if available == "en-GB"
        );

        let cfg = Config {
            language: "EN-gb".into(),
            ..cfg
        };
        assert_eq!(cfg.dictionary_list().unwrap().words, vec!["plan"]);
    }

    #[test]
    fn text_dictionary_takes_configured_language() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "grade\nnerd\n").unwrap();

        let cfg = Config {
            language: "de".into(),
            dictionary_path: Some(path),
            ..Config::default()
        };
        assert_eq!(cfg.dictionary_list().unwrap().language, "de");
    }

    #[test]
    fn garbage_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }
}
