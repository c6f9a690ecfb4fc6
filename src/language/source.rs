use super::core::WordList;
use crate::error::WordListError;
use std::fs;
use std::path::Path;

impl WordList {
    /// Reads a word list from disk.
    ///
    /// `.json` files use the bundled layout; anything else is read as one
    /// word per line.
    pub fn from_path<P: AsRef<Path>>(path: P, language: &str) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| WordListError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let list: WordList =
                serde_json::from_str(&contents).map_err(|source| WordListError::Parse {
                    name: path.display().to_string(),
                    source,
                })?;
            Ok(WordList::from_words(&list.name, &list.language, list.words))
        } else {
            Ok(WordList::from_words(&name, language, contents.lines()))
        }
    }
}
