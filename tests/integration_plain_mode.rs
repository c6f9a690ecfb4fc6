// Drives the compiled binary in --plain mode over stdin/stdout.
// HOME and XDG dirs point at a temp dir so a stored user config never leaks in.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn scramble(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("scramble").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn plain_game_with_custom_root_words() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    fs::write(&roots, "planet\n").unwrap();

    let output = scramble(&home)
        .args(["--plain", "--seed", "1", "--root-words-path"])
        .arg(&roots)
        .write_stdin("plan\nplan\nxz\nplanet\nzzzzz\nplna\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout,
        "root word: planet\n\
         accepted plan (+4) score 4\n\
         rejected AlreadyUsed: Word used already\n\
         rejected TooShort: Too short. Word must be longer than two characters\n\
         rejected IsRootWord: Error. Can not write root word itself\n\
         rejected NotPossible: Word not possible. You can not spell it from 'planet'\n\
         rejected NotARealWord: Word can not be recognized. It does not exist\n\
         final score: 4\n"
    );
}

#[test]
fn plain_game_with_custom_dictionary() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    let words = home.path().join("words.txt");
    fs::write(&roots, "garden\n").unwrap();
    fs::write(&words, "grade\nnerd\n").unwrap();

    let output = scramble(&home)
        .args(["--plain", "--root-words-path"])
        .arg(&roots)
        .arg("--dictionary-path")
        .arg(&words)
        .write_stdin("nerd\ngrand\n:state\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[1], "accepted nerd (+4) score 4");
    assert_eq!(
        lines[2],
        "rejected NotARealWord: Word can not be recognized. It does not exist"
    );
    assert_eq!(
        lines[3],
        r#"{"root_word":"garden","used_words":["nerd"],"score":4}"#
    );
}

#[test]
fn seeded_games_pick_the_same_root_word() {
    let home = tempfile::tempdir().unwrap();

    let first = scramble(&home)
        .args(["--plain", "--seed", "7"])
        .write_stdin("")
        .output()
        .unwrap();
    let second = scramble(&home)
        .args(["--plain", "--seed", "7"])
        .write_stdin("")
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8(first.stdout)
        .unwrap()
        .starts_with("root word: "));
}

#[test]
fn empty_root_word_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    fs::write(&roots, "\n\n").unwrap();

    let output = scramble(&home)
        .args(["--plain", "--root-words-path"])
        .arg(&roots)
        .write_stdin("plan\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("NoRootWordsAvailable"));
}

#[test]
fn save_config_persists_settings() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    fs::write(&roots, "garden\n").unwrap();

    let output = scramble(&home)
        .args(["--plain", "--save-config", "--root-words-path"])
        .arg(&roots)
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());

    // the saved root word file is used without the flag
    let output = scramble(&home)
        .arg("--plain")
        .write_stdin("")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("root word: garden\n"));
}

#[test]
fn piped_stdin_without_plain_is_rejected() {
    let home = tempfile::tempdir().unwrap();

    let output = scramble(&home).write_stdin("plan\n").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("stdin must be a tty"));
}

#[test]
fn language_without_matching_dictionary_fails_at_startup() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    fs::write(&roots, "planet\n").unwrap();

    let output = scramble(&home)
        .args(["--plain", "--language", "de", "--save-config", "--root-words-path"])
        .arg(&roots)
        .write_stdin("plan\nlane\n:state\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("LanguageMismatch"));

    // the rejected settings were not stored
    let output = scramble(&home)
        .args(["--plain", "--root-words-path"])
        .arg(&roots)
        .write_stdin("plan\n")
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn json_dictionary_with_other_language_tag_fails_at_startup() {
    let home = tempfile::tempdir().unwrap();
    let roots = home.path().join("roots.txt");
    let words = home.path().join("british.json");
    fs::write(&roots, "planet\n").unwrap();
    fs::write(
        &words,
        r#"{"name": "british", "language": "en-GB", "words": ["plan"]}"#,
    )
    .unwrap();

    let output = scramble(&home)
        .args(["--plain", "--root-words-path"])
        .arg(&roots)
        .arg("--dictionary-path")
        .arg(&words)
        .write_stdin("plan\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("LanguageMismatch"));
    assert!(stderr.contains("en-GB"));

    // naming the dictionary's language lets the game run
    let output = scramble(&home)
        .args(["--plain", "--language", "en-GB", "--root-words-path"])
        .arg(&roots)
        .arg("--dictionary-path")
        .arg(&words)
        .write_stdin("plan\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("accepted plan (+4) score 4"));
}
