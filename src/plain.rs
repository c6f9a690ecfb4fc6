//! Line-oriented game loop for pipes and scripts.
//!
//! Every input line is a submission, except the commands `:new`,
//! `:state` and `:quit`.

use crate::dictionary::Dictionary;
use crate::engine::{Outcome, SessionEngine};
use crate::error::PlayError;
use rand::Rng;
use std::io::{BufRead, Write};

pub fn run<D, R, I, W>(
    engine: &mut SessionEngine<D>,
    root_words: &[String],
    rng: &mut R,
    input: I,
    mut out: W,
) -> Result<(), PlayError>
where
    D: Dictionary,
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "root word: {}", engine.session().root_word())?;

    for line in input.lines() {
        let line = line?;
        match line.trim() {
            ":quit" => break,
            ":new" => {
                let root_word = engine.start_session(root_words, rng)?;
                writeln!(out, "root word: {root_word}")?;
            }
            ":state" => {
                let state = serde_json::to_string(&engine.current_state())?;
                writeln!(out, "{state}")?;
            }
            _ => match engine.submit_word(&line) {
                Ok(Outcome::Accepted { word, score }) => {
                    writeln!(out, "accepted {word} (+{}) score {score}", word.chars().count())?;
                }
                Ok(Outcome::Rejected(rejection)) => {
                    let message = rejection.message();
                    if message.is_empty() {
                        writeln!(out, "rejected {}: {}", rejection.kind(), rejection.title())?;
                    } else {
                        writeln!(
                            out,
                            "rejected {}: {}. {message}",
                            rejection.kind(),
                            rejection.title()
                        )?;
                    }
                }
                // the dictionary may recover; keep playing
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }
        out.flush()?;
    }

    writeln!(out, "final score: {}", engine.session().score())?;
    Ok(())
}
