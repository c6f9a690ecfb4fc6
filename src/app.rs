use crate::dictionary::Dictionary;
use crate::engine::{Outcome, SessionEngine};
use crate::error::EngineError;
use crate::rules::Rejection;
use crate::runtime::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;

/// Modal message shown over the board until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Rejected(Rejection),
    Failure(String),
}

impl Alert {
    pub fn title(&self) -> String {
        match self {
            Alert::Rejected(rejection) => rejection.title(),
            Alert::Failure(_) => "Something went wrong".to_string(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Alert::Rejected(rejection) => rejection.message(),
            Alert::Failure(reason) => reason.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Terminal front end state: the engine plus what the player is typing.
#[derive(Debug)]
pub struct App<D> {
    pub engine: SessionEngine<D>,
    pub input: String,
    pub alert: Option<Alert>,
    root_words: Vec<String>,
    rng: StdRng,
}

impl<D: Dictionary> App<D> {
    pub fn new(engine: SessionEngine<D>, root_words: Vec<String>, rng: StdRng) -> Self {
        Self {
            engine,
            input: String::new(),
            alert: None,
            root_words,
            rng,
        }
    }

    pub fn handle_event(&mut self, event: GameEvent) -> AppAction {
        match event {
            GameEvent::Key(key) => self.on_key(key),
            GameEvent::Resize | GameEvent::Tick => AppAction::Continue,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> AppAction {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }

        // the alert swallows the key that dismisses it
        if self.alert.take().is_some() {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Esc => return AppAction::Quit,
            KeyCode::F(5) => self.restart(),
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Enter => {
                self.submit();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {}
        }
        AppAction::Continue
    }

    /// Submits the current input. Accepted words clear the input; rejected
    /// ones leave it in place so the player can fix it.
    pub fn submit(&mut self) -> Option<Outcome> {
        match self.engine.submit_word(&self.input) {
            Ok(outcome) => {
                match &outcome {
                    Outcome::Accepted { .. } => self.input.clear(),
                    Outcome::Rejected(rejection) => {
                        self.alert = Some(Alert::Rejected(rejection.clone()))
                    }
                }
                Some(outcome)
            }
            Err(err) => {
                self.alert = Some(Alert::Failure(err.to_string()));
                None
            }
        }
    }

    pub fn restart(&mut self) {
        self.input.clear();
        if let Err(err) = self.try_restart() {
            self.alert = Some(Alert::Failure(err.to_string()));
        }
    }

    fn try_restart(&mut self) -> Result<(), EngineError> {
        self.engine.start_session(&self.root_words, &mut self.rng)?;
        Ok(())
    }
}
