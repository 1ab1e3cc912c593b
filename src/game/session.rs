//! One game from target selection to win or loss

use super::keyboard::KeyboardState;
use super::messages;
use crate::core::{Letter, MAX_GUESSES, Verdict, WORD_LENGTH, Word};
use crate::wordlists::WordLists;
use rand::Rng;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: Word,
    pub verdict: Verdict,
}

/// What an accepted submission did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Continue(Verdict),
    Won(Verdict),
    Lost { verdict: Verdict, target: Word },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        match self {
            Self::Continue(v) | Self::Won(v) | Self::Lost { verdict: v, .. } => *v,
        }
    }

    /// Message to show the player, if the outcome warrants one
    #[must_use]
    pub fn player_message(&self) -> Option<String> {
        match self {
            Self::Continue(_) => None,
            Self::Won(_) => Some(messages::WON.to_string()),
            Self::Lost { target, .. } => Some(messages::lost(target)),
        }
    }
}

/// Why a submission was refused
///
/// A refused submission never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("the game is over")]
    GameOver,

    #[error("guess has {0} letters, expected 5")]
    WrongLength(usize),

    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
}

impl GuessError {
    /// Message to show the player; `None` for silently ignored submissions
    #[must_use]
    pub const fn player_message(&self) -> Option<&'static str> {
        match self {
            Self::GameOver => None,
            Self::WrongLength(_) => Some(messages::WRONG_LENGTH),
            Self::NotInDictionary(_) => Some(messages::NOT_IN_LIST),
        }
    }
}

/// State of a single game
///
/// The target is fixed at construction. The dictionary is not owned here; it
/// is passed in on every submission.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guesses: Vec<ScoredGuess>,
    current: Vec<Letter>,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl GameSession {
    #[must_use]
    pub fn new(target: Word) -> Self {
        tracing::debug!(word = %target, "new game");
        Self {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            current: Vec::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a game with a random target from `lists`
    pub fn start<R: Rng + ?Sized>(lists: &WordLists, rng: &mut R) -> Option<Self> {
        lists.pick_target(rng).cloned().map(Self::new)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    /// The guess being typed
    #[must_use]
    pub fn current(&self) -> &[Letter] {
        &self.current
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Append a letter to the guess being typed
    ///
    /// Returns `false` when the game is over or the guess is already full.
    pub fn push_letter(&mut self, letter: Letter) -> bool {
        if self.is_over() || self.current.len() >= WORD_LENGTH {
            return false;
        }
        self.current.push(letter);
        true
    }

    /// Turn a trailing `o`/`g` into `o‘`/`g‘`
    pub fn apply_tick(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        match self.current.last_mut() {
            Some(last) => match last.with_tick() {
                Some(ticked) => {
                    *last = ticked;
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.current.pop().is_some()
    }

    /// Submit the guess being typed
    ///
    /// # Errors
    ///
    /// Returns a [`GuessError`] when the game is over, the guess is not five
    /// letters long or it is not in the dictionary. The typed guess is kept
    /// as-is in all of these cases.
    pub fn submit(&mut self, lists: &WordLists) -> Result<SubmitOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let letters: [Letter; WORD_LENGTH] = self
            .current
            .as_slice()
            .try_into()
            .map_err(|_| GuessError::WrongLength(self.current.len()))?;
        let word = Word::from_letters(letters);

        if !lists.contains(&word) {
            tracing::debug!(guess = %word, "guess rejected: not in dictionary");
            return Err(GuessError::NotInDictionary(word.text().to_string()));
        }

        let verdict = Verdict::score(&word, &self.target);
        tracing::debug!(guess = %word, %verdict, turn = self.guesses.len() + 1, "guess scored");

        self.keyboard.record(&word, verdict);
        self.guesses.push(ScoredGuess { word, verdict });
        self.current.clear();

        let outcome = if verdict.is_solved() {
            self.status = GameStatus::Won;
            SubmitOutcome::Won(verdict)
        } else if self.guesses.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lost {
                verdict,
                target: self.target.clone(),
            }
        } else {
            SubmitOutcome::Continue(verdict)
        };

        if self.is_over() {
            tracing::info!(status = ?self.status, guesses = self.guesses.len(), "game finished");
        }

        Ok(outcome)
    }

    /// Replace the typed guess with `letters` and submit it
    ///
    /// Used by line-based input where a whole word arrives at once.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::submit`]; on error the typed guess is untouched.
    pub fn submit_letters(
        &mut self,
        letters: &[Letter],
        lists: &WordLists,
    ) -> Result<SubmitOutcome, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }
        if letters.len() != WORD_LENGTH {
            return Err(GuessError::WrongLength(letters.len()));
        }

        let typed = std::mem::replace(&mut self.current, letters.to_vec());
        let result = self.submit(lists);
        if result.is_err() {
            self.current = typed;
        }
        result
    }
}
