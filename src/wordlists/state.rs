//! Background word list loading
//!
//! Loading is an explicit state machine so "not playable yet" is a value the
//! UI can inspect instead of an implicit side effect:
//!
//! ```text
//! NotLoaded --start()--> Loading --poll()--> Ready(lists)
//!                                     \----> Failed
//! ```
//!
//! The fetch runs once on a worker thread. There is no retry and no
//! cancellation; a failure is logged and the state stays `Failed`.

use super::lists::WordLists;
use super::loader::{LoadError, WordSource};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Where the loader currently stands
#[derive(Debug, Clone)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready(Arc<WordLists>),
    Failed,
}

impl LoadState {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The loaded lists, if any
    #[must_use]
    pub fn lists(&self) -> Option<&Arc<WordLists>> {
        match self {
            Self::Ready(lists) => Some(lists),
            _ => None,
        }
    }
}

/// Owns the worker thread's result channel and the current [`LoadState`]
pub struct WordListLoader {
    state: LoadState,
    receiver: Option<Receiver<Result<WordLists, LoadError>>>,
}

impl Default for WordListLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WordListLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            receiver: None,
        }
    }

    /// A loader that already holds its lists
    #[must_use]
    pub fn ready(lists: WordLists) -> Self {
        Self {
            state: LoadState::Ready(Arc::new(lists)),
            receiver: None,
        }
    }

    /// Begin fetching both lists in the background
    ///
    /// Only the first call has an effect.
    pub fn start(&mut self, common: WordSource, full: WordSource) {
        if !matches!(self.state, LoadState::NotLoaded) {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name("wordlist-loader".to_string())
            .spawn(move || {
                let result = WordLists::load(&common, &full);
                // The receiver may be gone if the app already quit
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => {
                self.receiver = Some(rx);
                self.state = LoadState::Loading;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn word list loader");
                self.state = LoadState::Failed;
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// Check for a finished load without blocking
    pub fn poll(&mut self) -> &LoadState {
        let received = match &self.receiver {
            Some(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
            },
            None => None,
        };

        if let Some(result) = received {
            self.finish(result);
        }
        &self.state
    }

    /// Block until the load finishes
    pub fn wait(&mut self) -> &LoadState {
        if let Some(rx) = &self.receiver {
            let result = rx.recv().unwrap_or(Err(LoadError::Interrupted));
            self.finish(result);
        }
        &self.state
    }

    fn finish(&mut self, result: Result<WordLists, LoadError>) {
        self.receiver = None;
        self.state = match result {
            Ok(lists) => LoadState::Ready(Arc::new(lists)),
            Err(e) => {
                tracing::error!(error = %e, "failed to load word lists");
                LoadState::Failed
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn embedded(words: &'static [&'static str]) -> WordSource {
        WordSource::Embedded {
            name: "test",
            words,
        }
    }

    #[test]
    fn starts_not_loaded() {
        let loader = WordListLoader::new();
        assert!(matches!(loader.state(), LoadState::NotLoaded));
    }

    #[test]
    fn poll_before_start_stays_not_loaded() {
        let mut loader = WordListLoader::new();
        assert!(matches!(loader.poll(), LoadState::NotLoaded));
    }

    #[test]
    fn start_then_wait_reaches_ready() {
        let mut loader = WordListLoader::new();
        loader.start(embedded(&["kitob"]), embedded(&["zabon"]));
        assert!(matches!(
            loader.state(),
            LoadState::Loading | LoadState::Ready(_)
        ));

        let state = loader.wait();
        assert!(state.is_ready());
        assert_eq!(state.lists().unwrap().candidates().len(), 1);
    }

    #[test]
    fn poll_eventually_reaches_ready() {
        let mut loader = WordListLoader::new();
        loader.start(embedded(&["kitob"]), embedded(&["zabon"]));

        for _ in 0..500 {
            if loader.poll().is_ready() {
                return;
            }
            thread::sleep(std::time::Duration::from_millis(5));
        }
        panic!("loader never became ready");
    }

    #[test]
    fn missing_file_fails() {
        let mut loader = WordListLoader::new();
        loader.start(
            WordSource::File(PathBuf::from("/no/such/common_words.txt")),
            embedded(&["zabon"]),
        );
        assert!(matches!(loader.wait(), LoadState::Failed));
    }

    #[test]
    fn second_start_is_ignored() {
        let mut loader = WordListLoader::new();
        loader.start(embedded(&["kitob"]), embedded(&[]));
        loader.wait();
        loader.start(embedded(&["zabon"]), embedded(&[]));
        let lists = loader.state().lists().unwrap();
        assert_eq!(lists.candidates()[0].text(), "kitob");
    }
}
