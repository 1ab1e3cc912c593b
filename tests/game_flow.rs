//! End-to-end games against word lists loaded from files

use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};
use wordle_uz::core::{Word, parse_letters};
use wordle_uz::game::{GameSession, GameStatus, GuessError, SubmitOutcome, messages};
use wordle_uz::wordlists::{LoadError, LoadState, WordListLoader, WordLists, WordSource};

fn list_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn source(file: &NamedTempFile) -> WordSource {
    WordSource::File(file.path().to_path_buf())
}

fn submit(session: &mut GameSession, lists: &WordLists, text: &str) -> Result<SubmitOutcome, GuessError> {
    session.submit_letters(&parse_letters(text).unwrap(), lists)
}

#[test]
fn loader_reads_files_in_background() {
    let common = list_file("Kitob\n\nmaktab\no'rmon\n");
    let full = list_file("zabon\r\nbahor\ncable\n");

    let mut loader = WordListLoader::new();
    assert!(matches!(loader.state(), LoadState::NotLoaded));
    loader.start(source(&common), source(&full));

    let lists = loader.wait().lists().cloned().expect("lists should load");
    assert_eq!(lists.candidates().len(), 2);
    // Union of both lists, invalid lines skipped
    assert_eq!(lists.dictionary_len(), 4);
    assert!(lists.contains(&Word::new("o‘rmon").unwrap()));
    assert!(!lists.contains(&Word::new("qalam").unwrap()));
}

#[test]
fn missing_file_fails_quietly() {
    let dir = TempDir::new().unwrap();
    let missing = WordSource::File(dir.path().join("nope.txt"));
    let full = list_file("kitob\n");

    let mut loader = WordListLoader::new();
    loader.start(missing.clone(), source(&full));
    assert!(matches!(loader.wait(), LoadState::Failed));

    let err = WordLists::load(&missing, &source(&full)).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn candidates_without_valid_words_fail() {
    let common = list_file("cable\nwhile\n\n");
    let full = list_file("kitob\n");
    let err = WordLists::load(&source(&common), &source(&full)).unwrap_err();
    assert!(matches!(err, LoadError::Empty(_)));
}

#[test]
fn win_on_third_guess() {
    let common = list_file("g‘olib\n");
    let full = list_file("qog‘oz\nbahor\n");
    let lists = WordLists::load(&source(&common), &source(&full)).unwrap();

    let mut session = GameSession::start(&lists, &mut rand::rng()).unwrap();
    assert_eq!(session.target().text(), "g‘olib");

    let first = submit(&mut session, &lists, "qog'oz").unwrap();
    assert_eq!(first.verdict().to_string(), "-GY--");
    assert!(first.player_message().is_none());

    let err = submit(&mut session, &lists, "kitob").unwrap_err();
    assert_eq!(err.player_message(), Some(messages::NOT_IN_LIST));
    assert_eq!(session.guesses().len(), 1);

    submit(&mut session, &lists, "bahor").unwrap();
    let last = submit(&mut session, &lists, "G'OLIB").unwrap();
    assert!(matches!(last, SubmitOutcome::Won(_)));
    assert_eq!(last.player_message().as_deref(), Some(messages::WON));
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.guesses().len(), 3);
}

#[test]
fn six_misses_lose_and_seventh_is_refused() {
    let common = list_file("kitob\n");
    let full = list_file("zabon\n");
    let lists = WordLists::load(&source(&common), &source(&full)).unwrap();
    let mut session = GameSession::new(Word::new("kitob").unwrap());

    for turn in 1..=6 {
        let outcome = submit(&mut session, &lists, "zabon").unwrap();
        assert_eq!(matches!(outcome, SubmitOutcome::Lost { .. }), turn == 6);
    }
    assert_eq!(session.status(), GameStatus::Lost);

    let err = submit(&mut session, &lists, "kitob").unwrap_err();
    assert_eq!(err, GuessError::GameOver);
    assert_eq!(err.player_message(), None);
    assert_eq!(session.guesses().len(), 6);
    assert!(!session.push_letter(parse_letters("k").unwrap()[0]));
}

#[test]
fn file_source_displays_its_path() {
    let file = list_file("kitob\n");
    let shown = source(&file).to_string();
    assert_eq!(Path::new(&shown), file.path());
}
