//! The built binary end to end

use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordle_uz"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("WORDLE_UZ_THEME")
        .env_remove("WORDLE_UZ_COMMON")
        .env_remove("WORDLE_UZ_WORDS")
        .env_remove("WORDLE_UZ_LOG")
        .args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

#[test]
fn score_prints_pattern() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &[], &["score", "kitob", "kitob"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("GGGGG"));
}

#[test]
fn bad_theme_variable_is_reported() {
    let dir = TempDir::new().unwrap();
    let out = run(
        &dir,
        &[("WORDLE_UZ_THEME", "neon"), ("WORDLE_UZ_LOG", "wordle_uz=warn")],
        &["score", "kitob", "kitob"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("WORDLE_UZ_THEME"), "stderr: {stderr}");
    assert!(stderr.contains("neon"), "stderr: {stderr}");
}

#[test]
fn good_theme_variable_is_accepted() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, &[("WORDLE_UZ_THEME", "Light")], &["score", "kitob", "zabon"]);
    assert!(out.status.success());
}
