//! Integration tests for the memetts CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Audio directory with two clips, a renamed clip and a non-audio file
fn audio_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("哈哈.wav"), b"").unwrap();
    fs::write(dir.path().join("我不是神鹰.mp3"), b"").unwrap();
    fs::create_dir(dir.path().join("music")).unwrap();
    fs::write(dir.path().join("music").join("nggyu.flac"), b"").unwrap();
    fs::write(dir.path().join("README.txt"), b"not a clip").unwrap();
    fs::write(
        dir.path().join("names.json"),
        r#"{"nggyu": ["never gonna give you up", "rickroll"]}"#,
    )
    .unwrap();
    dir
}

fn memetts(audio_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.env_remove("MEMETTS_CONFIG")
        .env("MEMETTS_AUDIO_DIR", audio_dir);
    cmd
}

#[test]
fn test_split_text_argument() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["split", "-q", "他说我不是神鹰哈哈"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("speech\t他说\n"))
        .stdout(predicate::str::contains("clip\t我不是神鹰\t"))
        .stdout(predicate::str::contains("clip\t哈哈\t"));
}

#[test]
fn test_split_with_name_map() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["split", "-q", "-m"])
        .arg(dir.path().join("names.json"))
        .args(["-f", "json", "ok, never gonna give you up"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"text\": \"never gonna give you up\""))
        .stdout(predicate::str::contains("nggyu.flac"))
        .stdout(predicate::str::contains("\"text\": \"ok, \""));
}

#[test]
fn test_split_word_unit() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["split", "-q", "-u", "word", "-m"])
        .arg(dir.path().join("names.json"))
        .arg("well   never gonna give you up  ok");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("speech\twell\n"))
        .stdout(predicate::str::contains("clip\tnever gonna give you up\t"))
        .stdout(predicate::str::contains("speech\tok\n"));
}

#[test]
fn test_split_reference_matches_trie() {
    let dir = audio_fixture();
    let text = "哈哈哈我不是神鹰我不是哈";

    let trie = memetts(dir.path())
        .args(["split", "-q", "-f", "json", text])
        .output()
        .unwrap();
    let reference = memetts(dir.path())
        .args(["split", "-q", "-f", "json", "--reference", text])
        .output()
        .unwrap();

    assert!(trie.status.success());
    assert_eq!(trie.stdout, reference.stdout);
}

#[test]
fn test_split_files_in_parallel() {
    let dir = audio_fixture();
    let inputs = TempDir::new().unwrap();
    fs::write(inputs.path().join("a.txt"), "哈哈").unwrap();
    fs::write(inputs.path().join("b.txt"), "你好").unwrap();
    let pattern = format!("{}/*.txt", inputs.path().display());

    let mut cmd = memetts(dir.path());
    cmd.args(["split", "-q", "-f", "markdown", "-i", &pattern]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. **哈哈**"))
        .stdout(predicate::str::contains("2. 你好"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total tokens: 2 (1 clips)*"));
}

#[test]
fn test_split_output_file() {
    let dir = audio_fixture();
    let output = dir.path().join("out.txt");

    let mut cmd = memetts(dir.path());
    cmd.args(["split", "-q", "-o"]).arg(&output).arg("哈哈");
    cmd.assert().success().stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("clip\t哈哈\t"));
}

#[test]
fn test_stream_from_stdin() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["stream", "-q", "-f", "json"])
        .write_stdin("我不是\n神鹰哈哈\n");

    // "我不是" cannot join "神鹰" across the line break.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"text":"我不是","segment":0}"#,
        ))
        .stdout(predicate::str::contains(
            r#"{"text":"神鹰","segment":1}"#,
        ))
        .stdout(predicate::str::contains(r#""text":"哈哈","#));
}

#[test]
fn test_stream_custom_separator() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["stream", "-q", "-s", "|"]).write_stdin("哈|哈哈");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("speech\t哈\n\nclip\t哈哈\t"));
}

#[test]
fn test_stream_with_config_file() {
    let dir = audio_fixture();
    let config = dir.path().join("memetts.toml");
    fs::write(
        &config,
        r#"
[stream]
separator = "|"

[output]
default_format = "json"
"#,
    )
    .unwrap();

    let mut cmd = memetts(dir.path());
    cmd.args(["stream", "-q", "-c"])
        .arg(&config)
        .write_stdin("哈|哈");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"text":"哈","segment":1}"#));
}

#[test]
fn test_validate_phrase_file() {
    let dir = TempDir::new().unwrap();
    let phrases = dir.path().join("phrases.json");
    fs::write(&phrases, r#"[["never", "gonna"], ["give", "you", "up"]]"#).unwrap();

    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.arg("validate").arg(&phrases);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("✓ Phrase file is valid!"))
        .stdout(predicate::str::contains("Kind: tokens"))
        .stdout(predicate::str::contains("Phrases: 2"));
}

#[test]
fn test_validate_rejects_mixed_kinds() {
    let dir = TempDir::new().unwrap();
    let phrases = dir.path().join("phrases.json");
    fs::write(&phrases, r#"["哈哈", ["ha", "ha"]]"#).unwrap();

    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.arg("validate").arg(&phrases);

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("✗ Phrase file is invalid!"));
}

#[test]
fn test_list_phrases() {
    let dir = audio_fixture();
    let mut cmd = memetts(dir.path());
    cmd.args(["list", "phrases", "-m"])
        .arg(dir.path().join("names.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("哈哈\t"))
        .stdout(predicate::str::contains("rickroll\t"))
        .stdout(predicate::str::contains("README").not())
        .stderr(predicate::str::contains("4 phrases"));
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.args(["list", "formats"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_missing_audio_dir() {
    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.env_remove("MEMETTS_AUDIO_DIR")
        .env_remove("MEMETTS_CONFIG")
        .args(["split", "哈哈"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No audio directory given"));
}

#[test]
fn test_nonexistent_audio_dir() {
    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.args(["split", "-a", "/nonexistent/clips", "哈哈"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Audio directory not found"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("memetts").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("split"))
        .stdout(predicate::str::contains("stream"))
        .stdout(predicate::str::contains("validate"));
}
