//! End-to-end tests for the `dotdb` binary.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn dotdb(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotdb"))
        .arg("--path")
        .arg(store)
        .args(args)
        .output()
        .expect("Failed to run dotdb")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "dotdb failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn set_get_and_list() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("bot");

    stdout(&dotdb(&store, &["set", "player.name", "Will"]));
    stdout(&dotdb(&store, &["set", "player.level", "15"]));

    assert_eq!(stdout(&dotdb(&store, &["get", "player.level"])), "15\n");
    assert_eq!(
        stdout(&dotdb(&store, &["list", "--flat"])),
        "player.name = \"Will\"\nplayer.level = 15\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("bot.json")).unwrap(),
        r#"{"player":{"name":"Will","level":15}}"#
    );
}

#[test]
fn arithmetic_accepts_negative_operands() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("bank");

    stdout(&dotdb(&store, &["set", "balance", "500"]));
    assert_eq!(stdout(&dotdb(&store, &["add", "balance", "-100"])), "400\n");
    assert_eq!(stdout(&dotdb(&store, &["mul", "balance", "2"])), "800\n");
}

#[test]
fn failures_exit_nonzero() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("bad");

    stdout(&dotdb(&store, &["set", "balance", "500"]));
    let output = dotdb(&store, &["div", "balance", "0"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&dotdb(&store, &["get", "balance"])), "500\n");

    let output = dotdb(&store, &["get", "missing"]);
    assert!(!output.status.success());
}

#[test]
fn pretty_flag_indents_file() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("pretty");

    stdout(&dotdb(&store, &["--pretty", "set", "a", "1"]));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("pretty.json")).unwrap(),
        "{\n  \"a\": 1\n}"
    );
}

#[test]
fn version_needs_no_store() {
    let output = Command::new(env!("CARGO_BIN_EXE_dotdb"))
        .arg("version")
        .output()
        .expect("Failed to run dotdb");
    assert!(stdout(&output).starts_with("DotDB CLI v"));
}
