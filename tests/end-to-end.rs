/// This is a set of integration tests which run against the payload binary living in
/// `src/bin/anagram-finder.rs`.

#[macro_use]
extern crate serde_json;

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const TEST_BIN_NAME: &str = "anagram-finder";

// This can't be a one-liner because cargo sometimes runs integration tests from
// `target/debug/deps`.
fn get_bin_path() -> PathBuf {
    let mut path = env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push(TEST_BIN_NAME);
    path
}

fn run_with_input(subcommand: &str, input: &str) -> std::process::Output {
    let mut child = Command::new(get_bin_path())
        .arg(subcommand)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn run_sanity_check() {
    let output = Command::new(get_bin_path())
        .arg("sanity-check")
        .output()
        .unwrap();
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert_eq!("sanity located\n", output_str);
}

#[test]
fn run_has_combine() {
    let output = Command::new(get_bin_path())
        .arg("has-combine")
        .output()
        .unwrap();
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert_eq!("yes", output_str.trim());
}

#[test]
fn run_map_valid_input() {
    let json_input = r#"{"key":"foo","value":"Stop spot pots tops\ncat dog"}"#;
    // The serialisation order of partitions is not guaranteed, so compare parsed JSON rather
    // than raw strings. The alphabet partitioner places keys deterministically: with 15
    // partitions, "opst" lands in 8, "act" in 0 and "dgo" in 1.
    let expected = json!({
        "partitions": {
            "8": [
                {"key": "opst", "value": "stop"},
                {"key": "opst", "value": "spot"},
                {"key": "opst", "value": "pots"},
                {"key": "opst", "value": "tops"}
            ],
            "0": [{"key": "act", "value": "cat"}],
            "1": [{"key": "dgo", "value": "dog"}]
        }
    });

    let output = run_with_input("map", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    println!("Output: {}", output_str.to_owned());

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&output_str).unwrap();
    assert_eq!(expected, parsed);
}

#[test]
fn run_map_letterless_input() {
    let json_input = r#"{"key":"foo","value":"123 -., 456"}"#;

    let output = run_with_input("map", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(r#"{"partitions":{}}"#, output_str);
}

#[test]
fn run_map_invalid_input() {
    let bad_input = r#"foo"#;

    let output = run_with_input("map", bad_input);

    assert_eq!(false, output.status.success());
}

#[test]
fn run_combine_valid_input() {
    let json_input = r#"{"key":"opst","values":["stop","spot","stop"]}"#;
    let expected_output = r#"{"pairs":[{"key":"opst","value":"stop"},{"key":"opst","value":"spot"}]}"#;

    let output = run_with_input("combine", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_reduce_valid_input() {
    let json_input = r#"{"key":"opst","values":["stop","spot","pots","stop"]}"#;
    let expected_output = r#"{"values":["stop,spot,pots"]}"#;

    let output = run_with_input("reduce", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_reduce_single_member_group() {
    let json_input = r#"{"key":"act","values":["cat","cat","cat"]}"#;
    let expected_output = r#"{"values":[]}"#;

    let output = run_with_input("reduce", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_reduce_invalid_input() {
    let json_input = r#"foo"#;

    let output = run_with_input("reduce", json_input);

    assert_eq!(false, output.status.success());
}
