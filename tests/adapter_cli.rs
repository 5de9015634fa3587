//! Adapter CLI integration tests
//!
//! Covers the command grammar and the validation that happens before
//! the clipboard is touched, so these run anywhere. Round trips
//! against a real clipboard live in clipboard_e2e.rs.

use assert_cmd::Command;
use predicates::prelude::*;

fn pasteport_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pasteport"))
}

#[test]
fn help_lists_every_command() {
    pasteport_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list-types")
                .and(predicate::str::contains("read-text"))
                .and(predicate::str::contains("write-text"))
                .and(predicate::str::contains("read-image"))
                .and(predicate::str::contains("write-image"))
                .and(predicate::str::contains("read"))
                .and(predicate::str::contains("write"))
                .and(predicate::str::contains("clear")),
        );
}

#[test]
fn version_output() {
    pasteport_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pasteport"));
}

#[test]
fn missing_command_fails_with_uniform_exit_code() {
    pasteport_bin().assert().failure().code(1);
}

#[test]
fn typed_read_requires_type_flag() {
    pasteport_bin()
        .arg("read")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn unknown_argument_fails_with_uniform_exit_code() {
    pasteport_bin()
        .args(["clear", "--bogus"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn read_image_rejects_unknown_format() {
    pasteport_bin()
        .args(["read-image", "--format", "jpeg"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn write_text_rejects_invalid_utf8() {
    pasteport_bin()
        .arg("write-text")
        .write_stdin(vec![0xff, 0xfe, 0x00])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid UTF-8 input"));
}

#[test]
fn write_image_rejects_invalid_base64() {
    pasteport_bin()
        .arg("write-image")
        .write_stdin("&&& not base64 &&&")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid base64 image data"));
}

#[test]
fn write_image_rejects_non_image_payload() {
    use base64::Engine;
    let garbage = base64::engine::general_purpose::STANDARD.encode(b"definitely not pixels");
    pasteport_bin()
        .arg("write-image")
        .write_stdin(garbage)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to decode image data"));
}

#[test]
fn typed_write_rejects_invalid_base64() {
    pasteport_bin()
        .args(["write", "--type", "com.test.custom", "--base64"])
        .write_stdin("%%% not base64 %%%")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid base64 input"));
}

#[test]
fn typed_write_rejects_invalid_utf8_without_base64() {
    pasteport_bin()
        .args(["write", "--type", "com.test.custom"])
        .write_stdin(vec![0xff, 0xfe])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid UTF-8 input"));
}
