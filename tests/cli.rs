use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("saltbox"))
}

fn encrypt_to_string(text: &str, password: &str) -> String {
    let output = bin()
        .env("SALTBOX_PASSWORD", password)
        .arg("encrypt")
        .arg("--text")
        .arg(text)
        .arg("--rounds")
        .arg("100")
        .output()
        .unwrap();

    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn encrypt_prints_base64_salted_container() {
    let encoded = encrypt_to_string("hello world", "secret");

    // every Salted__ container starts with these base64 characters
    assert!(encoded.starts_with("U2FsdGVkX1"));
}

#[test]
fn encrypt_decrypt_roundtrip() {
    let encoded = encrypt_to_string("hello world", "secret");

    bin()
        .env("SALTBOX_PASSWORD", "secret")
        .arg("decrypt")
        .arg("--text")
        .arg(&encoded)
        .arg("--rounds")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn decrypts_openssl_container() {
    // printf '%s' 'hello world' | openssl enc -aes-256-cbc -pbkdf2 \
    //   -iter 10000 -md sha256 -pass pass:secret -base64
    bin()
        .env("SALTBOX_PASSWORD", "secret")
        .arg("decrypt")
        .arg("--text")
        .arg("U2FsdGVkX18AAQIDBAUGB0SHgp184AC8eyxM+1pLx+Q=")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn wrong_password_fails() {
    let encoded = encrypt_to_string("hello world", "secret");

    bin()
        .env("SALTBOX_PASSWORD", "wrong")
        .arg("decrypt")
        .arg("--text")
        .arg(&encoded)
        .arg("--rounds")
        .arg("100")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong password").or(predicate::str::contains("UTF-8")));
}

#[test]
fn mismatched_rounds_fail() {
    let encoded = encrypt_to_string("hello world", "secret");

    // different iteration count derives a different key
    bin()
        .env("SALTBOX_PASSWORD", "secret")
        .arg("decrypt")
        .arg("--text")
        .arg(&encoded)
        .arg("--rounds")
        .arg("101")
        .assert()
        .failure();
}

#[test]
fn file_input_and_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let encrypted = dir.path().join("encrypted.txt");
    let decrypted = dir.path().join("decrypted.txt");

    std::fs::write(&input, "file contents\n").unwrap();

    bin()
        .env("SALTBOX_PASSWORD", "pw")
        .arg("encrypt")
        .arg("--file")
        .arg(&input)
        .arg("--output")
        .arg(&encrypted)
        .arg("--rounds")
        .arg("100")
        .assert()
        .success();

    assert!(encrypted.exists());

    bin()
        .env("SALTBOX_PASSWORD", "pw")
        .arg("decrypt")
        .arg("--file")
        .arg(&encrypted)
        .arg("--output")
        .arg(&decrypted)
        .arg("--rounds")
        .arg("100")
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&decrypted).unwrap(),
        "file contents\n"
    );
}

#[test]
fn password_flag_wins_over_env() {
    let encoded = encrypt_to_string("hello world", "flagpw");

    bin()
        .env("SALTBOX_PASSWORD", "envpw")
        .arg("decrypt")
        .arg("--password")
        .arg("flagpw")
        .arg("--text")
        .arg(&encoded)
        .arg("--rounds")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn piped_stdin_content_is_accepted() {
    bin()
        .env("SALTBOX_PASSWORD", "pw")
        .arg("encrypt")
        .arg("--rounds")
        .arg("100")
        .write_stdin("piped secret")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("U2FsdGVkX1"));
}

#[test]
fn short_container_is_a_format_error() {
    // base64 of "Salted_" only, shorter than the 16-byte header
    bin()
        .env("SALTBOX_PASSWORD", "pw")
        .arg("decrypt")
        .arg("--text")
        .arg("U2FsdGVkXw==")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn zero_rounds_are_rejected() {
    bin()
        .env("SALTBOX_PASSWORD", "pw")
        .arg("encrypt")
        .arg("--text")
        .arg("x")
        .arg("--rounds")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("iteration count"));
}

#[test]
fn encrypting_twice_produces_distinct_containers() {
    let a = encrypt_to_string("same text", "pw");
    let b = encrypt_to_string("same text", "pw");
    assert_ne!(a, b);
}
