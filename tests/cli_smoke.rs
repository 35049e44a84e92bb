#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test runs in an empty temporary directory with `HOME` pointing at
//! another one, so no real config or dotenv file is picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Sandbox {
    cwd: TempDir,
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            cwd: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    #[allow(deprecated)]
    fn quill(&self) -> Command {
        let mut cmd = Command::cargo_bin("quill").unwrap();
        cmd.current_dir(self.cwd.path())
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("OPENAI_API_KEY");
        cmd
    }
}

#[test]
fn test_help_displays_usage() {
    Sandbox::new()
        .quill()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("starter template for AI-powered CLI"))
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("analyze-code"));
}

#[test]
fn test_version_displays_version() {
    Sandbox::new()
        .quill()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_process_version_flag() {
    Sandbox::new()
        .quill()
        .args(["process", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Quill version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_process_help_lists_flags() {
    Sandbox::new()
        .quill()
        .args(["process", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--light-model"))
        .stdout(predicate::str::contains("--temperature"))
        .stdout(predicate::str::contains("--pricing"))
        .stdout(predicate::str::contains("total tokens"))
        .stdout(predicate::str::contains("--stream"));
}

#[test]
fn test_config_create_then_show() {
    let sandbox = Sandbox::new();

    sandbox
        .quill()
        .args(["config", "--create"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created example config file"));

    let written = fs::read_to_string(sandbox.cwd.path().join("config.toml")).unwrap();
    assert!(written.contains("ai_provider = \"OpenAI\""));

    sandbox
        .quill()
        .args(["config", "--create"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    sandbox
        .quill()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("OpenAI"))
        .stdout(predicate::str::contains("0.5"));
}

#[test]
fn test_config_without_flags_prints_hint() {
    Sandbox::new()
        .quill()
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("--create"));
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.cwd.path().join("config.toml"), "temperature = 2.5\n").unwrap();

    sandbox
        .quill()
        .args(["config", "--show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using default configuration"))
        .stdout(predicate::str::contains("0.5"));
}

#[test]
fn test_missing_credential_names_variable() {
    Sandbox::new()
        .quill()
        .args(["translate", "Hello world", "Spanish"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_credential_from_home_env_file() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.home.path().join(".quill.env"),
        "OPENAI_API_KEY=sk-test\n",
    )
    .unwrap();

    // The key is found, so the command gets as far as reading the (blank) input.
    sandbox
        .quill()
        .arg("process")
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input provided"))
        .stderr(predicate::str::contains("OPENAI_API_KEY").not());
}

#[test]
fn test_whitespace_stdin_is_empty_input() {
    Sandbox::new()
        .quill()
        .args(["process", "-a", "Ollama"])
        .write_stdin(" \n\t\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No input provided"));
}

#[test]
fn test_out_of_range_temperature_is_rejected() {
    Sandbox::new()
        .quill()
        .args(["process", "-a", "Ollama", "-t", "2.5", "-p", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2.5"));
}

#[test]
fn test_chat_quit_on_piped_input() {
    Sandbox::new()
        .quill()
        .args(["chat", "-a", "Ollama"])
        .write_stdin("\nQUIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_chat_end_of_input_says_goodbye() {
    Sandbox::new()
        .quill()
        .args(["chat", "-a", "Ollama"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_summarize_missing_file() {
    Sandbox::new()
        .quill()
        .args(["summarize", "does-not-exist.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.txt"));
}

#[test]
fn test_debug_error_chain_printed_once() {
    let output = Sandbox::new()
        .quill()
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE")
        .args(["process", "-a", "Ollama", "--debug"])
        .write_stdin("  \n")
        .assert()
        .code(1)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    // Once on the `Error:` line, once in the debug chain.
    assert_eq!(stderr.matches("No input provided").count(), 2, "{stderr}");
}

/// Spawns quill with stdin held open, interrupts it, and returns its exit
/// status with the captured stderr.
#[cfg(unix)]
fn interrupt_while_reading(sandbox: &Sandbox, args: &[&str]) -> (std::process::ExitStatus, String) {
    use std::io::Read;
    use std::process::Stdio;
    use std::time::{Duration, Instant};

    #[allow(deprecated)]
    let bin = assert_cmd::cargo::cargo_bin("quill");
    let mut child = std::process::Command::new(bin)
        .args(args)
        .current_dir(sandbox.cwd.path())
        .env("HOME", sandbox.home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let _stdin = child.stdin.take();

    std::thread::sleep(Duration::from_secs(1));
    let sent = std::process::Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().unwrap();
            child.wait().unwrap();
            panic!("quill {args:?} did not exit after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(50));
    };

    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    (status, stderr)
}

#[cfg(unix)]
#[test]
fn test_interrupt_during_stdin_prompt_exits_cleanly() {
    let (status, stderr) = interrupt_while_reading(&Sandbox::new(), &["process", "-a", "Ollama"]);
    assert_eq!(status.code(), Some(0));
    assert!(stderr.contains("Operation cancelled by user"), "{stderr}");
}

#[cfg(unix)]
#[test]
fn test_interrupt_during_piped_chat_exits_cleanly() {
    let (status, stderr) = interrupt_while_reading(&Sandbox::new(), &["chat", "-a", "Ollama"]);
    assert_eq!(status.code(), Some(0));
    assert!(stderr.contains("Operation cancelled by user"), "{stderr}");
}
