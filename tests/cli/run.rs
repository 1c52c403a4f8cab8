//! Tests for launching a command with secrets.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_env_vars() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["sh", "-c", "printf '%s|%s|%s' \"$DATABASE_URL\" \"$API_KEY\" \"$JWT_SECRET\""]);
    assert_success(&output);
    assert_eq!(
        stdout(&output),
        "postgres://localhost/mydb|sk-test-12345|super-secret-jwt-token"
    );
}

#[cfg(unix)]
#[test]
fn test_run_coerces_scalars() {
    let t = Test::with_raw(MIXED_SCALARS);

    let output = t.run(&[
        "sh",
        "-c",
        "printf '%s %s %s %s %s %s' \"$NAME\" \"$PORT\" \"$RATIO\" \"$NEGATIVE\" \"$ENABLED\" \"$DISABLED\"",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "launcher 8080 0.5 -12 true false");
}

#[cfg(unix)]
#[test]
fn test_run_duplicate_key_last_wins() {
    let t = Test::with_raw(r#"{"A":"1","A":"2"}"#);

    let output = t.run(&["sh", "-c", "printf '%s' \"$A\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "2");
}

#[cfg(unix)]
#[test]
fn test_run_preserves_equals_and_newlines() {
    let t = Test::with_raw(r#"{"DSN": "host=db;user=app", "PEM": "line1\nline2=x"}"#);

    let output = t.run(&["sh", "-c", "printf '%s\\n---\\n%s' \"$DSN\" \"$PEM\""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "host=db;user=app\n---\nline1\nline2=x");
}

#[cfg(unix)]
#[test]
fn test_run_keeps_unrelated_parent_env() {
    let t = Test::with_secrets(&[("API_KEY", "from-file")]);

    let output = t
        .cmd()
        .env("UNRELATED_VAR", "untouched")
        .args(["--", "sh", "-c", "printf '%s %s' \"$UNRELATED_VAR\" \"$API_KEY\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "untouched from-file");
}

#[cfg(unix)]
#[test]
fn test_run_secret_overrides_parent_env() {
    let t = Test::with_secrets(&[("API_KEY", "from-file")]);

    let output = t
        .cmd()
        .env("API_KEY", "from-parent")
        .args(["--", "sh", "-c", "printf '%s' \"$API_KEY\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "from-file");
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    t.cmd()
        .args(["--", "sh", "-c", "exit 3"])
        .assert()
        .code(3);

    let output = t.run(&["sh", "-c", "exit 42"]);
    assert_code(&output, 42);
}

#[cfg(unix)]
#[test]
fn test_run_signal_exit_code() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["sh", "-c", "kill -9 $$"]);
    assert_code(&output, 137);
}

#[cfg(unix)]
#[test]
fn test_run_waits_for_child_after_interrupt() {
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};
    use std::time::{Duration, Instant};

    let t = Test::with_secrets(STANDARD_SECRETS);
    let script = "trap 'kill $! 2>/dev/null; sleep 0.2; touch cleanup.marker; exit 0' INT; \
                  touch ready.marker; sleep 10 & wait";

    // Own process group, like a shell job, so the interrupt hits launcher and child.
    let mut launcher = Command::new(env!("CARGO_BIN_EXE_secret-launcher"))
        .current_dir(t.dir.path())
        .env_remove("SECRET_LAUNCHER_FILE")
        .env_remove("SECRET_LAUNCHER_LOG")
        .env("NO_COLOR", "1")
        .args(["--quiet", "--", "sh", "-c", script])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .expect("failed to spawn secret-launcher");

    let deadline = Instant::now() + Duration::from_secs(10);
    while !t.path("ready.marker").exists() {
        assert!(Instant::now() < deadline, "child never became ready");
        std::thread::sleep(Duration::from_millis(20));
    }

    let group = format!("-{}", launcher.id());
    let sent = Command::new("kill")
        .args(["-s", "INT", "--", &group])
        .status()
        .expect("failed to run kill");
    assert!(sent.success());

    let status = launcher.wait().expect("failed to wait for secret-launcher");
    assert_eq!(status.code(), Some(0));
    assert!(t.path("cleanup.marker").exists());
}

#[cfg(unix)]
#[test]
fn test_run_inherits_stdin() {
    let t = Test::with_secrets(&[]);

    t.cmd()
        .args(["--", "cat"])
        .write_stdin("piped through")
        .assert()
        .success()
        .stdout("piped through");
}

#[cfg(unix)]
#[test]
fn test_run_child_stderr_passes_through() {
    let t = Test::with_secrets(&[]);

    let output = t.run(&["sh", "-c", "echo oops >&2; exit 0"]);
    assert_success(&output);
    assert_stderr_contains(&output, "oops");
}

#[cfg(unix)]
#[test]
fn test_run_without_separator() {
    let t = Test::with_secrets(&[("GREETING", "hi")]);

    let output = t
        .cmd()
        .args(["sh", "-c", "printf '%s' \"$GREETING\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "hi");
}

#[cfg(unix)]
#[test]
fn test_run_progress_on_stderr_only() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.run(&["sh", "-c", "printf done"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "done");
    assert_stderr_contains(&output, "loaded 3 secrets");
    assert_stderr_contains(&output, "environment ready");
}

#[cfg(unix)]
#[test]
fn test_run_quiet_suppresses_progress() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .args(["--quiet", "--", "sh", "-c", "printf done"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "done");
    assert_eq!(stderr(&output), "");
}

#[cfg(unix)]
#[test]
fn test_run_secrets_file_flag() {
    let t = Test::new();
    t.write_file("custom.json", r#"{"WHERE": "custom"}"#);

    let output = t
        .cmd()
        .args(["--secrets-file", "custom.json", "--", "sh", "-c", "printf '%s' \"$WHERE\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "custom");
}

#[cfg(unix)]
#[test]
fn test_run_secrets_file_env_var() {
    let t = Test::new();
    let path = t.write_file("from-env.json", r#"{"WHERE": "env"}"#);

    let output = t
        .cmd()
        .env("SECRET_LAUNCHER_FILE", &path)
        .args(["--", "sh", "-c", "printf '%s' \"$WHERE\""])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "env");
}

#[cfg(unix)]
#[test]
fn test_run_required_keys_present() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .args(["-r", "API_KEY", "--require", "JWT_SECRET", "--", "true"])
        .output()
        .unwrap();
    assert_success(&output);
}
