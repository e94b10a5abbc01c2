use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use url::Url;

/// `file://` URL of a list directory.
pub fn list_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

fn command(args: &[&str], list_url: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_faq"));
    cmd.args(args);
    cmd.env("FAQ_LIST_URL", list_url);
    cmd.env_remove("FAQ_ACCESS_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI against a list, with empty stdin.
pub fn run_cli(args: &[&str], list_url: &str) -> Output {
    command(args, list_url)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], list_url: &str) -> String {
    let output = run_cli(args, list_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI feeding `input` on stdin.
pub fn run_cli_with_input(args: &[&str], list_url: &str, input: &str) -> Output {
    let mut child = command(args, list_url)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Create `count` items titled Q1..Qn.
pub fn seed(list_url: &str, count: usize) {
    for n in 1..=count {
        let title = format!("Q{}", n);
        let body = format!("A{}", n);
        run_cli_success(
            &["create", "--title", &title, "--body", &body, "--letter", "L"],
            list_url,
        );
    }
}

/// The page printed by `list --json`.
pub fn list_json(args: &[&str], list_url: &str) -> serde_json::Value {
    let mut full = vec!["list", "--json"];
    full.extend_from_slice(args);
    let stdout = run_cli_success(&full, list_url);
    serde_json::from_str(&stdout).expect("list --json prints JSON")
}
