//! Build script: stamps the commit and build time into the binary for
//! `shelly --version` and `shelly --help`.
//!
//! Each value can be pinned from the environment (for reproducible release
//! builds); otherwise it is read from git and the clock, and falls back to
//! `unknown` markers when neither tool is available.

use std::env;
use std::fs;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "SHELLY_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "SHELLY_BUILD_TIMESTAMP";

fn main() {
    watch_git_head();
    stamp(GIT_HASH_VAR, detect_git_hash);
    stamp(TIMESTAMP_VAR, detect_timestamp);
}

/// Export `var` to rustc, preferring a value already set in the build env.
fn stamp(var: &str, detect: fn() -> String) {
    println!("cargo:rerun-if-env-changed={var}");
    let value = env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(detect);
    println!("cargo:rustc-env={var}={value}");
}

/// Rebuild when HEAD moves, including commits on the checked-out branch.
fn watch_git_head() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    let branch_ref = fs::read_to_string(".git/HEAD")
        .ok()
        .and_then(|head| head.trim().strip_prefix("ref: ").map(str::to_string));
    if let Some(reference) = branch_ref {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }
}

fn detect_git_hash() -> String {
    command_stdout("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string())
}

fn detect_timestamp() -> String {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        format!("unix:{secs}")
    })
}

/// Trimmed stdout of a successful command, or `None`.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|text| !text.is_empty())
}
