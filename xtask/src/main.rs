//! Custom cargo commands for sitefind.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fmt, clippy, tests in every feature set, fixtures)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("sitefind Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking formatting...");
    run_cargo(&["fmt", "--all", "--", "--check"])?;
    println!("✓ Formatting clean\n");

    println!("[2/5] Running clippy...");
    run_cargo(&["clippy", "--all-targets", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[3/5] Running tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Tests passed\n");

    println!("[4/5] Running tests (no default features)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Tests passed without rayon or unicode-normalization\n");

    println!("[5/5] Checking fixture catalog...");
    check_fixtures()?;
    println!("✓ Fixture catalog loads\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Run `sitefind inspect` on the checked-in fixtures.
fn check_fixtures() -> Result<()> {
    let root = project_root()?;
    let manifest = root.join("data/fixtures/manifest.json");
    if !manifest.exists() {
        bail!("Missing fixture manifest at {}", manifest.display());
    }

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "inspect"])
        .arg(&manifest)
        .current_dir(&root)
        .env("NO_COLOR", "1")
        .output()
        .context("Failed to run sitefind inspect")?;

    if !output.status.success() {
        bail!(
            "sitefind inspect failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
