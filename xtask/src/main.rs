//! Custom cargo commands for docsearch.
//!
//! Usage:
//!   cargo xtask test        - Run all tests
//!   cargo xtask check       - check (native + wasm), test, clippy
//!   cargo xtask bench       - Run benchmarks
//!   cargo xtask build-wasm  - Build the browser package with wasm-pack

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const WASM_FEATURES: &[&str] = &["--no-default-features", "--features", "wasm"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("build-wasm") => build_wasm()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test        Run all Rust tests
  check       Quick check (native + wasm32 check, tests, clippy)
  bench       Run benchmarks
  build-wasm  Build pkg/ with wasm-pack (release, --target web)
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check (wasm32)...");
    let mut wasm_check = vec!["check", "--lib", "--target", "wasm32-unknown-unknown"];
    wasm_check.extend_from_slice(WASM_FEATURES);
    run_cargo(&wasm_check)?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Build the browser bundle into pkg/
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let mut args = vec!["build", "--release", "--target", "web", "--out-name", "docsearch"];
    args.push("--");
    args.extend_from_slice(WASM_FEATURES);

    let status = Command::new("wasm-pack")
        .args(&args)
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    let wasm = root.join("pkg").join("docsearch_bg.wasm");
    let size = std::fs::metadata(&wasm)
        .with_context(|| format!("wasm-pack produced no {}", wasm.display()))?
        .len();
    println!("✓ {} ({:.1} KB)", wasm.display(), size as f64 / 1024.0);
    Ok(())
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
