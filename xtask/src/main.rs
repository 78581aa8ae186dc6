//! Custom cargo commands for vendex.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (default and no-default features)
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Scoring constants and the `vendex.toml` key each one must match.
const CONSTANT_KEYS: &[(&str, &str, &str)] = &[
    ("NAME_WEIGHT", "fields", "name"),
    ("CATEGORY_WEIGHT", "fields", "category"),
    ("DESCRIPTION_WEIGHT", "fields", "description"),
    ("LOCALITY_WEIGHT", "fields", "locality"),
    ("KEYWORD_BLEND_WEIGHT", "blend", "keyword_weight"),
    ("QUALITY_BLEND_WEIGHT", "blend", "quality_weight"),
    ("MAX_RATING", "", "max_rating"),
];

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
  verify    Run full verification suite (tests + clippy + constant alignment)
  test      Run all Rust tests, with and without default features
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("vendex Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passed\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Verifying scoring constants against vendex.toml...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The shipped `vendex.toml` documents the defaults; it must not drift from
/// the constants the library actually uses.
fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let core_rs = std::fs::read_to_string(root.join("src/scoring/core.rs"))
        .context("Failed to read src/scoring/core.rs")?;
    let config_toml = std::fs::read_to_string(root.join("vendex.toml"))
        .context("Failed to read vendex.toml")?;
    let config: toml::Table = config_toml.parse().context("Failed to parse vendex.toml")?;

    for &(constant, section, key) in CONSTANT_KEYS {
        let Some(rust_value) = extract_const(&core_rs, constant) else {
            bail!("Constant {} not found in src/scoring/core.rs", constant);
        };
        let Some(toml_value) = lookup_number(&config, section, key) else {
            bail!("Key [{}] {} not found in vendex.toml", section, key);
        };

        if (rust_value - toml_value).abs() > 1e-12 {
            bail!(
                "{} = {} but vendex.toml [{}] {} = {}",
                constant, rust_value, section, key, toml_value
            );
        }
        println!("  {:<22} {}", constant, rust_value);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<f64> {
    // Look for "pub const NAME: f64 = 3.0;"
    let prefix = format!("pub const {}: f64 =", name);
    content.lines().find_map(|line| {
        let value = line.trim().strip_prefix(&prefix)?;
        value.trim().trim_end_matches(';').trim().parse().ok()
    })
}

/// Numeric value at `[section] key`, or a top-level `key` when `section` is
/// empty. Integers count, so `max_rating = 5` matches 5.0.
fn lookup_number(config: &toml::Table, section: &str, key: &str) -> Option<f64> {
    let table = if section.is_empty() {
        config
    } else {
        config.get(section)?.as_table()?
    };
    match table.get(key)? {
        toml::Value::Float(f) => Some(*f),
        toml::Value::Integer(i) => Some(*i as f64),
        _ => None,
    }
}
