//! Build script for dotchain-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates chain.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const ROTATIONS: [&str; 4] = ["none", "clockwise", "counterclockwise", "half_turn"];
const MAX_MODULES: i64 = 16;
const MAX_INTENSITY: i64 = 15;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate chain.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=chain.toml");

    let config_path = Path::new("chain.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: chain.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds chain.toml to size and orient the display.  ║\n\
            ║  Please create one in the dotchain-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read chain.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in chain.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_chain(&config, &mut errors);
    validate_scroll(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid chain configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=chain.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only [chain] and [scroll] are understood by the firmware parser
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };

    if table.get("chain").is_none() {
        errors.push("Missing [chain] section".to_string());
    }

    for (name, value) in table {
        match (name.as_str(), value) {
            ("chain" | "scroll", toml::Value::Table(_)) => {}
            ("chain" | "scroll", _) => errors.push(format!("[{}] must be a table", name)),
            _ => errors.push(format!("Unknown section or key '{}'", name)),
        }
    }
}

/// Validate the [chain] section
fn validate_chain(config: &toml::Value, errors: &mut Vec<String>) {
    let chain = match config.get("chain") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    match chain.get("modules") {
        Some(toml::Value::Integer(n)) if (1..=MAX_MODULES).contains(n) => {}
        Some(_) => errors.push(format!("[chain] modules must be 1-{}", MAX_MODULES)),
        None => errors.push("[chain] missing 'modules'".to_string()),
    }

    if let Some(rotation) = chain.get("rotation") {
        match rotation {
            toml::Value::String(r) if ROTATIONS.contains(&r.as_str()) => {}
            _ => errors.push(format!("[chain] rotation must be one of {}", ROTATIONS.join(", "))),
        }
    }

    if let Some(reversed) = chain.get("reversed") {
        if !reversed.is_bool() {
            errors.push("[chain] reversed must be true or false".to_string());
        }
    }

    if let Some(intensity) = chain.get("intensity") {
        match intensity {
            toml::Value::Integer(i) if (0..=MAX_INTENSITY).contains(i) => {}
            _ => errors.push(format!("[chain] intensity must be 0-{}", MAX_INTENSITY)),
        }
    }
}

/// Validate the [scroll] section
fn validate_scroll(config: &toml::Value, errors: &mut Vec<String>) {
    let scroll = match config.get("scroll") {
        Some(toml::Value::Table(t)) => t,
        _ => return,
    };

    for key in ["delay_ms", "end_delay_ms"] {
        if let Some(value) = scroll.get(key) {
            match value {
                toml::Value::Integer(ms) if (0..=u32::MAX as i64).contains(ms) => {}
                _ => errors.push(format!("[scroll] {} must be a non-negative integer", key)),
            }
        }
    }
}
